//! QR code encoding and read-back decoding
//!
//! Encoding goes through the `qrcode` crate and is rasterized with `image`.
//! Decoding uses `rqrr` and exists to check what a written file actually scans as.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::QrEncoder;
