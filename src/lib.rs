//! urlqr - encode a URL as a QR code PNG
//!
//! The library holds the whole pipeline so it can be driven and tested
//! without the binary:
//!
//! - **Normalization**: trim the target and default its scheme to `https://`
//! - **Naming**: explicit filename or `qr_code_<YYYYMMDD_HHMMSS>.png`
//! - **Encoding**: `qrcode` symbol, rasterized with `image`
//! - **Writing**: a single PNG in a fixed output directory
//!
//! # Example
//!
//! ```no_run
//! use urlqr::{GeneratorConfig, QrGenerator};
//!
//! fn main() -> urlqr::Result<()> {
//!     let config = GeneratorConfig::new("/tmp");
//!     let generated = QrGenerator::new(&config).generate("example.com", Some("example"))?;
//!
//!     println!("Wrote {}", generated.path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod filename;
pub mod generator;
pub mod input;
pub mod logging;
pub mod output;
pub mod qr;
pub mod url;
pub mod writer;

// Re-exports for convenience
pub use error::{Error, ErrorKind, Result};

pub use config::{GeneratorConfig, LoggingOptions};
pub use filename::{Clock, FixedClock, SystemClock};
pub use generator::{GeneratedQr, QrGenerator};
pub use input::{Prompted, Request};
pub use qr::{QrDecoder, QrEncoder};
pub use writer::ImageWriter;
