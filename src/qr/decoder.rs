//! QR code decoder using rqrr

use crate::error::{Error, Result};
use image::{DynamicImage, GrayImage};
use std::path::Path;

/// QR code decoder
#[derive(Debug, Default, Clone, Copy)]
pub struct QrDecoder;

impl QrDecoder {
    /// Create a new QR decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode the first QR code found in an image
    pub fn decode(&self, img: &DynamicImage) -> Result<String> {
        self.decode_gray(img.to_luma8())
    }

    /// Open an image file and decode the first QR code in it
    pub fn decode_file(&self, path: &Path) -> Result<String> {
        let img = image::open(path)?;
        self.decode(&img)
    }

    fn decode_gray(&self, img: GrayImage) -> Result<String> {
        let mut prepared = rqrr::PreparedImage::prepare(img);
        let grids = prepared.detect_grids();

        let grid = grids.first().ok_or(Error::NoQrCodeFound)?;

        let (meta, content) = grid
            .decode()
            .map_err(|e| Error::QrDecode(format!("Decode failed: {e:?}")))?;

        tracing::debug!(
            "Decoded QR: version={:?}, ecc_level={:?}, length={}",
            meta.version,
            meta.ecc_level,
            content.len()
        );

        Ok(content)
    }
}
