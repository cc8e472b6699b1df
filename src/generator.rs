//! URL to QR image pipeline
//!
//! normalize → name → encode → write, synchronously, one image per call.

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::filename::{self, Clock, SystemClock};
use crate::qr::{QrDecoder, QrEncoder};
use crate::url;
use crate::writer::ImageWriter;
use std::path::PathBuf;

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQr {
    /// Absolute path of the written image
    pub path: PathBuf,
    /// Normalized URL encoded in the symbol
    pub url: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Turns target strings into QR image files
pub struct QrGenerator {
    encoder: QrEncoder,
    writer: ImageWriter,
    clock: Box<dyn Clock + Send + Sync>,
}

impl QrGenerator {
    /// Generator using the system clock for generated names
    pub fn new(config: &GeneratorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Generator with an explicit time source
    pub fn with_clock(config: &GeneratorConfig, clock: impl Clock + Send + Sync + 'static) -> Self {
        Self {
            encoder: QrEncoder::from_config(config),
            writer: ImageWriter::new(config.output_dir.clone()),
            clock: Box::new(clock),
        }
    }

    /// Normalize `target`, resolve the filename, encode and write the image.
    pub fn generate(&self, target: &str, filename: Option<&str>) -> Result<GeneratedQr> {
        let url = url::normalize(target)?;
        tracing::debug!(%url, "Normalized target");

        let name = filename::resolve(filename, &*self.clock)?;
        tracing::debug!(%name, "Resolved output filename");

        let image = self.encoder.encode_string(&url)?;
        let path = self.writer.write(&image, &name)?;

        Ok(GeneratedQr {
            path,
            url,
            width: image.width(),
            height: image.height(),
        })
    }

    /// Re-read a written image and confirm it scans back to the encoded URL.
    pub fn verify(&self, generated: &GeneratedQr) -> Result<()> {
        let decoded = QrDecoder::new().decode_file(&generated.path)?;
        if decoded == generated.url {
            Ok(())
        } else {
            Err(Error::QrDecode(format!(
                "{} scans as '{decoded}', expected '{}'",
                generated.path.display(),
                generated.url
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filename::FixedClock;
    use chrono::NaiveDate;

    fn fixed_clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2025, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        )
    }

    #[test]
    fn generates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = QrGenerator::with_clock(&GeneratorConfig::new(dir.path()), fixed_clock());

        let generated = generator.generate("example.com", None).unwrap();

        assert_eq!(generated.url, "https://example.com");
        assert_eq!(
            generated.path,
            dir.path().join("qr_code_20250102_030405.png")
        );
        assert!(generated.path.exists());
        generator.verify(&generated).unwrap();
    }

    #[test]
    fn empty_target_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let generator = QrGenerator::with_clock(&GeneratorConfig::new(dir.path()), fixed_clock());

        assert!(matches!(
            generator.generate("  ", Some("x")),
            Err(Error::EmptyInput)
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn verify_detects_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let generator = QrGenerator::with_clock(&GeneratorConfig::new(dir.path()), fixed_clock());
        let mut generated = generator.generate("example.com", Some("m")).unwrap();
        generated.url = "https://other.example".to_string();

        assert!(matches!(
            generator.verify(&generated),
            Err(Error::QrDecode(_))
        ));
    }
}
