//! QR code encoder

use crate::config::{DEFAULT_BORDER, DEFAULT_MODULE_SIZE, GeneratorConfig};
use crate::error::{Error, Result};
use image::{DynamicImage, GrayImage, Luma, imageops};
use qrcode::{EcLevel, QrCode};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Largest image side, in pixels, the encoder will allocate
pub const MAX_IMAGE_SIDE: u32 = 1 << 15;

/// Renders text as a black-on-white QR raster
#[derive(Debug, Clone)]
pub struct QrEncoder {
    ecc_level: EcLevel,
    module_size: u32,
    border: u32,
}

impl QrEncoder {
    /// Encoder with low (~7%) error correction, 10 px modules and a 4 module border
    pub fn new() -> Self {
        Self {
            ecc_level: EcLevel::L,
            module_size: DEFAULT_MODULE_SIZE,
            border: DEFAULT_BORDER,
        }
    }

    /// Encoder using the rendering settings of a generator configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            ecc_level: config.ec_level,
            module_size: config.module_size.max(1),
            border: config.border,
        }
    }

    /// Encode `data` into a QR image.
    ///
    /// The symbol version is picked automatically as the smallest one that
    /// fits. Data beyond the capacity of the largest version is an error, as
    /// is a module size and border combination wider than [`MAX_IMAGE_SIDE`].
    pub fn encode_string(&self, data: &str) -> Result<DynamicImage> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ecc_level)?;
        let side = self.image_side(code.width())?;

        let symbol = code
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .module_dimensions(self.module_size, self.module_size)
            .dark_color(DARK)
            .light_color(LIGHT)
            .build();

        tracing::debug!(
            version = ?code.version(),
            modules = code.width(),
            bytes = data.len(),
            side,
            "Encoded QR symbol"
        );

        Ok(DynamicImage::ImageLuma8(self.pad_quiet_zone(&symbol)))
    }

    /// Pixel side of the final image for a symbol `modules` wide.
    fn image_side(&self, modules: usize) -> Result<u32> {
        u32::try_from(modules)
            .ok()
            .and_then(|m| self.border.checked_mul(2)?.checked_add(m))
            .and_then(|m| m.checked_mul(self.module_size))
            .filter(|side| *side <= MAX_IMAGE_SIDE)
            .ok_or_else(|| {
                Error::Config(format!(
                    "{modules} modules with a {} module border at {} px per module exceeds {MAX_IMAGE_SIDE} px",
                    self.border, self.module_size
                ))
            })
    }

    /// Surround the rendered symbol with a white quiet zone.
    ///
    /// Callers bound the result through `image_side` first.
    fn pad_quiet_zone(&self, symbol: &GrayImage) -> GrayImage {
        let margin = self.border * self.module_size;
        let mut canvas = GrayImage::from_pixel(
            symbol.width() + 2 * margin,
            symbol.height() + 2 * margin,
            LIGHT,
        );
        imageops::overlay(&mut canvas, symbol, i64::from(margin), i64::from(margin));
        canvas
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::qr::QrDecoder;

    #[test]
    fn image_size_follows_modules_and_border() {
        let encoder = QrEncoder::new();
        let image = encoder.encode_string("https://example.com").unwrap();
        let modules = QrCode::with_error_correction_level("https://example.com", EcLevel::L)
            .unwrap()
            .width() as u32;

        let expected = (modules + 2 * DEFAULT_BORDER) * DEFAULT_MODULE_SIZE;
        assert_eq!(image.width(), expected);
        assert_eq!(image.height(), expected);
    }

    #[test]
    fn border_is_white_and_corner_finder_is_black() {
        let encoder = QrEncoder::new();
        let gray = encoder.encode_string("https://example.com").unwrap().to_luma8();
        let margin = DEFAULT_BORDER * DEFAULT_MODULE_SIZE;

        assert_eq!(*gray.get_pixel(0, 0), LIGHT);
        assert_eq!(*gray.get_pixel(margin - 1, margin - 1), LIGHT);
        assert_eq!(*gray.get_pixel(margin, margin), DARK);
        assert!(gray.pixels().all(|p| *p == DARK || *p == LIGHT));
    }

    #[test]
    fn zero_border_hugs_the_symbol() {
        let config = GeneratorConfig::new(".").with_border(0).with_module_size(2);
        let gray = QrEncoder::from_config(&config)
            .encode_string("hi")
            .unwrap()
            .to_luma8();
        assert_eq!(*gray.get_pixel(0, 0), DARK);
    }

    #[test]
    fn overflowing_dimensions_are_config_errors() {
        for config in [
            GeneratorConfig::new(".").with_border(u32::MAX),
            GeneratorConfig::new(".").with_module_size(u32::MAX),
            GeneratorConfig::new(".").with_border(u32::MAX / 2).with_module_size(3),
        ] {
            let result = QrEncoder::from_config(&config).encode_string("https://example.com");
            assert!(matches!(result, Err(Error::Config(_))), "{config:?}");
        }
    }

    #[test]
    fn side_is_capped_before_allocating() {
        let config = GeneratorConfig::new(".").with_border(2_000).with_module_size(10);
        let result = QrEncoder::from_config(&config).encode_string("hi");
        assert!(matches!(result, Err(Error::Config(_))));

        let config = GeneratorConfig::new(".").with_module_size(2_000);
        let result = QrEncoder::from_config(&config).encode_string("hi");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let encoder = QrEncoder::new();
        let data = "x".repeat(8000);
        assert!(matches!(
            encoder.encode_string(&data),
            Err(Error::QrEncode(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let encoder = QrEncoder::new();
        let decoder = QrDecoder::new();

        let original = "https://openai.com";
        let qr_image = encoder.encode_string(original).unwrap();
        let decoded = decoder.decode(&qr_image).unwrap();

        assert_eq!(decoded, original);
    }
}
