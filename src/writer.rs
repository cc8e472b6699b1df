//! Persisting rendered images

use crate::error::{Error, Result};
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes images into a single fixed directory
#[derive(Debug, Clone)]
pub struct ImageWriter {
    output_dir: PathBuf,
}

impl ImageWriter {
    /// Writer targeting `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory images are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Absolute path `filename` resolves to inside the output directory.
    pub fn target_path(&self, filename: &str) -> Result<PathBuf> {
        Ok(std::path::absolute(self.output_dir.join(filename))?)
    }

    /// Save `image` as `filename`, in the format implied by its extension.
    ///
    /// Returns the absolute path written. If saving fails, any partially
    /// written file is removed before the error is returned.
    pub fn write(&self, image: &DynamicImage, filename: &str) -> Result<PathBuf> {
        let path = self.target_path(filename)?;

        if let Err(err) = image.save(&path) {
            let err = Error::from(err);
            discard_partial(&path);
            return Err(err);
        }

        tracing::info!(path = %path.display(), "Wrote QR image");
        Ok(path)
    }
}

fn discard_partial(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed partial image"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), "Failed to remove partial image: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn white_square() -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([255])))
    }

    #[test]
    fn writes_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ImageWriter::new(dir.path());

        let path = writer.write(&white_square(), "square.png").unwrap();

        assert!(path.is_absolute());
        assert_eq!(path, dir.path().join("square.png"));
        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (8, 8));
    }

    #[test]
    fn relative_output_dir_resolves_absolute() {
        let writer = ImageWriter::new("relative/out");
        let path = writer.target_path("a.png").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("relative/out/a.png"));
    }

    #[test]
    fn missing_directory_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ImageWriter::new(dir.path().join("does-not-exist"));

        let err = writer.write(&white_square(), "square.png").unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert!(!dir.path().join("does-not-exist/square.png").exists());
    }
}
