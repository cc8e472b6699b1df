//! urlqr runtime configuration
//!
//! Everything here is built in code. The generator deliberately reads no
//! configuration file and no environment variables.

use crate::error::{Error, Result};
use qrcode::EcLevel;
use std::env;
use std::path::{Path, PathBuf};

/// Side length of one QR module in pixels
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Blank margin around the symbol, in modules
pub const DEFAULT_BORDER: u32 = 4;

/// Settings for encoding, rasterizing and writing a QR image
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the image is written into
    pub output_dir: PathBuf,
    /// Pixel size of a single module
    pub module_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    /// Error correction level handed to the encoder
    pub ec_level: EcLevel,
}

impl GeneratorConfig {
    /// Configuration writing into `output_dir` with default rendering settings.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            module_size: DEFAULT_MODULE_SIZE,
            border: DEFAULT_BORDER,
            ec_level: EcLevel::L,
        }
    }

    /// Configuration writing next to the running executable.
    pub fn for_current_exe() -> Result<Self> {
        Ok(Self::new(executable_dir()?))
    }

    /// Override the module pixel size (clamped to at least 1).
    pub fn with_module_size(mut self, module_size: u32) -> Self {
        self.module_size = module_size.max(1);
        self
    }

    /// Override the quiet zone width in modules.
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Override the error correction level.
    pub fn with_ec_level(mut self, ec_level: EcLevel) -> Self {
        self.ec_level = ec_level;
        self
    }
}

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|e| Error::Config(format!("Failed to locate executable: {e}")))?;

    exe.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            Error::Config(format!(
                "Executable path '{}' has no parent directory",
                exe.display()
            ))
        })
}

/// Structured logging configuration
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// `EnvFilter` directive, e.g. `warn` or `urlqr=debug`
    pub level: String,
    /// Emit ANSI colors on stderr
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            color: true,
        }
    }
}
