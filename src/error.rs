//! Error types for urlqr operations

use thiserror::Error;

/// Result type alias using urlqr's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for urlqr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Target string was empty after trimming
    #[error("No URL provided")]
    EmptyInput,

    /// Candidate filename would escape the output directory
    #[error("Invalid filename '{0}': must be a plain file name without directories")]
    InvalidFilename(String),

    /// Operator interrupted an interactive prompt
    #[error("Interrupted")]
    Interrupted,

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse failure category used when reporting at the process boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The operator supplied unusable input or cancelled
    Input,
    /// The QR library rejected or could not read the payload
    Encoding,
    /// Reading or writing files failed
    Io,
}

impl Error {
    /// Classify this error for boundary reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput | Error::InvalidFilename(_) | Error::Interrupted => ErrorKind::Input,
            Error::QrEncode(_) | Error::QrDecode(_) | Error::NoQrCodeFound => ErrorKind::Encoding,
            Error::Io(_) | Error::Image(_) | Error::Config(_) => ErrorKind::Io,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}
