//! Operator-facing status messages

use crate::error::{Error, ErrorKind};
use crate::generator::GeneratedQr;

/// Banner printed at startup
pub const BANNER: &str = "Simple QR Code Generator";

/// Shown when the interactive target is left blank
pub const EMPTY_INPUT: &str = "No URL provided. Exiting.";

/// Shown when the operator interrupts a prompt
pub const FAREWELL: &str = "Goodbye!";

/// Line announcing which URL is about to be encoded.
pub fn generating(url: &str) -> String {
    format!("Generating QR code for: {url}")
}

/// Lines reporting a written image.
pub fn render_success(generated: &GeneratedQr) -> Vec<String> {
    vec![
        "QR code generated successfully!".to_string(),
        format!("Saved as: {}", generated.path.display()),
        format!("URL encoded: {}", generated.url),
        "Done! You can now scan the QR code to visit the website.".to_string(),
    ]
}

/// Single-line failure message naming the underlying cause.
pub fn render_failure(err: &Error) -> String {
    match err.kind() {
        ErrorKind::Input => format!("Invalid input: {err}"),
        ErrorKind::Encoding | ErrorKind::Io => format!("Error generating QR code: {err}"),
    }
}
