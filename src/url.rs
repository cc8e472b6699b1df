//! Target URL normalization

use crate::error::{Error, Result};

/// Scheme prefixes accepted as-is
pub const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Scheme prepended when the target has none
pub const DEFAULT_SCHEME: &str = "https://";

/// Trim `input` and make sure it starts with `http://` or `https://`.
///
/// The rest of the string is treated as opaque text: no host or path
/// validation happens here. Input that is empty once trimmed is rejected.
pub fn normalize(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    if ACCEPTED_SCHEMES
        .iter()
        .any(|scheme| trimmed.starts_with(scheme))
    {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{DEFAULT_SCHEME}{trimmed}"))
    }
}
