//! Output filename resolution
//!
//! Names are either supplied by the operator or generated from the current
//! local time as `qr_code_<YYYYMMDD_HHMMSS>`. Either way the result ends in
//! the image extension.

use crate::error::{Error, Result};
use chrono::{Local, NaiveDateTime};
use std::path::{Component, Path};

/// Extension of every written image, without the leading dot
pub const IMAGE_EXTENSION: &str = "png";

/// Prefix of generated filenames
pub const GENERATED_PREFIX: &str = "qr_code_";

/// Sortable timestamp layout used in generated filenames
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Source of the wall-clock instant used for generated names
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time zone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Resolve the final image filename.
///
/// A blank candidate counts as absent. Candidates that carry directory
/// components are rejected because the output directory is fixed.
pub fn resolve(candidate: Option<&str>, clock: &dyn Clock) -> Result<String> {
    let name = match candidate.map(str::trim).filter(|c| !c.is_empty()) {
        Some(name) => {
            ensure_plain_name(name)?;
            name.to_string()
        }
        None => generated_stem(clock),
    };

    Ok(with_extension(name))
}

/// `qr_code_<timestamp>` for the clock's current instant, without extension.
pub fn generated_stem(clock: &dyn Clock) -> String {
    format!(
        "{GENERATED_PREFIX}{}",
        clock.now().format(TIMESTAMP_FORMAT)
    )
}

/// Append `.png` unless the name already ends with it in any letter case.
pub fn with_extension(mut name: String) -> String {
    if !has_image_extension(&name) {
        name.push('.');
        name.push_str(IMAGE_EXTENSION);
    }
    name
}

fn has_image_extension(name: &str) -> bool {
    let suffix_len = IMAGE_EXTENSION.len() + 1;
    if name.len() < suffix_len || !name.is_char_boundary(name.len() - suffix_len) {
        return false;
    }
    let suffix = &name[name.len() - suffix_len..];
    suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(IMAGE_EXTENSION)
}

fn ensure_plain_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\']);

    if plain {
        Ok(())
    } else {
        Err(Error::InvalidFilename(name.to_string()))
    }
}
