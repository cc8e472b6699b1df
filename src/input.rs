//! Obtaining the target and optional filename from the operator

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Prompt shown before reading the target URL
pub const URL_PROMPT: &str = "Enter the URL: ";

/// Prompt shown before reading the optional filename
pub const FILENAME_PROMPT: &str = "Enter custom filename (optional, press Enter to auto-generate): ";

/// What the operator asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Raw target text, not yet normalized
    pub target: String,
    /// Candidate output name, if one was given
    pub filename: Option<String>,
}

/// Result of the interactive prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted {
    /// Operator supplied a target
    Request(Request),
    /// Operator left the target blank
    Empty,
}

impl Request {
    /// Request built from positional process arguments.
    pub fn from_args(target: String, filename: Option<String>) -> Self {
        Self { target, filename }
    }
}

/// Ask for the target and then an optional filename.
///
/// Both answers are trimmed. A blank target ends the exchange without asking
/// for a filename; a blank filename means "generate one". End of input at
/// either prompt is reported as [`Error::Interrupted`].
pub fn prompt<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<Prompted> {
    let target = ask(&mut reader, &mut writer, URL_PROMPT)?;
    if target.is_empty() {
        return Ok(Prompted::Empty);
    }

    let filename = ask(&mut reader, &mut writer, FILENAME_PROMPT)?;
    let filename = (!filename.is_empty()).then_some(filename);

    Ok(Prompted::Request(Request { target, filename }))
}

fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::Interrupted);
    }
    Ok(line.trim().to_string())
}
