//! Keyword dictionary file: one store or purchase keyword per line.
//!
//!   WALMART
//!   SHELL OIL
//!   NETFLIX
//!
//! Line order is kept because it decides which keyword wins on overlap.

use anyhow::{Context, Result};
use cutback_core::Dictionary;
use std::fs;
use std::path::Path;

/// Parse dictionary text. Trailing whitespace (including `\r`) is trimmed
/// and blank lines are skipped; leading whitespace is part of the keyword.
pub fn parse_dictionary(text: &str) -> Dictionary {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading dictionary {}", path.display()))?;
    let dictionary = parse_dictionary(&text);
    tracing::debug!(path = %path.display(), keywords = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}
