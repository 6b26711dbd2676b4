//! Output formatting - plaintext and JSON.

use serde_json::json;
use std::io::{self, Write};

use crate::builder::AnalysisResult;

/// Writes the human-readable report.
pub fn write_plain(out: &mut impl Write, result: &AnalysisResult) -> io::Result<()> {
    writeln!(
        out,
        "Found {} keys in {}",
        result.keys.len(),
        result.definitions.display()
    )?;
    writeln!(out)?;
    writeln!(out, "{} keys not found in any file:", result.unused.len())?;
    for key in &result.unused {
        writeln!(out, "  • {}", key)?;
    }
    if !result.unreadable.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "WARNING: {} file(s) could not be read and were treated as not containing any key",
            result.unreadable.len()
        )?;
    }
    Ok(())
}

/// Writes the machine-readable report.
pub fn write_json(out: &mut impl Write, result: &AnalysisResult) -> io::Result<()> {
    let value = json!({
        "root": result.root.display().to_string(),
        "definitions": result.definitions.display().to_string(),
        "total_keys": result.keys.len(),
        "unused_count": result.unused.len(),
        "unused": result.unused,
        "unreadable": result
            .unreadable
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
    });
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)
}

/// Prints the human-readable report to stdout.
pub fn print_plain(result: &AnalysisResult) -> io::Result<()> {
    write_plain(&mut io::stdout().lock(), result)
}

/// Prints the JSON report to stdout.
pub fn print_json(result: &AnalysisResult) -> io::Result<()> {
    write_json(&mut io::stdout().lock(), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            root: PathBuf::from("/app/src"),
            definitions: PathBuf::from("/app/src/utils/dataTypes.js"),
            keys: vec!["dead".into(), "used".into(), "zombie".into()],
            unused: vec!["dead".into(), "zombie".into()],
            unreadable: Vec::new(),
        }
    }

    fn render_plain(result: &AnalysisResult) -> String {
        let mut buf = Vec::new();
        write_plain(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_lists_unused_in_order() {
        let text = render_plain(&sample());
        assert_eq!(
            text,
            "Found 3 keys in /app/src/utils/dataTypes.js\n\n2 keys not found in any file:\n  • dead\n  • zombie\n"
        );
    }

    #[test]
    fn test_plain_no_unused() {
        let mut result = sample();
        result.unused.clear();
        let text = render_plain(&result);
        assert!(text.contains("0 keys not found in any file:"));
        assert!(!text.contains('•'));
    }

    #[test]
    fn test_plain_warns_on_unreadable() {
        let mut result = sample();
        result.unreadable = vec![PathBuf::from("/app/src/broken.js")];
        let text = render_plain(&result);
        assert!(text.ends_with(
            "WARNING: 1 file(s) could not be read and were treated as not containing any key\n"
        ));
    }

    #[test]
    fn test_json_shape() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["total_keys"], 3);
        assert_eq!(value["unused_count"], 2);
        assert_eq!(value["unused"], json!(["dead", "zombie"]));
        assert_eq!(value["unreadable"], json!([]));
    }
}
