//! deadkey CLI - finds keys in a constants file that no source file uses.
//!
//! Features:
//! - Regex key extraction from a definitions file (e.g. `utils/dataTypes.js`)
//! - Whole-word search over `.js`, `.jsx`, `.ts` and `.tsx` files
//! - Exempt files via `--ignore` or `deadkey.toml`
//! - Plain or JSON report

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

use deadkey_core::{
    init_structured_logging, load_config, print_json, print_plain, Deadkey, DeadkeyConfig,
    CONFIG_FILE_NAME, DEFAULT_DEFINITIONS,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find unused keys in a JavaScript constants file")]
pub struct Cli {
    /// Directory to scan (defaults to the config value, then ".")
    path: Option<PathBuf>,

    /// File to extract keys from (defaults to <PATH>/utils/dataTypes.js)
    #[arg(long, value_name = "FILE")]
    definitions: Option<PathBuf>,

    /// File to exclude from scanning (repeatable)
    #[arg(long, value_name = "FILE", action = ArgAction::Append)]
    ignore: Vec<PathBuf>,

    /// Configuration file (defaults to ./deadkey.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,
}

/// Fully resolved run parameters.
#[derive(Debug, PartialEq, Eq)]
struct RunSettings {
    root: PathBuf,
    definitions: PathBuf,
    ignore: Vec<PathBuf>,
}

/// Merges command-line flags over config file values over defaults.
///
/// Ignore lists are combined rather than replaced.
fn resolve_settings(cli: &Cli, config: DeadkeyConfig) -> RunSettings {
    let root = cli
        .path
        .clone()
        .or(config.root)
        .unwrap_or_else(|| PathBuf::from("."));

    let definitions = cli
        .definitions
        .clone()
        .or(config.definitions)
        .unwrap_or_else(|| root.join(DEFAULT_DEFINITIONS));

    let mut ignore = config.ignore.unwrap_or_default();
    ignore.extend(cli.ignore.iter().cloned());

    RunSettings {
        root,
        definitions,
        ignore,
    }
}

/// Loads the explicit config file, or `deadkey.toml` from the working directory.
///
/// An explicitly named file must exist.
fn load_settings_file(explicit: Option<&Path>) -> Result<DeadkeyConfig> {
    match explicit {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => Ok(load_config(Path::new(CONFIG_FILE_NAME))
            .with_context(|| format!("Failed to load {}", CONFIG_FILE_NAME))?
            .unwrap_or_default()),
    }
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] deadkey internal error: {}", info);
    }));

    // JSON diagnostics to stderr, respects RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();
    let config = load_settings_file(cli.config.as_deref())?;
    let settings = resolve_settings(&cli, config);

    let result = Deadkey::new(&settings.root, &settings.definitions)
        .ignore_all(settings.ignore.iter().cloned())
        .analyze()
        .with_context(|| {
            format!(
                "Failed to analyze {} against {}",
                settings.root.display(),
                settings.definitions.display()
            )
        })?;

    if cli.json {
        print_json(&result)?;
    } else {
        print_plain(&result)?;
    }

    // Unused keys are a report, not a failure.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_temp_dir(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir()
            .join("deadkey_cli_test")
            .join(format!("{}_{}_{}", name, std::process::id(), id));
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir).ok();
        }
        fs::create_dir_all(&temp_dir).unwrap();
        temp_dir
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("deadkey").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = resolve_settings(&parse(&[]), DeadkeyConfig::default());
        assert_eq!(
            settings,
            RunSettings {
                root: PathBuf::from("."),
                definitions: PathBuf::from("./utils/dataTypes.js"),
                ignore: Vec::new(),
            }
        );
    }

    #[test]
    fn test_definitions_default_follows_root() {
        let settings = resolve_settings(&parse(&["web/src"]), DeadkeyConfig::default());
        assert_eq!(settings.definitions, PathBuf::from("web/src/utils/dataTypes.js"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = DeadkeyConfig {
            root: Some(PathBuf::from("/cfg/src")),
            definitions: Some(PathBuf::from("/cfg/defs.js")),
            ignore: Some(vec![PathBuf::from("/cfg/skip.js")]),
        };
        let cli = parse(&[
            "/cli/src",
            "--definitions",
            "/cli/defs.js",
            "--ignore",
            "/cli/a.js",
            "--ignore",
            "/cli/b.js",
        ]);

        let settings = resolve_settings(&cli, config);
        assert_eq!(settings.root, PathBuf::from("/cli/src"));
        assert_eq!(settings.definitions, PathBuf::from("/cli/defs.js"));
        assert_eq!(
            settings.ignore,
            vec![
                PathBuf::from("/cfg/skip.js"),
                PathBuf::from("/cli/a.js"),
                PathBuf::from("/cli/b.js"),
            ]
        );
    }

    #[test]
    fn test_ignore_takes_one_value_per_flag() {
        let cli = parse(&["--ignore", "a.js", "src"]);
        assert_eq!(cli.path, Some(PathBuf::from("src")));
        assert_eq!(cli.ignore, vec![PathBuf::from("a.js")]);

        let settings = resolve_settings(&cli, DeadkeyConfig::default());
        assert_eq!(settings.root, PathBuf::from("src"));
        assert_eq!(settings.definitions, PathBuf::from("src/utils/dataTypes.js"));
    }

    #[test]
    fn test_config_used_when_flags_absent() {
        let config = DeadkeyConfig {
            root: Some(PathBuf::from("/cfg/src")),
            definitions: None,
            ignore: None,
        };
        let settings = resolve_settings(&parse(&["--json"]), config);
        assert_eq!(settings.root, PathBuf::from("/cfg/src"));
        assert_eq!(
            settings.definitions,
            PathBuf::from("/cfg/src").join(DEFAULT_DEFINITIONS)
        );
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = create_temp_dir("explicit_missing");
        let err = load_settings_file(Some(&dir.join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_explicit_config_loaded() {
        let dir = create_temp_dir("explicit");
        let path = dir.join("custom.toml");
        fs::write(&path, "root = \"src\"\n").unwrap();

        let config = load_settings_file(Some(&path)).unwrap();
        assert_eq!(config.root, Some(dir.join("src")));
    }
}
