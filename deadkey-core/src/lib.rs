//! deadkey-core: dead key detection for JavaScript/TypeScript constants files
//!
//! Finds keys declared in a central definitions file (for example
//! `utils/dataTypes.js`) that no source file under a root directory
//! references as a whole word. The analysis is textual: keys are pulled out
//! with a regular expression, and usage is a word-boundary regex search over
//! `.js`, `.jsx`, `.ts` and `.tsx` files.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use deadkey_core::prelude::*;
//!
//! let result = Deadkey::new("src", "src/utils/dataTypes.js")
//!     .ignore("src/components/CSVUploader.js")
//!     .analyze()?;
//!
//! for key in &result.unused {
//!     println!("Unused key: {}", key);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`extract`]: Key extraction from the definitions file
//! - [`scan`]: Lazy tree walk and whole-word key search
//! - [`builder`]: Fluent builder API that runs extraction and scanning
//! - [`report`]: Plain and JSON report rendering
//! - [`config`]: `deadkey.toml` loading
//! - [`error`]: Typed error handling

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod scan;

// Error types
pub use error::{DeadkeyError, DeadkeyResult, IoResultExt};

// Builder API
pub use builder::{AnalysisResult, Deadkey};

// Configuration
pub use config::{load_config, DeadkeyConfig, CONFIG_FILE_NAME, DEFAULT_DEFINITIONS};

// Extraction
pub use extract::{extract_keys, extract_keys_from_file};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print_json, print_plain, write_json, write_plain};

// Scanning
pub use scan::{
    eligible_files, file_contains_key, is_source_file, search_for_keys, ExemptionSet,
    KeyMatcher, SearchOutcome, SOURCE_EXTENSIONS,
};
