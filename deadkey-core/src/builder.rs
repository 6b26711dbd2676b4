//! Builder pattern API for deadkey analysis.
//!
//! ```rust,ignore
//! use deadkey_core::prelude::*;
//!
//! let result = Deadkey::new("src", "src/utils/dataTypes.js")
//!     .ignore("src/components/CSVUploader.js")
//!     .analyze()?;
//!
//! println!("Unused keys: {:?}", result.unused);
//! ```

use std::path::{Path, PathBuf};

use crate::error::DeadkeyResult;
use crate::extract::extract_keys_from_file;
use crate::scan::{search_for_keys, ExemptionSet};

/// Builder for configuring a dead key run.
#[derive(Debug, Clone)]
pub struct Deadkey {
    /// Directory to scan
    root: PathBuf,

    /// File the keys are extracted from
    definitions: PathBuf,

    /// Files excluded from scanning
    ignored: Vec<PathBuf>,

    /// Whether the definitions file is excluded from scanning
    exempt_definitions: bool,
}

impl Deadkey {
    /// Create a new analysis builder for the given scan root and definitions file.
    pub fn new(root: impl Into<PathBuf>, definitions: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            definitions: definitions.into(),
            ignored: Vec::new(),
            exempt_definitions: true,
        }
    }

    /// Exclude a file from scanning.
    pub fn ignore(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignored.push(path.into());
        self
    }

    /// Exclude several files from scanning.
    pub fn ignore_all<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.ignored.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Whether the definitions file itself is skipped while scanning (default: true).
    ///
    /// When disabled, every key trivially matches its own declaration if the
    /// definitions file lives under the root.
    pub fn exempt_definitions(mut self, enabled: bool) -> Self {
        self.exempt_definitions = enabled;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn definitions(&self) -> &Path {
        &self.definitions
    }

    fn exemptions(&self) -> ExemptionSet {
        let mut set: ExemptionSet = self.ignored.iter().collect();
        if self.exempt_definitions {
            set.insert(&self.definitions);
        }
        set
    }

    /// Extract keys, scan the tree and return the result.
    ///
    /// Only an unreadable definitions file fails the run. A missing or
    /// unwalkable root is absorbed by the scan: every key comes back unused
    /// and the root is listed in [`AnalysisResult::unreadable`].
    pub fn analyze(&self) -> DeadkeyResult<AnalysisResult> {
        let keys = extract_keys_from_file(&self.definitions)?;
        let exemptions = self.exemptions();
        tracing::info!(
            root = %self.root.display(),
            keys = keys.len(),
            exempt_files = exemptions.len(),
            "scanning source tree"
        );

        let outcome = search_for_keys(&self.root, &exemptions, &keys)?;

        Ok(AnalysisResult {
            root: self.root.clone(),
            definitions: self.definitions.clone(),
            keys,
            unused: outcome.unused,
            unreadable: outcome.unreadable,
        })
    }
}

/// Result of a dead key run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Scanned directory
    pub root: PathBuf,
    /// Definitions file the keys came from
    pub definitions: PathBuf,
    /// All extracted keys, sorted
    pub keys: Vec<String>,
    /// Keys referenced by no eligible file, sorted
    pub unused: Vec<String>,
    /// Files that could not be read during the scan
    pub unreadable: Vec<PathBuf>,
}

impl AnalysisResult {
    /// True if every extracted key is referenced somewhere.
    pub fn is_clean(&self) -> bool {
        self.unused.is_empty()
    }
}
