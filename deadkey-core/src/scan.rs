//! Source tree scanning for key references.
//!
//! Eligible files are produced lazily from a `walkdir` traversal and consumed
//! per key until the first whole-word hit, so a key referenced early in the
//! tree costs one short walk.
//!
//! Read failures never abort the scan. A file that cannot be read (permission,
//! invalid UTF-8, transient I/O) counts as "key not present", exactly like a
//! true miss, but its path is recorded in [`SearchOutcome::unreadable`] and
//! logged at `warn` so callers can tell the report may hold false positives.

use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{DeadkeyError, DeadkeyResult};

/// File name suffixes considered source files.
pub const SOURCE_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// Checks whether a file name ends in one of [`SOURCE_EXTENSIONS`].
#[inline]
pub fn is_source_file(file_name: &str) -> bool {
    SOURCE_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(ext))
}

/// Canonical form of a path when it exists, absolute form otherwise.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Every spelling a walk may produce for `path`.
///
/// The lexical absolute form matches a symlink's own path, the canonical form
/// matches its target, and the canonical parent joined with the file name
/// matches a link reached through a canonicalized root.
fn path_forms(path: &Path) -> Vec<PathBuf> {
    let mut forms = Vec::with_capacity(3);
    if let Ok(abs) = std::path::absolute(path) {
        forms.push(abs);
    }
    if let Ok(canonical) = path.canonicalize() {
        forms.push(canonical);
    }
    if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        if let Ok(canonical_parent) = parent.canonicalize() {
            forms.push(canonical_parent.join(name));
        }
    }
    if forms.is_empty() {
        forms.push(path.to_path_buf());
    }
    forms
}

/// Files excluded from scanning, fixed for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct ExemptionSet {
    /// One absolute entry per inserted file
    entries: HashSet<PathBuf>,
    /// All path forms of every entry, checked against walk paths
    forms: HashSet<PathBuf>,
}

impl ExemptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file under each of its path forms, so both a symlink and its
    /// target compare equal to walk paths.
    pub fn insert(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.entries
            .insert(std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()));
        self.forms.extend(path_forms(path));
    }

    /// `path` is a walk path under a normalized root.
    pub fn contains(&self, path: &Path) -> bool {
        self.forms.contains(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: AsRef<Path>> FromIterator<P> for ExemptionSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

/// Whole-word, case-sensitive matcher for a single literal key.
#[derive(Debug, Clone)]
pub struct KeyMatcher {
    key: String,
    regex: Regex,
}

impl KeyMatcher {
    pub fn new(key: &str) -> DeadkeyResult<Self> {
        let regex = Regex::new(&format!(r"\b{}\b", regex::escape(key)))
            .map_err(|e| DeadkeyError::pattern(key, e.to_string()))?;
        Ok(Self {
            key: key.to_string(),
            regex,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Read `path` as UTF-8 text and test it against `matcher`.
fn match_file(path: &Path, matcher: &KeyMatcher) -> std::io::Result<bool> {
    let text = fs::read_to_string(path)?;
    Ok(matcher.is_match(&text))
}

/// Returns whether `path` contains `key` as a whole word.
///
/// Any failure to read the file is reported as `false`.
pub fn file_contains_key(path: &Path, key: &str) -> bool {
    KeyMatcher::new(key)
        .ok()
        .and_then(|matcher| match_file(path, &matcher).ok())
        .unwrap_or(false)
}

/// Regular files and symlinks to non-directories with a source extension.
fn is_candidate_entry(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    let is_file = ft.is_file() || (ft.is_symlink() && !entry.path().is_dir());
    is_file && is_source_file(&entry.file_name().to_string_lossy())
}

/// Lazily produce the eligible files under `root`.
///
/// Walk errors are passed through so the consumer decides what to do with
/// them. Directory symlinks are not followed. Entries are visited in
/// file-name order.
pub fn eligible_files<'a>(
    root: &Path,
    exemptions: &'a ExemptionSet,
) -> impl Iterator<Item = walkdir::Result<PathBuf>> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(e) => {
                if is_candidate_entry(&e) && !exemptions.contains(e.path()) {
                    Some(Ok(e.into_path()))
                } else {
                    None
                }
            }
            Err(err) => Some(Err(err)),
        })
}

/// Result of searching a tree for a list of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Keys with no whole-word match in any eligible file, in input order
    pub unused: Vec<String>,
    /// Paths that failed to read or walk at least once, sorted
    pub unreadable: Vec<PathBuf>,
}

/// Search `root` for every key and collect the ones never referenced.
///
/// Each key stops at its first matching file. Unreadable paths are treated
/// as misses and collected into the outcome.
pub fn search_for_keys(
    root: &Path,
    exemptions: &ExemptionSet,
    keys: &[String],
) -> DeadkeyResult<SearchOutcome> {
    let root = normalize_path(root);
    let mut unreadable: BTreeSet<PathBuf> = BTreeSet::new();
    let mut unused = Vec::new();

    for key in keys {
        let matcher = KeyMatcher::new(key)?;

        let found = eligible_files(&root, exemptions).any(|candidate| match candidate {
            Ok(path) => match match_file(&path, &matcher) {
                Ok(hit) => hit,
                Err(err) => {
                    if !unreadable.contains(&path) {
                        warn!(path = %path.display(), error = %err, "unreadable file treated as no match");
                        unreadable.insert(path);
                    }
                    false
                }
            },
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.clone());
                if !unreadable.contains(&path) {
                    warn!(path = %path.display(), error = %err, "walk error, entry skipped");
                    unreadable.insert(path);
                }
                false
            }
        });

        if !found {
            debug!(key = %matcher.key(), "no reference found");
            unused.push(key.clone());
        }
    }

    Ok(SearchOutcome {
        unused,
        unreadable: unreadable.into_iter().collect(),
    })
}
