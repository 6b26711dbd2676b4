//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use deadkey_core::prelude::*;
//! ```

pub use crate::builder::{AnalysisResult, Deadkey};
pub use crate::config::{load_config, DeadkeyConfig};
pub use crate::error::{DeadkeyError, DeadkeyResult};
pub use crate::extract::extract_keys;
pub use crate::scan::{search_for_keys, ExemptionSet, SearchOutcome};
