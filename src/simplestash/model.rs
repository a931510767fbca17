use crate::error::{Result, StashError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The persisted aggregate: the onboarding flag plus the label → URL map.
///
/// `links` is an `IndexMap` so insertion order survives load/save round-trips;
/// consumers display links in the order they were stashed. Overwriting an
/// existing label keeps its original position (`IndexMap::insert` semantics).
///
/// Both fields are required on disk. A file missing either one is corrupt,
/// which is why neither carries `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStore {
    /// True only until onboarding completes once; never reset to true.
    #[serde(rename = "firstlaunch")]
    pub first_launch_pending: bool,
    pub links: IndexMap<String, String>,
}

impl Default for LinkStore {
    fn default() -> Self {
        Self {
            first_launch_pending: true,
            links: IndexMap::new(),
        }
    }
}

/// A transient `(label, url)` pair produced by the parser from one raw line.
/// Not persisted as its own entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub label: String,
    pub url: String,
}

impl LinkRecord {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Enforces the store invariant the minimal syntax check lets through:
    /// `"#:url"` and `"#label:"` parse, but an empty label or URL must never
    /// reach the store.
    pub fn validate(&self) -> Result<()> {
        if self.label.is_empty() {
            return Err(StashError::Syntax("the link name is empty".to_string()));
        }
        if self.url.is_empty() {
            return Err(StashError::Syntax("the link URL is empty".to_string()));
        }
        Ok(())
    }
}
