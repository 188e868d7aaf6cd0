//! Decides which pages need to be generated again.
//!
//! The state of the last run lives in an [`UpdateCache`] the caller loads
//! and stores (it is serde serializable).  [`needs_update`] is a pure
//! function of that cache, the project and the file times the caller
//! looked up.  Times are milliseconds since the epoch.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::project::Project;

/// What the cache remembers about a generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The project data the page was generated from.
    pub hash: String,
    /// When the page was generated.
    pub time: u64,
}

/// State of the last update run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCache {
    /// Modification time of the data file at the last run.
    pub last_data_mod_time: Option<u64>,
    /// Entries by project id.
    pub projects: BTreeMap<String, CacheEntry>,
}

impl UpdateCache {
    /// Remembers that the page of a project was generated at `now`.
    pub fn record(&mut self, project: &Project, now: u64) {
        self.projects.insert(
            project.id.to_string(),
            CacheEntry {
                hash: project_hash(project),
                time: now,
            },
        );
    }

    /// Returns the entry of a project.
    pub fn entry(&self, project: &Project) -> Option<&CacheEntry> {
        self.projects.get(&project.id.to_string())
    }
}

/// File system facts about one page, looked up by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateInputs {
    /// Regenerate regardless of the cache.
    pub force: bool,
    /// Whether the page file exists.
    pub page_exists: bool,
    /// Current modification time of the data file.
    pub data_mod_time: u64,
    /// Modification time of the page file, if known.
    pub page_mod_time: Option<u64>,
}

/// Why a page needs to be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateReason {
    /// An update was forced.
    Forced,
    /// The page does not exist.
    PageMissing,
    /// The data file changed and so did this project.
    DataChanged,
    /// The page was modified before the cache says it was generated.
    PageOlderThanCache,
}

impl fmt::Display for UpdateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UpdateReason::Forced => "force update",
            UpdateReason::PageMissing => "file missing",
            UpdateReason::DataChanged => "data changed",
            UpdateReason::PageOlderThanCache => "file older than cache",
        })
    }
}

/// Returns the fingerprint of a project's data.
///
/// This is the compact JSON encoding of the project.
pub fn project_hash(project: &Project) -> String {
    // all maps in a project have string keys, so encoding cannot fail
    serde_json::to_string(project).unwrap_or_default()
}

/// Decides whether the page of a project needs to be generated.
///
/// The checks run in order: a forced update, a missing page, then either
/// a changed project (when the data file changed since the last run) or a
/// page older than its cache entry (when it did not).
pub fn needs_update(project: &Project, cache: &UpdateCache, inputs: &UpdateInputs) -> Option<UpdateReason> {
    if inputs.force {
        return Some(UpdateReason::Forced);
    }
    if !inputs.page_exists {
        return Some(UpdateReason::PageMissing);
    }
    let entry = cache.entry(project);
    if cache.last_data_mod_time != Some(inputs.data_mod_time) {
        let hash = project_hash(project);
        if entry.map(|e| &e.hash) != Some(&hash) {
            return Some(UpdateReason::DataChanged);
        }
    } else if let (Some(entry), Some(page_mod_time)) = (entry, inputs.page_mod_time) {
        if entry.time > page_mod_time {
            return Some(UpdateReason::PageOlderThanCache);
        }
    }
    None
}
