use serde::Serialize;
use std::path::PathBuf;

pub type TabId = u64;

/// One open tab: a single archive's extracted text.
///
/// Immutable after creation; highlight state is transient and lives in the
/// frontend only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    /// Basename of the source path (or the original title after a restore)
    pub title: String,
    pub source_path: PathBuf,
    /// Concatenated section headers and bodies
    pub text: String,
}

/// Snapshot pushed onto the history stack when a tab is closed.
/// Restoring re-reads the archive from disk; the displayed text is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedTab {
    pub title: String,
    pub source_path: PathBuf,
}

/// Result of opening an archive
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OpenOutcome {
    /// At least one qualifying text member; a tab was created and selected
    Opened { tab: Tab },
    /// Archive opened fine but held no non-empty text members; no tab created
    NoTextMembers { archive: String },
}

/// Result of a restore-last request
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RestoreOutcome {
    Restored { tab: Tab },
    /// The archive no longer holds any text members; entry consumed anyway
    NoTextMembers { archive: String },
    /// Nothing to restore; informational, not an error
    HistoryEmpty,
}

/// Result of draining the whole history via restore-all
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreAllReport {
    /// Restored tabs, newest-closed first (stack order)
    pub restored: Vec<Tab>,
    /// Archives that reopened fine but no longer hold any text members
    pub empty: Vec<String>,
    /// Per-entry failures; the failed entries are consumed, not re-queued
    pub errors: Vec<String>,
}
