use crate::core::extractor;
use crate::models::{ClosedTab, OpenOutcome, RestoreAllReport, RestoreOutcome, Tab, TabId, ViewerError};
use log::{info, warn};
use std::path::Path;

/// Owns every open tab and the closed-tab history.
///
/// Tabs are kept in insertion order. The history is a plain LIFO stack of
/// `{title, source_path}` snapshots; restoring re-reads the archive from
/// disk. All operations run on the single command dispatch flow, so the
/// registry itself needs no interior locking.
#[derive(Debug, Default)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    // Unbounded by design: entries are two short strings and only grow by
    // explicit user closes.
    history: Vec<ClosedTab>,
    next_id: TabId,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the archive at `path` in a new tab titled after its basename.
    ///
    /// Rejects paths without a recognized archive extension before any
    /// file I/O. An archive with no qualifying text members yields
    /// `OpenOutcome::NoTextMembers` and creates no tab. Failures leave
    /// existing tabs and history untouched.
    pub fn open(&mut self, path: &Path) -> Result<OpenOutcome, ViewerError> {
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        self.open_with_title(path, title)
    }

    /// Open with a caller-supplied title; restore uses this so a restored
    /// tab keeps the title it was closed with.
    pub fn open_with_title(
        &mut self,
        path: &Path,
        title: String,
    ) -> Result<OpenOutcome, ViewerError> {
        if !extractor::is_supported_archive(path) {
            warn!("Rejected non-archive path: {}", path.display());
            return Err(ViewerError::InvalidInput(path.display().to_string()));
        }

        let document = extractor::extract(path)?;
        if document.is_empty() {
            info!("No text members in {}", path.display());
            return Ok(OpenOutcome::NoTextMembers { archive: title });
        }

        let tab = Tab {
            id: self.next_id,
            title,
            source_path: path.to_path_buf(),
            text: document.full_text(),
        };
        self.next_id += 1;
        info!(
            "Opened {} ({} sections) as tab {}",
            path.display(),
            document.sections.len(),
            tab.id
        );
        self.active = Some(tab.id);
        self.tabs.push(tab.clone());
        Ok(OpenOutcome::Opened { tab })
    }

    /// Close a tab and remember it for restore. Unknown ids are a silent
    /// no-op. If the active tab was closed, the last remaining tab (in
    /// insertion order) becomes active.
    pub fn close(&mut self, id: TabId) {
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        let tab = self.tabs.remove(index);
        info!("Closed tab {} ({})", id, tab.title);
        self.history.push(ClosedTab {
            title: tab.title,
            source_path: tab.source_path,
        });
        if self.active == Some(id) {
            self.active = self.tabs.last().map(|t| t.id);
        }
    }

    /// Reopen the most recently closed tab, re-reading its archive from
    /// disk.
    ///
    /// Best-effort: the popped history entry is consumed even when
    /// reopening fails or the archive no longer holds text members, so a
    /// broken entry cannot block the rest of the history.
    pub fn restore_last(&mut self) -> Result<RestoreOutcome, ViewerError> {
        let Some(closed) = self.history.pop() else {
            return Ok(RestoreOutcome::HistoryEmpty);
        };
        match self.open_with_title(&closed.source_path, closed.title)? {
            OpenOutcome::Opened { tab } => Ok(RestoreOutcome::Restored { tab }),
            OpenOutcome::NoTextMembers { archive } => {
                Ok(RestoreOutcome::NoTextMembers { archive })
            }
        }
    }

    /// Drain the history, newest-closed first. Each restored tab becomes
    /// active in turn, so the earliest-closed tab ends up selected.
    /// Per-entry failures are collected and never stop the drain.
    pub fn restore_all(&mut self) -> RestoreAllReport {
        let mut report = RestoreAllReport::default();
        loop {
            match self.restore_last() {
                Ok(RestoreOutcome::Restored { tab }) => report.restored.push(tab),
                Ok(RestoreOutcome::NoTextMembers { archive }) => report.empty.push(archive),
                Ok(RestoreOutcome::HistoryEmpty) => break,
                Err(e) => {
                    warn!("Restore failed: {}", e);
                    report.errors.push(e.to_string());
                }
            }
        }
        report
    }

    /// Mark a tab active (frontend tab-click sync). Unknown ids are a no-op.
    pub fn select(&mut self, id: TabId) {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active = Some(id);
        }
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Open tabs in insertion order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
