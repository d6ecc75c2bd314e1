use crate::core::search::{self, MatchSpan};
use crate::core::tabs::TabRegistry;
use crate::models::{OpenOutcome, RestoreAllReport, RestoreOutcome, Tab, TabId, ViewerError};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tauri::State;

/// Tab registry behind the tauri-managed mutex.
///
/// The lock exists only because managed state must be Send + Sync; every
/// command is a discrete user action, so calls never actually contend.
pub struct ViewerState(pub Mutex<TabRegistry>);

impl ViewerState {
    pub fn new() -> Self {
        Self(Mutex::new(TabRegistry::new()))
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<'a>(state: &'a State<'_, ViewerState>) -> Result<MutexGuard<'a, TabRegistry>, String> {
    state.0.lock().map_err(|_| "tab registry state poisoned".to_string())
}

/// Per-path outcome of a drag-and-drop batch
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DropOutcome {
    Opened { tab: Tab },
    NoTextMembers { archive: String },
    /// Unrecognized suffix or load failure; other paths are unaffected
    Rejected { path: String, reason: String },
}

/// Search result with an explicit found flag for the "no matches" notice
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub matches: Vec<MatchSpan>,
    pub found: bool,
}

/// Snapshot of the open tab set for frontend resync
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabListing {
    pub tabs: Vec<Tab>,
    pub active: Option<TabId>,
}

/// Open one archive picked via the file dialog
#[tauri::command]
pub fn open_archive(
    state: State<'_, ViewerState>,
    path: String,
) -> Result<OpenOutcome, String> {
    let mut registry = lock(&state)?;
    registry.open(&PathBuf::from(path)).map_err(String::from)
}

/// Open every dropped path, reporting a per-path outcome.
///
/// A rejected or failing path never affects the other paths, existing
/// tabs, or the history.
#[tauri::command]
pub fn open_dropped_paths(
    state: State<'_, ViewerState>,
    paths: Vec<String>,
) -> Result<Vec<DropOutcome>, String> {
    let mut registry = lock(&state)?;
    let mut outcomes = Vec::with_capacity(paths.len());
    for path in paths {
        let outcome = match registry.open(&PathBuf::from(&path)) {
            Ok(OpenOutcome::Opened { tab }) => DropOutcome::Opened { tab },
            Ok(OpenOutcome::NoTextMembers { archive }) => {
                DropOutcome::NoTextMembers { archive }
            }
            Err(e) => DropOutcome::Rejected {
                path,
                reason: e.to_string(),
            },
        };
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Close a tab (middle click or context menu); unknown ids are a no-op
#[tauri::command]
pub fn close_tab(state: State<'_, ViewerState>, id: TabId) -> Result<(), String> {
    let mut registry = lock(&state)?;
    registry.close(id);
    Ok(())
}

/// Keep the backend's active-tab bookkeeping in sync with tab clicks
#[tauri::command]
pub fn select_tab(state: State<'_, ViewerState>, id: TabId) -> Result<(), String> {
    let mut registry = lock(&state)?;
    registry.select(id);
    Ok(())
}

/// "Restore Last Closed Tab" button
#[tauri::command]
pub fn restore_last_tab(state: State<'_, ViewerState>) -> Result<RestoreOutcome, String> {
    let mut registry = lock(&state)?;
    registry.restore_last().map_err(String::from)
}

/// "Restore All Tabs" button
#[tauri::command]
pub fn restore_all_tabs(state: State<'_, ViewerState>) -> Result<RestoreAllReport, String> {
    let mut registry = lock(&state)?;
    Ok(registry.restore_all())
}

/// Search a tab's displayed text; highlight application and clearing are
/// the frontend's job
#[tauri::command]
pub fn search_tab(
    state: State<'_, ViewerState>,
    id: TabId,
    query: String,
) -> Result<SearchReport, String> {
    let registry = lock(&state)?;
    let tab = registry
        .tab(id)
        .ok_or_else(|| String::from(ViewerError::UnknownTab(id)))?;
    let matches = search::search(&tab.text, &query);
    let found = !matches.is_empty();
    Ok(SearchReport { matches, found })
}

/// Full tab listing plus active id, for frontend resync on reload
#[tauri::command]
pub fn list_tabs(state: State<'_, ViewerState>) -> Result<TabListing, String> {
    let registry = lock(&state)?;
    Ok(TabListing {
        tabs: registry.tabs().to_vec(),
        active: registry.active(),
    })
}
