use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI session state (written to `.state.json`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Which view is showing ("dashboard", "focused", "intake")
    pub view: String,
    #[serde(default)]
    pub focused_program: Option<String>,
    #[serde(default)]
    pub active_roadmap: Option<String>,
    #[serde(default)]
    pub program_cursor: usize,
    #[serde(default)]
    pub step_cursor: usize,
}

/// Read `.state.json` from the data directory. Missing or malformed state
/// is simply absent and the TUI starts fresh.
pub fn read_ui_state(data_dir: &Path) -> Option<UiState> {
    let text = fs::read_to_string(data_dir.join(".state.json")).ok()?;
    serde_json::from_str(&text).ok()
}

/// Write `.state.json` to the data directory
pub fn write_ui_state(data_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    fs::create_dir_all(data_dir)?;
    let text = serde_json::to_string_pretty(state)?;
    fs::write(data_dir.join(".state.json"), text)
}
