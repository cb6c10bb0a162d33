use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::models::PersistedState;

/// Read the persisted snapshot. A file that has never been written yields
/// the default empty state; a corrupt file is rejected whole rather than
/// partially repaired.
pub fn load_snapshot(path: &Path) -> Result<PersistedState> {
    if !path.exists() {
        return Ok(PersistedState::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize events from {}", path.display()))
}

/// Write the full snapshot, creating parent directories as needed.
pub fn save_snapshot(path: &Path, snapshot: &PersistedState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))
}
