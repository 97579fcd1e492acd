//! Reading and writing the saved sort choice.

use anyhow::{Context, Result};
use listing::SortSettings;
use std::fs;
use std::path::Path;

/// Load saved settings; a missing file means defaults.
pub fn load(path: &Path) -> Result<SortSettings> {
    if !path.exists() {
        tracing::debug!("No settings at {}, using defaults", path.display());
        return Ok(SortSettings::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid settings file {}", path.display()))
}

pub fn save(path: &Path, settings: &SortSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    tracing::info!("Saved sort settings to {}", path.display());
    Ok(())
}
