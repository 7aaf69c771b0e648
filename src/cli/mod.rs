pub mod apply;
pub mod ladder;
pub mod resolve;
pub mod schema;
pub mod status;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use celi::progression::ProgressionState;

/// Current UTC calendar day, or the `--today` override.
pub fn today_or(override_date: Option<NaiveDate>) -> NaiveDate {
    override_date.unwrap_or_else(|| chrono::Utc::now().date_naive())
}

/// Read the state file. A missing file is a brand-new user.
pub fn load_state(path: &Path) -> Result<ProgressionState> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no state file, starting a new progression");
        return Ok(ProgressionState::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read state file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse state file: {}", path.display()))
}

/// Write the state file atomically (tmp + rename).
pub fn save_state(path: &Path, state: &ProgressionState) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(&tmp_path, json)
        .with_context(|| format!("failed to write temp file: {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path).context("failed to rename temp file")?;

    tracing::debug!(path = %path.display(), "state saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_state_is_new_user() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_state(&dir.path().join("state.json")).unwrap();
        assert_eq!(state, ProgressionState::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let state = ProgressionState {
            points: 33,
            current_streak: 2,
            last_reward_date: NaiveDate::from_ymd_opt(2026, 1, 9),
            ..Default::default()
        };
        save_state(&path, &state).unwrap();
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(load_state(&path).unwrap(), state);
    }

    #[test]
    fn corrupt_state_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_state(&path).is_err());
    }

    #[test]
    fn explicit_today_wins() {
        let day = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        assert_eq!(today_or(Some(day)), day);
    }
}
