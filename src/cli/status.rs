//! CLI `status` command: show the stored progression.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

use celi::ladder::RankResolution;
use celi::progression::{Engine, ProgressionState};

#[derive(Debug, Serialize)]
struct StatusReport {
    today: NaiveDate,
    state: ProgressionState,
    effective_streak: u32,
    rank: RankResolution,
}

/// Print the stored state, its rank, and the streak as of `today`.
pub fn status(engine: &Engine, state_path: &Path, today: NaiveDate) -> Result<()> {
    let state = super::load_state(state_path)?;
    let report = StatusReport {
        today,
        effective_streak: engine.effective_streak(&state, today),
        rank: engine.resolve(&state),
        state,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
