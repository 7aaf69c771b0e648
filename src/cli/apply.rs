//! CLI `apply` command: evaluate one entry against the stored progression.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

use celi::ladder::RankResolution;
use celi::progression::{Engine, EntryOutcome, ProgressionState};

#[derive(Debug, Serialize)]
struct ApplyReport {
    today: NaiveDate,
    outcome: EntryOutcome,
    rank: RankResolution,
    state: ProgressionState,
    saved: bool,
}

/// Load, apply the entry, write back (unless `dry_run`), and print the report.
pub fn apply(
    engine: &Engine,
    state_path: &Path,
    today: NaiveDate,
    text: &str,
    dry_run: bool,
) -> Result<()> {
    let state = super::load_state(state_path)?;
    let applied = engine.apply_entry(&state, today, text);

    if !dry_run {
        super::save_state(state_path, &applied.state)?;
    }

    let report = ApplyReport {
        today,
        rank: engine.resolve(&applied.state),
        outcome: applied.outcome,
        state: applied.state,
        saved: !dry_run,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
