//! CLI `resolve` command: resolve a point total to a rank.

use anyhow::Result;

use celi::ladder::LadderModel;
use celi::progression::{Engine, ProgressionState};

/// Print the rank resolution for `points` as JSON. `rank_index` only matters
/// for the carry-over model.
pub fn resolve(engine: &Engine, points: u64, rank_index: Option<usize>) -> Result<()> {
    if rank_index.is_some() && engine.model() == LadderModel::Cumulative {
        tracing::warn!("--rank-index is ignored by the cumulative ladder model");
    }

    let state = ProgressionState {
        points,
        rank_index: rank_index.unwrap_or(0),
        ..Default::default()
    };
    let resolution = engine.resolve(&state);
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}
