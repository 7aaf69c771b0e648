//! Rank resolution: map a point total (or a carry-over bucket) onto a named
//! rank, a descending sub-level, and progress toward the next sub-level.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::table::{to_roman, RankDefinition, RankTable};

/// Where a user sits on the ladder, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankResolution {
    pub rank_index: usize,
    pub rank_name: String,
    /// Displayed sub-level number, counting down to 1.
    pub sub_level: u32,
    pub sub_level_roman: String,
    /// `"<rank> <roman>"`, e.g. `"Observer III"`.
    pub title: String,
    pub phase_label: String,
    pub theme: String,
    /// Sub-level description when the rank carries lore, otherwise the rank's synthesis text.
    pub synthesis_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psyche: Option<String>,
    /// Fraction of the current sub-level completed, in `[0.0, 1.0]`.
    pub progress_fraction: f64,
    pub progress_percent: u8,
    pub points_to_next_sub_level: u64,
    /// Flattened sub-level index across the whole ladder (0 = first sub-level of the first rank).
    pub step: usize,
    /// True once the ladder is exhausted; progress is pinned at 100%.
    pub saturated: bool,
}

impl RankResolution {
    /// `banked` points toward a sub-level costing `req`. A saturated position
    /// reports full progress regardless of `banked`.
    fn build(
        table: &RankTable,
        rank_index: usize,
        completed: u32,
        banked: u64,
        req: u64,
        saturated: bool,
    ) -> Self {
        let rank: &RankDefinition = table.rank(rank_index);
        let sub_level = rank.sub_level_count.saturating_sub(completed).max(1);
        let sub_level_roman = to_roman(sub_level);
        let lore = rank.lore_for(completed.min(rank.sub_level_count - 1));

        let banked = if saturated { req } else { banked.min(req) };
        let progress_fraction = banked as f64 / req as f64;
        let progress_percent = (u128::from(banked) * 100 / u128::from(req)) as u8;

        Self {
            rank_index,
            rank_name: rank.name.clone(),
            sub_level,
            title: format!("{} {}", rank.name, sub_level_roman),
            sub_level_roman,
            phase_label: rank.phase_label.clone(),
            theme: rank.theme.clone(),
            synthesis_text: lore
                .map(|l| l.description.clone())
                .unwrap_or_else(|| rank.synthesis_text.clone()),
            psyche: lore.map(|l| l.psyche.clone()),
            progress_fraction,
            progress_percent,
            points_to_next_sub_level: req - banked,
            step: table.step_of(rank_index, completed),
            saturated,
        }
    }
}

/// Resolve a cumulative point total against absolute rank thresholds.
///
/// Totals at or past the final threshold resolve to the last rank, sub-level I,
/// with progress pinned at 1.0.
pub fn resolve_rank(points: u64, table: &RankTable) -> RankResolution {
    for (index, rank) in table.ranks().iter().enumerate() {
        if points < rank.cumulative_threshold {
            let into_rank = points - table.floor_of(index);
            let req = rank.points_per_sub_level;
            return RankResolution::build(
                table,
                index,
                (into_rank / req) as u32,
                into_rank % req,
                req,
                false,
            );
        }
    }

    let last = table.last();
    RankResolution::build(
        table,
        table.len() - 1,
        last.sub_level_count - 1,
        0,
        last.points_per_sub_level,
        true,
    )
}

/// Resolve a carry-over position: `step` is the flattened sub-level the user
/// currently occupies and `bucket` the points banked toward clearing it.
pub fn resolve_bucket(step: usize, bucket: u64, table: &RankTable) -> RankResolution {
    let (rank_index, completed) = table.locate_step(step);
    let req = table.rank(rank_index).points_per_sub_level;
    let final_step = table.step_of(rank_index, completed) + 1 == table.total_steps();

    RankResolution::build(
        table,
        rank_index,
        completed,
        bucket,
        req,
        final_step && bucket >= req,
    )
}
