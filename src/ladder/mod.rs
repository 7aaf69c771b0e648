//! Rank ladder: table definitions, the built-in celestial ladder, and the two
//! ladder models that turn a [`ProgressionState`] into a [`RankResolution`].
//!
//! | Model | `points` holds | `rank_index` holds | Resolution |
//! |-------|----------------|--------------------|------------|
//! | [`LadderModel::Cumulative`] | lifetime total, never reset | derived rank index | compare against absolute thresholds |
//! | [`LadderModel::CarryOver`] | bucket toward the current sub-level | flattened sub-level step | bucket resets on each advance |

pub mod lore;
pub mod resolve;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::progression::types::ProgressionState;

pub use resolve::{resolve_bucket, resolve_rank, RankResolution};
pub use table::{to_roman, LadderError, RankDefinition, RankTable, SubLevelLore};

/// How points map onto the ladder. Selected once at configuration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderModel {
    /// Absolute cumulative thresholds; idempotent and side-effect free.
    #[default]
    Cumulative,
    /// Per sub-level buckets; overflow carries into the next sub-level.
    CarryOver,
}

impl LadderModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cumulative => "cumulative",
            Self::CarryOver => "carry_over",
        }
    }

    /// Resolve the state's current position on the ladder.
    pub fn resolve(&self, table: &RankTable, state: &ProgressionState) -> RankResolution {
        match self {
            Self::Cumulative => resolve_rank(state.points, table),
            Self::CarryOver => resolve_bucket(state.rank_index, state.points, table),
        }
    }

    /// Bring `rank_index` (and, for carry-over, the bucket) in line with `points`.
    ///
    /// Returns the number of sub-levels advanced by a carry-over settle. The
    /// cumulative model only re-derives the rank index and always returns 0.
    pub fn settle(&self, table: &RankTable, state: &mut ProgressionState) -> usize {
        match self {
            Self::Cumulative => {
                state.rank_index = resolve_rank(state.points, table).rank_index;
                0
            }
            Self::CarryOver => {
                let last_step = table.total_steps() - 1;
                let mut advanced = 0;
                state.rank_index = state.rank_index.min(last_step);
                while state.rank_index < last_step {
                    let (rank_index, _) = table.locate_step(state.rank_index);
                    let req = table.rank(rank_index).points_per_sub_level;
                    if state.points < req {
                        break;
                    }
                    state.points -= req;
                    state.rank_index += 1;
                    advanced += 1;
                }
                advanced
            }
        }
    }
}

impl std::fmt::Display for LadderModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LadderModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cumulative" => Ok(Self::Cumulative),
            "carry_over" | "carry-over" => Ok(Self::CarryOver),
            _ => Err(format!("unknown ladder model: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RankTable {
        RankTable::new(vec![
            RankDefinition::new("Observer", 3, 2),
            RankDefinition::new("Moonwalker", 3, 2),
        ])
        .unwrap()
    }

    #[test]
    fn cumulative_settle_derives_rank_index() {
        let mut state = ProgressionState {
            points: 7,
            ..Default::default()
        };
        assert_eq!(LadderModel::Cumulative.settle(&table(), &mut state), 0);
        assert_eq!(state.rank_index, 1);
        assert_eq!(state.points, 7);
    }

    #[test]
    fn carry_over_settle_repeats_until_below_requirement() {
        let mut state = ProgressionState {
            points: 5,
            ..Default::default()
        };
        let advanced = LadderModel::CarryOver.settle(&table(), &mut state);
        assert_eq!(advanced, 2);
        assert_eq!(state.rank_index, 2);
        assert_eq!(state.points, 1);
        assert_eq!(LadderModel::CarryOver.resolve(&table(), &state).title, "Observer I");
    }

    #[test]
    fn carry_over_stops_at_final_step() {
        let mut state = ProgressionState {
            points: 100,
            ..Default::default()
        };
        LadderModel::CarryOver.settle(&table(), &mut state);
        assert_eq!(state.rank_index, 5);
        assert_eq!(state.points, 90);
        assert!(LadderModel::CarryOver.resolve(&table(), &state).saturated);
    }

    #[test]
    fn parse_model_names() {
        assert_eq!("cumulative".parse::<LadderModel>(), Ok(LadderModel::Cumulative));
        assert_eq!("carry_over".parse::<LadderModel>(), Ok(LadderModel::CarryOver));
        assert!("bucket".parse::<LadderModel>().is_err());
        assert_eq!(LadderModel::CarryOver.to_string(), "carry_over");
    }
}
