#![allow(dead_code)]

use celi::ladder::{RankDefinition, RankTable};
use celi::progression::ProgressionState;
use chrono::{Duration, NaiveDate};

/// The two-rank table used for boundary checks: Observer 3×2, Moonwalker 3×2.
pub fn boundary_table() -> RankTable {
    RankTable::new(vec![
        RankDefinition::new("Observer", 3, 2),
        RankDefinition::new("Moonwalker", 3, 2),
    ])
    .unwrap()
}

/// Base day for date arithmetic in tests.
pub fn d0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

/// `d0() + n` days.
pub fn day(n: i64) -> NaiveDate {
    d0() + Duration::days(n)
}

/// A journal entry comfortably past the quality threshold.
pub fn good_entry() -> &'static str {
    "I noticed I keep avoiding the hard conversation with my sister."
}

/// A user who was last seen and rewarded on `last`.
pub fn state_seen_on(last: NaiveDate, points: u64, streak: u32, entries: u64) -> ProgressionState {
    ProgressionState {
        points,
        rank_index: 0,
        last_interaction_date: Some(last),
        last_reward_date: Some(last),
        current_streak: streak,
        entry_count: entries,
    }
}
