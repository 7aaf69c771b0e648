//! Inactivity decay.
//!
//! Each evaluation compares today with `last_interaction_date`. Same-day and
//! next-day activity cost nothing; every day beyond the grace window removes
//! `penalty_per_day` points, floored at zero.

use chrono::NaiveDate;

use crate::config::DecayConfig;
use crate::progression::types::ProgressionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayPolicy {
    pub grace_days: u32,
    pub penalty_per_day: u64,
}

impl Default for DecayPolicy {
    fn default() -> Self {
        Self {
            grace_days: 1,
            penalty_per_day: 1,
        }
    }
}

impl From<&DecayConfig> for DecayPolicy {
    fn from(config: &DecayConfig) -> Self {
        Self {
            grace_days: config.grace_days,
            penalty_per_day: config.penalty_per_day,
        }
    }
}

impl DecayPolicy {
    /// Penalty owed after `days_missed` days without an entry.
    pub fn penalty(&self, days_missed: i64) -> u64 {
        let overdue = days_missed.saturating_sub(i64::from(self.grace_days)).max(0) as u64;
        overdue.saturating_mul(self.penalty_per_day)
    }

    /// Apply decay for `today` and record the interaction. Returns the points removed.
    ///
    /// A missing last-interaction date counts as a first interaction. A
    /// last-interaction date after `today` costs nothing and is kept as is.
    pub fn apply(&self, state: &mut ProgressionState, today: NaiveDate) -> u64 {
        let days_missed = state
            .last_interaction_date
            .map(|last| (today - last).num_days())
            .unwrap_or(0);

        let owed = self.penalty(days_missed);
        let removed = owed.min(state.points);
        state.points -= removed;

        if state.last_interaction_date.map_or(true, |last| last < today) {
            state.last_interaction_date = Some(today);
        }

        if removed > 0 {
            tracing::debug!(days_missed, removed, points = state.points, "decay applied");
        }
        removed
    }
}
