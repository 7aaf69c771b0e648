//! Entry engine: decay → quality gate → daily cap → streak → reward → level-up check.
//!
//! [`Engine::apply_entry`] is a pure function of its inputs. It never mutates the
//! caller's state; the updated record comes back in [`AppliedEntry`]. Callers
//! must serialize read → apply → write per user, since the engine holds no locks.

use chrono::NaiveDate;

use super::decay::DecayPolicy;
use super::reward::{effective_streak, next_streak, RewardPolicy};
use super::types::{AppliedEntry, EntryEvent, EntryOutcome, ProgressionState, Rejection};
use crate::config::CeliConfig;
use crate::ladder::{LadderError, LadderModel, RankResolution, RankTable};

/// Rank table, ladder model, and policies, fixed at startup.
#[derive(Debug, Clone)]
pub struct Engine {
    table: RankTable,
    model: LadderModel,
    rewards: RewardPolicy,
    decay: DecayPolicy,
}

impl Engine {
    pub fn new(
        table: RankTable,
        model: LadderModel,
        rewards: RewardPolicy,
        decay: DecayPolicy,
    ) -> Self {
        Self {
            table,
            model,
            rewards,
            decay,
        }
    }

    /// Cumulative model with default policies.
    pub fn with_table(table: RankTable) -> Self {
        Self::new(
            table,
            LadderModel::Cumulative,
            RewardPolicy::default(),
            DecayPolicy::default(),
        )
    }

    /// Build from configuration. Fails if the configured rank table is invalid.
    pub fn from_config(config: &CeliConfig) -> Result<Self, LadderError> {
        let table = config.ladder.rank_table()?;
        Ok(Self::new(
            table,
            config.ladder.model,
            RewardPolicy::from(&config.rewards),
            DecayPolicy::from(&config.decay),
        ))
    }

    pub fn table(&self) -> &RankTable {
        &self.table
    }

    pub fn model(&self) -> LadderModel {
        self.model
    }

    pub fn rewards(&self) -> &RewardPolicy {
        &self.rewards
    }

    pub fn decay(&self) -> &DecayPolicy {
        &self.decay
    }

    pub fn resolve(&self, state: &ProgressionState) -> RankResolution {
        self.model.resolve(&self.table, state)
    }

    /// Streak as it should be shown on `today`.
    pub fn effective_streak(&self, state: &ProgressionState, today: NaiveDate) -> u32 {
        effective_streak(state.last_reward_date, today, state.current_streak)
    }

    /// Evaluate one submitted entry.
    pub fn apply_entry(
        &self,
        state: &ProgressionState,
        today: NaiveDate,
        entry_text: &str,
    ) -> AppliedEntry {
        evaluate(
            &self.table,
            self.model,
            &self.rewards,
            &self.decay,
            state,
            today,
            entry_text,
        )
    }
}

/// Evaluate an entry with the cumulative model and default policies.
pub fn apply_entry(
    state: &ProgressionState,
    today: NaiveDate,
    entry_text: &str,
    table: &RankTable,
) -> AppliedEntry {
    evaluate(
        table,
        LadderModel::Cumulative,
        &RewardPolicy::default(),
        &DecayPolicy::default(),
        state,
        today,
        entry_text,
    )
}

/// Rejected entries leave everything but the decay bookkeeping as stored;
/// the ladder position is only settled once a reward lands.
fn evaluate(
    table: &RankTable,
    model: LadderModel,
    rewards: &RewardPolicy,
    decay: &DecayPolicy,
    state: &ProgressionState,
    today: NaiveDate,
    entry_text: &str,
) -> AppliedEntry {
    let mut next = state.clone();

    let decay_penalty = decay.apply(&mut next, today);
    let before = model.resolve(table, &next);

    let length = RewardPolicy::entry_length(entry_text);
    if !rewards.qualifies(length) {
        tracing::debug!(length, required = rewards.min_entry_chars, "entry below quality threshold");
        let rejection = Rejection::BelowQualityThreshold {
            length,
            required: rewards.min_entry_chars,
        };
        return AppliedEntry {
            outcome: EntryOutcome::declined(decay_penalty, next.current_streak, rejection),
            state: next,
        };
    }

    if next.last_reward_date.is_some_and(|last| last >= today) {
        tracing::debug!(%today, "already rewarded today");
        return AppliedEntry {
            outcome: EntryOutcome::declined(
                decay_penalty,
                next.current_streak,
                Rejection::AlreadyRewardedToday,
            ),
            state: next,
        };
    }

    let streak = next_streak(next.last_reward_date, today, next.current_streak);
    next.current_streak = streak;
    next.entry_count = next.entry_count.saturating_add(1);

    let streak_reward = rewards.streak_reward(streak);
    let bonus = rewards.constellation_bonus_for(next.entry_count);
    let points_delta = streak_reward.saturating_add(bonus);

    next.points = next.points.saturating_add(points_delta);
    next.last_reward_date = Some(today);
    model.settle(table, &mut next);

    let after = model.resolve(table, &next);
    let leveled_up = after.step > before.step;

    let event = if leveled_up {
        tracing::info!(from = %before.title, to = %after.title, "level up");
        EntryEvent::LevelUp
    } else if bonus > 0 {
        EntryEvent::ConstellationComplete
    } else {
        EntryEvent::DailyReward
    };

    tracing::debug!(
        streak,
        points_delta,
        entry_count = next.entry_count,
        event = %event,
        "entry rewarded"
    );

    AppliedEntry {
        outcome: EntryOutcome {
            awarded: true,
            points_delta,
            decay_penalty,
            streak_after: streak,
            event,
            constellation_bonus: bonus > 0,
            rejection: None,
        },
        state: next,
    }
}
