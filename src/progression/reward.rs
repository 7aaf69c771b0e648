//! Reward policy: quality gate, streak scaling, and the constellation bonus.

use chrono::NaiveDate;

use crate::config::RewardConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardPolicy {
    /// When false every entry qualifies regardless of length.
    pub quality_gate: bool,
    /// Minimum trimmed length, in characters.
    pub min_entry_chars: usize,
    pub base_reward: u64,
    /// Every Nth rewarded entry earns the bonus. 0 disables it.
    pub constellation_interval: u64,
    pub constellation_bonus: u64,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            quality_gate: true,
            min_entry_chars: 30,
            base_reward: 5,
            constellation_interval: 7,
            constellation_bonus: 10,
        }
    }
}

impl From<&RewardConfig> for RewardPolicy {
    fn from(config: &RewardConfig) -> Self {
        Self {
            quality_gate: config.quality_gate,
            min_entry_chars: config.min_entry_chars,
            base_reward: config.base_reward,
            constellation_interval: config.constellation_interval,
            constellation_bonus: config.constellation_bonus,
        }
    }
}

impl RewardPolicy {
    /// Trimmed character count of an entry.
    pub fn entry_length(entry_text: &str) -> usize {
        entry_text.trim().chars().count()
    }

    pub fn qualifies(&self, length: usize) -> bool {
        !self.quality_gate || length >= self.min_entry_chars
    }

    /// `base × streak`, uncapped.
    // TODO: confirm with product whether the streak multiplier should be capped.
    pub fn streak_reward(&self, streak: u32) -> u64 {
        self.base_reward.saturating_mul(u64::from(streak))
    }

    /// Bonus owed for the `entry_count`-th rewarded entry.
    pub fn constellation_bonus_for(&self, entry_count: u64) -> u64 {
        if self.constellation_interval > 0 && entry_count % self.constellation_interval == 0 {
            self.constellation_bonus
        } else {
            0
        }
    }
}

/// Streak after a reward on `today`: continues from yesterday, otherwise restarts at 1.
pub fn next_streak(last_reward_date: Option<NaiveDate>, today: NaiveDate, current: u32) -> u32 {
    match last_reward_date {
        Some(last) if today.pred_opt() == Some(last) => current.saturating_add(1),
        _ => 1,
    }
}

/// Streak for display: drops to zero once the streak can no longer continue.
pub fn effective_streak(last_reward_date: Option<NaiveDate>, today: NaiveDate, current: u32) -> u32 {
    match last_reward_date {
        Some(last) if (today - last).num_days() <= 1 => current,
        _ => 0,
    }
}
