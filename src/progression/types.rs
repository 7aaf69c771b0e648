//! Progression records and entry outcomes.
//!
//! [`ProgressionState`] is the flat per-user record the storage layer persists.
//! Deserialization is lenient: negative or fractional counters clamp to a
//! non-negative integer and unparseable dates read as "no prior activity".

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-user progression record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProgressionState {
    /// Stardust. Lifetime total in the cumulative model, current bucket in carry-over.
    #[serde(alias = "stardust", deserialize_with = "lenient::points")]
    #[schemars(with = "u64")]
    pub points: u64,
    /// Rank index (cumulative) or flattened sub-level step (carry-over).
    #[serde(deserialize_with = "lenient::index")]
    #[schemars(with = "usize")]
    pub rank_index: usize,
    /// Day of the last entry evaluated for decay.
    #[serde(deserialize_with = "lenient::date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub last_interaction_date: Option<NaiveDate>,
    /// Day the last reward was granted. At most one reward per day.
    #[serde(deserialize_with = "lenient::date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub last_reward_date: Option<NaiveDate>,
    /// Consecutive rewarded days.
    #[serde(deserialize_with = "lenient::streak")]
    #[schemars(with = "u32")]
    pub current_streak: u32,
    /// Star count: qualifying entries ever rewarded.
    #[serde(alias = "star_count", deserialize_with = "lenient::points")]
    #[schemars(with = "u64")]
    pub entry_count: u64,
}

/// Caller-facing signal for an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryEvent {
    #[default]
    None,
    DailyReward,
    LevelUp,
    ConstellationComplete,
}

impl EntryEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DailyReward => "daily_reward",
            Self::LevelUp => "level_up",
            Self::ConstellationComplete => "constellation_complete",
        }
    }
}

impl std::fmt::Display for EntryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an entry was not rewarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    BelowQualityThreshold { length: usize, required: usize },
    AlreadyRewardedToday,
}

/// Result of evaluating one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntryOutcome {
    pub awarded: bool,
    /// Reward granted by this entry, streak reward plus any constellation bonus.
    pub points_delta: u64,
    /// Points removed by inactivity decay before the reward was considered.
    pub decay_penalty: u64,
    pub streak_after: u32,
    pub event: EntryEvent,
    /// The constellation bonus was applied, even when `event` reports a level-up.
    pub constellation_bonus: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

impl EntryOutcome {
    pub(crate) fn declined(decay_penalty: u64, streak: u32, rejection: Rejection) -> Self {
        Self {
            awarded: false,
            points_delta: 0,
            decay_penalty,
            streak_after: streak,
            event: EntryEvent::None,
            constellation_bonus: false,
            rejection: Some(rejection),
        }
    }
}

/// Updated state plus the outcome to surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedEntry {
    pub state: ProgressionState,
    pub outcome: EntryOutcome,
}

mod lenient {
    use chrono::{DateTime, NaiveDate};
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Null(()),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Other(IgnoredAny),
    }

    fn counter<'de, D: Deserializer<'de>>(deserializer: D, field: &str) -> Result<u64, D::Error> {
        let value = match RawNumber::deserialize(deserializer)? {
            RawNumber::Unsigned(n) => n,
            RawNumber::Signed(n) => {
                tracing::warn!(field, value = n, "negative counter clamped to zero");
                0
            }
            RawNumber::Float(f) if f.is_finite() && f >= 0.0 => f.floor() as u64,
            RawNumber::Float(f) => {
                tracing::warn!(field, value = f, "invalid counter clamped to zero");
                0
            }
            RawNumber::Null(()) => 0,
        };
        Ok(value)
    }

    pub fn points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        counter(deserializer, "points")
    }

    pub fn index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        let n = counter(deserializer, "rank_index")?;
        Ok(usize::try_from(n).unwrap_or(usize::MAX))
    }

    pub fn streak<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let n = counter(deserializer, "current_streak")?;
        Ok(u32::try_from(n).unwrap_or(u32::MAX))
    }

    pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = match Option::<RawDate>::deserialize(deserializer)? {
            None => return Ok(None),
            Some(RawDate::Text(raw)) => raw,
            Some(RawDate::Other(_)) => {
                tracing::warn!("non-string date treated as no prior activity");
                return Ok(None);
            }
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(Some(date));
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Some(ts.date_naive()));
        }
        tracing::warn!(value = raw, "unparseable date treated as no prior activity");
        Ok(None)
    }
}
