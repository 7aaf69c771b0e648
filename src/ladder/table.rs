//! Rank table definitions.
//!
//! A [`RankTable`] is an ordered, validated sequence of [`RankDefinition`]s.
//! Index in the sequence is ladder position. Each rank is split into
//! `sub_level_count` sub-levels numbered downward (III, II, I), and every
//! sub-level costs `points_per_sub_level` points.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration defects in a rank table. Raised once when the table is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LadderError {
    #[error("rank table is empty")]
    Empty,
    #[error("rank '{name}' has no sub-levels")]
    NoSubLevels { name: String },
    #[error("rank '{name}' requires zero points per sub-level")]
    ZeroPointsPerSubLevel { name: String },
    #[error("rank at position {index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate rank name '{name}'")]
    DuplicateName { name: String },
    #[error("rank '{name}' has {found} lore entries, expected {expected}")]
    LoreMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("rank '{name}' declares cumulative threshold {declared}, accumulated value is {expected}")]
    ThresholdMismatch {
        name: String,
        declared: u64,
        expected: u64,
    },
    #[error("rank '{name}' threshold {threshold} does not exceed the previous threshold {previous}")]
    NonIncreasing {
        name: String,
        threshold: u64,
        previous: u64,
    },
    #[error("cumulative threshold overflows at rank '{name}'")]
    Overflow { name: String },
}

/// Display lore for a single sub-level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubLevelLore {
    /// Short label, e.g. `"The Separation"`.
    pub psyche: String,
    /// One or two sentences shown when the sub-level is reached.
    pub description: String,
}

/// One named rank on the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RankDefinition {
    pub name: String,
    /// Number of descending sub-levels (3 means III, II, I).
    pub sub_level_count: u32,
    pub points_per_sub_level: u64,
    /// Total points from zero needed to complete this rank. Filled in by [`RankTable::new`].
    pub cumulative_threshold: u64,
    pub phase_label: String,
    pub theme: String,
    pub synthesis_text: String,
    /// Per sub-level lore in the order sub-levels are reached. Empty or exactly
    /// `sub_level_count` long.
    #[serde(default)]
    pub lore: Vec<SubLevelLore>,
}

impl RankDefinition {
    /// A rank with no display metadata.
    pub fn new(name: impl Into<String>, sub_level_count: u32, points_per_sub_level: u64) -> Self {
        Self {
            name: name.into(),
            sub_level_count,
            points_per_sub_level,
            cumulative_threshold: 0,
            phase_label: String::new(),
            theme: String::new(),
            synthesis_text: String::new(),
            lore: Vec::new(),
        }
    }

    pub fn with_phase(mut self, phase_label: impl Into<String>, theme: impl Into<String>) -> Self {
        self.phase_label = phase_label.into();
        self.theme = theme.into();
        self
    }

    pub fn with_synthesis(mut self, synthesis_text: impl Into<String>) -> Self {
        self.synthesis_text = synthesis_text.into();
        self
    }

    pub fn with_lore(mut self, lore: Vec<SubLevelLore>) -> Self {
        self.lore = lore;
        self
    }

    /// Points needed to clear every sub-level of this rank.
    pub fn span(&self) -> Option<u64> {
        self.points_per_sub_level
            .checked_mul(u64::from(self.sub_level_count))
    }

    /// Lore for the sub-level reached after `completed` sub-levels of this rank.
    pub fn lore_for(&self, completed: u32) -> Option<&SubLevelLore> {
        self.lore.get(completed as usize)
    }
}

/// A validated rank ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankTable {
    ranks: Vec<RankDefinition>,
    total_steps: usize,
}

impl RankTable {
    /// Validate `ranks` and accumulate their cumulative thresholds.
    ///
    /// Any `cumulative_threshold` already present on an input rank is overwritten.
    /// Use [`RankTable::with_declared_thresholds`] to check declared values instead.
    pub fn new(mut ranks: Vec<RankDefinition>) -> Result<Self, LadderError> {
        if ranks.is_empty() {
            return Err(LadderError::Empty);
        }

        let mut seen = HashSet::new();
        let mut floor: u64 = 0;
        let mut total_steps = 0usize;

        for (index, rank) in ranks.iter_mut().enumerate() {
            if rank.name.trim().is_empty() {
                return Err(LadderError::EmptyName { index });
            }
            if !seen.insert(rank.name.clone()) {
                return Err(LadderError::DuplicateName {
                    name: rank.name.clone(),
                });
            }
            if rank.sub_level_count == 0 {
                return Err(LadderError::NoSubLevels {
                    name: rank.name.clone(),
                });
            }
            if rank.points_per_sub_level == 0 {
                return Err(LadderError::ZeroPointsPerSubLevel {
                    name: rank.name.clone(),
                });
            }
            if !rank.lore.is_empty() && rank.lore.len() != rank.sub_level_count as usize {
                return Err(LadderError::LoreMismatch {
                    name: rank.name.clone(),
                    expected: rank.sub_level_count as usize,
                    found: rank.lore.len(),
                });
            }

            let threshold = rank
                .span()
                .and_then(|span| floor.checked_add(span))
                .ok_or_else(|| LadderError::Overflow {
                    name: rank.name.clone(),
                })?;
            rank.cumulative_threshold = threshold;
            floor = threshold;
            total_steps += rank.sub_level_count as usize;
        }

        Ok(Self { ranks, total_steps })
    }

    /// Like [`RankTable::new`], but each declared threshold must strictly
    /// increase and match the accumulated value.
    pub fn with_declared_thresholds(ranks: Vec<RankDefinition>) -> Result<Self, LadderError> {
        let declared: Vec<(String, u64)> = ranks
            .iter()
            .map(|r| (r.name.clone(), r.cumulative_threshold))
            .collect();

        let mut previous = 0u64;
        for (i, (name, threshold)) in declared.iter().enumerate() {
            if i > 0 && *threshold <= previous {
                return Err(LadderError::NonIncreasing {
                    name: name.clone(),
                    threshold: *threshold,
                    previous,
                });
            }
            previous = *threshold;
        }

        let table = Self::new(ranks)?;
        for ((name, declared), rank) in declared.into_iter().zip(&table.ranks) {
            if declared != rank.cumulative_threshold {
                return Err(LadderError::ThresholdMismatch {
                    name,
                    declared,
                    expected: rank.cumulative_threshold,
                });
            }
        }
        Ok(table)
    }

    pub fn ranks(&self) -> &[RankDefinition] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Rank at `index`, clamped to the ends of the table.
    pub fn rank(&self, index: usize) -> &RankDefinition {
        let last = self.ranks.len() - 1;
        &self.ranks[index.min(last)]
    }

    pub fn last(&self) -> &RankDefinition {
        self.rank(usize::MAX)
    }

    /// Total number of sub-levels across every rank.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Points needed to complete the whole ladder.
    pub fn ceiling(&self) -> u64 {
        self.last().cumulative_threshold
    }

    /// Threshold sum of every rank before `index`.
    pub fn floor_of(&self, index: usize) -> u64 {
        match index.min(self.ranks.len()) {
            0 => 0,
            i => self.ranks[i - 1].cumulative_threshold,
        }
    }

    /// Map a flattened sub-level step onto `(rank index, completed sub-levels in that rank)`.
    /// Steps past the end clamp to the final sub-level of the final rank.
    pub fn locate_step(&self, step: usize) -> (usize, u32) {
        let mut remaining = step.min(self.total_steps - 1);
        for (index, rank) in self.ranks.iter().enumerate() {
            let count = rank.sub_level_count as usize;
            if remaining < count {
                return (index, remaining as u32);
            }
            remaining -= count;
        }
        let last = self.ranks.len() - 1;
        (last, self.ranks[last].sub_level_count - 1)
    }

    /// Flattened step for `completed` sub-levels of the rank at `index`.
    pub fn step_of(&self, index: usize, completed: u32) -> usize {
        let prior: usize = self.ranks[..index.min(self.ranks.len())]
            .iter()
            .map(|r| r.sub_level_count as usize)
            .sum();
        prior + completed as usize
    }
}

/// Roman numeral for a positive sub-level number. Zero renders as an empty string.
pub fn to_roman(mut n: u32) -> String {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
