//! Rank ladder and engagement engine for the Celi journaling companion.
//!
//! Every qualifying journal entry earns stardust. Stardust climbs a named rank
//! ladder whose ranks are split into descending sub-levels (Observer III → II → I
//! → Moonwalker III ...). Idle days cost stardust, consecutive days multiply the
//! reward, and every seventh entry completes a constellation.
//!
//! | Rule | Default |
//! |------|---------|
//! | Quality gate | trimmed entry ≥ 30 characters |
//! | Daily cap | one reward per calendar day |
//! | Streak reward | 5 × streak |
//! | Constellation bonus | +10 every 7th rewarded entry |
//! | Decay | −1 per idle day beyond one grace day |
//!
//! # Architecture
//!
//! - **Pure core**: [`ladder::resolve_rank`] and [`progression::Engine::apply_entry`]
//!   perform no I/O and never fail. State goes in, new state comes out.
//! - **Fail-fast configuration**: a [`ladder::RankTable`] is validated once when
//!   built; a malformed table is a [`ladder::LadderError`] at startup.
//! - **Dates**: day granularity. The CLI uses UTC calendar days.
//! - **Concurrency**: callers serialize read → apply → write per user.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`ladder`]: Rank tables, the celestial ladder, ladder models, and rank resolution
//! - [`progression`]: Progression state, decay and reward policies, and the entry engine

pub mod config;
pub mod ladder;
pub mod progression;

pub use ladder::{resolve_rank, LadderModel, RankResolution, RankTable};
pub use progression::{apply_entry, Engine, EntryEvent, EntryOutcome, ProgressionState};
