pub mod decay;
pub mod engine;
pub mod reward;
pub mod types;

pub use decay::DecayPolicy;
pub use engine::{apply_entry, Engine};
pub use reward::RewardPolicy;
pub use types::{AppliedEntry, EntryEvent, EntryOutcome, ProgressionState, Rejection};
