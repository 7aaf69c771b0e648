use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::ladder::{lore, LadderError, LadderModel, RankDefinition, RankTable, SubLevelLore};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CeliConfig {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub ladder: LadderConfig,
    pub rewards: RewardConfig,
    pub decay: DecayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding one `ProgressionState`, used by the CLI.
    pub state_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LadderConfig {
    pub model: LadderModel,
    /// Custom rank table. Empty means the built-in celestial ladder.
    pub ranks: Vec<RankConfig>,
}

/// One `[[ladder.ranks]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct RankConfig {
    pub name: String,
    pub sub_levels: u32,
    pub points_per_sub_level: u64,
    /// Checked against the accumulated threshold when present.
    pub cumulative_threshold: Option<u64>,
    #[serde(default)]
    pub phase_label: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub synthesis_text: String,
    #[serde(default)]
    pub lore: Vec<SubLevelLore>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RewardConfig {
    pub quality_gate: bool,
    pub min_entry_chars: usize,
    pub base_reward: u64,
    pub constellation_interval: u64,
    pub constellation_bonus: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DecayConfig {
    pub grace_days: u32,
    pub penalty_per_day: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let state_path = default_celi_dir()
            .join("state.json")
            .to_string_lossy()
            .into_owned();
        Self { state_path }
    }
}

impl Default for RewardConfig {
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

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            grace_days: 1,
            penalty_per_day: 1,
        }
    }
}

impl LadderConfig {
    /// Build and validate the configured rank table.
    pub fn rank_table(&self) -> Result<RankTable, LadderError> {
        if self.ranks.is_empty() {
            return lore::celestial_table();
        }

        let ranks: Vec<RankDefinition> = self
            .ranks
            .iter()
            .map(|r| {
                RankDefinition::new(r.name.clone(), r.sub_levels, r.points_per_sub_level)
                    .with_phase(r.phase_label.clone(), r.theme.clone())
                    .with_synthesis(r.synthesis_text.clone())
                    .with_lore(r.lore.clone())
            })
            .collect();

        let table = RankTable::new(ranks)?;
        for (declared, rank) in self.ranks.iter().zip(table.ranks()) {
            if let Some(threshold) = declared.cumulative_threshold {
                if threshold != rank.cumulative_threshold {
                    return Err(LadderError::ThresholdMismatch {
                        name: rank.name.clone(),
                        declared: threshold,
                        expected: rank.cumulative_threshold,
                    });
                }
            }
        }
        Ok(table)
    }
}

/// Returns `~/.celi/`
pub fn default_celi_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".celi")
}

/// Returns the default config file path: `~/.celi/config.toml`
pub fn default_config_path() -> PathBuf {
    default_celi_dir().join("config.toml")
}

impl CeliConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CeliConfig::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides (CELI_STATE, CELI_LADDER_MODEL, CELI_LOG_LEVEL).
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CELI_STATE") {
            self.storage.state_path = val;
        }
        if let Ok(val) = std::env::var("CELI_LADDER_MODEL") {
            self.ladder.model = val
                .parse()
                .map_err(anyhow::Error::msg)
                .context("invalid CELI_LADDER_MODEL")?;
        }
        if let Ok(val) = std::env::var("CELI_LOG_LEVEL") {
            self.logging.log_level = val;
        }
        Ok(())
    }

    /// Resolve the state file path, expanding `~` if needed.
    pub fn resolved_state_path(&self) -> PathBuf {
        expand_tilde(&self.storage.state_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
