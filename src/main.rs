mod cli;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use celi::config::CeliConfig;
use celi::progression::Engine;

#[derive(Parser)]
#[command(name = "celi", version, about = "Rank ladder and streak engine for the Celi journal")]
struct Cli {
    /// Config file (defaults to ~/.celi/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the configured rank ladder
    Ladder,
    /// Resolve a stardust total to a rank
    Resolve {
        points: u64,
        /// Current sub-level step (carry-over model only)
        #[arg(long)]
        rank_index: Option<usize>,
    },
    /// Show the stored progression
    Status {
        #[arg(long)]
        state: Option<PathBuf>,
        /// Evaluate as of this day (YYYY-MM-DD, defaults to today in UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Apply one journal entry to the stored progression
    Apply {
        /// Entry text
        #[arg(long)]
        text: String,
        #[arg(long)]
        state: Option<PathBuf>,
        /// Evaluate as of this day (YYYY-MM-DD, defaults to today in UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the outcome without writing the state file
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the JSON Schema of the persisted progression record
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CeliConfig::load_from(path)?,
        None => CeliConfig::load()?,
    };

    // Log to stderr so stdout stays clean for JSON output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Fail fast on a malformed rank table.
    let engine = Engine::from_config(&config).context("invalid rank ladder configuration")?;

    let state_path = |flag: Option<PathBuf>| {
        flag.unwrap_or_else(|| config.resolved_state_path())
    };

    match cli.command {
        Command::Ladder => cli::ladder::ladder(&engine)?,
        Command::Resolve { points, rank_index } => {
            cli::resolve::resolve(&engine, points, rank_index)?;
        }
        Command::Status { state, today } => {
            cli::status::status(&engine, &state_path(state), cli::today_or(today))?;
        }
        Command::Apply {
            text,
            state,
            today,
            dry_run,
        } => {
            cli::apply::apply(
                &engine,
                &state_path(state),
                cli::today_or(today),
                &text,
                dry_run,
            )?;
        }
        Command::Schema => cli::schema::schema()?,
    }

    Ok(())
}
