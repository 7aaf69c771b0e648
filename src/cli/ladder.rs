//! CLI `ladder` command: print the configured rank table.

use anyhow::Result;

use celi::progression::Engine;

/// Print every rank with its sub-levels and thresholds.
pub fn ladder(engine: &Engine) -> Result<()> {
    let table = engine.table();

    println!("Rank Ladder ({} model)", engine.model());
    println!("{}", "=".repeat(60));

    let mut phase = "";
    for (index, rank) in table.ranks().iter().enumerate() {
        if !rank.phase_label.is_empty() && rank.phase_label != phase {
            phase = rank.phase_label.as_str();
            println!();
            println!("{} ({})", rank.phase_label, rank.theme);
        }
        println!(
            "  {:<14} {} sub-levels × {:>4}  from {:>6} to {:>6}",
            rank.name,
            rank.sub_level_count,
            rank.points_per_sub_level,
            table.floor_of(index),
            rank.cumulative_threshold,
        );
    }
    println!();
    println!("Total sub-levels:      {}", table.total_steps());
    println!("Ceiling:               {} stardust", table.ceiling());

    Ok(())
}
