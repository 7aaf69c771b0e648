//! CLI `schema` command: JSON Schema of the persisted progression record.

use anyhow::Result;

use celi::progression::ProgressionState;

pub fn schema() -> Result<()> {
    let schema = schemars::schema_for!(ProgressionState);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
