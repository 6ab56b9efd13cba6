use schemars::schema_for;

use crate::model::Sheet;

/// Generate and print the JSON Schema for ladder sheet files.
pub fn run() -> anyhow::Result<()> {
    let schema = schema_for!(Sheet);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}
