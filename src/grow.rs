use std::path::Path;

use anyhow::{Context, Result};

use crate::calc;

/// CLI entry point for the `grow` subcommand: insert one blank row on each
/// side of the ATM row and rewrite the sheet.
pub fn run(file: &Path, output: Option<&Path>) -> Result<()> {
    let mut sheet = calc::load_sheet(file)?;
    sheet.grow();

    let target = output.unwrap_or(file);
    let json = serde_json::to_string_pretty(&sheet)?;
    std::fs::write(target, json).with_context(|| format!("writing {}", target.display()))?;

    println!(
        "Sheet now has {} rows (ATM at index {}).",
        sheet.rows.len(),
        sheet.layout().atm_index
    );
    Ok(())
}
