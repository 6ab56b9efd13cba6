use std::path::Path;

use anyhow::{Context, Result};

use crate::engine;
use crate::model::{Sheet, Zone};
use crate::store::{FileStorage, HistoryStore};

/// Load a ladder sheet from a JSON file.
pub fn load_sheet(path: &Path) -> Result<Sheet> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let sheet: Sheet =
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
    Ok(sheet)
}

/// CLI entry point for the `calc` subcommand.
pub fn run(file: &Path, save: bool, image: Option<&Path>, store_dir: Option<&Path>) -> Result<()> {
    let sheet = load_sheet(file)?;
    let result = engine::compute(&sheet);

    if !sheet.symbol.is_empty() {
        println!("Symbol: {}", sheet.symbol);
    }
    println!(
        "{:>12}  {:>12}  {:>12}  {:>8}  Zone",
        "Strike", "Put", "Call", "Diff"
    );
    for (input, row) in sheet.rows.iter().zip(&result.rows) {
        let zone = match row.zone {
            Zone::AboveAtm => "above",
            Zone::Atm => "ATM",
            Zone::BelowAtm => "below",
        };
        println!(
            "{:>12}  {:>12}  {:>12}  {:>8}  {}",
            or_dash(&input.strike),
            or_dash(&input.put_iv),
            or_dash(&input.call_iv),
            row.diff_text(),
            zone
        );
    }
    println!();
    println!(
        "Above ATM = {} | Below ATM = {} | Result = {}",
        signed(result.sum_above_atm),
        signed(result.sum_below_atm),
        signed(result.net_difference)
    );

    if save {
        if !result.has_valid_data {
            println!("No complete rows; nothing to save.");
            return Ok(());
        }

        let store = HistoryStore::new(FileStorage::new(store_dir));
        let entry = result.to_history_entry(&sheet.symbol);
        let date = entry.date.clone();
        store.append(entry).context("appending history entry")?;
        println!("Saved history entry {date}.");

        // Snapshot capture is a collaborator concern; a pre-rendered blob
        // is attached after the numeric entry is committed.
        if let Some(path) = image {
            let blob = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            store
                .attach_image(&date, blob.trim())
                .context("attaching chart snapshot")?;
            println!("Attached chart snapshot.");
        }
    }

    Ok(())
}

fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() { "-" } else { text }
}

fn signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}
