use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::HistoryCommand;
use crate::model::Sheet;
use crate::store::{FileStorage, HistoryStore};

/// CLI entry point for the `history` subcommands.
pub fn run(command: HistoryCommand, store_dir: Option<&Path>) -> Result<()> {
    let store = HistoryStore::new(FileStorage::new(store_dir));

    match command {
        HistoryCommand::List => {
            let entries = store.list();
            if entries.is_empty() {
                println!("No history found.");
                return Ok(());
            }
            for (i, entry) in entries.iter().enumerate() {
                let symbol = if entry.symbol_name.is_empty() {
                    "-"
                } else {
                    &entry.symbol_name
                };
                let strikes = entry
                    .strike_prices
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let snapshot = if entry.img.is_some() {
                    "snapshot"
                } else {
                    "no snapshot"
                };
                println!("{i:>3}  {}  {symbol:<10}  [{strikes}]  ({snapshot})", entry.date);
            }
        }
        HistoryCommand::Show { index } => match store.get(index) {
            Some(entry) => println!("{}", serde_json::to_string_pretty(&entry)?),
            None => println!("No history entry at index {index}."),
        },
        HistoryCommand::Load { index } => match store.get(index) {
            Some(entry) => {
                let mut sheet = Sheet::default();
                sheet.apply_history_entry(&entry);
                println!("{}", serde_json::to_string_pretty(&sheet)?);
            }
            None => println!("No history entry at index {index}."),
        },
        HistoryCommand::Delete { index } => {
            store.delete_at(index).context("deleting history entry")?;
            println!("Deleted history entry {index} (if present).");
        }
        HistoryCommand::Clear { yes } => {
            if !yes {
                eprintln!("Refusing to delete all history without --yes.");
                std::process::exit(1);
            }
            store.clear().context("clearing history")?;
            println!("History cleared.");
        }
    }

    Ok(())
}
