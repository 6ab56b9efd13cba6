use std::path::Path;

use anyhow::Result;

use crate::model::Sheet;
use crate::store::{FileStorage, SessionBridge};

/// CLI entry point for the `resume` subcommand: consume the stashed
/// working state and print the restored sheet. The slot is cleared even
/// when present, so a second resume starts from defaults.
pub fn run(store_dir: Option<&Path>) -> Result<()> {
    let bridge = SessionBridge::new(FileStorage::new(store_dir));

    let Some(state) = bridge.restore() else {
        println!("No stashed working state.");
        return Ok(());
    };

    let mut sheet = Sheet::default();
    sheet.apply_working_state(&state);
    println!("{}", serde_json::to_string_pretty(&sheet)?);
    Ok(())
}
