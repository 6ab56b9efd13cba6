use std::path::Path;

use anyhow::{Context, Result};

use crate::calc;
use crate::engine;
use crate::model::WorkingState;
use crate::store::{FileStorage, SessionBridge};

/// CLI entry point for the `stash` subcommand: compute and persist the
/// working state before a view-replacing navigation. Overwrites any
/// previously stashed snapshot.
pub fn run(file: &Path, dark: bool, store_dir: Option<&Path>) -> Result<()> {
    let sheet = calc::load_sheet(file)?;
    let result = engine::compute(&sheet);
    let state = WorkingState::capture(&sheet, &result, dark);

    let bridge = SessionBridge::new(FileStorage::new(store_dir));
    bridge.save(&state).context("saving working state")?;

    println!("Stashed working state ({} rows).", state.row_count);
    Ok(())
}
