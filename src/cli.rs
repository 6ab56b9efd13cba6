use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Options-chain ladder analyzer — compute call/put implied-value
/// differences around the ATM row and keep a bounded local history of
/// results.
#[derive(Parser)]
#[command(name = "iv-ladder", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Output the JSON schema for ladder sheet files
    Schema,

    /// Output an example ladder sheet JSON to stdout
    Example,

    /// Compute differences and totals for a sheet file
    Calc {
        /// Path to the sheet JSON file
        file: PathBuf,

        /// Append the result to the local history log
        #[arg(long)]
        save: bool,

        /// File holding the rendered chart snapshot (data URI) to attach
        /// to the saved entry after the numeric fields are committed
        #[arg(long, requires = "save")]
        image: Option<PathBuf>,

        /// Override the store directory (default: ~/.iv-ladder)
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// Add a symmetric pair of blank rows around the ATM row of a sheet
    Grow {
        /// Path to the sheet JSON file
        file: PathBuf,

        /// Output path (default: rewrite the sheet in place)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Inspect and manage the history log
    History {
        #[command(subcommand)]
        command: HistoryCommand,

        /// Override the store directory (default: ~/.iv-ladder)
        #[arg(long, global = true)]
        store_dir: Option<PathBuf>,
    },

    /// Snapshot the working state before navigating away
    Stash {
        /// Path to the sheet JSON file
        file: PathBuf,

        /// Mark the snapshot as captured from the dark theme
        #[arg(long)]
        dark: bool,

        /// Override the store directory (default: ~/.iv-ladder)
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// Consume the stashed working state and print the restored sheet
    Resume {
        /// Override the store directory (default: ~/.iv-ladder)
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List entries, newest first
    List,

    /// Show one entry as JSON
    Show {
        /// Position in the log (0 = newest)
        index: usize,
    },

    /// Print the sheet reconstructed from one entry
    Load {
        /// Position in the log (0 = newest)
        index: usize,
    },

    /// Delete the entry at the given position
    Delete {
        /// Position in the log (0 = newest)
        index: usize,
    },

    /// Delete the entire history log
    Clear {
        /// Confirm deletion (refused without this)
        #[arg(long)]
        yes: bool,
    },
}
