use clap::Parser;

use iv_ladder::cli::{Cli, Command};
use iv_ladder::{calc, example, grow, history_cmd, resume, schema, stash};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Schema => schema::run(),
        Command::Example => example::run(),
        Command::Calc {
            file,
            save,
            image,
            store_dir,
        } => calc::run(&file, save, image.as_deref(), store_dir.as_deref()),
        Command::Grow { file, output } => grow::run(&file, output.as_deref()),
        Command::History { command, store_dir } => history_cmd::run(command, store_dir.as_deref()),
        Command::Stash {
            file,
            dark,
            store_dir,
        } => stash::run(&file, dark, store_dir.as_deref()),
        Command::Resume { store_dir } => resume::run(store_dir.as_deref()),
    }
}
