use std::path::Path;

use anyhow::Result;
use clap::Parser;
use frame_icons::cli::{Cli, Commands};
use frame_icons::commands;
use frame_icons::manifest::OUTPUT_DIR;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let out_dir = Path::new(OUTPUT_DIR);

    match cli.command.unwrap_or(Commands::Generate { quiet: false }) {
        Commands::Generate { quiet } => commands::generate::run(out_dir, quiet),
        Commands::Check => commands::check::run(out_dir),
    }
}
