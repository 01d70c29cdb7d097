use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "frame-icons",
    version,
    about = "Generate the film-frame application icon set (PNG, ICO and ICNS)"
)]
pub struct Cli {
    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every icon size and write the PNG, ICO and ICNS files
    Generate {
        /// Suppress per-file progress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Verify an existing icon set against a fresh render
    Check,
}
