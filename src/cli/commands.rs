use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bd", about = concat!("breakdown v", env!("CARGO_PKG_VERSION"), " - a drag-and-drop work breakdown sheet"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Sheet file to operate on (default: sheet.json)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample sheet to start from
    Init(InitArgs),
    /// Print the sheet outline with rollup totals
    Show,
    /// Validate sheet integrity
    Check,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing sheet
    #[arg(long)]
    pub force: bool,
}
