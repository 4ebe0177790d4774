use clap::Parser;

use breakdown::cli::commands::Cli;
use breakdown::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → open the sheet in the TUI
            let path = handlers::sheet_path(cli.file.as_deref());
            if let Err(e) = breakdown::tui::run(&path) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
