use std::path::{Path, PathBuf};

use crate::cli::commands::{Cli, Commands, InitArgs};
use crate::cli::output::{outline_lines, sheet_json};
use crate::io::sheet_io;
use crate::model::sheet::Sheet;
use crate::ops::check::check_sheet;

pub const DEFAULT_SHEET_FILE: &str = "sheet.json";

/// Resolve the sheet path from the global `--file` flag.
pub fn sheet_path(cli_file: Option<&str>) -> PathBuf {
    PathBuf::from(cli_file.unwrap_or(DEFAULT_SHEET_FILE))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let path = sheet_path(cli.file.as_deref());

    match cli.command {
        // No subcommand launches the TUI; main handles that before dispatch
        None => Ok(()),
        Some(Commands::Init(args)) => cmd_init(&path, args),
        Some(Commands::Show) => cmd_show(&path, json),
        Some(Commands::Check) => cmd_check(&path, json),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub fn cmd_init(path: &Path, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    sheet_io::write_sheet(path, &Sheet::sample())?;
    println!("wrote {}", path.display());
    Ok(())
}

pub fn cmd_show(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = sheet_io::load_sheet(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&sheet_json(&sheet))?);
    } else {
        println!("{}", sheet.title);
        for line in outline_lines(&sheet.tasks) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn cmd_check(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = sheet_io::load_sheet(path)?;
    let result = check_sheet(&sheet.tasks);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for error in &result.errors {
            println!("error: {}", error);
        }
        for warning in &result.warnings {
            println!("warning: {}", warning);
        }
        if result.valid && result.warnings.is_empty() {
            println!("ok");
        }
    }

    if !result.valid {
        return Err("sheet is not valid".into());
    }
    Ok(())
}
