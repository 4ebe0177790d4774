use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Settings;
use crate::model::sheet::Sheet;

/// Error type for sheet and settings io
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid sheet: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
}

/// Load a sheet document from a JSON file. This is the one seeding point —
/// drag mutations afterwards live in memory only.
pub fn load_sheet(path: &Path) -> Result<Sheet, SheetError> {
    let text = fs::read_to_string(path).map_err(|e| SheetError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let sheet: Sheet = serde_json::from_str(&text)?;
    Ok(sheet)
}

/// Write a sheet document as pretty-printed JSON. Used by `bd init`.
pub fn write_sheet(path: &Path, sheet: &Sheet) -> Result<(), SheetError> {
    let text = serde_json::to_string_pretty(sheet)?;
    fs::write(path, text).map_err(|e| SheetError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load settings from `settings.toml` next to the sheet. Defaults apply
/// when the file does not exist.
pub fn load_settings(sheet_path: &Path) -> Result<Settings, SheetError> {
    let path = settings_path(sheet_path);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| SheetError::Read {
        path: path.clone(),
        source: e,
    })?;
    let settings: Settings = toml::from_str(&text)?;
    Ok(settings)
}

/// The settings file lives next to the sheet it configures.
pub fn settings_path(sheet_path: &Path) -> PathBuf {
    sheet_path.with_file_name("settings.toml")
}
