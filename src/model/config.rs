use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub drag: DragConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragConfig {
    /// Horizontal cells of drag per nesting level
    #[serde(default = "default_cells_per_level")]
    pub cells_per_level: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        DragConfig {
            cells_per_level: default_cells_per_level(),
        }
    }
}

fn default_cells_per_level() -> f64 {
    4.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color overrides by role name (hex strings like "#FF4444")
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Show the key-hint segment in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
