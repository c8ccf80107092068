use serde::{Deserialize, Serialize};

/// Application settings from `Qzene Settings.yaml`, overridable through
/// `QZENE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Recipe catalog file. The bundled dataset is used when unset.
    pub catalog_path: Option<String>,

    pub log_dir: String,

    pub log_prefix: String,

    pub debug_mode: bool,

    /// Mirror log output to the console.
    pub console_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_dir: default_log_dir(),
            log_prefix: default_log_prefix(),
            debug_mode: false,
            console_logging: false,
        }
    }
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_prefix() -> String {
    "qzene".to_string()
}
