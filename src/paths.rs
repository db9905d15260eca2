use std::path::PathBuf;
use std::sync::OnceLock;

/// XDG-compliant directory layout for pomoring.
///
/// On Linux:
///   Config:  $XDG_CONFIG_HOME/pomoring  (~/.config/pomoring)
///   Data:    $XDG_DATA_HOME/pomoring    (~/.local/share/pomoring)
///
/// On macOS both live under ~/Library/Application Support/pomoring.
/// Resolved once and cached.

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Root data directory: $XDG_DATA_HOME/pomoring
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pomoring")
    })
}

/// Root config directory: $XDG_CONFIG_HOME/pomoring
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pomoring")
    })
}

/// Config file path: <config_dir>/config.toml
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Log file path: <data_dir>/pomoring.log
pub fn log_file() -> PathBuf {
    data_dir().join("pomoring.log")
}
