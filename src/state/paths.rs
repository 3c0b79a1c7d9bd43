/// Centralized path definitions
///
/// Board and configuration data live in the system app data directory:
/// - Windows: %APPDATA%/tasklane
/// - macOS: ~/Library/Application Support/tasklane
/// - Linux: ~/.local/share/tasklane
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::utils::constants::APP_NAME_LOWERCASE;

/// Get the system app data directory for tasklane
fn get_app_data_dir() -> &'static PathBuf {
    static APP_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
    APP_DATA_DIR.get_or_init(|| {
        use directories::BaseDirs;

        if let Some(base_dirs) = BaseDirs::new() {
            return base_dirs.data_dir().join(APP_NAME_LOWERCASE);
        }

        // Fallback to the working directory if no home directory resolves
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("data")
    })
}

/// Application data file paths
pub mod data {
    use super::get_app_data_dir;
    use std::path::PathBuf;

    /// Application configuration file
    pub fn config_json() -> PathBuf {
        get_app_data_dir().join("config.json")
    }

    /// Serialized board state
    pub fn board_json() -> PathBuf {
        get_app_data_dir().join("board.json")
    }
}
