use crate::state::paths;
use crate::utils::data;
use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };
use strum::Display;

/// Color scheme applied to the whole window via the `data-theme` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    // Metadata
    pub version: String,
    pub last_updated: DateTime<Utc>,
    // UI settings
    pub theme: Theme,
    // Board settings
    pub autosave: bool, // Persist the board after every card creation, not just on Save
}

impl AppConfig {
    pub fn load() -> Self {
        let config_path = paths::data::config_json();

        // Load config from file, falling back to defaults if it doesn't exist or is invalid
        match data::load_json_from_file::<AppConfig>(&config_path) {
            Ok(config) => config,
            Err(e) => {
                crate::debug_eprint!("⚠️ Failed to load config file: {}. Using defaults.", e);
                let default_config = Self::default();
                let _ = default_config.save();
                default_config
            }
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let config_path = paths::data::config_json();
        data::save_json_to_file(self, &config_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: crate::utils::constants::APP_VERSION.to_string(),
            last_updated: Utc::now(),
            theme: Theme::Light,
            autosave: false, // Default to explicit saves via the Save button
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_flips_between_the_two_schemes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn theme_serializes_to_lowercase_attribute_values() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
