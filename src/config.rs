// ============================================================================
// CONFIG - Compile-time configuration (option_env! + .env via build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub storage: StorageConfig,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3001".to_string(),
            backend_url_production: "https://api.clinic.example".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            storage: StorageConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// localStorage keys shared with the login screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub token_key: String,
    pub user_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
            user_key: "currentUser".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub root_element_id: String,
    pub error_dialog_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            root_element_id: "app".to_string(),
            error_dialog_title: "An Error Occurred".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from variables captured at compile time
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            storage: StorageConfig {
                token_key: option_env!("TOKEN_STORAGE_KEY")
                    .map(str::to_string)
                    .unwrap_or(defaults.storage.token_key),
                user_key: option_env!("USER_STORAGE_KEY")
                    .map(str::to_string)
                    .unwrap_or(defaults.storage.user_key),
            },
            ui: UiConfig {
                root_element_id: option_env!("ROOT_ELEMENT_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.ui.root_element_id),
                error_dialog_title: option_env!("ERROR_DIALOG_TITLE")
                    .map(str::to_string)
                    .unwrap_or(defaults.ui.error_dialog_title),
            },
        }
    }

    /// Backend base URL for the current environment, without trailing slash
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Parsed log level; unknown names fall back to Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:3001");

        config.environment = "production".to_string();
        config.backend_url_production = "https://api.clinic.example/".to_string();
        assert_eq!(config.backend_url(), "https://api.clinic.example");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let mut config = AppConfig::default();
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);

        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
