use std::fmt;
use std::sync::OnceLock;

use tracing::warn;

use crate::services::errors::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://lm-backend-api.rycerz.es";
pub const REGISTER_PATH: &str = "/api/teams/register";
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const DEFAULT_USER_AGENT: &str = "team-registration-wizard/0.1";

/// Settings for talking to the registration service.
///
/// WASM builds have no process environment, so values are captured from the
/// build environment (`TEAM_REGISTRATION_API_URL`, `TEAM_REGISTRATION_API_KEY`).
#[derive(Clone, PartialEq)]
pub struct RegistrationConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub user_agent: String,
}

impl RegistrationConfig {
    pub fn new() -> Self {
        Self {
            api_base_url: option_env!("TEAM_REGISTRATION_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            api_key: option_env!("TEAM_REGISTRATION_API_KEY")
                .unwrap_or_default()
                .to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Full URL of the team registration endpoint
    pub fn register_url(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), REGISTER_PATH)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid {
                field: "api_base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::Invalid {
                field: "api_base_url".to_string(),
                reason: format!("'{}' is not an http(s) URL", url),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "user_agent".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self::new()
    }
}

// The API key stays out of logs.
impl fmt::Debug for RegistrationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationConfig")
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<unset>" })
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

static GLOBAL_CONFIG: OnceLock<RegistrationConfig> = OnceLock::new();

/// Get the global configuration, falling back to defaults when the build
/// environment supplied something unusable
pub fn get_global_config() -> RegistrationConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = RegistrationConfig::new();
            let config = match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    warn!("Invalid registration configuration: {}", e);
                    RegistrationConfig::new().with_api_base_url(DEFAULT_API_BASE_URL)
                }
            };
            if !config.has_api_key() {
                warn!("TEAM_REGISTRATION_API_KEY was not set at build time; requests will be sent without a key");
            }
            config
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_url_joins_base_and_path() {
        let config = RegistrationConfig::new().with_api_base_url("https://api.example.com/");
        assert_eq!(config.register_url(), "https://api.example.com/api/teams/register");

        let config = config.with_api_base_url("http://localhost:8000");
        assert_eq!(config.register_url(), "http://localhost:8000/api/teams/register");
    }

    #[test]
    fn test_validate_rejects_bad_base_urls() {
        let config = RegistrationConfig::new().with_api_base_url("");
        assert!(config.validate().is_err());

        let config = RegistrationConfig::new().with_api_base_url("ftp://example.com");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "api_base_url"
        ));

        let config = RegistrationConfig::new().with_api_base_url("https://example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = RegistrationConfig::new().with_api_key("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));

        let config = config.with_api_key("  ");
        assert!(!config.has_api_key());
        assert!(format!("{:?}", config).contains("<unset>"));
    }

    #[test]
    fn test_global_config_is_valid() {
        let config = get_global_config();
        assert!(config.validate().is_ok());
    }
}
