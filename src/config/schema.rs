//! Configuration schema types
//!
//! Maps the sections of `cf-offers.toml` onto typed structs with per-section
//! validation.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main cf-offers configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OffersConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Adobe Target offers API
    #[serde(default)]
    pub target: TargetConfig,

    /// Repository publish service and export trigger
    #[serde(default)]
    pub aem: AemConfig,

    /// Web action server
    #[serde(default)]
    pub server: ServerConfig,

    /// Shared context for the headless console host
    #[serde(default)]
    pub host: HostConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl OffersConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.target.validate()?;
        self.aem.validate()?;
        self.server.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Adobe Target offers API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Base URL of the Target admin API; the tenant is appended as a path segment
    #[serde(default = "default_target_base_url")]
    pub base_url: String,

    /// API key (client id) sent as `x-api-key`
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Tenant the export trigger asks the web action to publish offers to
    #[serde(default)]
    pub tenant: Option<String>,

    /// Offer payload sent with every export
    #[serde(default)]
    pub offer: OfferConfig,
}

impl TargetConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("target.base_url must start with http:// or https://".to_string());
        }

        if let Some(key) = &self.api_key {
            if key.expose_secret().is_empty() {
                return Err("target.api_key cannot be empty when set".to_string());
            }
        }

        self.offer.validate()
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_target_base_url(),
            api_key: None,
            tenant: None,
            offer: OfferConfig::default(),
        }
    }
}

/// Fixed offer fields posted to Target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferConfig {
    /// Offer name
    #[serde(default = "default_offer_name")]
    pub name: String,

    /// Offer content object
    #[serde(default = "default_offer_content")]
    pub content: serde_json::Value,

    /// Target workspace identifier
    #[serde(default = "default_offer_workspace")]
    pub workspace: String,
}

impl OfferConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("target.offer.name cannot be empty".to_string());
        }
        if !self.content.is_object() {
            return Err("target.offer.content must be a table".to_string());
        }
        if self.workspace.trim().is_empty() {
            return Err("target.offer.workspace cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for OfferConfig {
    fn default() -> Self {
        Self {
            name: default_offer_name(),
            content: default_offer_content(),
            workspace: default_offer_workspace(),
        }
    }
}

/// Publish service and export trigger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AemConfig {
    /// URL of the deployed export web action
    #[serde(default = "default_export_action_url")]
    pub export_action_url: String,

    /// Replication endpoint path on the repository host
    #[serde(default = "default_publish_path")]
    pub publish_path: String,
}

impl AemConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.export_action_url.starts_with("http://")
            && !self.export_action_url.starts_with("https://")
        {
            return Err("aem.export_action_url must start with http:// or https://".to_string());
        }
        if !self.publish_path.starts_with('/') {
            return Err("aem.publish_path must start with '/'".to_string());
        }
        Ok(())
    }
}

impl Default for AemConfig {
    fn default() -> Self {
        Self {
            export_action_url: default_export_action_url(),
            publish_path: default_publish_path(),
        }
    }
}

/// Web action server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("server.host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("server.port must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

/// Shared context values served by the headless console host
///
/// Only the `modal` command reads these; each field is checked when the host
/// answers an auth request, not at load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// IMS access token
    #[serde(default)]
    pub ims_token: Option<SecretString>,

    /// IMS organization id
    #[serde(default)]
    pub ims_org: Option<String>,

    /// Repository host
    #[serde(default)]
    pub repo_host: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_target_base_url() -> String {
    "https://mc.adobe.io".to_string()
}

fn default_offer_name() -> String {
    "CF offer name".to_string()
}

fn default_offer_content() -> serde_json::Value {
    serde_json::json!({ "content": "The content of the offer" })
}

fn default_offer_workspace() -> String {
    "751852935".to_string()
}

fn default_export_action_url() -> String {
    "http://localhost:9080/api/v1/web/export".to_string()
}

fn default_publish_path() -> String {
    "/bin/replicate.json".to_string()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    9080
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use test_case::test_case;

    #[test]
    fn test_default_values() {
        let config = OffersConfig::default();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.target.base_url, "https://mc.adobe.io");
        assert_eq!(config.target.offer.name, "CF offer name");
        assert_eq!(config.target.offer.workspace, "751852935");
        assert_eq!(
            config.target.offer.content,
            serde_json::json!({"content": "The content of the offer"})
        );
        assert_eq!(config.server.port, 9080);
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: OffersConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test_case("trace", true)]
    #[test_case("error", true)]
    #[test_case("verbose", false)]
    #[test_case("", false)]
    fn test_application_log_level(level: &str, valid: bool) {
        let config = ApplicationConfig {
            log_level: level.to_string(),
        };
        assert_eq!(config.validate().is_ok(), valid);
    }

    #[test]
    fn test_target_config_validation() {
        let mut config = TargetConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "mc.adobe.io".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://mc.adobe.io".to_string();
        config.api_key = Some(secret_string(String::new()));
        assert!(config.validate().is_err());

        config.api_key = Some(secret_string("client-id".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_offer_content_must_be_object() {
        let mut offer = OfferConfig::default();
        offer.content = serde_json::json!("plain string");
        assert!(offer.validate().is_err());
    }

    #[test]
    fn test_aem_config_validation() {
        let mut config = AemConfig::default();
        assert!(config.validate().is_ok());

        config.publish_path = "bin/replicate.json".to_string();
        assert!(config.validate().is_err());

        config.publish_path = "/bin/replicate.json".to_string();
        config.export_action_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_rotation_validation() {
        let mut config = LoggingConfig::default();
        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_offer_table_from_toml() {
        let toml_content = r#"
[target.offer]
name = "Spring hero"
workspace = "123"

[target.offer.content]
content = "<p>Hello</p>"
"#;
        let config: OffersConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.target.offer.name, "Spring hero");
        assert_eq!(
            config.target.offer.content,
            serde_json::json!({"content": "<p>Hello</p>"})
        );
    }
}
