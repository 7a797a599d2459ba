//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::OffersConfig;
use super::secret::secret_string;
use crate::domain::errors::OffersError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "CF_OFFERS_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into OffersConfig
/// 4. Applies environment variable overrides (CF_OFFERS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use cf_offers::config::loader::load_config;
///
/// let config = load_config("cf-offers.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<OffersConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OffersError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        OffersError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Loads configuration from TOML text, with the same steps as [`load_config`]
pub fn load_config_str(contents: &str) -> Result<OffersConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: OffersConfig = toml::from_str(&contents)
        .map_err(|e| OffersError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        OffersError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(OffersError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Applies environment variable overrides using the CF_OFFERS_* prefix
///
/// Environment variables follow the pattern: CF_OFFERS_<SECTION>_<KEY>
/// For example: CF_OFFERS_TARGET_API_KEY, CF_OFFERS_SERVER_PORT
fn apply_env_overrides(config: &mut OffersConfig) {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("TARGET_BASE_URL") {
        config.target.base_url = val;
    }
    if let Some(val) = env_override("TARGET_API_KEY") {
        config.target.api_key = Some(secret_string(val));
    }
    if let Some(val) = env_override("TARGET_TENANT") {
        config.target.tenant = Some(val);
    }
    if let Some(val) = env_override("TARGET_OFFER_WORKSPACE") {
        config.target.offer.workspace = val;
    }

    if let Some(val) = env_override("AEM_EXPORT_ACTION_URL") {
        config.aem.export_action_url = val;
    }
    if let Some(val) = env_override("AEM_PUBLISH_PATH") {
        config.aem.publish_path = val;
    }

    if let Some(val) = env_override("SERVER_HOST") {
        config.server.host = val;
    }
    if let Some(val) = env_override("SERVER_PORT") {
        if let Ok(port) = val.parse() {
            config.server.port = port;
        }
    }

    if let Some(val) = env_override("HOST_IMS_TOKEN") {
        config.host.ims_token = Some(secret_string(val));
    }
    if let Some(val) = env_override("HOST_IMS_ORG") {
        config.host.ims_org = Some(val);
    }
    if let Some(val) = env_override("HOST_REPO_HOST") {
        config.host.repo_host = Some(val);
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("CF_OFFERS_LOADER_TEST_VAR", "test_value");
        let input = "api_key = \"${CF_OFFERS_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_key = \"test_value\"\n");
        std::env::remove_var("CF_OFFERS_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("CF_OFFERS_LOADER_MISSING_VAR");
        let input = "api_key = \"${CF_OFFERS_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("CF_OFFERS_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# api_key = \"${CF_OFFERS_LOADER_COMMENTED}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-cf-offers.toml");
        assert!(matches!(result, Err(OffersError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[target]
base_url = "https://mc.adobe.io"
api_key = "client-id"

[aem]
export_action_url = "https://ns.adobeio-static.net/api/v1/web/cf-offers/export"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert!(config.target.api_key.is_some());
        assert_eq!(config.aem.publish_path, "/bin/replicate.json");
    }

    #[test]
    fn test_load_config_invalid_section() {
        let err = load_config_str("[application]\nlog_level = \"loud\"\n").unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }
}
