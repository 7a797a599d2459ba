//! Export command implementation
//!
//! Runs the export action once, as the web action runtime would, and prints
//! the normalized `{statusCode, body}` response.

use crate::config::load_config;
use crate::core::action::{ActionParams, ExportAction};
use clap::Args;
use std::fs;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Target tenant (defaults to `target.tenant`)
    #[arg(short, long)]
    pub tenant: Option<String>,

    /// Incoming `Authorization` header value, e.g. "Bearer <token>"
    #[arg(short, long, env = "CF_OFFERS_AUTHORIZATION", hide_env_values = true)]
    pub authorization: Option<String>,

    /// JSON file with extra action parameters
    #[arg(long, value_name = "FILE")]
    pub params_file: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let mut params = match &self.params_file {
            Some(path) => ActionParams::from_value(serde_json::from_str(&fs::read_to_string(path)?)?),
            None => ActionParams::new(),
        };

        if let Some(tenant) = self.tenant.as_ref().or(config.target.tenant.as_ref()) {
            params = params.with_param("tenant", tenant.as_str());
        }
        if let Some(authorization) = &self.authorization {
            params = params.with_header("Authorization", authorization.as_str());
        }

        let action = match ExportAction::from_config(&config.target) {
            Ok(a) => a,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export action");
                eprintln!("Failed to initialize export: {e}");
                return Ok(2);
            }
        };

        let response = action.run(&params).await;
        println!("{}", serde_json::to_string_pretty(&response)?);

        if response.is_success() {
            Ok(0)
        } else {
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_missing_config_file_is_config_error() {
        let args = ExportArgs {
            tenant: Some("acme".to_string()),
            authorization: None,
            params_file: None,
        };

        let code = args.execute("/nonexistent/cf-offers.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_missing_authorization_fails_without_network() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[target]\nbase_url = \"http://127.0.0.1:9\"").unwrap();

        let args = ExportArgs {
            tenant: Some("acme".to_string()),
            authorization: None,
            params_file: None,
        };

        let code = args
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 1);
    }
}
