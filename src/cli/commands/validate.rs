//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the cf-offers configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Target API: {}", config.target.base_url);
                println!(
                    "  Target API Key: {}",
                    if config.target.api_key.is_some() { "set" } else { "not set" }
                );
                println!(
                    "  Target Tenant: {}",
                    config.target.tenant.as_deref().unwrap_or("(from request)")
                );
                println!("  Offer Name: {}", config.target.offer.name);
                println!("  Offer Workspace: {}", config.target.offer.workspace);
                println!("  Export Action: {}", config.aem.export_action_url);
                println!("  Publish Path: {}", config.aem.publish_path);
                println!("  Server: {}:{}", config.server.host, config.server.port);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_valid_config_returns_zero() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[target]\ntenant = \"acme\"").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_invalid_config_returns_two() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 0").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
