//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cf-offers.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing cf-offers configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set TARGET_API_KEY");
                println!("     - Set CF_OFFERS_HOST_IMS_TOKEN to drive the modal locally");
                println!("  3. Validate configuration: cf-offers validate-config");
                println!("  4. Serve the action: cf-offers serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# cf-offers Configuration File
# Content Fragment to Adobe Target offer export

[application]
log_level = "info"

[target]
base_url = "https://mc.adobe.io"
api_key = "${TARGET_API_KEY}"

[target.offer]
name = "CF offer name"
workspace = "751852935"

[aem]
export_action_url = "http://localhost:9080/api/v1/web/export"
publish_path = "/bin/replicate.json"

[server]
host = "127.0.0.1"
port = 9080

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# cf-offers Configuration File
# Content Fragment to Adobe Target offer export
#
# This file contains all configuration options with examples and explanations.
# Any value can reference an environment variable as ${VAR_NAME}, and any key
# can be overridden with CF_OFFERS_<SECTION>_<KEY>.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Adobe Target
# ============================================================================
[target]
# Target admin API; offers are created at {base_url}/{tenant}/target/offers/json
base_url = "https://mc.adobe.io"

# API key (integration client id) sent as x-api-key
api_key = "${TARGET_API_KEY}"

# Tenant the modal's export trigger asks the action to use
# tenant = "acme"

# Offer created for every export
[target.offer]
name = "CF offer name"
workspace = "751852935"

[target.offer.content]
content = "The content of the offer"

# ============================================================================
# Publish service and export trigger
# ============================================================================
[aem]
# Deployed export web action
export_action_url = "http://localhost:9080/api/v1/web/export"

# Replication endpoint on the repository host
publish_path = "/bin/replicate.json"

# ============================================================================
# Local web action server (cf-offers serve)
# ============================================================================
[server]
host = "127.0.0.1"
port = 9080

# ============================================================================
# Headless console host (cf-offers modal)
# ============================================================================
[host]
# ims_token = "${IMS_TOKEN}"
# ims_org = "XXXXXXXX@AdobeOrg"
# repo_host = "author-p12345-e67890.adobeaemcloud.com"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON file logging
local_enabled = false

# Log directory
local_path = "logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}
