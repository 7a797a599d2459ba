//! Configuration management for cf-offers.
//!
//! cf-offers reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CF_OFFERS_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Per-section validation
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [target]
//! base_url = "https://mc.adobe.io"
//! api_key = "${TARGET_API_KEY}"
//!
//! [target.offer]
//! name = "CF offer name"
//! workspace = "751852935"
//!
//! [aem]
//! export_action_url = "https://ns.adobeio-static.net/api/v1/web/cf-offers/export"
//!
//! [server]
//! port = 9080
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cf_offers::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cf-offers.toml")?;
//! println!("Target API: {}", config.target.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_str};
pub use schema::{
    AemConfig, ApplicationConfig, HostConfig, LoggingConfig, OfferConfig, OffersConfig,
    ServerConfig, TargetConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
