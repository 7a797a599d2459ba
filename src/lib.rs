// cf-offers - Content Fragment to Adobe Target offer export
// Licensed under the Apache License, Version 2.0

//! # cf-offers - Content Fragment to Adobe Target offers
//!
//! Exports Content Fragments selected in a repository console as Adobe Target
//! offers.
//!
//! ## Overview
//!
//! Two cooperating pieces:
//! - **Export action**: a web action that validates its invocation and creates
//!   one offer at `POST {target}/{tenant}/target/offers/json`
//! - **Export modal**: the console dialog that takes the user's selection,
//!   lists unpublished fragments, optionally publishes them and triggers the
//!   export, then reports the result with a toast
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The export action and the export modal
//! - [`server`] - Local HTTP runtime for the export action
//! - [`adapters`] - External integrations (Target, publish/export services, host console)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cf_offers::config::load_config;
//! use cf_offers::core::action::{ActionParams, ExportAction};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("cf-offers.toml")?;
//!     let action = ExportAction::from_config(&config.target)?;
//!
//!     let params = ActionParams::new()
//!         .with_param("tenant", "acme")
//!         .with_header("Authorization", "Bearer eyJ...");
//!     let response = action.run(&params).await;
//!
//!     println!("{}", serde_json::to_string(&response)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`] over [`domain::OffersError`].
//! The action itself never fails: errors become `{statusCode, body}` error
//! responses, and modal flow failures become negative toasts.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod server;
