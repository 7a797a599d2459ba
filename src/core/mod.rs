//! Core flows of cf-offers.
//!
//! # Modules
//!
//! - [`action`] - Export web action: input validation and the Target offer call
//! - [`modal`] - Export modal: batch handoff, derived view, publish/export flow
//!
//! # Flow
//!
//! 1. **Select**: the host stashes the selected fragments under a batch id
//! 2. **Load**: the modal takes the batch and lists unpublished fragments
//! 3. **Confirm**: optional publish, then the export trigger for every path
//! 4. **Export**: the web action creates the Target offer for the tenant
//! 5. **Report**: one toast, then the modal closes
//!
//! # Example
//!
//! ```rust,no_run
//! use cf_offers::adapters::{ConsoleHost, HttpFragmentActions};
//! use cf_offers::config::load_config;
//! use cf_offers::core::modal::{ExportModal, SessionStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cf-offers.toml")?;
//! let host = Arc::new(ConsoleHost::new(config.host.clone()));
//! let actions = Arc::new(HttpFragmentActions::new(&config.aem, &config.target)?);
//!
//! let store = SessionStore::new();
//! let batch_id = store.stash(&cf_offers::domain::Batch::default())?;
//!
//! let mut modal = ExportModal::new(host, actions);
//! modal.load(&store, Some(&batch_id))?;
//! let outcome = modal.publish_and_export().await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod modal;
