//! Export web action
//!
//! One invocation validates its inputs, derives outbound auth headers and
//! issues a single offer creation call:
//!
//! | Outcome                          | Response                                   |
//! |----------------------------------|--------------------------------------------|
//! | missing `Authorization`/`tenant` | 400, no outbound call                      |
//! | auth derivation fails            | 500 `Server error: ...`                    |
//! | Target answers non-2xx           | 500 with the upstream status and body      |
//! | Target answers 2xx               | `{statusCode: 200, body: "{}"}`            |
//!
//! ```rust,no_run
//! use cf_offers::config::TargetConfig;
//! use cf_offers::core::action::{ActionParams, ExportAction};
//!
//! # async fn example() -> cf_offers::domain::Result<()> {
//! let action = ExportAction::from_config(&TargetConfig::default())?;
//! let params = ActionParams::new()
//!     .with_param("tenant", "acme")
//!     .with_header("Authorization", "Bearer eyJ...");
//! let response = action.run(&params).await;
//! println!("{}", response.status_code);
//! # Ok(())
//! # }
//! ```

pub mod handler;
pub mod params;
pub mod response;

pub use handler::{ExportAction, REQUIRED_HEADERS, REQUIRED_PARAMS};
pub use params::{check_missing_request_inputs, string_parameters, ActionParams};
pub use response::{error_response, ActionResponse};
