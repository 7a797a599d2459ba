//! Domain models and types for cf-offers.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`FragmentId`], [`BatchId`], [`Tenant`])
//! - **Selection models** ([`ContentFragmentRef`], [`Batch`], [`FragmentStatus`])
//! - **Host credentials** ([`AuthContext`]) and the per-invocation [`ExportRequest`]
//! - **Error types** ([`OffersError`], [`TargetError`], [`AemError`], [`HostError`], [`BatchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Parsing a batch
//!
//! ```rust
//! use cf_offers::domain::Batch;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let batch = Batch::from_json(
//!     r#"[{"id":"/content/a","title":"A","status":"Published"},
//!        {"id":"/content/b","title":"B","status":"Draft"}]"#,
//! )?;
//! assert_eq!(batch.unpublished().count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod errors;
pub mod fragment;
pub mod ids;
pub mod request;
pub mod result;

// Re-export commonly used types for convenience
pub use auth::AuthContext;
pub use errors::{AemError, BatchError, HostError, OffersError, TargetError};
pub use fragment::{Batch, ContentFragmentRef, FragmentStatus};
pub use ids::{BatchId, FragmentId, Tenant};
pub use request::ExportRequest;
pub use result::Result;
