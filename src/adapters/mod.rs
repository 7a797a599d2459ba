//! External integrations
//!
//! - [`target`] - Adobe Target offers API and its auth headers
//! - [`aem`] - repository publish service and the export trigger
//! - [`host`] - host console capabilities used by the export modal
//!
//! Each integration sits behind a trait ([`target::TargetAuthProvider`],
//! [`aem::FragmentActions`], [`host::HostConnection`]) so the action and the
//! modal can be exercised against test doubles.

pub mod aem;
pub mod host;
pub mod target;

pub use aem::{FragmentActions, HttpFragmentActions};
pub use host::{ConsoleHost, HostConnection, Toast, ToastVariant};
pub use target::{ApiKeyAuthProvider, TargetAuthProvider, TargetOffersClient};
