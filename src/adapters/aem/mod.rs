//! Repository publish service and export trigger adapter

pub mod actions;
pub mod http;

pub use actions::FragmentActions;
pub use http::{HttpFragmentActions, AEM_HOST_HEADER, IMS_ORG_HEADER};
