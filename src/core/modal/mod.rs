//! Export modal
//!
//! Headless controller for the "Export to Adobe Target Offers" dialog. The
//! host stashes the user's selection in a [`BatchStore`] and opens the modal
//! with the batch id; the modal takes the batch, shows which fragments are not
//! yet published and runs the chosen flow:
//!
//! - **Cancel** closes the modal
//! - **Export (no publishing)** triggers the export for every selected path
//! - **Publish and Export** triggers publish, then export, for the same paths
//!
//! Either confirmation ends with one toast and the modal closing.

pub mod controller;
pub mod state;
pub mod store;
pub mod view;

pub use controller::{ExportModal, LinkAction};
pub use state::{ExportChoice, ExportOutcome, ModalState};
pub use store::{BatchStore, SessionStore};
pub use view::{editor_href, ModalView, UnpublishedLink, PUBLISH_WARNING, WORKSPACES};
