//! Publish and export collaborators used by the export modal

use crate::domain::{AuthContext, FragmentId, Result};
use async_trait::async_trait;

/// Remote operations the modal triggers for a whole selection
///
/// Each call covers every identifier in one request; there is no per-item
/// fan-out.
#[async_trait]
pub trait FragmentActions: Send + Sync {
    /// Ask the repository to publish the fragments
    async fn trigger_publish(&self, auth: &AuthContext, paths: &[FragmentId]) -> Result<()>;

    /// Ask the export web action to sync the fragments with Target
    async fn trigger_export(&self, auth: &AuthContext, paths: &[FragmentId]) -> Result<()>;
}
