//! Headless host that serves shared context from configuration
//!
//! Used by the `modal` command to drive the export flow from a terminal:
//! toasts and editor requests are printed, and closing the modal is recorded.

use super::{HostConnection, Toast, ToastVariant};
use crate::config::HostConfig;
use crate::domain::{AuthContext, FragmentId, HostError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

/// Terminal-backed [`HostConnection`]
#[derive(Debug)]
pub struct ConsoleHost {
    config: HostConfig,
    closed: AtomicBool,
}

impl ConsoleHost {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            closed: AtomicBool::new(false),
        }
    }

    /// Whether the modal asked to be closed
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostConnection for ConsoleHost {
    async fn auth_context(&self) -> Result<AuthContext> {
        let token = self
            .config
            .ims_token
            .clone()
            .ok_or_else(|| HostError::MissingContext("auth.imsToken".to_string()))?;
        let org = self
            .config
            .ims_org
            .clone()
            .ok_or_else(|| HostError::MissingContext("auth.imsOrg".to_string()))?;
        let repo_host = self
            .config
            .repo_host
            .clone()
            .ok_or_else(|| HostError::MissingContext("aemHost".to_string()))?;

        AuthContext::new(token, org, repo_host)
            .map_err(|e| HostError::MissingContext(e).into())
    }

    async fn close_modal(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        tracing::debug!("Modal closed");
        Ok(())
    }

    async fn show_toast(&self, toast: Toast) -> Result<()> {
        let marker = match toast.variant {
            ToastVariant::Positive => "✅",
            ToastVariant::Negative => "❌",
        };
        println!("{marker} {}", toast.message);
        Ok(())
    }

    async fn open_editor(&self, id: &FragmentId) -> Result<()> {
        println!("📝 Opening editor for {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use crate::domain::OffersError;

    #[tokio::test]
    async fn test_auth_context_from_config() {
        let host = ConsoleHost::new(HostConfig {
            ims_token: Some(secret_string("tok".to_string())),
            ims_org: Some("org@AdobeOrg".to_string()),
            repo_host: Some("author.example.com".to_string()),
        });

        let auth = host.auth_context().await.unwrap();
        assert_eq!(auth.ims_org, "org@AdobeOrg");
        assert_eq!(auth.repo_host, "author.example.com");
    }

    #[tokio::test]
    async fn test_missing_context_value() {
        let host = ConsoleHost::new(HostConfig::default());
        let err = host.auth_context().await.unwrap_err();
        assert!(matches!(
            err,
            OffersError::Host(HostError::MissingContext(_))
        ));
    }

    #[tokio::test]
    async fn test_close_is_recorded() {
        let host = ConsoleHost::new(HostConfig::default());
        assert!(!host.is_closed());
        host.close_modal().await.unwrap();
        assert!(host.is_closed());
    }
}
