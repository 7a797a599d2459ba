//! Capabilities a host console exposes to the export modal

use crate::domain::{AuthContext, FragmentId, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Toast styling understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Positive,
    Negative,
}

impl fmt::Display for ToastVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastVariant::Positive => write!(f, "positive"),
            ToastVariant::Negative => write!(f, "negative"),
        }
    }
}

/// Notification shown by the host after the modal closes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub variant: ToastVariant,
    pub message: String,
}

impl Toast {
    pub fn positive(message: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Positive,
            message: message.into(),
        }
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Negative,
            message: message.into(),
        }
    }
}

/// Guest-side view of the host console connection
///
/// Injected into the modal at construction so tests can substitute a double.
#[async_trait]
pub trait HostConnection: Send + Sync {
    /// Read the `auth` and `aemHost` shared context values
    async fn auth_context(&self) -> Result<AuthContext>;

    /// Dismiss the modal
    async fn close_modal(&self) -> Result<()>;

    /// Show a toast notification
    async fn show_toast(&self, toast: Toast) -> Result<()>;

    /// Open the host's content editor for a fragment
    async fn open_editor(&self, id: &FragmentId) -> Result<()>;
}
