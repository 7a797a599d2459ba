//! Modal lifecycle states

use serde::Serialize;
use std::fmt;

/// Where the export modal is in its flow
///
/// `Loading → Idle → InProgress → Closed`; `Cancel` goes straight from `Idle`
/// to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalState {
    /// Awaiting the batch handoff
    Loading,
    /// Batch loaded, awaiting the user's choice
    Idle,
    /// Publish and/or export underway; input is rejected
    InProgress,
    /// Dismissed through the host
    Closed,
}

impl ModalState {
    /// Whether the user may pick an action
    pub fn accepts_input(&self) -> bool {
        matches!(self, ModalState::Idle)
    }
}

impl fmt::Display for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalState::Loading => write!(f, "loading"),
            ModalState::Idle => write!(f, "idle"),
            ModalState::InProgress => write!(f, "in_progress"),
            ModalState::Closed => write!(f, "closed"),
        }
    }
}

/// How an export choice ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportOutcome {
    Succeeded,
    Failed,
}

/// The two ways to confirm the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    ExportOnly,
    PublishAndExport,
}

impl ExportChoice {
    pub fn name(&self) -> &'static str {
        match self {
            ExportChoice::ExportOnly => "export",
            ExportChoice::PublishAndExport => "publish_and_export",
        }
    }

    pub(crate) fn success_message(&self) -> &'static str {
        match self {
            ExportChoice::ExportOnly => {
                "Selected content fragment(s) are successfully scheduled to sync with Adobe Target."
            }
            ExportChoice::PublishAndExport => {
                "Selected content fragment(s) are successfully scheduled to be published and synced with Adobe Target."
            }
        }
    }

    pub(crate) fn failure_message(&self) -> &'static str {
        match self {
            ExportChoice::ExportOnly => "There was an error while exporting Content Fragment(s)",
            ExportChoice::PublishAndExport => {
                "There was an error while publishing and exporting Content Fragment(s)"
            }
        }
    }
}
