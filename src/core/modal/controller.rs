//! Export modal controller
//!
//! Drives one modal session: takes the selection handed over by the host,
//! exposes the derived view, and runs exactly one of cancel, export, or
//! publish-then-export before closing.

use super::state::{ExportChoice, ExportOutcome, ModalState};
use super::store::BatchStore;
use super::view::ModalView;
use crate::adapters::aem::FragmentActions;
use crate::adapters::host::{HostConnection, Toast};
use crate::domain::{Batch, BatchError, BatchId, FragmentId, OffersError, Result};
use std::sync::Arc;
use std::time::Instant;

/// What the caller should do with the click that opened an editor link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// The host handled navigation; skip the link's own href
    PreventDefault,
}

/// One export modal session
pub struct ExportModal {
    host: Arc<dyn HostConnection>,
    actions: Arc<dyn FragmentActions>,
    state: ModalState,
    selection: Batch,
}

impl ExportModal {
    /// Create a modal waiting for its batch
    pub fn new(host: Arc<dyn HostConnection>, actions: Arc<dyn FragmentActions>) -> Self {
        Self {
            host,
            actions,
            state: ModalState::Loading,
            selection: Batch::default(),
        }
    }

    /// Create a modal with the selection handed over directly
    pub fn with_batch(
        host: Arc<dyn HostConnection>,
        actions: Arc<dyn FragmentActions>,
        batch: Batch,
    ) -> Self {
        Self {
            host,
            actions,
            state: ModalState::Idle,
            selection: batch,
        }
    }

    /// Take the selection stored under `batch_id`
    ///
    /// The entry is consumed by the read whether or not it parses. On any
    /// failure the error is logged, the selection stays empty and the modal
    /// still moves to `Idle` so the user can cancel.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] wrapped in [`OffersError::Batch`] when the id is
    /// missing, unknown, or its data is malformed, and
    /// [`OffersError::InvalidState`] if the modal already left `Loading`.
    pub fn load(&mut self, store: &dyn BatchStore, batch_id: Option<&BatchId>) -> Result<usize> {
        if self.state != ModalState::Loading {
            return Err(OffersError::InvalidState(format!(
                "batch can only be loaded while loading, modal is {}",
                self.state
            )));
        }
        self.state = ModalState::Idle;

        match read_batch(store, batch_id) {
            Ok(batch) => {
                tracing::info!(
                    fragment_count = batch.len(),
                    unpublished_count = batch.unpublished().count(),
                    "Loaded export batch"
                );
                self.selection = batch;
                Ok(self.selection.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load export batch");
                self.selection = Batch::default();
                Err(e.into())
            }
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn selection(&self) -> &Batch {
        &self.selection
    }

    /// Current render model
    pub fn view(&self) -> ModalView {
        ModalView::render(&self.selection, self.state == ModalState::InProgress)
    }

    /// Dismiss the modal without any remote call
    pub async fn cancel(&mut self) -> Result<()> {
        self.ensure_idle("cancel")?;
        self.state = ModalState::Closed;
        self.host.close_modal().await
    }

    pub async fn export_without_publishing(&mut self) -> Result<ExportOutcome> {
        self.confirm(ExportChoice::ExportOnly).await
    }

    pub async fn publish_and_export(&mut self) -> Result<ExportOutcome> {
        self.confirm(ExportChoice::PublishAndExport).await
    }

    /// Run the chosen flow, report it with one toast and close
    ///
    /// Remote failures do not surface as `Err`; they become
    /// [`ExportOutcome::Failed`] and a negative toast. `Err` is returned only
    /// when the modal is not accepting input.
    pub async fn confirm(&mut self, choice: ExportChoice) -> Result<ExportOutcome> {
        self.ensure_idle(choice.name())?;
        self.state = ModalState::InProgress;

        let outcome = match self.perform(choice).await {
            Ok(()) => ExportOutcome::Succeeded,
            Err(e) => {
                crate::log_error_with_context!(&e, "Export to Target got an error");
                ExportOutcome::Failed
            }
        };

        let toast = match outcome {
            ExportOutcome::Succeeded => Toast::positive(choice.success_message()),
            ExportOutcome::Failed => Toast::negative(choice.failure_message()),
        };
        if let Err(e) = self.host.show_toast(toast).await {
            tracing::warn!(error = %e, "Failed to display toast");
        }

        self.state = ModalState::Closed;
        if let Err(e) = self.host.close_modal().await {
            tracing::warn!(error = %e, "Failed to close modal");
        }

        Ok(outcome)
    }

    /// Ask the host to open the editor for a listed fragment
    pub async fn open_fragment(&self, id: &FragmentId) -> LinkAction {
        if let Err(e) = self.host.open_editor(id).await {
            tracing::warn!(fragment = %id, error = %e, "Failed to open editor");
        }
        LinkAction::PreventDefault
    }

    async fn perform(&self, choice: ExportChoice) -> Result<()> {
        let auth = self.host.auth_context().await?;
        let paths = self.selection.paths();
        tracing::debug!(operation = choice.name(), paths = ?paths, "Starting export flow");

        if choice == ExportChoice::PublishAndExport {
            let started = Instant::now();
            self.actions
                .trigger_publish(&auth, &paths)
                .await
                .inspect_err(|e| tracing::error!(stage = "publish", error = %e, "Stage failed"))?;
            crate::log_remote_call!("publish", paths.len(), started.elapsed());
        }

        let started = Instant::now();
        self.actions
            .trigger_export(&auth, &paths)
            .await
            .inspect_err(|e| tracing::error!(stage = "export", error = %e, "Stage failed"))?;
        crate::log_remote_call!("export", paths.len(), started.elapsed());

        Ok(())
    }

    fn ensure_idle(&self, operation: &str) -> Result<()> {
        if self.state.accepts_input() {
            Ok(())
        } else {
            Err(OffersError::InvalidState(format!(
                "cannot {operation} while modal is {}",
                self.state
            )))
        }
    }
}

fn read_batch(
    store: &dyn BatchStore,
    batch_id: Option<&BatchId>,
) -> std::result::Result<Batch, BatchError> {
    let id = batch_id.ok_or(BatchError::MissingBatchId)?;
    let data = store
        .take(id)
        .ok_or_else(|| BatchError::NotFound(id.to_string()))?;
    Batch::from_json(&data)
}
