use std::sync::Arc;

use resumate_service::AnalysisService;
use resumate_types::{AnalysisResult, Role, SelectedFile};
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::FormError;
use crate::state::{Action, FormState};
use crate::store::FormStore;

/// Collects the form inputs and drives the analysis request
pub struct FormClient {
    store: FormStore,
    service: Arc<dyn AnalysisService>,
}

impl FormClient {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self {
            store: FormStore::new(),
            service,
        }
    }

    pub fn state(&self) -> FormState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.store.subscribe()
    }

    pub fn set_file(&self, file: Option<SelectedFile>) {
        self.store.dispatch(Action::SetFile(file));
    }

    pub fn set_requirements(&self, text: impl Into<String>) {
        self.store.dispatch(Action::SetRequirements(text.into()));
    }

    pub fn set_role(&self, role: Role) {
        self.store.dispatch(Action::SetRole(role));
    }

    /// Sends the current form once.
    ///
    /// Validation failures return before any network activity. Whatever
    /// happens afterwards, the form is no longer submitting when this returns
    /// or is dropped.
    pub async fn submit(&self) -> Result<AnalysisResult, FormError> {
        let id = Uuid::new_v4();

        async move {
            let (guard, request) = self.store.begin_submission().inspect_err(|e| {
                tracing::warn!("Submission rejected: {e}");
            })?;

            tracing::info!(
                file = %request.file.file_name,
                bytes = request.file.len(),
                role = %request.role,
                "Sending resume to {}",
                self.service.endpoint()
            );

            match self.service.analyze(request).await {
                Ok(result) => {
                    tracing::info!(
                        best_match = %result.best_match,
                        scores = result.scores.len(),
                        "Analysis finished"
                    );
                    guard.resolve(result.clone());
                    Ok(result)
                }
                Err(e) => {
                    tracing::error!(kind = e.kind(), "Analysis failed: {e}");
                    guard.fail();
                    Err(e.into())
                }
            }
        }
        .instrument(tracing::info_span!("submit", %id))
        .await
    }
}
