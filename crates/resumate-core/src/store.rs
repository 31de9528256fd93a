use resumate_service::AnalysisRequest;
use resumate_types::AnalysisResult;
use tokio::sync::watch;

use crate::error::FormError;
use crate::state::{Action, FormState, reduce};

/// Holds the current form state and notifies subscribers of every change
pub struct FormStore {
    tx: watch::Sender<FormState>,
}

impl FormStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(FormState::default());
        Self { tx }
    }

    pub fn snapshot(&self) -> FormState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.tx.subscribe()
    }

    pub fn dispatch(&self, action: Action) {
        self.tx.send_modify(|state| *state = reduce(state, action));
    }

    /// Validates and enters `Submitting` in one step, so two callers can't both pass.
    pub fn begin_submission(&self) -> Result<(SubmissionGuard<'_>, AnalysisRequest), FormError> {
        let mut outcome = Err(FormError::AlreadySubmitting);

        self.tx.send_if_modified(|state| match state.validate() {
            Ok(request) => {
                *state = reduce(state, Action::SubmitStarted);
                outcome = Ok(request);
                true
            }
            Err(e) => {
                outcome = Err(e);
                false
            }
        });

        let request = outcome?;
        Ok((
            SubmissionGuard {
                store: self,
                settled: false,
            },
            request,
        ))
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the form out of `Submitting` once the attempt ends, however it ends.
///
/// Dropping an unsettled guard (panic in the service, the submit future being
/// cancelled) records the attempt as failed.
pub struct SubmissionGuard<'a> {
    store: &'a FormStore,
    settled: bool,
}

impl SubmissionGuard<'_> {
    pub fn resolve(mut self, result: AnalysisResult) {
        self.settled = true;
        self.store.dispatch(Action::SubmitSucceeded(result));
    }

    pub fn fail(mut self) {
        self.settled = true;
        self.store.dispatch(Action::SubmitFailed);
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("Submission ended without an outcome, marking it failed");
            self.store.dispatch(Action::SubmitFailed);
        }
    }
}
