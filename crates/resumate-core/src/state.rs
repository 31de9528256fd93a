use resumate_service::AnalysisRequest;
use resumate_types::{AnalysisResult, Role, SelectedFile};

use crate::error::FormError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Resolved,
    Failed,
}

/// Everything the form holds. Only `reduce` produces new values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    selected_file: Option<SelectedFile>,
    requirements: String,
    role: Role,
    phase: Phase,
    last_result: Option<AnalysisResult>,
}

#[derive(Debug, Clone)]
pub enum Action {
    SetFile(Option<SelectedFile>),
    SetRequirements(String),
    SetRole(Role),
    SubmitStarted,
    SubmitSucceeded(AnalysisResult),
    SubmitFailed,
}

impl FormState {
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Checks the submit preconditions and copies the fields into a request
    pub fn validate(&self) -> Result<AnalysisRequest, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }

        let file = self.selected_file.as_ref().ok_or(FormError::MissingFile)?;

        // Verbatim check, whitespace counts as input
        if self.requirements.is_empty() {
            return Err(FormError::MissingRequirements);
        }

        Ok(AnalysisRequest {
            file: file.clone(),
            requirements: self.requirements.clone(),
            role: self.role,
        })
    }
}

pub fn reduce(state: &FormState, action: Action) -> FormState {
    let mut next = state.clone();

    match action {
        Action::SetFile(file) => next.selected_file = file,
        Action::SetRequirements(text) => next.requirements = text,
        Action::SetRole(role) => next.role = role,
        Action::SubmitStarted => {
            if state.phase != Phase::Submitting {
                next.phase = Phase::Submitting;
            }
        }
        Action::SubmitSucceeded(result) => {
            if state.phase == Phase::Submitting {
                next.phase = Phase::Resolved;
                next.last_result = Some(result);
            }
        }
        // A failed attempt leaves the previous result on screen
        Action::SubmitFailed => {
            if state.phase == Phase::Submitting {
                next.phase = Phase::Failed;
            }
        }
    }

    next
}
