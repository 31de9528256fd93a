use std::path::PathBuf;

use crate::result::AnalysisResult;
use crate::role::Role;

pub const VALIDATION_MESSAGE: &str = "Please upload a file and enter requirements.";
pub const FAILURE_MESSAGE: &str = "An error occurred while analyzing the resume.";
pub const BUSY_MESSAGE: &str = "An analysis is already running, please wait.";

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User picked a file on disk
    SelectFile(PathBuf),
    FileLoaded {
        file_name: String,
        bytes: usize,
    },
    SetRequirements(String),
    SetRole(Role),
    Submit,
    SubmittingChanged(bool),
    ShowResult(AnalysisResult),
    Notify(Notification),
    BackendReady,
    UiEvent(UiEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Validation,
    Failure,
    Info,
}

/// Blocking, alert-style message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn validation() -> Self {
        Self {
            kind: NotificationKind::Validation,
            message: VALIDATION_MESSAGE.to_string(),
        }
    }

    pub fn busy() -> Self {
        Self {
            kind: NotificationKind::Validation,
            message: BUSY_MESSAGE.to_string(),
        }
    }

    /// The one message shown for every network, server or decode failure
    pub fn failure() -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}
