use resumate_types::{AppEvent, UiEvent};

use crate::render;
use crate::state::UiState;

/// Something to print after an event was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout(String),
    Stderr(String),
}

impl Output {
    pub fn print(&self) {
        match self {
            Output::Stdout(text) => println!("{text}"),
            Output::Stderr(text) => eprintln!("{text}"),
        }
    }
}

/// Applies a backend event to the UI state
pub fn handle_events(event: AppEvent, state: &mut UiState, preview_chars: usize) -> Option<Output> {
    match event {
        AppEvent::BackendReady => {
            tracing::debug!("[UI] Backend ready");
            None
        }
        AppEvent::FileLoaded { file_name, bytes } => {
            tracing::debug!("[UI] File loaded: {} ({} bytes)", file_name, bytes);
            state.file = Some((file_name, bytes));
            None
        }
        AppEvent::SubmittingChanged(submitting) => {
            state.submitting = submitting;
            if submitting {
                Some(Output::Stdout(render::render_form(state)))
            } else {
                None
            }
        }
        AppEvent::ShowResult(result) => {
            tracing::debug!("[UI] Showing result with {} scores", result.scores.len());
            let text = render::render_result(&result, preview_chars);
            state.result = Some(result);
            Some(Output::Stdout(text))
        }
        AppEvent::Notify(notification) => {
            Some(Output::Stderr(render::render_notification(&notification)))
        }
        // Requests travel the other way
        AppEvent::SelectFile(_)
        | AppEvent::SetRequirements(_)
        | AppEvent::SetRole(_)
        | AppEvent::Submit
        | AppEvent::UiEvent(UiEvent::Close) => None,
    }
}
