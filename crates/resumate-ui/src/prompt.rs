use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use kanal::ReceiveError;
use resumate_types::{AppEvent, Role, UiEvent};

use crate::bridge::UiBridgeHandle;
use crate::events::handle_events;
use crate::render;
use crate::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    ChooseFile,
    EditRequirements,
    SelectRole,
    Analyze,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::ChooseFile,
        MenuItem::EditRequirements,
        MenuItem::SelectRole,
        MenuItem::Analyze,
        MenuItem::Quit,
    ];

    fn label(&self, state: &UiState) -> &'static str {
        match self {
            MenuItem::ChooseFile => "Upload resume (PDF)",
            MenuItem::EditRequirements => "Job requirements",
            MenuItem::SelectRole => "Job role",
            MenuItem::Analyze => render::submit_caption(state.submitting),
            MenuItem::Quit => "Quit",
        }
    }
}

/// Interactive form, runs on a blocking thread and owns the terminal
pub fn run_form(handle: UiBridgeHandle, preview_chars: usize) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let mut state = UiState::default();

    wait_for(&handle, &mut state, preview_chars, |e| {
        matches!(e, AppEvent::BackendReady)
    })?;

    loop {
        drain(&handle, &mut state, preview_chars);
        println!("\n{}", render::render_form(&state));

        let labels: Vec<&str> = MenuItem::ALL.iter().map(|m| m.label(&state)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Resume Analyzer")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuItem::ALL[choice] {
            MenuItem::ChooseFile => {
                let path: String = Input::with_theme(&theme)
                    .with_prompt("Path to resume")
                    .interact_text()?;
                handle.from_ui_tx.send(AppEvent::SelectFile(PathBuf::from(path.trim())))?;
                wait_for(&handle, &mut state, preview_chars, |e| {
                    matches!(e, AppEvent::FileLoaded { .. } | AppEvent::Notify(_))
                })?;
            }
            MenuItem::EditRequirements => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Job requirements (comma-separated)")
                    .with_initial_text(state.requirements.clone())
                    .allow_empty(true)
                    .interact_text()?;
                state.requirements = text.clone();
                handle.from_ui_tx.send(AppEvent::SetRequirements(text))?;
            }
            MenuItem::SelectRole => {
                let labels: Vec<&str> = Role::ALL.iter().map(|r| r.label()).collect();
                let current = Role::ALL.iter().position(|r| *r == state.role).unwrap_or(0);
                let index = Select::with_theme(&theme)
                    .with_prompt("Select job role")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                state.role = Role::ALL[index];
                handle.from_ui_tx.send(AppEvent::SetRole(state.role))?;
            }
            MenuItem::Analyze => {
                handle.from_ui_tx.send(AppEvent::Submit)?;
                wait_for(&handle, &mut state, preview_chars, |e| {
                    matches!(e, AppEvent::ShowResult(_) | AppEvent::Notify(_))
                })?;
            }
            MenuItem::Quit => {
                handle.from_ui_tx.send(AppEvent::UiEvent(UiEvent::Close))?;
                return Ok(());
            }
        }
    }
}

/// Prints whatever the backend sent while the user was typing
fn drain(handle: &UiBridgeHandle, state: &mut UiState, preview_chars: usize) {
    while let Ok(Some(event)) = handle.to_ui_rx.try_recv() {
        if let Some(output) = handle_events(event, state, preview_chars) {
            output.print();
        }
    }
}

/// Blocks until an event matching `done` has been handled
fn wait_for(
    handle: &UiBridgeHandle,
    state: &mut UiState,
    preview_chars: usize,
    done: impl Fn(&AppEvent) -> bool,
) -> Result<(), ReceiveError> {
    loop {
        let event = handle.to_ui_rx.recv()?;
        let finished = done(&event);
        if let Some(output) = handle_events(event, state, preview_chars) {
            output.print();
        }
        if finished {
            return Ok(());
        }
    }
}
