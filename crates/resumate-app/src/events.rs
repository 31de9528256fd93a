use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use resumate_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod select_file;
pub mod submit;

use select_file::handle_file_selection;
use submit::handle_submit;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::debug!("[EVENT_LOOP] Waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );

        if matches!(event, AppEvent::UiEvent(UiEvent::Close)) {
            tracing::info!("[EVENT_LOOP] Form closed, stopping");
            return Ok(());
        }

        handle_events(&state, &app_to_ui_tx, event).await?;
    }
}

async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::SelectFile(path) => {
            handle_file_selection(state, path, app_to_ui_tx).await?;
        }
        AppEvent::SetRequirements(text) => {
            tracing::debug!("Requirements set: {} chars", text.len());
            state.client.set_requirements(text);
        }
        AppEvent::SetRole(role) => {
            tracing::debug!("Role set: {}", role);
            state.client.set_role(role);
        }
        AppEvent::Submit => {
            handle_submit(state, app_to_ui_tx).await?;
        }
        // UI-only events, ignore in backend
        AppEvent::FileLoaded { .. }
        | AppEvent::SubmittingChanged(_)
        | AppEvent::ShowResult(_)
        | AppEvent::Notify(_)
        | AppEvent::BackendReady
        | AppEvent::UiEvent(_) => {}
    }

    Ok(())
}
