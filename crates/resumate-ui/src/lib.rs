pub mod bridge;
pub mod events;
pub mod prompt;
pub mod render;
pub mod state;

use kanal::{AsyncReceiver, AsyncSender};
use resumate_config::ui::UiConfig;
use resumate_types::AppEvent;

use crate::bridge::UiBridge;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
) -> anyhow::Result<()> {
    let (bridge, handle) = UiBridge::new();

    let preview_chars = config.preview_chars;
    let form = tokio::task::spawn_blocking(move || prompt::run_form(handle, preview_chars));

    tokio::select! {
        _ = bridge.forward_from_backend(app_to_ui_rx) => {
            tracing::warn!("[UI] Backend channel closed");
        }
        _ = bridge.forward_to_backend(ui_to_app_tx) => {
            tracing::warn!("[UI] Form channel closed");
        }
        result = form => {
            result??;
            tracing::info!("[UI] Form closed");
        }
    }

    Ok(())
}
