use kanal::{AsyncReceiver, AsyncSender};
use resumate_config::ui::UiConfig;
use resumate_types::AppEvent;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
) -> anyhow::Result<()> {
    resumate_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config).await
}
