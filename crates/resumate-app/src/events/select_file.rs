use std::path::PathBuf;

use kanal::AsyncSender;
use resumate_types::{AppEvent, Notification, SelectedFile};

use crate::state::AppState;

pub async fn handle_file_selection(
    state: &AppState,
    path: PathBuf,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let file = SelectedFile::from_path(&path, bytes);
            tracing::info!(
                content_type = %file.content_type,
                "Selected {} ({} bytes)",
                file.file_name,
                file.len()
            );

            let event = AppEvent::FileLoaded {
                file_name: file.file_name.clone(),
                bytes: file.len(),
            };
            state.client.set_file(Some(file));
            app_to_ui_tx.send(event).await?;
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            app_to_ui_tx
                .send(AppEvent::Notify(Notification::info(format!(
                    "Could not read {}: {}",
                    path.display(),
                    e
                ))))
                .await?;
        }
    }

    Ok(())
}
