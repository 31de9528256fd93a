use kanal::{AsyncReceiver, AsyncSender, Receiver, Sender};
use resumate_types::AppEvent;

/// Bridge between async backend and the blocking prompt thread
pub struct UiBridge {
    to_ui_tx: Sender<AppEvent>,
    from_ui_rx: AsyncReceiver<AppEvent>,
}

pub struct UiBridgeHandle {
    pub to_ui_rx: Receiver<AppEvent>,
    pub from_ui_tx: Sender<AppEvent>,
}

impl UiBridge {
    pub fn new() -> (Self, UiBridgeHandle) {
        let (to_ui_tx, to_ui_rx) = kanal::bounded(128);
        let (from_ui_tx, from_ui_rx) = kanal::bounded(64);

        (
            UiBridge {
                to_ui_tx,
                from_ui_rx: from_ui_rx.to_async(),
            },
            UiBridgeHandle {
                to_ui_rx,
                from_ui_tx,
            },
        )
    }

    pub async fn forward_from_backend(&self, app_to_ui_rx: AsyncReceiver<AppEvent>) {
        while let Ok(event) = app_to_ui_rx.recv().await {
            if self.to_ui_tx.as_async().send(event).await.is_err() {
                break;
            }
        }
    }

    pub async fn forward_to_backend(&self, ui_to_app_tx: AsyncSender<AppEvent>) {
        while let Ok(event) = self.from_ui_rx.recv().await {
            if ui_to_app_tx.send(event).await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn events_cross_both_ways() {
        let (bridge, handle) = UiBridge::new();
        let (app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();
        let (ui_to_app_tx, ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();

        let bridge = std::sync::Arc::new(bridge);
        tokio::spawn({
            let bridge = bridge.clone();
            async move { bridge.forward_from_backend(app_to_ui_rx).await }
        });
        tokio::spawn({
            let bridge = bridge.clone();
            async move { bridge.forward_to_backend(ui_to_app_tx).await }
        });

        app_to_ui_tx.send(AppEvent::BackendReady).await.unwrap();
        let received = tokio::task::spawn_blocking(move || {
            let event = handle.to_ui_rx.recv().expect("recv failed");
            handle
                .from_ui_tx
                .send(AppEvent::Submit)
                .expect("send failed");
            event
        })
        .await
        .unwrap();
        assert!(matches!(received, AppEvent::BackendReady));

        let event = timeout(Duration::from_secs(2), ui_to_app_rx.recv())
            .await
            .expect("timeout")
            .unwrap();
        assert!(matches!(event, AppEvent::Submit));
    }
}
