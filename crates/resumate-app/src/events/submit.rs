use kanal::AsyncSender;
use resumate_types::AppEvent;

use crate::state::AppState;

/// Runs one submission and reports busy state and outcome to the UI.
///
/// Always ends with exactly one `ShowResult` or `Notify`; any
/// `SubmittingChanged(true)` is matched by a `false` before it.
pub async fn handle_submit(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut form_rx = state.client.subscribe();
    let submit = state.client.submit();
    tokio::pin!(submit);

    let mut announced = false;
    let outcome = loop {
        tokio::select! {
            outcome = &mut submit => break outcome,
            Ok(()) = form_rx.changed(), if !announced => {
                if form_rx.borrow_and_update().is_submitting() {
                    announced = true;
                    app_to_ui_tx.send(AppEvent::SubmittingChanged(true)).await?;
                }
            }
        }
    };

    if announced {
        app_to_ui_tx.send(AppEvent::SubmittingChanged(false)).await?;
    }

    let event = match outcome {
        Ok(result) => AppEvent::ShowResult(result),
        Err(e) => AppEvent::Notify(e.notification()),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}
