use kalima_types::AppEvent;
use kanal::AsyncSender;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

/// Forward typed lines to the session loop
///
/// End of input is treated as `:quit`.
pub async fn input_loop<R>(
    reader: R,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if let Err(e) = event_tx.send(AppEvent::TextInput(line)).await {
                            tracing::warn!("Session loop gone, stopping input: {}", e);
                            return Ok(());
                        }
                    }
                    None => {
                        tracing::info!("Input closed");
                        let _ = event_tx.send(AppEvent::TextInput(":quit".to_string())).await;
                        return Ok(());
                    }
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("Input loop stopping");
                return Ok(());
            }
        }
    }
}
