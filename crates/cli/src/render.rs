use careline_client::{ViewEvent, CHECKING_TEXT, CHECK_FAILED_TEXT};
use tokio::sync::broadcast;

pub(crate) fn format_event(event: &ViewEvent) -> String {
    match event {
        ViewEvent::ToastShown { text } => format!("[toast] {text}"),
        ViewEvent::ToastHidden => "[toast] dismissed".to_string(),
        ViewEvent::ResultPending => CHECKING_TEXT.to_string(),
        ViewEvent::ResultRendered {
            level_text,
            message,
            style,
        } => format!("{level_text} [{}]\n{message}", style.class_name()),
        ViewEvent::ResultFailed { message } => format!("{CHECK_FAILED_TEXT}\n{message}"),
    }
}

/// Prints view events until `done` matches one (inclusive) or the channel
/// closes.
pub(crate) async fn print_until(
    mut rx: broadcast::Receiver<ViewEvent>,
    done: impl Fn(&ViewEvent) -> bool,
) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                println!("{}", format_event(&event));
                if done(&event) {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "renderer lagged behind view events");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
