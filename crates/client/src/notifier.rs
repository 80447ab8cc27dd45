use std::sync::Arc;
use std::time::Duration;

use protocol::{EmergencyReply, EmergencyRequest};

use crate::api::CarelineApi;
use crate::view::ViewHandle;

pub const TOAST_FALLBACK_TEXT: &str = "Request sent.";
pub const TOAST_FAILURE_TEXT: &str = "Failed to send request.";

pub struct EmergencyNotifier {
    api: Arc<dyn CarelineApi>,
    view: ViewHandle,
    toast_duration: Duration,
}

impl EmergencyNotifier {
    pub fn new(api: Arc<dyn CarelineApi>, view: ViewHandle, toast_duration: Duration) -> Self {
        Self {
            api,
            view,
            toast_duration,
        }
    }

    /// Posts the category and shows the outcome in the toast.
    ///
    /// Never fails: transport and decode errors become a generic toast. The
    /// toast is hidden again by a detached timer; each call arms its own and
    /// none are cancelled.
    pub async fn send_emergency(&self, kind: &str) {
        let request = EmergencyRequest::new(kind);
        tracing::info!(event = "emergency.send", kind = %request.kind);
        let text = match self.api.post_emergency(&request).await {
            Ok(reply) => toast_text(&reply),
            Err(err) => {
                tracing::warn!(
                    event = "emergency.failed",
                    kind = %request.kind,
                    error = %err,
                    "emergency request failed"
                );
                TOAST_FAILURE_TEXT.to_string()
            }
        };
        self.view.show_toast(text).await;
        self.schedule_hide();
    }

    fn schedule_hide(&self) {
        let view = self.view.clone();
        let delay = self.toast_duration;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            view.hide_toast().await;
        });
    }
}

fn toast_text(reply: &EmergencyReply) -> String {
    match reply.message.as_deref() {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => TOAST_FALLBACK_TEXT.to_string(),
    }
}
