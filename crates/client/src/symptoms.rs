use std::sync::Arc;

use crate::api::CarelineApi;
use crate::form::{FormFields, SubmitEvent};
use crate::view::ViewHandle;

pub const CHECK_FAILURE_MESSAGE: &str = "Failed to check symptoms.";

pub struct SymptomFormHandler {
    api: Arc<dyn CarelineApi>,
    view: ViewHandle,
}

impl SymptomFormHandler {
    pub fn new(api: Arc<dyn CarelineApi>, view: ViewHandle) -> Self {
        Self { api, view }
    }

    /// Handles one submission of the symptom form.
    ///
    /// The placeholder is on screen before the request leaves. A failed
    /// request or an undecodable reply renders the failure state instead of
    /// leaving the placeholder up.
    pub async fn handle_submit(&self, event: &mut SubmitEvent, form: &FormFields) {
        event.prevent_default();
        let payload = form.symptom_payload();
        self.view.begin_check().await;

        match self.api.check_symptoms(&payload).await {
            Ok(assessment) => {
                tracing::info!(
                    event = "symptoms.assessed",
                    risk_level = ?assessment.risk_level,
                    style = assessment.style().class_name(),
                );
                self.view.render_result(&assessment).await;
            }
            Err(err) => {
                tracing::warn!(
                    event = "symptoms.failed",
                    error = %err,
                    "symptom check failed"
                );
                self.view.render_failure(CHECK_FAILURE_MESSAGE).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DURATION_FIELD, SEVERITY_FIELD, SYMPTOMS_FIELD};
    use crate::test_utils::ScriptedApi;
    use crate::view::ViewEvent;
    use protocol::{CardStyle, RiskAssessment, SymptomPayload};

    fn build(api: ScriptedApi) -> (SymptomFormHandler, Arc<ScriptedApi>, ViewHandle) {
        let api = Arc::new(api);
        let view = ViewHandle::new();
        let handler = SymptomFormHandler::new(api.clone(), view.clone());
        (handler, api, view)
    }

    fn assessment(level: Option<&str>, message: &str) -> RiskAssessment {
        RiskAssessment {
            risk_level: level.map(str::to_string),
            message: Some(message.to_string()),
        }
    }

    fn filled_form() -> FormFields {
        FormFields::new()
            .with(SYMPTOMS_FIELD, "chest pain, dizziness")
            .with(DURATION_FIELD, "1-3")
            .with(SEVERITY_FIELD, "severe")
    }

    #[tokio::test]
    async fn high_risk_uses_orange_card() {
        let (handler, api, view) =
            build(ScriptedApi::default().with_assessment(assessment(Some("High"), "Seek care")));
        let mut event = SubmitEvent::new();

        handler.handle_submit(&mut event, &filled_form()).await;

        assert!(event.default_prevented());
        let card = view.result_card().await;
        assert!(card.has_class("gradient-orange"));
        assert!(card.has_class("result-card"));
        assert!(!card.is_hidden());
        assert_eq!(card.level_text, "High risk");
        assert_eq!(card.message, "Seek care");
        assert_eq!(
            api.payloads.lock().expect("lock")[0],
            SymptomPayload {
                symptoms: Some("chest pain, dizziness".to_string()),
                duration: Some("1-3".to_string()),
                severity: Some("severe".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn medium_and_other_levels_pick_their_styles() {
        let cases = [
            (Some("Medium"), "gradient-green"),
            (Some("Low"), "gradient-blue"),
            (Some("Critical"), "gradient-blue"),
            (None, "gradient-blue"),
        ];
        for (level, class) in cases {
            let (handler, _api, view) =
                build(ScriptedApi::default().with_assessment(assessment(level, "msg")));
            handler
                .handle_submit(&mut SubmitEvent::new(), &filled_form())
                .await;
            let card = view.result_card().await;
            assert_eq!(
                card.classes,
                vec!["result-card".to_string(), class.to_string()],
                "level {level:?}"
            );
        }
    }

    #[tokio::test]
    async fn placeholder_is_shown_before_reply_arrives() {
        let (api, gate) = ScriptedApi::default()
            .with_assessment(assessment(Some("Medium"), "Monitor closely"))
            .gated();
        let (handler, _api, view) = build(api);
        let mut rx = view.subscribe();

        let submit = tokio::spawn(async move {
            let mut event = SubmitEvent::new();
            handler.handle_submit(&mut event, &filled_form()).await;
            event.default_prevented()
        });

        assert_eq!(rx.recv().await.expect("event"), ViewEvent::ResultPending);
        let card = view.result_card().await;
        assert_eq!(card.level_text, "Checking...");
        assert_eq!(card.message, "");
        assert!(!card.is_hidden());

        gate.notify_one();
        assert!(submit.await.expect("join"));
        assert_eq!(
            rx.recv().await.expect("event"),
            ViewEvent::ResultRendered {
                level_text: "Medium risk".to_string(),
                message: "Monitor closely".to_string(),
                style: CardStyle::Green,
            }
        );
    }

    #[tokio::test]
    async fn failure_replaces_placeholder_with_error_state() {
        let (handler, _api, view) = build(ScriptedApi::failing());
        let mut event = SubmitEvent::new();

        handler.handle_submit(&mut event, &filled_form()).await;

        assert!(event.default_prevented());
        let card = view.result_card().await;
        assert_eq!(card.level_text, "Check failed");
        assert_eq!(card.message, "Failed to check symptoms.");
        assert_eq!(
            card.classes,
            vec!["result-card".to_string(), "gradient-blue".to_string()]
        );
    }
}
