use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use protocol::{EmergencyReply, EmergencyRequest, RiskAssessment, SymptomPayload};
use tokio::sync::Notify;

use crate::api::CarelineApi;
use crate::error::ClientError;

pub(crate) fn decode_error() -> ClientError {
    let err = serde_json::from_str::<serde_json::Value>("<html>").expect_err("invalid json");
    ClientError::Decode(err)
}

/// Answers from a fixed script and records what it was asked.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    emergency_reply: Option<EmergencyReply>,
    assessment: Option<RiskAssessment>,
    gate: Option<Arc<Notify>>,
    pub(crate) emergencies: Mutex<Vec<EmergencyRequest>>,
    pub(crate) payloads: Mutex<Vec<SymptomPayload>>,
}

impl ScriptedApi {
    /// Every call fails with a decode error.
    pub(crate) fn failing() -> Self {
        Self::default()
    }

    pub(crate) fn with_emergency_reply(mut self, reply: EmergencyReply) -> Self {
        self.emergency_reply = Some(reply);
        self
    }

    pub(crate) fn with_assessment(mut self, assessment: RiskAssessment) -> Self {
        self.assessment = Some(assessment);
        self
    }

    /// Holds every call until the returned notify is signalled.
    pub(crate) fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    async fn wait_gate(&self) {
        if let Some(gate) = self.gate.as_ref() {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl CarelineApi for ScriptedApi {
    async fn post_emergency(
        &self,
        request: &EmergencyRequest,
    ) -> Result<EmergencyReply, ClientError> {
        self.emergencies
            .lock()
            .expect("emergencies lock")
            .push(request.clone());
        self.wait_gate().await;
        self.emergency_reply.clone().ok_or_else(decode_error)
    }

    async fn check_symptoms(
        &self,
        payload: &SymptomPayload,
    ) -> Result<RiskAssessment, ClientError> {
        self.payloads
            .lock()
            .expect("payloads lock")
            .push(payload.clone());
        self.wait_gate().await;
        self.assessment.clone().ok_or_else(decode_error)
    }
}
