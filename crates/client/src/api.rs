use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use protocol::endpoints::{
    join_base_path, CHECK_SYMPTOMS_PATH, EMERGENCY_PATH, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE,
};
use protocol::{EmergencyReply, EmergencyRequest, RiskAssessment, SymptomPayload};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;

static HTTP_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// The two backend calls the handlers depend on.
#[async_trait]
pub trait CarelineApi: Send + Sync {
    async fn post_emergency(
        &self,
        request: &EmergencyRequest,
    ) -> Result<EmergencyReply, ClientError>;

    async fn check_symptoms(
        &self,
        payload: &SymptomPayload,
    ) -> Result<RiskAssessment, ClientError>;
}

pub struct HttpApi {
    client: Client,
    base_url: String,
    request_timeout: Option<Duration>,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim().to_string(),
            request_timeout: config.request_timeout,
        })
    }

    // The status code is logged but not inspected: any body that decodes is
    // treated as the answer.
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        content_type: &str,
        body: String,
    ) -> Result<T, ClientError> {
        let request_id = HTTP_REQUEST_ID.fetch_add(1, Ordering::Relaxed);
        let url = join_base_path(&self.base_url, path).map_err(ClientError::InvalidUrl)?;
        tracing::debug!(
            event = "http.request.start",
            request_id,
            method = "POST",
            path,
            body_len = body.len(),
        );
        let mut request = self
            .client
            .post(&url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await.map_err(|err| {
            tracing::warn!(
                event = "http.request.failed",
                request_id,
                path,
                timeout = err.is_timeout(),
                connect = err.is_connect(),
                error = %err,
            );
            ClientError::Transport(err)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            tracing::warn!(
                event = "http.response.read_failed",
                request_id,
                path,
                status,
                error = %err,
            );
            ClientError::Body(err)
        })?;
        tracing::info!(
            event = "http.response",
            request_id,
            method = "POST",
            path,
            status,
            body_len = body.len(),
        );
        serde_json::from_str(&body).map_err(|err| {
            tracing::warn!(
                event = "http.response.decode_failed",
                request_id,
                path,
                status,
                error = %err,
            );
            ClientError::Decode(err)
        })
    }
}

#[async_trait]
impl CarelineApi for HttpApi {
    async fn post_emergency(
        &self,
        request: &EmergencyRequest,
    ) -> Result<EmergencyReply, ClientError> {
        self.post(EMERGENCY_PATH, FORM_CONTENT_TYPE, request.form_body())
            .await
    }

    async fn check_symptoms(
        &self,
        payload: &SymptomPayload,
    ) -> Result<RiskAssessment, ClientError> {
        let body = serde_json::to_string(payload).map_err(ClientError::Encode)?;
        self.post(CHECK_SYMPTOMS_PATH, JSON_CONTENT_TYPE, body).await
    }
}
