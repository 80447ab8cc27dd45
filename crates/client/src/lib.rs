//! Client side of the careline emergency and symptom-checker app.
//!
//! Two independent handlers drive a shared [`ViewHandle`]:
//! [`EmergencyNotifier`] posts an emergency category and flashes the reply in
//! a toast, [`SymptomFormHandler`] posts the symptom form and renders the
//! returned risk level into the result card.

mod api;
mod config;
mod error;
mod form;
mod notifier;
mod symptoms;
#[cfg(test)]
mod test_utils;
mod view;

use std::sync::Arc;

pub use api::{CarelineApi, HttpApi};
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_TOAST_DURATION_MS,
};
pub use error::ClientError;
pub use form::{FormFields, SubmitEvent, DURATION_FIELD, SEVERITY_FIELD, SYMPTOMS_FIELD};
pub use notifier::{EmergencyNotifier, TOAST_FAILURE_TEXT, TOAST_FALLBACK_TEXT};
pub use protocol::CardStyle;
pub use symptoms::{SymptomFormHandler, CHECK_FAILURE_MESSAGE};
pub use view::{ResultCard, Toast, View, ViewEvent, ViewHandle, CHECKING_TEXT, CHECK_FAILED_TEXT};

/// Both handlers wired to one backend and one view.
pub struct Careline {
    view: ViewHandle,
    notifier: EmergencyNotifier,
    symptoms: SymptomFormHandler,
}

impl Careline {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let api = HttpApi::new(config)?;
        Ok(Self::with_api(Arc::new(api), config))
    }

    pub fn with_api(api: Arc<dyn CarelineApi>, config: &ClientConfig) -> Self {
        let view = ViewHandle::new();
        let notifier = EmergencyNotifier::new(Arc::clone(&api), view.clone(), config.toast_duration);
        let symptoms = SymptomFormHandler::new(api, view.clone());
        Self {
            view,
            notifier,
            symptoms,
        }
    }

    pub fn view(&self) -> &ViewHandle {
        &self.view
    }

    pub fn notifier(&self) -> &EmergencyNotifier {
        &self.notifier
    }

    pub fn symptoms(&self) -> &SymptomFormHandler {
        &self.symptoms
    }
}
