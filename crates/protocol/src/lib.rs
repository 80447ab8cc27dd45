use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub mod endpoints;
pub mod style;
mod text;

pub use style::CardStyle;

/// Form field carrying the emergency category.
pub const EMERGENCY_TYPE_FIELD: &str = "type";

/// Body of `POST /emergency`. Sent form-encoded, never as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyRequest {
    pub kind: String,
}

impl EmergencyRequest {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Encodes the request as `type=<value>`, percent-encoding the value the
    /// way `encodeURIComponent` does (spaces become `%20`, not `+`).
    pub fn form_body(&self) -> String {
        format!(
            "{EMERGENCY_TYPE_FIELD}={}",
            urlencoding::encode(&self.kind)
        )
    }
}

/// Reply to `POST /emergency`.
///
/// Any JSON body except `null` decodes. `message` holds the display text of
/// a truthy `message` field and is `None` when the field is missing, falsy,
/// or the body is not an object.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EmergencyReply {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl<'de> Deserialize<'de> for EmergencyReply {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body = non_null_body(deserializer, "emergency reply")?;
        Ok(Self {
            status: body.get("status").and_then(text::display_text),
            message: body.get("message").and_then(text::truthy_text),
        })
    }
}

/// Body of `POST /api/check-symptoms`.
///
/// Fields mirror whatever the form held at submit time. A field missing from
/// the form is sent as `null` rather than omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomPayload {
    pub symptoms: Option<String>,
    pub duration: Option<String>,
    pub severity: Option<String>,
}

/// Reply to `POST /api/check-symptoms`.
///
/// Fields of any JSON type are kept as display text, so an unexpected
/// `risk_level` still renders (with the default style). A `null` or missing
/// field is `None`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub risk_level: Option<String>,
    pub message: Option<String>,
}

impl<'de> Deserialize<'de> for RiskAssessment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body = non_null_body(deserializer, "risk assessment")?;
        Ok(Self {
            risk_level: body.get("risk_level").and_then(text::display_text),
            message: body.get("message").and_then(text::display_text),
        })
    }
}

fn non_null_body<'de, D: Deserializer<'de>>(
    deserializer: D,
    what: &str,
) -> Result<Value, D::Error> {
    let body = Value::deserialize(deserializer)?;
    if body.is_null() {
        return Err(D::Error::custom(format!("{what} is null")));
    }
    Ok(body)
}

impl RiskAssessment {
    pub fn style(&self) -> CardStyle {
        CardStyle::for_risk_level(self.risk_level.as_deref())
    }

    /// Text for the level element, e.g. `High risk`.
    pub fn level_text(&self) -> String {
        match self.risk_level.as_deref() {
            Some(level) => format!("{level} risk"),
            None => "Unknown risk".to_string(),
        }
    }

    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}
