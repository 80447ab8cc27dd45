use std::collections::BTreeMap;

use protocol::SymptomPayload;

pub const SYMPTOMS_FIELD: &str = "symptoms";
pub const DURATION_FIELD: &str = "duration";
pub const SEVERITY_FIELD: &str = "severity";

/// Named string fields of a form, as they stand at the moment of reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    values: BTreeMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Reads the three symptom fields verbatim. Nothing is trimmed or
    /// validated; absent fields stay absent.
    pub fn symptom_payload(&self) -> SymptomPayload {
        SymptomPayload {
            symptoms: self.get(SYMPTOMS_FIELD).map(str::to_string),
            duration: self.get(DURATION_FIELD).map(str::to_string),
            severity: self.get(SEVERITY_FIELD).map(str::to_string),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// A form submission. Handlers call [`SubmitEvent::prevent_default`] to
/// keep the submission from navigating away.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_reads_fields_verbatim() {
        let form: FormFields = [
            ("symptoms", "  chest pain "),
            ("duration", ">3"),
            ("severity", "severe"),
            ("notes", "ignored"),
        ]
        .into_iter()
        .collect();
        let payload = form.symptom_payload();
        assert_eq!(payload.symptoms.as_deref(), Some("  chest pain "));
        assert_eq!(payload.duration.as_deref(), Some(">3"));
        assert_eq!(payload.severity.as_deref(), Some("severe"));
    }

    #[test]
    fn missing_fields_stay_absent() {
        let form = FormFields::new().with(SYMPTOMS_FIELD, "");
        let payload = form.symptom_payload();
        assert_eq!(payload.symptoms.as_deref(), Some(""));
        assert!(payload.duration.is_none());
        assert!(payload.severity.is_none());
    }

    #[test]
    fn later_edits_are_visible_at_read_time() {
        let mut form = FormFields::new().with(SEVERITY_FIELD, "mild");
        form.set(SEVERITY_FIELD, "moderate");
        assert_eq!(form.symptom_payload().severity.as_deref(), Some("moderate"));
    }
}
