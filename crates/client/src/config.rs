use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Resolved client settings. Built by the front end from its own config
/// sources; the library never reads files or the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
    pub toast_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            request_timeout: None,
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://: {base_url}");
        }
        if self.connect_timeout.is_zero() {
            anyhow::bail!("connect_timeout_ms must be greater than 0");
        }
        if self.toast_duration.is_zero() {
            anyhow::bail!("toast_duration_ms must be greater than 0");
        }
        Ok(())
    }
}
