use anyhow::Context;
use careline_client::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_TOAST_DURATION_MS,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::cli::Args;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub(crate) base_url: Option<String>,
    pub(crate) connect_timeout_ms: Option<u64>,
    pub(crate) request_timeout_ms: Option<u64>,
    pub(crate) toast_duration_ms: Option<u64>,
}

pub(crate) fn load_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: FileConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Flags win over the file, the file wins over built-in defaults.
pub(crate) fn resolve_config(args: &Args) -> anyhow::Result<ClientConfig> {
    let file = match args.config.as_deref() {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    let config = merge(args, file);
    match args.config.as_deref() {
        Some(path) => config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => config.validate()?,
    }
    Ok(config)
}

fn merge(args: &Args, file: FileConfig) -> ClientConfig {
    let base_url = args
        .base_url
        .clone()
        .or(file.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let connect_timeout_ms = args
        .connect_timeout_ms
        .or(file.connect_timeout_ms)
        .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS);
    let request_timeout_ms = args.request_timeout_ms.or(file.request_timeout_ms);
    let toast_duration_ms = args
        .toast_duration_ms
        .or(file.toast_duration_ms)
        .unwrap_or(DEFAULT_TOAST_DURATION_MS);
    ClientConfig {
        base_url,
        connect_timeout: Duration::from_millis(connect_timeout_ms),
        request_timeout: request_timeout_ms.map(Duration::from_millis),
        toast_duration: Duration::from_millis(toast_duration_ms),
    }
}
