use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "careline", version, about = "Careline emergency and symptom-check client")]
pub(crate) struct Args {
    /// Optional TOML config; flags below override its values.
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, global = true)]
    pub(crate) base_url: Option<String>,
    #[arg(long, global = true)]
    pub(crate) connect_timeout_ms: Option<u64>,
    #[arg(long, global = true)]
    pub(crate) request_timeout_ms: Option<u64>,
    #[arg(long, global = true)]
    pub(crate) toast_duration_ms: Option<u64>,
    #[arg(long, global = true, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
    /// Also write JSON logs to a daily rolling file in this directory.
    #[arg(long, global = true)]
    pub(crate) log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Send an emergency request and show the reply until the toast closes.
    Emergency {
        /// Emergency category, e.g. `ambulance`.
        #[arg(value_name = "TYPE")]
        kind: String,
    },
    /// Submit the symptom form and show the assessed risk.
    Check {
        #[arg(long)]
        symptoms: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        severity: Option<String>,
    },
}
