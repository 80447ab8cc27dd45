mod cli;
mod config;
mod logging;
mod render;

use crate::cli::{Args, Command};
use crate::config::resolve_config;
use crate::logging::init_tracing;
use crate::render::print_until;
use anyhow::Context;
use careline_client::{
    Careline, FormFields, SubmitEvent, ViewEvent, DURATION_FIELD, SEVERITY_FIELD, SYMPTOMS_FIELD,
};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(args.log_to_stderr, args.log_dir.as_deref())?;

    let config = resolve_config(&args)?;
    info!(
        base_url = %config.base_url,
        toast_duration_ms = config.toast_duration.as_millis() as u64,
        request_timeout_ms = ?config.request_timeout.map(|value| value.as_millis()),
        "careline starting"
    );
    let careline = Careline::new(&config).context("failed to build client")?;

    match args.command {
        Command::Emergency { kind } => run_emergency(&careline, &kind).await,
        Command::Check {
            symptoms,
            duration,
            severity,
        } => {
            let form = symptom_form(symptoms, duration, severity);
            run_check(&careline, &form).await;
        }
    }
    Ok(())
}

async fn run_emergency(careline: &Careline, kind: &str) {
    let rx = careline.view().subscribe();
    let render = print_until(rx, |event| matches!(event, ViewEvent::ToastHidden));
    tokio::select! {
        _ = async {
            tokio::join!(careline.notifier().send_emergency(kind), render);
        } => {}
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted before toast closed");
        }
    }
}

async fn run_check(careline: &Careline, form: &FormFields) {
    let rx = careline.view().subscribe();
    let render = print_until(rx, |event| {
        matches!(
            event,
            ViewEvent::ResultRendered { .. } | ViewEvent::ResultFailed { .. }
        )
    });
    let mut event = SubmitEvent::new();
    tokio::join!(careline.symptoms().handle_submit(&mut event, form), render);
}

fn symptom_form(
    symptoms: Option<String>,
    duration: Option<String>,
    severity: Option<String>,
) -> FormFields {
    let mut form = FormFields::new();
    for (name, value) in [
        (SYMPTOMS_FIELD, symptoms),
        (DURATION_FIELD, duration),
        (SEVERITY_FIELD, severity),
    ] {
        if let Some(value) = value {
            form.set(name, value);
        }
    }
    form
}
