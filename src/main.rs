// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pipegraph::config::{load_request, load_settings, EngineSettings};
use pipegraph::registry::UnitRegistry;
use pipegraph::runner::run_pipeline;

struct Args {
    request: PathBuf,
    settings: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <request.json|request.yaml> [--config settings.yaml|settings.toml]\n\
         Example: {program} pipelines/support-ticket.json --config pipelines/pipegraph.yaml"
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let program = args.first().map(String::as_str).unwrap_or("pipegraph");
    let mut request = None;
    let mut settings = None;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = rest
                    .next()
                    .with_context(|| format!("--config needs a path\n{}", usage(program)))?;
                settings = Some(PathBuf::from(path));
            }
            "--help" | "-h" => bail!(usage(program)),
            other if request.is_none() => request = Some(PathBuf::from(other)),
            other => bail!("unexpected argument '{}'\n{}", other, usage(program)),
        }
    }

    let request = request.with_context(|| usage(program))?;
    Ok(Args { request, settings })
}

/// Logs go to stderr so stdout carries only the response envelope.
fn init_tracing(settings: &EngineSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;

    let settings = match &args.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => EngineSettings::default(),
    };
    init_tracing(&settings);

    let registry = Arc::new(UnitRegistry::from_settings(&settings)?);
    let request = load_request(&args.request)
        .with_context(|| format!("loading request from {}", args.request.display()))?;

    let response = run_pipeline(registry, request).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
