//! `osq` entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration**: load `osq.toml`, apply `OSQ_*` environment
//!    overrides, then command-line flags.
//! 2. **Wire observability**: `tracing-subscriber` with an `EnvFilter`, text
//!    or JSON output, and an OpenTelemetry OTLP exporter when an endpoint is
//!    configured.
//! 3. **Construct infrastructure**: an [`http_transport::HttpTransport`] from
//!    the transport settings.
//! 4. **Run one request**: look the endpoint up in the client's registry,
//!    bind route values and parameters onto a [`request::RawRequest`],
//!    resolve it and execute it. Ctrl-C cancels the call in flight.
//!
//! The response body is written to stdout; status and logs go to stderr. The
//! exit code is non-zero for anything but a 2xx response.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use http_transport::HttpTransport;
use request::Transport;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod args;
mod config;
mod observability;

use args::Args;
use config::CliConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let registry = client::registry();

    if args.list {
        let mut stdout = std::io::stdout().lock();
        for line in args::endpoint_listing(registry) {
            writeln!(stdout, "{line}")?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = CliConfig::load(&args.config)?;
    config.apply_env(|key| std::env::var(key).ok())?;
    if let Some(url) = &args.url {
        config.transport.base_url = url.clone();
    }
    if args.json_logs {
        config.observability.json_logs = true;
    }

    let _guard = observability::init(&config.observability)?;

    let opaque_id = args
        .opaque_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let resolved = args::build_request(&args, registry, &opaque_id)?
        .resolve()
        .context("Failed to resolve request")?;

    let transport = HttpTransport::new(config.transport.clone())?;
    info!(
        endpoint = resolved.endpoint,
        method = %resolved.method,
        path = %resolved.path_and_query(),
        opaque_id = %opaque_id,
        "Executing request"
    );

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; cancelling request");
            on_interrupt.cancel();
        }
    });

    let response = transport.execute_async(&resolved, cancel).await?;

    eprintln!("HTTP {}", response.status);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&response.body)?;
    if !response.body.is_empty() && !response.body.ends_with(b"\n") {
        writeln!(stdout)?;
    }

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
