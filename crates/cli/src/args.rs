//! Command-line arguments and their translation into a [`RawRequest`].

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use request::{Body, EndpointRegistry, RawRequest, RouteValue};
use serde_json::Value;

/// Call any OpenSearch endpoint by its registry name.
#[derive(Debug, Parser)]
#[command(name = "osq", author, version, about, long_about = None)]
pub struct Args {
    /// Config file; a missing file means built-in defaults.
    #[arg(long, default_value = "osq.toml")]
    pub config: PathBuf,

    /// Cluster URL, overriding the config file and OSQ_URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,

    /// List every endpoint and exit.
    #[arg(long)]
    pub list: bool,

    /// Registry name of the endpoint, e.g. `snapshot.status` or `cat.indices`.
    #[arg(required_unless_present = "list")]
    pub endpoint: Option<String>,

    /// Route value as name=value. Commas make a list.
    #[arg(short = 'r', long = "route", value_name = "NAME=VALUE", value_parser = parse_pair)]
    pub route: Vec<(String, String)>,

    /// Query parameter as key=value.
    #[arg(short = 'q', long = "param", value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub params: Vec<(String, String)>,

    /// Request body: JSON, NDJSON, or @path to read it from a file.
    #[arg(long)]
    pub body: Option<String>,

    /// X-Opaque-Id header; a random one is generated when absent.
    #[arg(long)]
    pub opaque_id: Option<String>,
}

/// Splits `name=value` at the first `=`.
pub fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.to_owned()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

/// A route value from command-line text: comma-separated input becomes a list.
pub fn route_value(raw: &str) -> RouteValue {
    if raw.contains(',') {
        RouteValue::List(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    } else {
        RouteValue::Single(raw.to_owned())
    }
}

/// Parses body text: one JSON document, else one JSON document per line.
pub fn parse_body(text: &str) -> Result<Body> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(Body::Json(value));
    }

    let lines = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(n, line)| {
            serde_json::from_str::<Value>(line)
                .with_context(|| format!("Body line {} is not valid JSON", n + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    if lines.is_empty() {
        bail!("Body is empty");
    }
    Ok(Body::NdJson(lines))
}

/// Reads `--body`, following `@path`.
pub fn read_body(raw: &str) -> Result<Body> {
    match raw.strip_prefix('@') {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read body file: {path}"))?;
            parse_body(&text)
        }
        None => parse_body(raw),
    }
}

/// Builds the request described by `args` against `registry`.
pub fn build_request(args: &Args, registry: &EndpointRegistry, opaque_id: &str) -> Result<RawRequest> {
    let name = args
        .endpoint
        .as_deref()
        .context("No endpoint given; use --list to see them")?;
    let spec = registry.get(name)?;

    let mut request = RawRequest::new(spec).header("x-opaque-id", opaque_id);
    for (segment, value) in &args.route {
        request = request.route(segment, route_value(value));
    }
    for (key, value) in &args.params {
        request = request.param(key, value)?;
    }
    if let Some(body) = &args.body {
        request = request.body(read_body(body)?);
    }
    Ok(request)
}

/// One line per endpoint: name, verb, templates.
pub fn endpoint_listing(registry: &EndpointRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|spec| {
            format!(
                "{:<44} {:<6} {}",
                spec.name,
                spec.method.as_str(),
                spec.paths.join("  ")
            )
        })
        .collect()
}
