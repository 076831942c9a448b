//! CLI entrypoint for quizcheck
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quizcheck_application::DiagnosticSink;
use quizcheck_infrastructure::{
    ConfigLoader, ConfiguredCredentialSource, FileConfig, JsonlDiagnosticSink, OpenAiGateway,
    Severity,
};
use quizcheck_presentation::{AppState, Cli, serve};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when no -v is given
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    check_config(&config)?;

    let addr = config
        .bind_addr()
        .ok_or_else(|| anyhow!("Invalid bind address '{}'", config.server.bind))?;

    // === Dependency Injection ===
    let gateway = Arc::new(
        OpenAiGateway::new(&config.delegate).context("Failed to build delegate HTTP client")?,
    );
    let credentials = Arc::new(ConfiguredCredentialSource::new(config.delegate.clone()));

    if config.delegate.resolve_api_key().is_none() {
        warn!(
            env = %config.delegate.api_key_env,
            "No delegate API key configured; requests will fail until one is set"
        );
    }

    let endpoint = gateway.endpoint().to_string();
    let mut state = AppState::new(gateway, credentials);
    if let Some(path) = &config.diagnostics.path {
        match JsonlDiagnosticSink::new(path) {
            Some(sink) => {
                info!("Writing rejection diagnostics to {}", sink.path().display());
                let sink: Arc<dyn DiagnosticSink> = Arc::new(sink);
                state = state.with_diagnostics(sink);
            }
            None => warn!("Rejection diagnostics disabled"),
        }
    }

    info!(
        model = %config.delegate.model,
        endpoint = %endpoint,
        "Starting quizcheck"
    );

    serve(addr, state).await.context("HTTP server failed")?;
    Ok(())
}

/// Log every config issue and stop on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!(field = issue.field, "{}", issue.message),
            Severity::Error => {
                error!(field = issue.field, "{}", issue.message);
                errors += 1;
            }
        }
    }
    if errors > 0 {
        bail!("Configuration has {errors} error(s)");
    }
    Ok(())
}
