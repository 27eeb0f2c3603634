//! Secretenv - resolves a source document into `KEY=value` lines.
//!
//! Configuration comes from the process environment:
//! - `SECRETENV_FILE`: source document (default `secretenv.env`)
//! - `SECRETENV_SECRETS_FILE`: JSON secrets file (default `.secretenv/secrets.json`)
//! - `SECRETENV_VAR_<NAME>`: template variable `<name>`
//!
//! Logs go to stderr and are filtered with `RUST_LOG`.

mod config;

use std::io::{self, Write};

use secretenv_application::ResolveEnvironment;
use secretenv_infrastructure::{FileSecretProvider, TokioFileSystem};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    tracing::debug!(
        source = %config.source_file.display(),
        secrets = %config.secrets_file.display(),
        template_vars = config.template_vars.len(),
        "loaded configuration"
    );

    let fs = TokioFileSystem::new();
    let provider = FileSecretProvider::new(fs, &config.secrets_file);
    let output = ResolveEnvironment::new(fs, provider)
        .execute(&config.source_file, &config.template_vars)
        .await?;

    let mut stdout = io::stdout().lock();
    for (key, value) in &output.variables {
        writeln!(stdout, "{key}={value}")?;
    }
    stdout.flush()?;

    Ok(())
}
