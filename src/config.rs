use anyhow::{Context, Result};
use clap::Parser;
use std::{env, fmt, time::Duration};

/// Credential material sourced from the environment.
///
/// Wrapping the raw string keeps it out of `Debug` output, so logging the
/// whole config at startup cannot leak it.
#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying value. Callers must not log or echo it.
    #[allow(dead_code)]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub command_timeout_secs: u64,
    pub command_max_output_bytes: usize,
    pub db_username: Option<Secret>,
    pub db_password: Option<Secret>,
    pub api_key: Option<Secret>,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Security-scanner training fixture service")]
pub struct Args {
    /// Host to bind to (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Timeout in seconds for /run-command executions (overrides COMMAND_TIMEOUT_SECS)
    #[arg(long)]
    pub command_timeout_secs: Option<u64>,

    /// Captured-output cap in bytes for /run-command (overrides COMMAND_MAX_OUTPUT_BYTES)
    #[arg(long)]
    pub command_max_output_bytes: Option<usize>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        let args = Args::parse();
        Self::merge(args)
    }

    /// Merge parsed CLI args over environment fallbacks.
    fn merge(args: Args) -> Result<Self> {
        let env_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = parse_env_var("PORT", 5000)?;
        let env_timeout = parse_env_var("COMMAND_TIMEOUT_SECS", 5)?;
        let env_max_output = parse_env_var("COMMAND_MAX_OUTPUT_BYTES", 64 * 1024)?;

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            command_timeout_secs: args.command_timeout_secs.unwrap_or(env_timeout),
            command_max_output_bytes: args.command_max_output_bytes.unwrap_or(env_max_output),
            db_username: secret_env_var("DB_USERNAME"),
            db_password: secret_env_var("DB_PASSWORD"),
            api_key: secret_env_var("API_KEY"),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

/// Read an env var and parse it, falling back to `default` when unset.
fn parse_env_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("parsing {} value `{}`", name, value)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {}", name)),
    }
}

/// Read an env var into a `Secret`, treating absence as "not configured".
fn secret_env_var(name: &str) -> Option<Secret> {
    env::var(name).ok().map(Secret::new)
}
