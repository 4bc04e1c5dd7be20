use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
///
/// Defaults target a local LocalStack setup so the service runs out of
/// the box in development.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub region: String,
    pub endpoint_url: String,
    pub table_name: String,
    pub bucket_name: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub request_timeout_secs: u64,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Inventory Management REST API")]
pub struct Args {
    /// Host to bind to (overrides INVENTORY_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides INVENTORY_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// AWS region (overrides AWS_REGION)
    #[arg(long)]
    pub region: Option<String>,

    /// Store endpoint URL, e.g. a LocalStack address (overrides AWS_ENDPOINT_URL)
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// DynamoDB table holding inventory records (overrides TABLE_NAME)
    #[arg(long)]
    pub table_name: Option<String>,

    /// S3 bucket holding downloadable files (overrides BUCKET_NAME)
    #[arg(long)]
    pub bucket_name: Option<String>,

    /// Per-call store operation timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("INVENTORY_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("INVENTORY_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing INVENTORY_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 8080,
            Err(err) => return Err(err).context("reading INVENTORY_PORT"),
        };
        let env_region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".into());
        let env_endpoint =
            env::var("AWS_ENDPOINT_URL").unwrap_or_else(|_| "http://localstack:4566".into());
        let env_table = env::var("TABLE_NAME").unwrap_or_else(|_| "Inventory".into());
        let env_bucket = env::var("BUCKET_NAME").unwrap_or_else(|_| "inventory-files".into());
        let env_access_key = env::var("AWS_ACCESS_KEY_ID").unwrap_or_else(|_| "test".into());
        let env_secret_key = env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_else(|_| "test".into());
        let env_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .with_context(|| format!("parsing REQUEST_TIMEOUT_SECS value `{}`", value))?,
            Err(env::VarError::NotPresent) => 30,
            Err(err) => return Err(err).context("reading REQUEST_TIMEOUT_SECS"),
        };

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            region: args.region.unwrap_or(env_region),
            endpoint_url: args.endpoint_url.unwrap_or(env_endpoint),
            table_name: args.table_name.unwrap_or(env_table),
            bucket_name: args.bucket_name.unwrap_or(env_bucket),
            access_key_id: env_access_key,
            secret_access_key: env_secret_key,
            request_timeout_secs: args.request_timeout_secs.unwrap_or(env_timeout),
        };

        Ok(cfg)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_joins_host_and_port() {
        let cfg = AppConfig {
            host: "127.0.0.1".into(),
            port: 8080,
            region: "us-east-1".into(),
            endpoint_url: "http://localstack:4566".into(),
            table_name: "Inventory".into(),
            bucket_name: "inventory-files".into(),
            access_key_id: "test".into(),
            secret_access_key: "test".into(),
            request_timeout_secs: 30,
        };
        assert_eq!(cfg.addr(), "127.0.0.1:8080");
    }
}
