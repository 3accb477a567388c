//! Configuration module
//!
//! Configuration is read once at startup from the process environment (after
//! loading an optional `.env` file) and is immutable afterwards.

use std::env;

use crate::constants::DEFAULT_INTERVAL_SECONDS;

const SERVER_PORT: u16 = 3000;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub s3_bucket_name: String,
    /// Public CDN host used to build media URLs. `None` falls back to the bucket URL.
    pub cloudfront_domain: Option<String>,
    /// Config table name. `None` disables the academy config lookup.
    pub dynamodb_table: Option<String>,
    pub default_interval_seconds: i64,
    pub aws_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub server_port: u16,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let default_interval_seconds = match var("DEFAULT_INTERVAL_SECONDS") {
            Some(raw) => raw.parse::<i64>().map_err(|e| {
                anyhow::anyhow!("DEFAULT_INTERVAL_SECONDS must be an integer ({}): {}", raw, e)
            })?,
            None => DEFAULT_INTERVAL_SECONDS,
        };

        let server_port = match var("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("SERVER_PORT must be a valid port ({}): {}", raw, e))?,
            None => SERVER_PORT,
        };

        Ok(Config {
            s3_bucket_name: var("S3_BUCKET_NAME").unwrap_or_default(),
            cloudfront_domain: var("CLOUDFRONT_DOMAIN"),
            dynamodb_table: var("DYNAMODB_TABLE"),
            default_interval_seconds,
            aws_region: var("AWS_REGION").or_else(|| var("AWS_DEFAULT_REGION")),
            s3_endpoint: var("S3_ENDPOINT"),
            server_port,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.s3_bucket_name.is_empty() {
            return Err(anyhow::anyhow!("S3_BUCKET_NAME must be set"));
        }

        if let Some(ref domain) = self.cloudfront_domain {
            if domain.contains("://") || domain.ends_with('/') {
                return Err(anyhow::anyhow!(
                    "CLOUDFRONT_DOMAIN must be a bare host name, got '{}'",
                    domain
                ));
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.to_lowercase().as_str(), "production" | "prod")
    }
}
