use std::env;

use thiserror::Error;

/// Errors raised while loading configuration at cold start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Handler configuration loaded once per process from environment variables.
///
/// Handlers receive it through [`crate::AppState`] and never read the
/// environment themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding the records.
    pub table_name: String,
    /// S3 bucket receiving uploads.
    pub bucket_name: String,
    /// AWS region (default: "us-east-1").
    pub region: String,
    /// Custom endpoint for local DynamoDB/S3 emulators.
    pub endpoint_url: Option<String>,
}

impl Config {
    pub const TABLE_NAME_VAR: &'static str = "TABLEDYNAMO";
    pub const BUCKET_VAR: &'static str = "BUCKET";

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLEDYNAMO` - Records table name (required)
    /// - `BUCKET` - Upload bucket name (required)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Endpoint override for local emulators
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            table_name: required(Self::TABLE_NAME_VAR)?,
            bucket_name: required(Self::BUCKET_VAR)?,
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|value| !value.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_required_values_and_defaults() {
        let config =
            Config::from_lookup(lookup(&[("TABLEDYNAMO", "records"), ("BUCKET", "uploads")]))
                .unwrap();

        assert_eq!(config.table_name, "records");
        assert_eq!(config.bucket_name, "uploads");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TABLEDYNAMO", "records"),
            ("BUCKET", "uploads"),
            ("AWS_REGION", "eu-west-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:4566"),
        ]))
        .unwrap();

        assert_eq!(config.region, "eu-west-1");
        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
    }

    #[test]
    fn test_missing_table_name() {
        let err = Config::from_lookup(lookup(&[("BUCKET", "uploads")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("TABLEDYNAMO"));
    }

    #[test]
    fn test_empty_bucket_counts_as_missing() {
        let err =
            Config::from_lookup(lookup(&[("TABLEDYNAMO", "records"), ("BUCKET", "")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("BUCKET"));
    }
}
