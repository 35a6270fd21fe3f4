use std::env;

#[cfg(feature = "dynamodb")]
use std::time::Duration;

#[cfg(feature = "dynamodb")]
use crate::storage::dynamodb::bootstrap::BootstrapOptions;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table name (default: "objects")
    pub table_name: String,
    /// Custom endpoint URL, for local DynamoDB (default: unset)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    #[allow(dead_code)]
    pub region: String,
    /// Maximum table-creation attempts before startup fails (default: 20)
    #[allow(dead_code)]
    pub bootstrap_max_attempts: u32,
    /// Backoff between table-creation attempts, in seconds (default: 3)
    #[allow(dead_code)]
    pub bootstrap_backoff_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "objects")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint for local DynamoDB
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `BOOTSTRAP_MAX_ATTEMPTS` - Table-creation attempt budget (default: 20)
    /// - `BOOTSTRAP_BACKOFF_SECONDS` - Backoff between attempts (default: 3)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "objects".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            bootstrap_max_attempts: env::var("BOOTSTRAP_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            bootstrap_backoff_seconds: env::var("BOOTSTRAP_BACKOFF_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
        }
    }

    /// Bootstrap settings as options for `ensure_table`.
    #[cfg(feature = "dynamodb")]
    pub fn bootstrap_options(&self) -> BootstrapOptions {
        BootstrapOptions {
            max_attempts: self.bootstrap_max_attempts,
            backoff: Duration::from_secs(self.bootstrap_backoff_seconds),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("DYNAMODB_TABLE_NAME");
        env::remove_var("AWS_ENDPOINT_URL");
        env::remove_var("AWS_REGION");
        env::remove_var("BOOTSTRAP_MAX_ATTEMPTS");
        env::remove_var("BOOTSTRAP_BACKOFF_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.table_name, "objects");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.bootstrap_max_attempts, 20);
        assert_eq!(config.bootstrap_backoff_seconds, 3);
    }

    #[cfg(feature = "dynamodb")]
    #[test]
    fn test_bootstrap_options_conversion() {
        let config = Config {
            table_name: "objects".to_string(),
            endpoint_url: None,
            region: "us-east-1".to_string(),
            bootstrap_max_attempts: 5,
            bootstrap_backoff_seconds: 1,
        };

        let options = config.bootstrap_options();
        assert_eq!(options.max_attempts, 5);
        assert_eq!(options.backoff, Duration::from_secs(1));
    }
}
