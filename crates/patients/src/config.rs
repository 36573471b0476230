use std::env;

/// Table used when `PATIENTS_TABLE` is not set.
pub const DEFAULT_TABLE_NAME: &str = "patients";

/// Endpoint of a DynamoDB Local instance.
pub const LOCAL_ENDPOINT_URL: &str = "http://localhost:8000";

/// Region reported to DynamoDB Local.
pub const LOCAL_REGION: &str = "localhost";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding the patients (default: "patients")
    pub table_name: String,
    /// Talk to a local DynamoDB instead of AWS
    pub offline: bool,
    /// Explicit endpoint override
    pub endpoint_url: Option<String>,
    /// Explicit AWS region
    pub region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PATIENTS_TABLE` - DynamoDB table name (default: "patients")
    /// - `IS_OFFLINE` - any non-empty value selects DynamoDB Local
    /// - `DYNAMODB_ENDPOINT_URL` - endpoint override (default when offline: "http://localhost:8000")
    /// - `AWS_REGION` - region (default when offline: "localhost")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            table_name: non_empty("PATIENTS_TABLE")
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            offline: non_empty("IS_OFFLINE").is_some(),
            endpoint_url: non_empty("DYNAMODB_ENDPOINT_URL"),
            region: non_empty("AWS_REGION"),
        }
    }

    /// Endpoint the store client should use, if it should not use AWS's.
    pub fn resolved_endpoint_url(&self) -> Option<&str> {
        match (&self.endpoint_url, self.offline) {
            (Some(url), _) => Some(url),
            (None, true) => Some(LOCAL_ENDPOINT_URL),
            (None, false) => None,
        }
    }

    /// Region the store client should use, if it should not use the SDK's default chain.
    pub fn resolved_region(&self) -> Option<&str> {
        match (&self.region, self.offline) {
            (Some(region), _) => Some(region),
            (None, true) => Some(LOCAL_REGION),
            (None, false) => None,
        }
    }

    /// Returns a display string for the target store.
    pub fn target_display(&self) -> String {
        match self.resolved_endpoint_url() {
            Some(url) => format!("Local DynamoDB ({url}), table {}", self.table_name),
            None => format!("AWS DynamoDB, table {}", self.table_name),
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
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.table_name, "patients");
        assert!(!config.offline);
        assert_eq!(config.resolved_endpoint_url(), None);
        assert_eq!(config.resolved_region(), None);
    }

    #[test]
    fn test_offline_uses_local_dynamodb() {
        let config = config_from(&[("IS_OFFLINE", "true"), ("PATIENTS_TABLE", "patients-dev")]);

        assert!(config.offline);
        assert_eq!(config.table_name, "patients-dev");
        assert_eq!(config.resolved_endpoint_url(), Some("http://localhost:8000"));
        assert_eq!(config.resolved_region(), Some("localhost"));
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000), table patients-dev"
        );
    }

    #[test]
    fn test_empty_offline_flag_is_ignored() {
        let config = config_from(&[("IS_OFFLINE", "")]);

        assert!(!config.offline);
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let config = config_from(&[
            ("IS_OFFLINE", "1"),
            ("DYNAMODB_ENDPOINT_URL", "http://dynamodb:8000"),
            ("AWS_REGION", "sa-east-1"),
        ]);

        assert_eq!(config.resolved_endpoint_url(), Some("http://dynamodb:8000"));
        assert_eq!(config.resolved_region(), Some("sa-east-1"));
    }

    #[test]
    fn test_online_display() {
        let config = config_from(&[("AWS_REGION", "us-east-1")]);

        assert_eq!(config.target_display(), "AWS DynamoDB, table patients");
    }
}
