//! AWS SDK client setup.

use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

use crate::config::Config;

/// Creates a DynamoDB client for the configured target.
///
/// When running offline, DynamoDB Local accepts any credentials, so fixed
/// ones are supplied instead of walking the default provider chain.
pub async fn create_client(config: &Config) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = config.resolved_region() {
        sdk_config_loader = sdk_config_loader.region(aws_config::Region::new(region.to_string()));
    }

    if let Some(endpoint) = config.resolved_endpoint_url() {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    if config.offline {
        sdk_config_loader = sdk_config_loader.credentials_provider(Credentials::new(
            "local",
            "local",
            None,
            None,
            "patients-offline",
        ));
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
