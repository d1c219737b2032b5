//! S3 client construction for Spaces endpoints.

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use ds_error::Result;

use crate::config::SpacesConfig;

/// Create an S3 client bound to the configured Spaces endpoint.
///
/// Built fresh by every connector operation; nothing is cached or
/// pooled. Credential problems are not detected here - the SDK only
/// signs requests, so bad keys surface as access-denied errors on the
/// first call.
pub async fn create_client(config: &SpacesConfig) -> Result<Client> {
    use aws_config::Region;

    let credentials = aws_sdk_s3::config::Credentials::new(
        config.key_id.clone(),
        config.secret_key.clone(),
        None,
        None,
        "ds-spaces",
    );

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.resolved_region()))
        .endpoint_url(&config.endpoint)
        .credentials_provider(credentials)
        .load()
        .await;

    // Path-style addressing: works against DigitalOcean Spaces and is
    // required by LocalStack/MinIO endpoints used in tests.
    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(true)
        .build();

    Ok(Client::from_conf(s3_config))
}
