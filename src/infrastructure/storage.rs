use crate::config::StorageConfig;
use crate::services::storage::S3ObjectStore;
use aws_sdk_s3::config::Region;
use std::sync::Arc;
use tracing::info;

pub async fn setup_storage(config: &StorageConfig) -> Arc<S3ObjectStore> {
    info!(
        "☁️  S3 Storage: {} (Bucket: {})",
        config.endpoint_url.as_deref().unwrap_or("default endpoint"),
        config.bucket
    );

    let mut loader = aws_config::from_env().region(Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    if let (Some(access_key), Some(secret_key)) = (&config.access_key, &config.secret_key) {
        loader = loader.credentials_provider(aws_sdk_s3::config::Credentials::new(
            access_key, secret_key, None, None, "static",
        ));
    }

    let aws_config = loader.load().await;

    // Path-style addressing so custom endpoints like MinIO resolve
    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(config.endpoint_url.is_some())
        .build();

    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
    Arc::new(S3ObjectStore::new(s3_client, config.bucket.clone()))
}
