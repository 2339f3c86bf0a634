use anyhow::{Result, bail};
use std::env;

/// Region used when S3_REGION is not set
pub const DEFAULT_REGION: &str = "us-east-1";

/// Object storage configuration, resolved once at process startup
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Target bucket for every upload (required)
    pub bucket: String,

    /// Custom endpoint, e.g. a local MinIO (optional)
    pub endpoint_url: Option<String>,

    /// Region handed to the SDK (default: "us-east-1")
    pub region: String,

    /// Static access key; when unset the SDK default credential chain applies
    pub access_key: Option<String>,

    /// Static secret key, paired with `access_key`
    pub secret_key: Option<String>,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing or empty `S3_BUCKET_NAME` is fatal: the service cannot
    /// accept a single request without a target bucket.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bucket = match lookup("S3_BUCKET_NAME") {
            Some(b) if !b.trim().is_empty() => b,
            _ => bail!("S3_BUCKET_NAME must be set to a non-empty bucket name"),
        };

        Ok(Self {
            bucket,
            endpoint_url: lookup("S3_ENDPOINT").filter(|v| !v.is_empty()),
            region: lookup("S3_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key: lookup("S3_ACCESS_KEY").filter(|v| !v.is_empty()),
            secret_key: lookup("S3_SECRET_KEY").filter(|v| !v.is_empty()),
        })
    }

    /// True when both halves of a static credential pair are present
    pub fn has_static_credentials(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }
}
