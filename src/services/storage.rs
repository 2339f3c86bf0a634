use anyhow::{Result, anyhow};
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use std::collections::HashMap;
use std::sync::Mutex;

/// Trait over the object storage backend so handlers and tests can swap
/// implementations
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write `data` under `key`. An existing object under the same key is
    /// overwritten silently.
    async fn put_object(&self, key: &str, data: Vec<u8>) -> Result<()>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;
}

/// S3-backed store. Connection pooling, credentials and transport retries
/// belong to the SDK client, not to this wrapper.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3ObjectStore {
    async fn put_object(&self, key: &str, data: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await?;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .is_ok()
    }
}

/// Map-backed store for tests and local development
#[derive(Default)]
pub struct InMemoryStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ObjectStorage for InMemoryStore {
    async fn put_object(&self, key: &str, data: Vec<u8>) -> Result<()> {
        self.objects.lock().unwrap().insert(key.to_string(), data);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Store that rejects every write, for exercising the failure path
pub struct FailingStore;

#[async_trait::async_trait]
impl ObjectStorage for FailingStore {
    async fn put_object(&self, key: &str, _data: Vec<u8>) -> Result<()> {
        Err(anyhow!("access denied for key {key}"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_put_and_get() {
        let store = InMemoryStore::default();
        store.put_object("a.txt", b"hello".to_vec()).await.unwrap();
        assert_eq!(store.get("a.txt"), Some(b"hello".to_vec()));
        assert_eq!(store.len(), 1);
        assert!(store.health_check().await);
    }

    #[tokio::test]
    async fn test_in_memory_overwrite_is_silent() {
        let store = InMemoryStore::default();
        store.put_object("a.txt", b"first".to_vec()).await.unwrap();
        store.put_object("a.txt", b"second".to_vec()).await.unwrap();
        assert_eq!(store.get("a.txt"), Some(b"second".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_failing_store_rejects_writes() {
        let store = FailingStore;
        let err = store.put_object("a.txt", b"x".to_vec()).await.unwrap_err();
        assert!(err.to_string().contains("a.txt"));
        assert!(!store.health_check().await);
    }
}
