use crate::traits::{MediaStore, StorageError, StorageResult};
use academy_core::StoredObject;
use async_trait::async_trait;
use futures::TryStreamExt;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectMeta, ObjectStore, ObjectStoreExt};

const PING_KEY: &str = "health-check-non-existent-key";

/// S3 media store
#[derive(Clone)]
pub struct S3MediaStore {
    store: AmazonS3,
    bucket: String,
}

impl S3MediaStore {
    /// Create a new S3MediaStore
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region; `None` leaves the region to the environment (`AWS_REGION`)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(
        bucket: String,
        region: Option<String>,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket.clone());

        if let Some(region) = region {
            builder = builder.with_region(region);
        }

        if let Some(endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder.with_endpoint(endpoint).with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3MediaStore { store, bucket })
    }
}

/// Listing location for a key prefix.
///
/// `Path::from` percent-encodes each segment, but S3 keys are stored raw, so
/// the prefix is parsed as-is.
fn listing_location(prefix: &str) -> StorageResult<Path> {
    Path::parse(prefix).map_err(|e| StorageError::ListFailed(e.to_string()))
}

fn to_stored_object(meta: ObjectMeta) -> StoredObject {
    StoredObject {
        key: meta.location.to_string(),
        size: Some(meta.size),
        last_modified: Some(meta.last_modified),
    }
}

#[async_trait]
impl MediaStore for S3MediaStore {
    async fn list_objects(&self, prefix: &str) -> StorageResult<Vec<StoredObject>> {
        let start = std::time::Instant::now();
        let location = listing_location(prefix)?;

        // The list stream follows continuation tokens until the listing is exhausted.
        let objects: Vec<StoredObject> = self
            .store
            .list(Some(&location))
            .map_ok(to_stored_object)
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    prefix = %prefix,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 listing failed"
                );
                StorageError::ListFailed(e.to_string())
            })?;

        tracing::info!(
            bucket = %self.bucket,
            prefix = %prefix,
            object_count = objects.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 listing successful"
        );

        Ok(objects)
    }

    async fn ping(&self) -> StorageResult<()> {
        let location = Path::from(PING_KEY);
        match self.store.head(&location).await {
            Ok(_) | Err(ObjectStoreError::NotFound { .. }) => Ok(()),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn backend_name(&self) -> &'static str {
        "s3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::academy_prefix;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_listing_location_keeps_ascii_prefix() {
        let location = listing_location(&academy_prefix("gym1")).unwrap();
        assert_eq!(location.as_ref(), "academies/gym1");
    }

    #[test]
    fn test_listing_location_is_not_percent_encoded() {
        let location = listing_location(&academy_prefix("academia-são-paulo")).unwrap();
        assert_eq!(location.as_ref(), "academies/academia-são-paulo");

        let location = listing_location(&academy_prefix("gym~1")).unwrap();
        assert_eq!(location.as_ref(), "academies/gym~1");

        let location = listing_location(&academy_prefix("gym%20x")).unwrap();
        assert_eq!(location.as_ref(), "academies/gym%20x");
    }

    #[test]
    fn test_to_stored_object_maps_listing_entry() {
        let last_modified = Utc.with_ymd_and_hms(2024, 1, 3, 12, 30, 0).unwrap();
        let meta = ObjectMeta {
            location: Path::parse("academies/academia-são-paulo/foto 1.jpg").unwrap(),
            last_modified,
            size: 2_048,
            e_tag: None,
            version: None,
        };

        let object = to_stored_object(meta);
        assert_eq!(object.key, "academies/academia-são-paulo/foto 1.jpg");
        assert_eq!(object.size, Some(2_048));
        assert_eq!(object.last_modified, Some(last_modified));
    }
}
