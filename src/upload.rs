//! Object storage upload for the generated files.
//!
//! The upload pass talks to storage through the [`ObjectStore`] trait so the
//! bucket/upload flow can be exercised against a fake in tests; [`S3Store`]
//! is the real implementation. One run uploads into a date-named bucket,
//! creating it when the existence probe does not find it.

use crate::config::UploadConfig;
use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use std::path::PathBuf;
use tracing::{info, warn};

/// Region all buckets are created in.
pub const AWS_REGION: &str = "ap-southeast-2";

/// Default bucket name prefix; the run date is appended.
pub const DEFAULT_BUCKET_PREFIX: &str = "sample-customer1";

/// Destination bucket for a given calendar date.
pub fn bucket_name(prefix: &str, date: chrono::NaiveDate) -> String {
    format!("{}-{}", prefix, date.format("%Y-%m-%d"))
}

/// Storage operations the upload pass needs.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Probe whether the bucket exists. `Ok(false)` means a definitive "not
    /// found"; other probe failures are errors.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Create the bucket.
    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Upload one object's full contents.
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;
}

/// Make sure the destination bucket exists, creating it when the probe does
/// not find it. A probe error is logged and treated as "missing"; a creation
/// failure is an error.
pub async fn ensure_bucket<S: ObjectStore + ?Sized>(store: &S, bucket: &str) -> Result<()> {
    let exists = match store.bucket_exists(bucket).await {
        Ok(exists) => exists,
        Err(e) => {
            warn!("Bucket probe failed for {bucket}, assuming missing: {e:#}");
            false
        }
    };

    if !exists {
        info!("Creating bucket {bucket}");
        store
            .create_bucket(bucket)
            .await
            .with_context(|| format!("Failed to create bucket {bucket}"))?;
    }

    Ok(())
}

/// Upload the files to the bucket, keyed by bare filename. A file that
/// cannot be read is logged and skipped; an upload failure is an error.
/// Returns the number of files uploaded.
pub async fn upload_files<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    files: &[PathBuf],
) -> Result<usize> {
    let mut uploaded = 0;

    for path in files {
        let key = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("File path {} has no usable filename", path.display()))?;

        let body = match std::fs::read(path) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to open {} for upload, skipping: {e}", path.display());
                continue;
            }
        };

        info!("Uploading file {} to bucket {bucket}", path.display());
        store
            .put_object(bucket, key, body)
            .await
            .with_context(|| format!("Failed to upload {key} to bucket {bucket}"))?;
        uploaded += 1;
    }

    Ok(uploaded)
}

/// One full upload pass: ensure the bucket, then upload every file.
pub async fn upload_to_bucket<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    files: &[PathBuf],
) -> Result<usize> {
    ensure_bucket(store, bucket).await?;
    upload_files(store, bucket, files).await
}

/// S3-backed [`ObjectStore`].
pub struct S3Store {
    client: aws_sdk_s3::Client,
}

impl S3Store {
    /// Build a client for the fixed region with static credentials.
    pub async fn new(config: &UploadConfig) -> Result<Self> {
        let credentials = aws_sdk_s3::config::Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "environment",
        );
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(AWS_REGION))
            .credentials_provider(credentials)
            .load()
            .await;
        let client = aws_sdk_s3::Client::new(&sdk_config);
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3Store {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_not_found() {
                    Ok(false)
                } else {
                    Err(anyhow::Error::from(err)
                        .context(format!("Failed to probe bucket {bucket}")))
                }
            }
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        let bucket_config = CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(AWS_REGION))
            .build();

        self.client
            .create_bucket()
            .bucket(bucket)
            .create_bucket_configuration(bucket_config)
            .send()
            .await
            .with_context(|| format!("CreateBucket call failed for {bucket}"))?;

        Ok(())
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .with_context(|| format!("PutObject call failed for {key}"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// In-memory store that records every call in order.
    #[derive(Default)]
    struct FakeStore {
        bucket_present: bool,
        fail_probe: bool,
        fail_create: bool,
        fail_put_key: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeStore {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ObjectStore for FakeStore {
        async fn bucket_exists(&self, _bucket: &str) -> Result<bool> {
            self.calls.lock().unwrap().push("probe".to_string());
            if self.fail_probe {
                anyhow::bail!("probe exploded");
            }
            Ok(self.bucket_present)
        }

        async fn create_bucket(&self, _bucket: &str) -> Result<()> {
            self.calls.lock().unwrap().push("create".to_string());
            if self.fail_create {
                anyhow::bail!("creation exploded");
            }
            Ok(())
        }

        async fn put_object(&self, _bucket: &str, key: &str, _body: Vec<u8>) -> Result<()> {
            self.calls.lock().unwrap().push(format!("put:{key}"));
            if self.fail_put_key.as_deref() == Some(key) {
                anyhow::bail!("upload exploded for {key}");
            }
            Ok(())
        }
    }

    fn write_temp_files(dir: &TempDir, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                std::fs::write(&path, format!("{name} contents")).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_bucket_name_appends_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            bucket_name(DEFAULT_BUCKET_PREFIX, date),
            "sample-customer1-2024-03-07"
        );
    }

    #[tokio::test]
    async fn test_existing_bucket_is_never_created() {
        let temp_dir = TempDir::new().unwrap();
        let files = write_temp_files(&temp_dir, &["a.csv", "b.csv"]);
        let store = FakeStore {
            bucket_present: true,
            ..Default::default()
        };

        let uploaded = upload_to_bucket(&store, "bucket", &files).await.unwrap();

        assert_eq!(uploaded, 2);
        assert_eq!(store.calls(), vec!["probe", "put:a.csv", "put:b.csv"]);
    }

    #[tokio::test]
    async fn test_missing_bucket_created_once_before_uploads() {
        let temp_dir = TempDir::new().unwrap();
        let files = write_temp_files(&temp_dir, &["a.csv"]);
        let store = FakeStore::default();

        upload_to_bucket(&store, "bucket", &files).await.unwrap();

        assert_eq!(store.calls(), vec!["probe", "create", "put:a.csv"]);
    }

    #[tokio::test]
    async fn test_probe_failure_falls_back_to_create() {
        let temp_dir = TempDir::new().unwrap();
        let files = write_temp_files(&temp_dir, &["a.csv"]);
        let store = FakeStore {
            fail_probe: true,
            ..Default::default()
        };

        upload_to_bucket(&store, "bucket", &files).await.unwrap();

        assert_eq!(store.calls(), vec!["probe", "create", "put:a.csv"]);
    }

    #[tokio::test]
    async fn test_bucket_creation_failure_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let files = write_temp_files(&temp_dir, &["a.csv", "b.csv"]);
        let store = FakeStore {
            fail_create: true,
            ..Default::default()
        };

        let result = upload_to_bucket(&store, "bucket", &files).await;

        assert!(result.is_err());
        // The pass dies at creation; no upload is ever attempted.
        assert_eq!(store.calls(), vec!["probe", "create"]);
    }

    #[tokio::test]
    async fn test_missing_file_skipped_and_rest_uploaded() {
        let temp_dir = TempDir::new().unwrap();
        let mut files = write_temp_files(&temp_dir, &["a.csv", "b.csv", "c.csv", "d.csv"]);
        files.insert(2, temp_dir.path().join("ghost.csv"));
        let store = FakeStore {
            bucket_present: true,
            ..Default::default()
        };

        let uploaded = upload_to_bucket(&store, "bucket", &files).await.unwrap();

        assert_eq!(uploaded, 4);
        assert_eq!(
            store.calls(),
            vec!["probe", "put:a.csv", "put:b.csv", "put:c.csv", "put:d.csv"]
        );
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_the_pass() {
        let temp_dir = TempDir::new().unwrap();
        let files = write_temp_files(&temp_dir, &["a.csv", "b.csv", "c.csv"]);
        let store = FakeStore {
            bucket_present: true,
            fail_put_key: Some("b.csv".to_string()),
            ..Default::default()
        };

        let result = upload_to_bucket(&store, "bucket", &files).await;

        assert!(result.is_err());
        // a.csv went through, b.csv failed, c.csv was never attempted.
        assert_eq!(store.calls(), vec!["probe", "put:a.csv", "put:b.csv"]);
    }
}
