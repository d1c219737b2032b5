//! S3-compatible endpoint test context and utilities.

use aws_sdk_s3::Client as S3Client;

/// Static credentials accepted by LocalStack and default MinIO setups.
pub const TEST_KEY_ID: &str = "test";
pub const TEST_SECRET_KEY: &str = "test";

/// Test context providing an S3 client against a local endpoint.
pub struct SpacesTestContext {
    pub s3: S3Client,
    pub endpoint: String,
    pub region: String,
}

impl SpacesTestContext {
    /// Create a new test context.
    ///
    /// Uses the `SPACES_TEST_ENDPOINT` environment variable if set,
    /// otherwise defaults to `http://localhost:4566` (LocalStack).
    pub async fn new() -> Self {
        let endpoint = std::env::var("SPACES_TEST_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4566".to_string());
        let region = "us-east-1".to_string();

        let credentials = aws_sdk_s3::config::Credentials::new(
            TEST_KEY_ID,
            TEST_SECRET_KEY,
            None,
            None,
            "integration-tests",
        );

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(region.clone()))
            .endpoint_url(&endpoint)
            .credentials_provider(credentials)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        Self {
            s3: S3Client::from_conf(s3_config),
            endpoint,
            region,
        }
    }

    /// Check if the endpoint is available and healthy.
    pub async fn is_available(&self) -> bool {
        // Try to list buckets - this fails quickly if nothing is listening
        self.s3.list_buckets().send().await.is_ok()
    }

    /// Create a bucket for testing.
    pub async fn create_bucket(&self, name: &str) -> Result<(), aws_sdk_s3::Error> {
        let buckets = self.s3.list_buckets().send().await?;
        let exists = buckets
            .buckets()
            .iter()
            .any(|b| b.name().unwrap_or_default() == name);

        if !exists {
            self.s3.create_bucket().bucket(name).send().await?;
        }
        Ok(())
    }

    /// Upload a text object.
    pub async fn put_text(
        &self,
        bucket: &str,
        key: &str,
        body: &str,
    ) -> Result<(), aws_sdk_s3::Error> {
        self.s3
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body.as_bytes().to_vec().into())
            .send()
            .await?;
        Ok(())
    }

    /// Delete an object.
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), aws_sdk_s3::Error> {
        self.s3
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }

    /// List object keys in a bucket with optional prefix.
    pub async fn list_keys(
        &self,
        bucket: &str,
        prefix: Option<&str>,
    ) -> Result<Vec<String>, aws_sdk_s3::Error> {
        let mut request = self.s3.list_objects_v2().bucket(bucket);
        if let Some(p) = prefix {
            request = request.prefix(p);
        }

        let result = request.send().await?;
        Ok(result
            .contents()
            .iter()
            .filter_map(|o| o.key().map(String::from))
            .collect())
    }
}

/// Generate test NDJSON data with the specified number of records.
pub fn generate_test_ndjson(num_records: usize) -> String {
    (0..num_records)
        .map(|i| {
            format!(
                r#"{{"id":{},"name":"user_{}","score":{}}}"#,
                i,
                i,
                (i * 7) % 100
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate test CSV data with the specified number of rows.
pub fn generate_test_csv(num_rows: usize) -> String {
    let mut lines = vec!["id,name,score".to_string()];
    for i in 0..num_rows {
        lines.push(format!("{},user_{},{}", i, i, (i * 7) % 100));
    }
    lines.join("\n")
}
