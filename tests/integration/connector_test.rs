//! Spaces connector integration tests against an S3-compatible endpoint.
//!
//! These verify the connector's raw operations and the full load path
//! against a real (local) S3 implementation.

use crate::common::{SpacesTestContext, TEST_KEY_ID, TEST_SECRET_KEY};
use ds_spaces::{SpacesConfig, SpacesConnector, ID_PREFIX};
use tokio::io::AsyncReadExt;

fn connector_config(ctx: &SpacesTestContext, bucket: &str) -> SpacesConfig {
    SpacesConfig::new(bucket, TEST_KEY_ID, TEST_SECRET_KEY, &ctx.endpoint)
}

#[tokio::test]
#[ignore = "requires an S3-compatible endpoint"]
async fn test_load_prefix_end_to_end() {
    let ctx = SpacesTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let bucket = "ds-test-load-prefix";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_text(bucket, "reports/a.txt", "alpha body")
        .await
        .unwrap();
    ctx.put_text(bucket, "reports/b.txt", "beta body")
        .await
        .unwrap();
    ctx.put_text(bucket, "other/c.txt", "outside the prefix")
        .await
        .unwrap();

    let connector = SpacesConnector::new(connector_config(&ctx, bucket).with_prefix("reports/"));
    let docs = connector.load().await.unwrap();

    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["do_spaces_reports/a.txt", "do_spaces_reports/b.txt"]
    );
    assert_eq!(docs[0].text, "alpha body");
    assert_eq!(docs[1].text, "beta body");
}

#[tokio::test]
#[ignore = "requires an S3-compatible endpoint"]
async fn test_load_single_key() {
    let ctx = SpacesTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let bucket = "ds-test-load-key";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_text(bucket, "reports/target.txt", "the one")
        .await
        .unwrap();
    ctx.put_text(bucket, "reports/other.txt", "not loaded")
        .await
        .unwrap();

    let connector = SpacesConnector::new(
        connector_config(&ctx, bucket)
            .with_key("reports/target.txt")
            .with_prefix("reports/"),
    );
    let docs = connector.load().await.unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, format!("{ID_PREFIX}reports/target.txt"));
    assert_eq!(docs[0].text, "the one");
}

#[tokio::test]
#[ignore = "requires an S3-compatible endpoint"]
async fn test_exists_and_list_dir() {
    let ctx = SpacesTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let bucket = "ds-test-exists-list";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_text(bucket, "dir/a.txt", "a").await.unwrap();
    ctx.put_text(bucket, "dir/b.txt", "b").await.unwrap();
    ctx.put_text(bucket, "dir/sub/c.txt", "c").await.unwrap();

    let connector = SpacesConnector::new(connector_config(&ctx, bucket));

    assert!(connector.exists("dir/a.txt").await.unwrap());
    assert!(connector.exists("dir").await.unwrap());
    assert!(!connector.exists("missing").await.unwrap());

    let names = connector.list_dir("dir").await.unwrap();
    assert_eq!(names, vec!["sub", "a.txt", "b.txt"]);
}

#[tokio::test]
#[ignore = "requires an S3-compatible endpoint"]
async fn test_make_dirs_semantics() {
    let ctx = SpacesTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let bucket = "ds-test-make-dirs";
    ctx.create_bucket(bucket).await.unwrap();

    let connector = SpacesConnector::new(connector_config(&ctx, bucket));

    connector.make_dirs("new/path", false).await.unwrap();
    assert!(connector.exists("new/path").await.unwrap());

    let err = connector.make_dirs("new/path", false).await.unwrap_err();
    assert!(err.is_already_exists());

    connector.make_dirs("new/path", true).await.unwrap();
}

#[tokio::test]
#[ignore = "requires an S3-compatible endpoint"]
async fn test_open_reads_object_bytes() {
    let ctx = SpacesTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let bucket = "ds-test-open";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_text(bucket, "blob.txt", "0123456789").await.unwrap();

    let connector = SpacesConnector::new(connector_config(&ctx, bucket));

    let mut reader = connector.open("blob.txt").await.unwrap();
    let mut body = String::new();
    reader.read_to_string(&mut body).await.unwrap();
    assert_eq!(body, "0123456789");

    let mut ranged = connector.open_range("blob.txt", 2..6).await.unwrap();
    let mut slice = String::new();
    ranged.read_to_string(&mut slice).await.unwrap();
    assert_eq!(slice, "2345");

    let err = match connector.open("missing.txt").await {
        Ok(_) => panic!("expected error opening missing.txt"),
        Err(e) => e,
    };
    assert!(err.is_not_found());
}
