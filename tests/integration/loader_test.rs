//! Directory loader integration tests over the Spaces storage facade.
//!
//! These drive the generic loader against a real S3-compatible backend,
//! exercising traversal, extension dispatch, and the built-in readers.

use crate::common::{generate_test_csv, generate_test_ndjson, SpacesTestContext};
use ds_loader::{DirectoryLoader, LoaderConfig, ReaderRegistry};
use ds_spaces::SpacesFs;

#[tokio::test]
#[ignore = "requires an S3-compatible endpoint"]
async fn test_loader_over_spaces_fs() {
    let ctx = SpacesTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let bucket = "ds-test-loader";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_text(bucket, "data/events.ndjson", &generate_test_ndjson(5))
        .await
        .unwrap();
    ctx.put_text(bucket, "data/users.csv", &generate_test_csv(3))
        .await
        .unwrap();
    ctx.put_text(bucket, "data/notes.txt", "plain notes")
        .await
        .unwrap();

    let fs = SpacesFs::new(ctx.s3.clone(), bucket);
    let config = LoaderConfig::directory("data");
    let loader = DirectoryLoader::new(fs, config, ReaderRegistry::defaults());

    let docs = loader.load().await.unwrap();

    // 5 NDJSON records + 1 CSV document + 1 text document, in key order
    assert_eq!(docs.len(), 7);
    assert!(docs[0].id.starts_with("data/events.ndjson_part_"));
    assert_eq!(docs[5].id, "data/notes.txt");
    assert_eq!(docs[5].text, "plain notes");
    assert_eq!(docs[6].id, "data/users.csv");
    assert!(docs[6].text.starts_with("id, name, score"));
}

#[tokio::test]
#[ignore = "requires an S3-compatible endpoint"]
async fn test_loader_extension_filter_over_spaces_fs() {
    let ctx = SpacesTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let bucket = "ds-test-loader-filter";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_text(bucket, "mixed/a.txt", "keep").await.unwrap();
    ctx.put_text(bucket, "mixed/b.csv", &generate_test_csv(1))
        .await
        .unwrap();

    let fs = SpacesFs::new(ctx.s3.clone(), bucket);
    let config = LoaderConfig::directory("mixed").with_required_exts(["txt"]);
    let loader = DirectoryLoader::new(fs, config, ReaderRegistry::defaults());

    let docs = loader.load().await.unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "mixed/a.txt");
}
