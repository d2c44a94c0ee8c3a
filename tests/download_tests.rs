//! Staged downloads and metadata probes against a local HTTP server.

use reqwest::Url;
use urlsync::checksum::{ChecksumAccumulator, HashType};
use urlsync::download::download;
use urlsync::probe::{probe, stat_local};
use urlsync::progress::{ProgressBarOpts, ProgressDisplay};
use urlsync::{create_http_client, Error, HttpClientConfig};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

fn zone_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}{}", server.uri(), ZONE_PATH)).unwrap()
}

#[tokio::test]
async fn test_download_hashes_and_sets_file_times() {
    let server = MockServer::start().await;
    let content = create_test_content(4096);
    mount_get(&server, ZONE_PATH, &content, LAST_MODIFIED, 1).await;

    let dir = create_temp_dir();
    let temp = dir.path().join("root.zone.sync.tmp");
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let progress = ProgressDisplay::new(ProgressBarOpts::hidden());
    let mut acc = ChecksumAccumulator::new(HashType::Md5);

    let result = download(&client, &zone_url(&server), &temp, Some(&mut acc), &progress)
        .await
        .unwrap();

    assert_eq!(result.bytes_written, 4096);
    assert_eq!(result.last_modified, LAST_MODIFIED_UNIX);
    assert_eq!(result.digest, Some(hex_digest(HashType::Md5, &content)));

    // Reading the file may bump atime under relatime, so stat it first.
    let metadata = std::fs::metadata(&temp).unwrap();
    let atime = filetime::FileTime::from_last_access_time(&metadata);
    assert_eq!(atime.unix_seconds(), LAST_MODIFIED_UNIX);
    assert_eq!(mtime(&temp), LAST_MODIFIED_UNIX);

    assert_file_content(&temp, &content);
}

#[tokio::test]
async fn test_download_without_accumulator_has_no_digest() {
    let server = MockServer::start().await;
    mount_get(&server, ZONE_PATH, b"zone data", LAST_MODIFIED, 1).await;

    let dir = create_temp_dir();
    let temp = dir.path().join("root.zone.sync.tmp");
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let progress = ProgressDisplay::new(ProgressBarOpts::hidden());

    let result = download(&client, &zone_url(&server), &temp, None, &progress)
        .await
        .unwrap();
    assert_eq!(result.bytes_written, 9);
    assert!(result.digest.is_none());
}

#[tokio::test]
async fn test_download_overwrites_stale_temp_file() {
    let server = MockServer::start().await;
    mount_get(&server, ZONE_PATH, b"new", LAST_MODIFIED, 1).await;

    let dir = create_temp_dir();
    let temp = dir.path().join("root.zone.sync.tmp");
    std::fs::write(&temp, b"leftover from an earlier run").unwrap();
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let progress = ProgressDisplay::new(ProgressBarOpts::hidden());

    download(&client, &zone_url(&server), &temp, None, &progress)
        .await
        .unwrap();
    assert_file_content(&temp, b"new");
}

#[tokio::test]
async fn test_probe_reads_declared_metadata() {
    let server = MockServer::start().await;
    mount_head(&server, ZONE_PATH, &create_test_content(1000), 1).await;

    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let remote = probe(&client, &zone_url(&server)).await.unwrap();
    assert_eq!(remote.size, Some(1000));
    assert_eq!(remote.last_modified, LAST_MODIFIED_UNIX);
}

#[tokio::test]
async fn test_probe_without_content_length() {
    let base = spawn_chunked_server(create_test_content(64)).await;

    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let url = Url::parse(&format!("{base}{ZONE_PATH}")).unwrap();
    let remote = probe(&client, &url).await.unwrap();
    assert_eq!(remote.size, None);
    assert_eq!(remote.last_modified, LAST_MODIFIED_UNIX);
}

#[tokio::test]
async fn test_probe_accepts_rfc850_dates() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path(ZONE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-length", "3")
                .insert_header("last-modified", "Friday, 01-Jan-21 00:00:00 GMT")
                .set_body_bytes(b"abc".to_vec()),
        )
        .mount(&server)
        .await;

    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let remote = probe(&client, &zone_url(&server)).await.unwrap();
    assert_eq!(remote.last_modified, LAST_MODIFIED_UNIX);
}

#[tokio::test]
async fn test_probe_rejects_unparseable_date() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path(ZONE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-length", "3")
                .insert_header("last-modified", "yesterday")
                .set_body_bytes(b"abc".to_vec()),
        )
        .mount(&server)
        .await;

    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let err = probe(&client, &zone_url(&server)).await.unwrap_err();
    match err {
        Error::MetadataUnavailable { reason, .. } => assert!(reason.contains("unparseable")),
        other => panic!("expected MetadataUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path(ZONE_PATH))
        .and(header_exists("user-agent"))
        .respond_with(ok_response(b"abc", LAST_MODIFIED))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_http_client(HttpClientConfig::default()).unwrap();
    assert!(probe(&client, &zone_url(&server)).await.is_ok());
}

#[tokio::test]
async fn test_network_error() {
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let url = Url::parse("http://127.0.0.1:1/root.zone").unwrap();
    let err = probe(&client, &url).await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "{err:?}");
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_stat_local() {
    let dir = create_temp_dir();
    let path = dir.path().join("root.zone");
    assert!(stat_local(&path).await.unwrap().is_none());

    create_local_file(&path, b"12345", LAST_MODIFIED_UNIX);
    let local = stat_local(&path).await.unwrap().unwrap();
    assert_eq!(local.size, 5);
    assert_eq!(local.modified, LAST_MODIFIED_UNIX);
}
