#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use urlsync::checksum::{ChecksumAccumulator, HashType};
use urlsync::{SyncRequest, Syncer, SyncerBuilder};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const ZONE_PATH: &str = "/domain/root.zone";
pub const LAST_MODIFIED: &str = "Fri, 01 Jan 2021 00:00:00 GMT";
pub const LAST_MODIFIED_UNIX: i64 = 1_609_459_200;
pub const CHECKSUM_LAST_MODIFIED: &str = "Fri, 01 Jan 2021 00:05:00 GMT";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

/// Lowercase hex digest of `data`
pub fn hex_digest(hash_type: HashType, data: &[u8]) -> String {
    let mut acc = ChecksumAccumulator::new(hash_type);
    acc.update(data);
    acc.hex_digest()
}

/// A 200 response carrying `body` and the given `Last-Modified`
pub fn ok_response(body: &[u8], last_modified: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-length", body.len().to_string().as_str())
        .insert_header("last-modified", last_modified)
        .set_body_bytes(body.to_vec())
}

/// Serve metadata for `route` on HEAD
pub async fn mount_head(server: &MockServer, route: &str, body: &[u8], expected: u64) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ok_response(body, LAST_MODIFIED))
        .expect(expected)
        .mount(server)
        .await;
}

/// Serve `body` for `route` on GET
pub async fn mount_get(
    server: &MockServer,
    route: &str,
    body: &[u8],
    last_modified: &str,
    expected: u64,
) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ok_response(body, last_modified))
        .expect(expected)
        .mount(server)
        .await;
}

/// Serve the same resource on HEAD and GET
pub async fn mount_resource(
    server: &MockServer,
    route: &str,
    body: &[u8],
    expected_heads: u64,
    expected_gets: u64,
) {
    mount_head(server, route, body, expected_heads).await;
    mount_get(server, route, body, LAST_MODIFIED, expected_gets).await;
}

/// Serve a checksum file next to `route`
pub async fn mount_checksum(
    server: &MockServer,
    route: &str,
    suffix: &str,
    content: &str,
    expected: u64,
) {
    mount_get(
        server,
        &format!("{route}{suffix}"),
        content.as_bytes(),
        CHECKSUM_LAST_MODIFIED,
        expected,
    )
    .await;
}

/// Syncer with the progress bar hidden
pub fn create_test_syncer() -> Syncer {
    SyncerBuilder::hidden()
        .build()
        .expect("Failed to build syncer")
}

/// Request syncing `ZONE_PATH` on `server` into `dir/root.zone`
pub fn create_test_request(server: &MockServer, dir: &Path) -> SyncRequest {
    SyncRequest::parse(&format!("{}{}", server.uri(), ZONE_PATH), dir.join("root.zone"))
        .expect("Failed to create request")
}

/// Creates a file with the given content and modification time
pub fn create_local_file(path: &Path, content: &[u8], mtime: i64) -> PathBuf {
    fs::write(path, content).expect("Failed to write local file");
    let time = filetime::FileTime::from_unix_time(mtime, 0);
    filetime::set_file_mtime(path, time).expect("Failed to set mtime");
    path.to_path_buf()
}

/// Modification time of `path` in unix seconds
pub fn mtime(path: &Path) -> i64 {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    filetime::FileTime::from_last_modification_time(&metadata).unix_seconds()
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).expect("Failed to read file");
    assert_eq!(content, expected, "File content mismatch at path: {:?}", path);
}

/// Serve `body` at every path with chunked transfer encoding, so neither
/// HEAD nor GET responses carry a `Content-Length`. Returns the base URI.
pub async fn spawn_chunked_server(body: Vec<u8>) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind chunked server");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let body = body.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let mut response = format!(
                    "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nLast-Modified: {LAST_MODIFIED}\r\nConnection: close\r\n\r\n"
                )
                .into_bytes();
                if !request.starts_with(b"HEAD ") {
                    response.extend_from_slice(format!("{:x}\r\n", body.len()).as_bytes());
                    response.extend_from_slice(&body);
                    response.extend_from_slice(b"\r\n0\r\n\r\n");
                }
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}
