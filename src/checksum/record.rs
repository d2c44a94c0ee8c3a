//! Checksum-file parsing and verification.
//!
//! Checksum files come in many layouts (`digest  filename`,
//! `MD5 (filename) = digest`, a bare digest, ...). Rather than parse any one
//! of them, the content is treated as a flat sequence of whitespace-separated
//! tokens and a digest matches when it equals one of those tokens exactly.

use crate::error::{Error, Result};

use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Whitespace-separated view over checksum-file content.
#[derive(Debug, Clone, Copy)]
pub struct ChecksumRecord<'a> {
    content: &'a [u8],
}

impl<'a> ChecksumRecord<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self { content }
    }

    /// Iterate over the non-empty tokens of the content.
    pub fn tokens(&self) -> impl Iterator<Item = &'a [u8]> {
        let content = self.content;
        content
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
    }

    /// Whether any token equals `digest`, byte for byte.
    ///
    /// ```
    /// use urlsync::checksum::ChecksumRecord;
    ///
    /// let record = ChecksumRecord::new(b"MD5 (root.zone) = 5eb63bbbe01eeed093cb22bb8f5acdc3\n");
    /// assert!(record.contains("5eb63bbbe01eeed093cb22bb8f5acdc3"));
    /// assert!(!record.contains("5EB63BBBE01EEED093CB22BB8F5ACDC3"));
    /// ```
    pub fn contains(&self, digest: &str) -> bool {
        self.tokens().any(|token| {
            debug!(
                "checksum: {} token: {}",
                digest,
                String::from_utf8_lossy(token)
            );
            token == digest.as_bytes()
        })
    }
}

/// Look for `expected` among the tokens of the checksum file at `path`.
///
/// The file is read line by line and the search stops at the first match.
/// Reaching the end of the file without a match returns `Ok(false)`.
pub async fn verify(expected: &str, path: &Path) -> Result<bool> {
    let file = File::open(path)
        .await
        .map_err(|e| Error::filesystem(path, e))?;
    let mut lines = BufReader::new(file).split(b'\n');

    while let Some(line) = lines
        .next_segment()
        .await
        .map_err(|e| Error::filesystem(path, e))?
    {
        if ChecksumRecord::new(&line).contains(expected) {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "5eb63bbbe01eeed093cb22bb8f5acdc3";

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let record = ChecksumRecord::new(b" a\tb  c\r\nd\n\n");
        let tokens: Vec<&[u8]> = record.tokens().collect();
        assert_eq!(tokens, vec![&b"a"[..], &b"b"[..], &b"c"[..], &b"d"[..]]);
    }

    #[test]
    fn test_contains_common_layouts() {
        let layouts = [
            format!("{DIGEST}  root.zone\n"),
            format!("othertool: {DIGEST}\n"),
            format!("root.zone = {DIGEST}"),
            DIGEST.to_string(),
            format!("first line\r\n{DIGEST}\r\n"),
        ];
        for layout in layouts {
            assert!(
                ChecksumRecord::new(layout.as_bytes()).contains(DIGEST),
                "{layout:?} should match"
            );
        }
    }

    #[test]
    fn test_contains_requires_exact_token() {
        let record = ChecksumRecord::new(b"x5eb63bbbe01eeed093cb22bb8f5acdc3 root.zone");
        assert!(!record.contains(DIGEST));

        let record = ChecksumRecord::new(b"5eb63bbbe01eeed093cb22bb8f5acdc3:root.zone");
        assert!(!record.contains(DIGEST));

        assert!(!ChecksumRecord::new(b"").contains(DIGEST));
    }

    #[tokio::test]
    async fn test_verify_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.md5");
        let bad = dir.path().join("bad.md5");
        std::fs::write(&good, format!("unrelated\n{DIGEST}  root.zone\n")).unwrap();
        std::fs::write(&bad, "d41d8cd98f00b204e9800998ecf8427e  root.zone\n").unwrap();

        assert!(verify(DIGEST, &good).await.unwrap());
        assert!(!verify(DIGEST, &bad).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_missing_file_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = verify(DIGEST, &dir.path().join("absent.md5"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Filesystem { .. }));
    }
}
