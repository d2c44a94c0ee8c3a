//! Streaming sink with chunk observers.
//!
//! [`ObservedSink`] wraps the destination writer. Every chunk is written
//! first and then handed to each registered [`ChunkObserver`] (byte counter,
//! checksum accumulator, progress bar), before the next chunk is pulled from
//! the network.
//!
//! # Example
//!
//! ```rust
//! use urlsync::download::{ByteCounter, ObservedSink};
//!
//! # async fn example() -> std::io::Result<()> {
//! let mut counter = ByteCounter::default();
//! let mut sink = ObservedSink::new(Vec::<u8>::new()).observe_with(&mut counter);
//! sink.write_chunk(b"hello ").await?;
//! sink.write_chunk(b"world").await?;
//! let written = sink.finish().await?;
//! assert_eq!(written, b"hello world");
//! assert_eq!(counter.total(), 11);
//! # Ok(())
//! # }
//! ```

use crate::checksum::ChecksumAccumulator;

use indicatif::ProgressBar;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Something that wants to see every chunk of a transfer.
pub trait ChunkObserver {
    fn observe(&mut self, chunk: &[u8]);
}

/// Counts the bytes that went through the sink.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByteCounter {
    total: u64,
}

impl ByteCounter {
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl ChunkObserver for ByteCounter {
    fn observe(&mut self, chunk: &[u8]) {
        self.total += chunk.len() as u64;
    }
}

impl ChunkObserver for ChecksumAccumulator {
    fn observe(&mut self, chunk: &[u8]) {
        self.update(chunk);
    }
}

impl ChunkObserver for ProgressBar {
    fn observe(&mut self, chunk: &[u8]) {
        self.inc(chunk.len() as u64);
    }
}

/// Writer stage that forwards each written chunk to its observers.
pub struct ObservedSink<'a, W> {
    inner: W,
    observers: Vec<&'a mut dyn ChunkObserver>,
}

impl<'a, W: AsyncWrite + Unpin> ObservedSink<'a, W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            observers: Vec::new(),
        }
    }

    /// Register one more observer.
    pub fn observe_with(mut self, observer: &'a mut dyn ChunkObserver) -> Self {
        self.observers.push(observer);
        self
    }

    /// Write a whole chunk, then notify the observers.
    ///
    /// Observers only see bytes that were accepted by the writer.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.inner.write_all(chunk).await?;
        for observer in self.observers.iter_mut() {
            observer.observe(chunk);
        }
        Ok(())
    }

    /// Flush the writer and give it back, releasing the observers.
    pub async fn finish(mut self) -> io::Result<W> {
        self.inner.flush().await?;
        Ok(self.inner)
    }
}
