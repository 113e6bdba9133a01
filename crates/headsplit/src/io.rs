//! IO helpers.
//!
//! Splitting requires the whole input in memory. These functions buffer a
//! stream up to a size limit.

use std::io::Read;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::Error;

/// Default maximum number of bytes buffered from an input.
pub const DEFAULT_INPUT_LIMIT: u64 = 64 * 1024 * 1024;

/// Reads the entire stream into memory.
///
/// Returns [Error::InputTooLarge] if the stream has more than `limit` bytes.
pub fn read_to_limit<R: Read>(stream: R, limit: u64) -> Result<Bytes, Error> {
    let mut buf = Vec::new();
    // One extra byte distinguishes an input of exactly `limit` bytes from a larger one.
    let mut stream = stream.take(limit.saturating_add(1));
    stream.read_to_end(&mut buf)?;

    check_limit(buf, limit)
}

/// Reads the entire stream into memory.
///
/// See [read_to_limit] for full description.
pub async fn read_async_to_limit<R>(stream: R, limit: u64) -> Result<Bytes, Error>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let mut stream = stream.take(limit.saturating_add(1));
    stream.read_to_end(&mut buf).await?;

    check_limit(buf, limit)
}

fn check_limit(buf: Vec<u8>, limit: u64) -> Result<Bytes, Error> {
    if buf.len() as u64 > limit {
        tracing::debug!(limit, "input exceeded limit");
        Err(Error::InputTooLarge { limit })
    } else {
        Ok(Bytes::from(buf))
    }
}
