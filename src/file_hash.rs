//! Whole-file hashing.

use crate::digest::{self, Algorithm};
use std::fs;
use std::path::Path;
use tracing::error;

/// Hash a file from disk and return the digest as lowercase hex.
///
/// The file is read fully into memory, so this is meant for demo-scale
/// inputs rather than anything that should be streamed. I/O and digest
/// failures are logged and collapsed to `None` so the caller can carry on
/// with its remaining work.
pub fn hash_file(path: &Path, algorithm: Algorithm) -> Option<String> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            error!("error reading {}: {}", path.display(), e);
            return None;
        }
    };
    match digest::hash(&data, algorithm) {
        Ok((digest, _)) => Some(hex::encode(digest)),
        Err(e) => {
            error!("error hashing {}: {}", path.display(), e);
            None
        }
    }
}
