//! Single-sample hash throughput measurements.

use crate::digest::{self, Algorithm, DigestError};
use std::time::Duration;

/// Filler byte for synthetic payloads. Payload content is fixed so runs
/// measure throughput, not data-dependent variation.
const FILLER: u8 = b'a';

/// Size list used when the caller does not supply one.
pub const DEFAULT_SIZES: [usize; 5] = [1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// One timing measurement: payload size in bytes and elapsed wall-clock
/// time for a single digest over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub size: usize,
    pub elapsed: Duration,
}

/// Hash a synthetic payload of each size, in the given order, and collect
/// the timings. One run per size, no warm-up and no aggregation; the
/// numbers are indicative, not rigorous.
pub fn run(sizes: &[usize], algorithm: Algorithm) -> Result<Vec<Sample>, DigestError> {
    let mut samples = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let payload = vec![FILLER; size];
        let (_, elapsed) = digest::hash(&payload, algorithm)?;
        samples.push(Sample { size, elapsed });
    }
    Ok(samples)
}
