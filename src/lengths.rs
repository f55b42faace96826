//! Required output lengths for extendable-output algorithms.

use crate::digest::Algorithm;

/// Output byte-lengths for algorithms that cannot produce a digest without
/// being told how many bytes to emit. Fixed at build time and read-only for
/// the life of the process; fixed-length algorithms are intentionally
/// absent.
pub const XOF_LENGTHS: &[(Algorithm, usize)] = &[
    (Algorithm::Shake128, 56),
    (Algorithm::Shake256, 64),
];

/// Byte-length a digest of `algorithm` must be requested at, or `None` when
/// the algorithm has an intrinsic fixed length.
pub fn required_length(algorithm: Algorithm) -> Option<usize> {
    XOF_LENGTHS
        .iter()
        .find(|(a, _)| *a == algorithm)
        .map(|&(_, len)| len)
}
