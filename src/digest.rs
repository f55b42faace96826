//! Digest computation over the supported algorithm set.
//!
//! Every primitive comes from the RustCrypto `digest` family; this module
//! only classifies, dispatches and times them. Timing is a single sample on
//! a monotonic clock with no warm-up, which is fine for the demo benchmark
//! but not for rigorous measurement.

use blake2::{Blake2b512, Blake2s256};
use clap::ValueEnum;
use md4::Md4;
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};
use sm3::Sm3;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;
use whirlpool::Whirlpool;

use crate::lengths;

/// Identifier of a hash function from the closed supported set.
///
/// Variant order matches the order the sweep prints in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    #[value(name = "sha3_512")]
    Sha3_512,
    #[value(name = "blake2s")]
    Blake2s,
    #[value(name = "md5")]
    Md5,
    #[value(name = "sha384")]
    Sha384,
    #[value(name = "shake_256")]
    Shake256,
    #[value(name = "sha3_384")]
    Sha3_384,
    #[value(name = "blake2b")]
    Blake2b,
    #[value(name = "sha1")]
    Sha1,
    #[value(name = "sm3")]
    Sm3,
    #[value(name = "ripemd160")]
    Ripemd160,
    #[value(name = "sha3_224")]
    Sha3_224,
    #[value(name = "shake_128")]
    Shake128,
    #[value(name = "mdc2")]
    Mdc2,
    #[value(name = "sha512")]
    Sha512,
    #[value(name = "whirlpool")]
    Whirlpool,
    #[value(name = "md4")]
    Md4,
    #[value(name = "md5-sha1")]
    Md5Sha1,
    #[value(name = "sha512_256")]
    Sha512_256,
    #[value(name = "sha512_224")]
    Sha512_224,
    #[value(name = "sha224")]
    Sha224,
    #[value(name = "sha3_256")]
    Sha3_256,
    #[value(name = "sha256")]
    Sha256,
}

/// Output classification, decided at build time rather than by catching a
/// primitive failure at digest time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLength {
    /// Standard digest size in bytes.
    Fixed(usize),
    /// Extendable-output function; the required size comes from the
    /// length table in [`crate::lengths`].
    Extendable,
}

impl Algorithm {
    /// Every supported identifier, in sweep order.
    pub const ALL: [Algorithm; 22] = [
        Algorithm::Sha3_512,
        Algorithm::Blake2s,
        Algorithm::Md5,
        Algorithm::Sha384,
        Algorithm::Shake256,
        Algorithm::Sha3_384,
        Algorithm::Blake2b,
        Algorithm::Sha1,
        Algorithm::Sm3,
        Algorithm::Ripemd160,
        Algorithm::Sha3_224,
        Algorithm::Shake128,
        Algorithm::Mdc2,
        Algorithm::Sha512,
        Algorithm::Whirlpool,
        Algorithm::Md4,
        Algorithm::Md5Sha1,
        Algorithm::Sha512_256,
        Algorithm::Sha512_224,
        Algorithm::Sha224,
        Algorithm::Sha3_256,
        Algorithm::Sha256,
    ];

    /// Canonical identifier string, as accepted on the command line.
    pub fn ident(self) -> &'static str {
        match self {
            Algorithm::Sha3_512 => "sha3_512",
            Algorithm::Blake2s => "blake2s",
            Algorithm::Md5 => "md5",
            Algorithm::Sha384 => "sha384",
            Algorithm::Shake256 => "shake_256",
            Algorithm::Sha3_384 => "sha3_384",
            Algorithm::Blake2b => "blake2b",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sm3 => "sm3",
            Algorithm::Ripemd160 => "ripemd160",
            Algorithm::Sha3_224 => "sha3_224",
            Algorithm::Shake128 => "shake_128",
            Algorithm::Mdc2 => "mdc2",
            Algorithm::Sha512 => "sha512",
            Algorithm::Whirlpool => "whirlpool",
            Algorithm::Md4 => "md4",
            Algorithm::Md5Sha1 => "md5-sha1",
            Algorithm::Sha512_256 => "sha512_256",
            Algorithm::Sha512_224 => "sha512_224",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha3_256 => "sha3_256",
            Algorithm::Sha256 => "sha256",
        }
    }

    /// Digest size classification. Fixed sizes are the standard ones for
    /// each algorithm; only the SHAKE functions are extendable.
    pub fn output_length(self) -> OutputLength {
        match self {
            Algorithm::Md5 | Algorithm::Md4 | Algorithm::Mdc2 => OutputLength::Fixed(16),
            Algorithm::Sha1 | Algorithm::Ripemd160 => OutputLength::Fixed(20),
            Algorithm::Sha224 | Algorithm::Sha3_224 | Algorithm::Sha512_224 => {
                OutputLength::Fixed(28)
            }
            Algorithm::Sha256
            | Algorithm::Sha3_256
            | Algorithm::Sha512_256
            | Algorithm::Sm3
            | Algorithm::Blake2s => OutputLength::Fixed(32),
            Algorithm::Md5Sha1 => OutputLength::Fixed(36),
            Algorithm::Sha384 | Algorithm::Sha3_384 => OutputLength::Fixed(48),
            Algorithm::Sha512
            | Algorithm::Sha3_512
            | Algorithm::Blake2b
            | Algorithm::Whirlpool => OutputLength::Fixed(64),
            Algorithm::Shake128 | Algorithm::Shake256 => OutputLength::Extendable,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.ident() == s)
            .ok_or_else(|| DigestError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    /// The identifier is in the supported set but none of the linked
    /// primitives provide it.
    #[error("hash algorithm {0} is not provided by the linked primitives")]
    Unsupported(Algorithm),
    /// An extendable-output algorithm with no entry in the length table.
    #[error("no output length registered for extendable-output algorithm {0}")]
    MissingLength(Algorithm),
    /// A string that names no supported algorithm.
    #[error("unknown hash algorithm identifier {0:?}")]
    Unknown(String),
}

/// Hash `data` under `algorithm`, returning the digest bytes and the
/// wall-clock time the computation took.
pub fn hash(data: &[u8], algorithm: Algorithm) -> Result<(Vec<u8>, Duration), DigestError> {
    let start = Instant::now();
    let digest = compute(data, algorithm)?;
    Ok((digest, start.elapsed()))
}

fn compute(data: &[u8], algorithm: Algorithm) -> Result<Vec<u8>, DigestError> {
    let digest = match algorithm {
        Algorithm::Sha3_512 => fixed::<Sha3_512>(data),
        Algorithm::Blake2s => fixed::<Blake2s256>(data),
        Algorithm::Md5 => fixed::<Md5>(data),
        Algorithm::Sha384 => fixed::<Sha384>(data),
        Algorithm::Shake256 => extendable::<Shake256>(data, required(algorithm)?),
        Algorithm::Sha3_384 => fixed::<Sha3_384>(data),
        Algorithm::Blake2b => fixed::<Blake2b512>(data),
        Algorithm::Sha1 => fixed::<Sha1>(data),
        Algorithm::Sm3 => fixed::<Sm3>(data),
        Algorithm::Ripemd160 => fixed::<Ripemd160>(data),
        Algorithm::Sha3_224 => fixed::<Sha3_224>(data),
        Algorithm::Shake128 => extendable::<Shake128>(data, required(algorithm)?),
        // No MDC-2 provider exists in the RustCrypto ecosystem (modern
        // OpenSSL dropped it from the default providers as well).
        Algorithm::Mdc2 => return Err(DigestError::Unsupported(algorithm)),
        Algorithm::Sha512 => fixed::<Sha512>(data),
        Algorithm::Whirlpool => fixed::<Whirlpool>(data),
        Algorithm::Md4 => fixed::<Md4>(data),
        Algorithm::Md5Sha1 => {
            // TLS 1.1 construction: MD5(data) || SHA1(data).
            let mut digest = fixed::<Md5>(data);
            digest.extend_from_slice(&fixed::<Sha1>(data));
            digest
        }
        Algorithm::Sha512_256 => fixed::<Sha512_256>(data),
        Algorithm::Sha512_224 => fixed::<Sha512_224>(data),
        Algorithm::Sha224 => fixed::<Sha224>(data),
        Algorithm::Sha3_256 => fixed::<Sha3_256>(data),
        Algorithm::Sha256 => fixed::<Sha256>(data),
    };
    Ok(digest)
}

fn required(algorithm: Algorithm) -> Result<usize, DigestError> {
    lengths::required_length(algorithm).ok_or(DigestError::MissingLength(algorithm))
}

fn fixed<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

fn extendable<X: Update + ExtendableOutput + Default>(data: &[u8], len: usize) -> Vec<u8> {
    let mut hasher = X::default();
    hasher.update(data);
    let mut digest = vec![0u8; len];
    hasher.finalize_xof().read(&mut digest);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_digest(data: &[u8], algorithm: Algorithm) -> String {
        let (digest, _) = hash(data, algorithm).unwrap();
        hex::encode(digest)
    }

    #[test]
    fn test_known_vectors_abc() {
        // Published "abc" test vectors for the fixed-length algorithms.
        let cases: [(Algorithm, &str); 18] = [
            (Algorithm::Md4, "a448017aaf21d8525fc10ae87aa6729d"),
            (Algorithm::Md5, "900150983cd24fb0d6963f7d28e17f72"),
            (Algorithm::Sha1, "a9993e364706816aba3e25717850c26c9cd0d89d"),
            (
                Algorithm::Sha224,
                "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
            ),
            (
                Algorithm::Sha256,
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (
                Algorithm::Sha384,
                "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
            ),
            (
                Algorithm::Sha512,
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            ),
            (
                Algorithm::Sha512_224,
                "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa",
            ),
            (
                Algorithm::Sha512_256,
                "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
            ),
            (
                Algorithm::Sha3_224,
                "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
            ),
            (
                Algorithm::Sha3_256,
                "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
            ),
            (
                Algorithm::Sha3_384,
                "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
            ),
            (
                Algorithm::Sha3_512,
                "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
            ),
            (
                Algorithm::Ripemd160,
                "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc",
            ),
            (
                Algorithm::Sm3,
                "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0",
            ),
            (
                Algorithm::Blake2s,
                "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982",
            ),
            (
                Algorithm::Blake2b,
                "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d17d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
            ),
            (
                Algorithm::Whirlpool,
                "4e2448a4c6f486bb16b6562c73b4020bf3043e3a731bce721ae1b303d97e6d4c7181eebdb6c57e277d0e34957114cbd6c797fc9d95d8b582d225292076d4eef5",
            ),
        ];
        for (algorithm, expected) in cases {
            assert_eq!(hex_digest(b"abc", algorithm), expected, "{algorithm}");
        }
    }

    #[test]
    fn test_md5_sha1_is_concatenation() {
        let combined = hex_digest(b"abc", Algorithm::Md5Sha1);
        assert_eq!(
            combined,
            format!(
                "{}{}",
                hex_digest(b"abc", Algorithm::Md5),
                hex_digest(b"abc", Algorithm::Sha1)
            )
        );
        assert_eq!(combined.len(), 36 * 2);
    }

    #[test]
    fn test_shake_empty_message_vectors() {
        // FIPS 202 empty-message outputs, compared on a 32-byte prefix since
        // the requested lengths exceed the published vectors.
        let (digest, _) = hash(b"", Algorithm::Shake128).unwrap();
        assert_eq!(digest.len(), 56);
        assert_eq!(
            hex::encode(&digest[..32]),
            "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"
        );

        let (digest, _) = hash(b"", Algorithm::Shake256).unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(
            hex::encode(&digest[..32]),
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
        );
    }

    #[test]
    fn test_empty_input_succeeds_for_all_provided_algorithms() {
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::Mdc2 {
                continue;
            }
            let (digest, _) = hash(b"", algorithm).unwrap();
            match algorithm.output_length() {
                OutputLength::Fixed(n) => assert_eq!(digest.len(), n, "{algorithm}"),
                OutputLength::Extendable => assert_eq!(
                    Some(digest.len()),
                    lengths::required_length(algorithm),
                    "{algorithm}"
                ),
            }
        }
    }

    #[test]
    fn test_digest_is_deterministic() {
        for algorithm in [Algorithm::Sha256, Algorithm::Shake128, Algorithm::Blake2b] {
            let (first, _) = hash(b"determinism", algorithm).unwrap();
            let (second, _) = hash(b"determinism", algorithm).unwrap();
            assert_eq!(first, second, "{algorithm}");
        }
    }

    #[test]
    fn test_mdc2_reports_unsupported() {
        assert_eq!(
            hash(b"abc", Algorithm::Mdc2),
            Err(DigestError::Unsupported(Algorithm::Mdc2))
        );
    }

    #[test]
    fn test_ident_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.ident().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!(matches!(
            "sha257".parse::<Algorithm>(),
            Err(DigestError::Unknown(_))
        ));
    }
}
