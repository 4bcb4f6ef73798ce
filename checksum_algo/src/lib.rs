//! Checksum algorithms used to generate codec test fixtures.
//!
//! Every algorithm is backed by a registry crate; this crate only names them,
//! picks the digest width and streams bytes through them.

mod accumulator;
mod error;

use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

pub use accumulator::{Accumulator, Digest};
pub use error::UnknownAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Adler32,
    Crc32Ieee,
    XxHash32,
    XxHash64,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Adler32,
        Algorithm::Crc32Ieee,
        Algorithm::XxHash32,
        Algorithm::XxHash64,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Adler32 => "adler32",
            Algorithm::Crc32Ieee => "crc32/ieee",
            Algorithm::XxHash32 => "xxhash32",
            Algorithm::XxHash64 => "xxhash64",
        }
    }

    /// Digest width in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Algorithm::XxHash64 => 64,
            _ => 32,
        }
    }

    /// Fresh accumulator. Both xxhash variants use seed zero.
    pub fn accumulator(&self) -> Accumulator {
        match self {
            Algorithm::Adler32 => Accumulator::adler32(),
            Algorithm::Crc32Ieee => Accumulator::crc32(),
            Algorithm::XxHash32 => Accumulator::xxhash32(0),
            Algorithm::XxHash64 => Accumulator::xxhash64(0),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| UnknownAlgorithm {
                name: name.to_string(),
            })
    }
}

/// Hashes everything `reader` yields. On a read error the partial state is
/// dropped and the error returned.
pub fn digest_reader<R: Read>(algorithm: Algorithm, mut reader: R) -> io::Result<Digest> {
    let mut acc = algorithm.accumulator();
    io::copy(&mut reader, &mut acc)?;

    Ok(acc.finalize())
}

/// Hashes an in-memory buffer.
pub fn digest_bytes(algorithm: Algorithm, bytes: &[u8]) -> Digest {
    let mut acc = algorithm.accumulator();
    acc.update(bytes);

    acc.finalize()
}
