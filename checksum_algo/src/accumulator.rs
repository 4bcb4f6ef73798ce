use std::fmt;
use std::hash::Hasher;
use std::io;

use twox_hash::{XxHash32, XxHash64};

// Adler-32 of the empty message
const ADLER32_INIT: u32 = 1;

/// Running hash state for one of the supported algorithms.
pub enum Accumulator {
    Adler32(u32),
    Crc32(crc32fast::Hasher),
    XxHash32(XxHash32),
    XxHash64(XxHash64),
}

impl Accumulator {
    pub fn adler32() -> Self {
        Accumulator::Adler32(ADLER32_INIT)
    }

    pub fn crc32() -> Self {
        Accumulator::Crc32(crc32fast::Hasher::new())
    }

    pub fn xxhash32(seed: u32) -> Self {
        Accumulator::XxHash32(XxHash32::with_seed(seed))
    }

    pub fn xxhash64(seed: u64) -> Self {
        Accumulator::XxHash64(XxHash64::with_seed(seed))
    }

    pub fn update(&mut self, bytes: &[u8]) {
        match self {
            Accumulator::Adler32(sum) => *sum = zlib_rs::adler32(*sum, bytes),
            Accumulator::Crc32(hasher) => hasher.update(bytes),
            Accumulator::XxHash32(hasher) => hasher.write(bytes),
            Accumulator::XxHash64(hasher) => hasher.write(bytes),
        }
    }

    pub fn finalize(self) -> Digest {
        match self {
            Accumulator::Adler32(sum) => Digest::U32(sum),
            Accumulator::Crc32(hasher) => Digest::U32(hasher.finalize()),
            // XXH32 widens its 32-bit result through Hasher::finish
            Accumulator::XxHash32(hasher) => Digest::U32(hasher.finish() as u32),
            Accumulator::XxHash64(hasher) => Digest::U64(hasher.finish()),
        }
    }
}

impl io::Write for Accumulator {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Finalized checksum, tagged with its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digest {
    U32(u32),
    U64(u64),
}

impl Digest {
    /// Width of the digest in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Digest::U32(_) => 32,
            Digest::U64(_) => 64,
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digest::U32(value) => write!(f, "0x{value:08X}"),
            Digest::U64(value) => write!(f, "0x{value:016X}"),
        }
    }
}
