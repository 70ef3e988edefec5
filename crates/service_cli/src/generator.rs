//! Registry of generators the CLI can stream.
//!
//! Dispatch is a plain `match` over [`GeneratorKind`]; each arm
//! monomorphises the block writer for one concrete generator.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use prng_core::{SplitMix64, UniformRandomBitGenerator, Xoshiro256StarStar};

use crate::config::MAX_BLOCK_SIZE;
use crate::CliError;

/// A generator selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// `splitmix64`
    SplitMix64,
    /// `xoshiro256**`
    Xoshiro256StarStar,
}

impl GeneratorKind {
    /// Every registered generator, in listing order.
    pub const ALL: [GeneratorKind; 2] = [GeneratorKind::SplitMix64, GeneratorKind::Xoshiro256StarStar];

    /// Registered name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::SplitMix64 => "splitmix64",
            GeneratorKind::Xoshiro256StarStar => "xoshiro256**",
        }
    }

    /// Comma-separated list of all registered names.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(GeneratorKind::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Seeds this generator and writes `bytes` bytes of its output to `out`.
    ///
    /// Returns the number of bytes written.
    pub fn write_bytes<W: Write>(
        &self,
        seed: u64,
        bytes: u64,
        block_size: usize,
        out: &mut W,
    ) -> io::Result<u64> {
        match self {
            GeneratorKind::SplitMix64 => {
                write_random_bytes(&mut SplitMix64::new(seed), bytes, block_size, out)
            }
            GeneratorKind::Xoshiro256StarStar => {
                write_random_bytes(&mut Xoshiro256StarStar::new(seed), bytes, block_size, out)
            }
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CliError::UnknownGenerator {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes `bytes` bytes of generator output to `out`, one block at a time.
///
/// Each block holds `block_size` words in native byte order with no framing.
/// The last block is cut short when `bytes` is not a multiple of the block
/// length. A `block_size` of zero or above [`MAX_BLOCK_SIZE`] fails with
/// [`io::ErrorKind::InvalidInput`] before anything is allocated.
pub fn write_random_bytes<G, W>(
    rng: &mut G,
    bytes: u64,
    block_size: usize,
    out: &mut W,
) -> io::Result<u64>
where
    G: UniformRandomBitGenerator,
    W: Write,
{
    if block_size == 0 || block_size > MAX_BLOCK_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "block size {} outside 1..={} words",
                block_size, MAX_BLOCK_SIZE
            ),
        ));
    }

    let mut words = vec![0u64; block_size];
    let mut block = vec![0u8; block_size * 8];
    let mut written = 0u64;

    while written < bytes {
        rng.fill_words(&mut words);
        for (chunk, word) in block.chunks_exact_mut(8).zip(&words) {
            chunk.copy_from_slice(&word.to_ne_bytes());
        }

        let len = (bytes - written).min(block.len() as u64) as usize;
        out.write_all(&block[..len])?;
        written += len as u64;
    }

    out.flush()?;
    Ok(written)
}
