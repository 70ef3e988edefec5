//! Bridge into the `rand` ecosystem.
//!
//! Both generators implement [`rand::RngCore`], so every `rand` /
//! `rand_distr` distribution and the [`rand::Rng`] extension methods work
//! on them directly:
//!
//! ```rust
//! use prng_core::Xoshiro256StarStar;
//! use rand::Rng;
//!
//! let mut rng = Xoshiro256StarStar::new(123);
//! let die: i32 = rng.gen_range(1..=6);
//! assert!((1..=6).contains(&die));
//! let u: f64 = rng.gen();
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! [`rand::SeedableRng`] is implemented with an 8-byte seed for both types.
//! For [`Xoshiro256StarStar`] those bytes are the 64-bit seed that goes
//! through SplitMix64 expansion, never raw state words.

use rand::{RngCore, SeedableRng};

use crate::splitmix::SplitMix64;
use crate::traits::UniformRandomBitGenerator;
use crate::xoshiro::Xoshiro256StarStar;

/// Writes consecutive outputs into `dest` as little-endian bytes.
///
/// A trailing partial chunk consumes one full output and keeps its low
/// bytes.
fn fill_bytes_via_next<G: UniformRandomBitGenerator>(rng: &mut G, dest: &mut [u8]) {
    let mut chunks = dest.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&rng.next().to_le_bytes());
    }
    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let bytes = rng.next().to_le_bytes();
        tail.copy_from_slice(&bytes[..tail.len()]);
    }
}

macro_rules! impl_rand_bridge {
    ($ty:ty) => {
        impl RngCore for $ty {
            /// Upper half of the next 64-bit output.
            #[inline]
            fn next_u32(&mut self) -> u32 {
                (UniformRandomBitGenerator::next(self) >> 32) as u32
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                UniformRandomBitGenerator::next(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                fill_bytes_via_next(self, dest);
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                fill_bytes_via_next(self, dest);
                Ok(())
            }
        }

        impl SeedableRng for $ty {
            type Seed = [u8; 8];

            #[inline]
            fn from_seed(seed: Self::Seed) -> Self {
                Self::new(u64::from_le_bytes(seed))
            }

            #[inline]
            fn seed_from_u64(state: u64) -> Self {
                Self::new(state)
            }
        }
    };
}

impl_rand_bridge!(SplitMix64);
impl_rand_bridge!(Xoshiro256StarStar);
