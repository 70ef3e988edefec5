//! xoshiro256** 1.0 (Blackman & Vigna, 2018).
//!
//! An all-purpose generator with 256 bits of state and sub-nanosecond
//! output. The state must not be everywhere zero, so the only constructor
//! expands a 64-bit seed through [`SplitMix64`].

use crate::splitmix::SplitMix64;
use crate::traits::UniformRandomBitGenerator;

/// xoshiro256** pseudorandom bit generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::{UniformRandomBitGenerator, Xoshiro256StarStar};
///
/// let mut a = Xoshiro256StarStar::new(123);
/// let mut b = Xoshiro256StarStar::new(123);
/// assert_eq!(a.next(), 0x325a_8fa1_d1a0_69f9);
/// assert_eq!(b.next(), 0x325a_8fa1_d1a0_69f9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Creates a generator by expanding `seed` into 256 bits of state.
    ///
    /// The four state words are the first four outputs of
    /// `SplitMix64::new(seed)`, in order. Every seed is accepted.
    pub fn new(seed: u64) -> Self {
        let mut seq = SplitMix64::new(seed);
        let s = [seq.next(), seq.next(), seq.next(), seq.next()];
        debug_assert!(
            s != [0; 4],
            "seed {} expanded to an all-zero xoshiro256** state",
            seed
        );
        Self { s }
    }

    /// Returns the four state words `[s0, s1, s2, s3]`.
    #[inline]
    pub const fn state(&self) -> [u64; 4] {
        self.s
    }
}

impl UniformRandomBitGenerator for Xoshiro256StarStar {
    #[inline]
    fn next(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.s;
        let result = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = *s1 << 17;

        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;
        *s2 ^= t;
        *s3 = s3.rotate_left(45);

        result
    }
}
