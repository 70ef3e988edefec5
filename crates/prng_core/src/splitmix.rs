//! SplitMix64 fixed-increment avalanche mixer.
//!
//! This is the fixed-increment variant of Java 8's `SplittableRandom`
//! (Steele, Lea & Flood, "Fast splittable pseudorandom number generators",
//! OOPSLA 2014). It keeps only 64 bits of state, passes BigCrush, and is the
//! recommended way to expand a 64-bit seed into the larger state of the
//! xoshiro family.

use crate::traits::UniformRandomBitGenerator;

/// Golden-ratio increment added to the state on every step.
const GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// First avalanche multiplier.
const MIX_1: u64 = 0xbf58_476d_1ce4_e5b9;

/// Second avalanche multiplier.
const MIX_2: u64 = 0x94d0_49bb_1331_11eb;

/// SplitMix64 pseudorandom bit generator.
///
/// Any 64-bit seed is valid, zero included.
///
/// # Examples
///
/// ```rust
/// use prng_core::{SplitMix64, UniformRandomBitGenerator};
///
/// let mut rng = SplitMix64::new(0);
/// assert_eq!(rng.next(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator whose state is `seed`, stored verbatim.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the current state.
    ///
    /// Useful for logging; `SplitMix64::new(rng.state())` resumes the
    /// sequence exactly where `rng` is.
    #[inline]
    pub const fn state(&self) -> u64 {
        self.state
    }
}

impl UniformRandomBitGenerator for SplitMix64 {
    #[inline]
    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }
}
