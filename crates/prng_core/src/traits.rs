//! The uniform random bit generator capability.
//!
//! Generic sampling code is written against [`UniformRandomBitGenerator`]
//! rather than a concrete generator, so any type that advertises its output
//! range and can produce the next 64-bit word plugs in unchanged.

/// A source of uniformly distributed 64-bit words.
///
/// Implementors advertise the closed interval `[MIN, MAX]` their outputs
/// fall in. Both generators in this crate cover the full `u64` domain, which
/// is also the default.
///
/// # Concurrency
///
/// Every call mutates the generator. An instance is owned by one caller and
/// advanced sequentially; sharing one across threads requires external
/// synchronisation. For parallel work, give each task its own instance
/// seeded independently (for example from the task index).
///
/// # Examples
///
/// ```rust
/// use prng_core::{SplitMix64, UniformRandomBitGenerator};
///
/// fn coin_flips<G: UniformRandomBitGenerator>(rng: &mut G, n: usize) -> usize {
///     (0..n).filter(|_| rng.next() >> 63 == 1).count()
/// }
///
/// let mut rng = SplitMix64::new(7);
/// let heads = coin_flips(&mut rng, 1000);
/// assert!(heads > 400 && heads < 600);
/// ```
pub trait UniformRandomBitGenerator {
    /// Smallest value [`next`](Self::next) can return.
    const MIN: u64 = 0;

    /// Largest value [`next`](Self::next) can return.
    const MAX: u64 = u64::MAX;

    /// Returns the next word and advances the internal state.
    fn next(&mut self) -> u64;

    /// Fills `dest` with consecutive outputs, in order.
    ///
    /// Equivalent to calling [`next`](Self::next) once per slot. Empty
    /// slices are a no-op.
    #[inline]
    fn fill_words(&mut self, dest: &mut [u64]) {
        for word in dest.iter_mut() {
            *word = self.next();
        }
    }
}
