//! # prng_core: Deterministic 64-bit Pseudorandom Bit Generators
//!
//! Two small, fast, reproducible generators:
//!
//! - [`SplitMix64`]: 64 bits of state, fixed-increment avalanche mixer
//! - [`Xoshiro256StarStar`]: 256 bits of state, seeded by expanding a
//!   64-bit seed through [`SplitMix64`]
//!
//! Both implement [`UniformRandomBitGenerator`] (full-width `u64` output
//! with advertised `MIN`/`MAX`) and [`rand::RngCore`], so bounded integers,
//! floats and the `rand_distr` distributions come from the `rand` ecosystem
//! rather than from this crate.
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::{UniformRandomBitGenerator, Xoshiro256StarStar};
//! use rand::distributions::{Distribution, Uniform};
//!
//! let mut rng = Xoshiro256StarStar::new(123);
//!
//! // Raw 64-bit words
//! let word = rng.next();
//!
//! // Batch generation into a pre-allocated buffer
//! let mut block = [0u64; 1024];
//! rng.fill_words(&mut block);
//!
//! // Distribution adapters
//! let dist = Uniform::new_inclusive(-10, 20);
//! let sample = dist.sample(&mut rng);
//! assert!((-10..=20).contains(&sample));
//! # let _ = word;
//! ```
//!
//! ## Caveats
//!
//! - Not cryptographically secure. Do not use for keys, nonces or tokens.
//! - Instances are single-owner. Concurrent mutation needs external
//!   synchronisation; parallel streams should each own an independently
//!   seeded instance. There is no jump function.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod adapter;
pub mod splitmix;
pub mod traits;
pub mod xoshiro;

pub use splitmix::SplitMix64;
pub use traits::UniformRandomBitGenerator;
pub use xoshiro::Xoshiro256StarStar;
