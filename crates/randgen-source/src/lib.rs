// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randgen_source
//!
//! The random source behind `randgen`: one generator per thread, seeded from a
//! process-wide sequence so that generators created at the same time do not
//! produce correlated output.
//!
//! ## Core Types
//!
//! - [`ThreadRandomSource`]: handle to the calling thread's generator
//! - [`SeedSequence`]: lock-free sequence of decorrelated 64-bit seeds
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`), used once to
//!   seed the global sequence
//!
//! ## Traits
//!
//! - [`RandomSource`]: exclusive-upper-bound primitives the provider builds on
//! - [`EntropySource`]: interface for byte-level entropy
//!
//! ## Example
//!
//! ```rust
//! use randgen_source::{RandomSource, ThreadRandomSource};
//!
//! let source = ThreadRandomSource;
//!
//! let value = source.next_i64(1, 7).expect("Failed to draw from [1, 7)");
//! assert!((1..7).contains(&value));
//!
//! let x = source.next_f64(0.0, 1.0).expect("Failed to draw from [0, 1)");
//! assert!((0.0..1.0).contains(&x));
//! ```
//!
//! ## Thread Model
//!
//! No lock is taken on the hot path. The only shared state is the atomic
//! counter of the global [`SeedSequence`], touched once per thread when its
//! generator is created.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod entropy;
mod error;
mod seed;
mod support;
mod thread;
mod traits;

pub use entropy::SystemEntropySource;
pub use error::{EntropyError, SourceError};
pub use seed::{SeedSequence, global_seed_sequence};
pub use thread::ThreadRandomSource;
pub use traits::{EntropySource, RandomSource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
