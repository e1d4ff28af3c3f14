// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randgen
//!
//! Random booleans, bounded integers, bounded floats and alphanumeric strings.
//!
//! Every operation draws from the calling thread's own generator (see
//! `randgen_source`), so the functions can be called concurrently from any
//! number of threads without locking.
//!
//! ## Operations
//!
//! | Function | Range |
//! |---|---|
//! | [`random_boolean`] | `{false, true}` |
//! | [`random_integer`] | `[min, max]` |
//! | [`random_number`] | `[min, max)` |
//! | [`random_string`] | `length` chars of [`ALPHABET`] |
//!
//! ## Example
//!
//! ```rust
//! use randgen::{random_integer, random_number, random_string};
//!
//! let die = random_integer(1, 6).expect("Failed to roll");
//! assert!((1..=6).contains(&die));
//!
//! let x = random_number(0.0, 1.0).expect("Failed to draw");
//! assert!((0.0..1.0).contains(&x));
//!
//! let token = random_string(16).expect("Failed to generate token");
//! assert_eq!(token.len(), 16);
//! ```
//!
//! Not suitable for cryptographic use.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod alphabet;
mod error;
mod provider;

pub mod handler;

pub use alphabet::{ALPHABET, is_alphabet_char};
pub use error::{Bounds, RandomError};
pub use provider::RandomValueProvider;

const PROVIDER: RandomValueProvider = RandomValueProvider::new();

/// Returns `true` or `false` with equal probability.
pub fn random_boolean() -> bool {
    PROVIDER.random_boolean()
}

/// Returns an integer uniformly distributed over `[min, max]`.
///
/// See [`RandomValueProvider::random_integer`].
pub fn random_integer(min: i64, max: i64) -> Result<i64, RandomError> {
    PROVIDER.random_integer(min, max)
}

/// Returns a float uniformly distributed over `[min, max)`.
///
/// See [`RandomValueProvider::random_number`].
pub fn random_number(min: f64, max: f64) -> Result<f64, RandomError> {
    PROVIDER.random_number(min, max)
}

/// Returns a string of `length` characters drawn from [`ALPHABET`].
///
/// See [`RandomValueProvider::random_string`].
pub fn random_string(length: i64) -> Result<String, RandomError> {
    PROVIDER.random_string(length)
}
