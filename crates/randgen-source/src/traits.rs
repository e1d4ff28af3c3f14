// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{EntropyError, SourceError};

/// Byte-level entropy, used to seed generators.
pub trait EntropySource {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Reads a single little-endian `u64`.
    fn next_u64(&self) -> Result<u64, EntropyError> {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes)?;

        Ok(u64::from_le_bytes(bytes))
    }
}

/// Uniform primitives with an exclusive upper bound.
///
/// Every ranged method fails instead of panicking when the range is empty.
pub trait RandomSource {
    /// Returns `true` or `false` with equal probability.
    fn next_bool(&self) -> bool;

    /// Returns an integer uniformly distributed over `[origin, bound)`.
    fn next_i64(&self, origin: i64, bound: i64) -> Result<i64, SourceError>;

    /// Returns a float uniformly distributed over `[origin, bound)`.
    fn next_f64(&self, origin: f64, bound: f64) -> Result<f64, SourceError>;

    /// Returns an index uniformly distributed over `[0, bound)`.
    fn next_index(&self, bound: usize) -> Result<usize, SourceError>;
}
