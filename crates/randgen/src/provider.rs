// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use randgen_source::{RandomSource, ThreadRandomSource};

use crate::alphabet::ALPHABET;
use crate::error::{Bounds, RandomError};

/// The four random value operations over an injectable [`RandomSource`].
///
/// The default source is [`ThreadRandomSource`], which makes the provider
/// zero-sized and usable from any thread without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomValueProvider<S: RandomSource = ThreadRandomSource> {
    source: S,
}

impl RandomValueProvider<ThreadRandomSource> {
    /// Creates a provider backed by the calling thread's generator.
    pub const fn new() -> Self {
        Self {
            source: ThreadRandomSource,
        }
    }
}

impl<S: RandomSource> RandomValueProvider<S> {
    /// Creates a provider backed by `source`.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Returns `true` or `false` with equal probability.
    pub fn random_boolean(&self) -> bool {
        self.source.next_bool()
    }

    /// Returns an integer uniformly distributed over `[min, max]`.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidRange`] if `min > max`.
    /// - [`RandomError::Overflow`] if `max == i64::MAX`.
    pub fn random_integer(&self, min: i64, max: i64) -> Result<i64, RandomError> {
        let bound = max.checked_add(1).ok_or(RandomError::Overflow(max))?;

        self.source
            .next_i64(min, bound)
            .map_err(|_| RandomError::InvalidRange(Bounds::Integer { min, max }))
    }

    /// Returns a float uniformly distributed over `[min, max)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] if `min >= max`, either bound is NaN, or
    /// `max - min` is not finite.
    pub fn random_number(&self, min: f64, max: f64) -> Result<f64, RandomError> {
        self.source
            .next_f64(min, max)
            .map_err(|_| RandomError::InvalidRange(Bounds::Number { min, max }))
    }

    /// Returns `length` characters drawn independently and uniformly, with
    /// replacement, from [`ALPHABET`].
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidLength`] if `length` is negative.
    /// - [`RandomError::Capacity`] if `length` bytes cannot be allocated.
    pub fn random_string(&self, length: i64) -> Result<String, RandomError> {
        if length < 0 {
            return Err(RandomError::InvalidLength(length));
        }

        let len = usize::try_from(length).map_err(|_| RandomError::Capacity(length))?;
        let mut out = String::new();
        out.try_reserve_exact(len).map_err(|_| RandomError::Capacity(length))?;

        for _ in 0..len {
            let index = self.source.next_index(ALPHABET.len())?;
            out.push(char::from(ALPHABET[index]));
        }

        Ok(out)
    }
}
