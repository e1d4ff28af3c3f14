// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when collecting seed entropy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// Errors returned by the range primitives of a [`crate::RandomSource`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The half-open range `[origin, bound)` contains no value.
    #[error("range is empty: origin must be strictly less than bound")]
    EmptyRange,

    /// A floating-point bound, or the span between them, is not finite.
    #[error("range is not finite")]
    NonFinite,
}

impl From<rand::distr::uniform::Error> for SourceError {
    fn from(err: rand::distr::uniform::Error) -> Self {
        match err {
            rand::distr::uniform::Error::EmptyRange => Self::EmptyRange,
            rand::distr::uniform::Error::NonFinite => Self::NonFinite,
        }
    }
}
