// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for randgen.
use randgen_source::SourceError;
use thiserror::Error;

/// Bounds as supplied by the caller, kept for error reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    /// Inclusive integer bounds.
    Integer {
        /// Lowest value requested.
        min: i64,
        /// Highest value requested.
        max: i64,
    },
    /// Half-open float bounds.
    Number {
        /// Inclusive lower bound.
        min: f64,
        /// Exclusive upper bound.
        max: f64,
    },
}

impl core::fmt::Display for Bounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Integer { min, max } => write!(f, "[{min}, {max}]"),
            Self::Number { min, max } => write!(f, "[{min}, {max})"),
        }
    }
}

/// Errors returned by the random value operations.
#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    /// Integer `min > max`, or float `min >= max` / non-finite.
    #[error("invalid range {0}")]
    InvalidRange(Bounds),

    /// Negative string length.
    #[error("invalid length {0}: must not be negative")]
    InvalidLength(i64),

    /// The output buffer for a string of this length cannot be allocated.
    #[error("cannot allocate a string of length {0}")]
    Capacity(i64),

    /// `max + 1` is not representable as `i64`.
    #[error("upper bound {0} + 1 overflows i64")]
    Overflow(i64),

    /// The random source rejected a draw the provider considered valid.
    #[error("random source failed: {0}")]
    Source(#[from] SourceError),
}
