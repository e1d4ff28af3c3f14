// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand::distr::Uniform;

use crate::error::SourceError;
use crate::thread::ThreadRandomSource;
use crate::traits::RandomSource;

/// Configurable behavior for [`MockRandomSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockRandomSourceBehaviour {
    /// Normal operation (delegates to [`ThreadRandomSource`]).
    None,
    /// Every draw returns the lowest value of its range, `false` for booleans.
    AlwaysLowest,
    /// Every draw returns the highest value of its range, `true` for booleans.
    AlwaysHighest,
    /// Every ranged draw fails with [`SourceError::EmptyRange`].
    FailAtNext,
}

/// Mock random source for testing bound handling deterministically.
///
/// Ranges are validated exactly as [`ThreadRandomSource`] validates them, so
/// an empty range fails regardless of the behaviour.
pub struct MockRandomSource {
    inner: ThreadRandomSource,
    behaviour: MockRandomSourceBehaviour,
}

impl MockRandomSource {
    /// Creates a new mock random source with the specified behavior.
    pub fn new(behaviour: MockRandomSourceBehaviour) -> Self {
        Self {
            inner: ThreadRandomSource,
            behaviour,
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockRandomSourceBehaviour) {
        self.behaviour = behaviour;
    }
}

/// Largest `f64` strictly below `x` (for finite `x`).
fn float_below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

impl RandomSource for MockRandomSource {
    fn next_bool(&self) -> bool {
        match self.behaviour {
            MockRandomSourceBehaviour::None | MockRandomSourceBehaviour::FailAtNext => {
                self.inner.next_bool()
            }
            MockRandomSourceBehaviour::AlwaysLowest => false,
            MockRandomSourceBehaviour::AlwaysHighest => true,
        }
    }

    fn next_i64(&self, origin: i64, bound: i64) -> Result<i64, SourceError> {
        match self.behaviour {
            MockRandomSourceBehaviour::None => self.inner.next_i64(origin, bound),
            MockRandomSourceBehaviour::AlwaysLowest => {
                Uniform::<i64>::new(origin, bound)?;
                Ok(origin)
            }
            MockRandomSourceBehaviour::AlwaysHighest => {
                Uniform::<i64>::new(origin, bound)?;
                Ok(bound - 1)
            }
            MockRandomSourceBehaviour::FailAtNext => Err(SourceError::EmptyRange),
        }
    }

    fn next_f64(&self, origin: f64, bound: f64) -> Result<f64, SourceError> {
        match self.behaviour {
            MockRandomSourceBehaviour::None => self.inner.next_f64(origin, bound),
            MockRandomSourceBehaviour::AlwaysLowest => {
                Uniform::<f64>::new(origin, bound)?;
                Ok(origin)
            }
            MockRandomSourceBehaviour::AlwaysHighest => {
                Uniform::<f64>::new(origin, bound)?;
                Ok(float_below(bound).max(origin))
            }
            MockRandomSourceBehaviour::FailAtNext => Err(SourceError::EmptyRange),
        }
    }

    fn next_index(&self, bound: usize) -> Result<usize, SourceError> {
        match self.behaviour {
            MockRandomSourceBehaviour::None => self.inner.next_index(bound),
            MockRandomSourceBehaviour::AlwaysLowest => {
                Uniform::<usize>::new(0, bound)?;
                Ok(0)
            }
            MockRandomSourceBehaviour::AlwaysHighest => {
                Uniform::<usize>::new(0, bound)?;
                Ok(bound - 1)
            }
            MockRandomSourceBehaviour::FailAtNext => Err(SourceError::EmptyRange),
        }
    }
}
