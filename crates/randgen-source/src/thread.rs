// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::RefCell;

use rand::distr::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::SourceError;
use crate::seed::global_seed_sequence;
use crate::traits::RandomSource;

thread_local! {
    static THREAD_RNG: RefCell<SmallRng> = RefCell::new(new_thread_rng());
}

fn new_thread_rng() -> SmallRng {
    let seed = global_seed_sequence().next_seed();
    tracing::trace!(thread = ?std::thread::current().id(), "created thread generator");

    SmallRng::seed_from_u64(seed)
}

/// Handle to the calling thread's generator.
///
/// Zero-sized and `Copy`; it can be shared freely between threads because
/// every call resolves to the generator owned by the thread making it. The
/// generator is created lazily on the first call from each thread.
///
/// Not suitable for cryptographic use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    fn with_rng<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
        THREAD_RNG.with_borrow_mut(f)
    }
}

impl RandomSource for ThreadRandomSource {
    fn next_bool(&self) -> bool {
        Self::with_rng(|rng| rng.random::<bool>())
    }

    fn next_i64(&self, origin: i64, bound: i64) -> Result<i64, SourceError> {
        let dist = Uniform::<i64>::new(origin, bound)?;

        Ok(Self::with_rng(|rng| dist.sample(rng)))
    }

    fn next_f64(&self, origin: f64, bound: f64) -> Result<f64, SourceError> {
        let dist = Uniform::<f64>::new(origin, bound)?;

        Ok(Self::with_rng(|rng| dist.sample(rng)))
    }

    fn next_index(&self, bound: usize) -> Result<usize, SourceError> {
        let dist = Uniform::<usize>::new(0, bound)?;

        Ok(Self::with_rng(|rng| dist.sample(rng)))
    }
}
