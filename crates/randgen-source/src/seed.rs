// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide seed sequence for per-thread generators.
//!
//! Each thread draws exactly one seed, when its generator is created. Seeds are
//! `mix64(base + n * GAMMA)` for a strictly increasing `n`, so two threads never
//! receive the same seed and adjacent seeds share no visible structure.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::entropy::SystemEntropySource;
use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Odd increment (2^64 / golden ratio); full period over `u64`.
const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

static GLOBAL: OnceLock<SeedSequence> = OnceLock::new();

/// Lock-free generator of decorrelated 64-bit seeds.
#[derive(Debug)]
pub struct SeedSequence {
    base: u64,
    counter: AtomicU64,
}

impl SeedSequence {
    /// Creates a sequence starting from a fixed base.
    pub const fn new(base: u64) -> Self {
        Self {
            base,
            counter: AtomicU64::new(0),
        }
    }

    /// Creates a sequence whose base is read from `entropy`.
    pub fn from_entropy(entropy: &dyn EntropySource) -> Result<Self, EntropyError> {
        Ok(Self::new(entropy.next_u64()?))
    }

    /// Creates a sequence whose base is derived from the wall clock and the
    /// process id.
    pub(crate) fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let pid = u64::from(std::process::id());

        Self::new(mix64(nanos) ^ mix64(pid.wrapping_mul(GAMMA)))
    }

    /// Seeds from `entropy`, falling back to the clock if it fails.
    pub(crate) fn from_entropy_or_clock(entropy: &dyn EntropySource) -> Self {
        match Self::from_entropy(entropy) {
            Ok(sequence) => sequence,
            Err(err) => {
                tracing::warn!(error = %err, "OS entropy unavailable, seeding from clock");
                Self::from_clock()
            }
        }
    }

    /// Returns the next seed. Safe to call from any number of threads.
    pub fn next_seed(&self) -> u64 {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);

        mix64(self.base.wrapping_add(n.wrapping_mul(GAMMA)))
    }
}

/// Returns the process-wide sequence, creating it on first use.
pub fn global_seed_sequence() -> &'static SeedSequence {
    GLOBAL.get_or_init(|| SeedSequence::from_entropy_or_clock(&SystemEntropySource {}))
}

/// 64-bit finalizer (Stafford variant 13). Bijective.
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
