// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random input sequences.
//!
//! Values are integers drawn uniformly from `min..=max` and returned as
//! `f64`, ready to hand to an engine. With `allow_duplicates` off the
//! sequence is a shuffled set of distinct values, unless the range is too
//! small to supply `length` of them, in which case duplicates are allowed
//! after all.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of values, clamped to
    /// [`MIN_LENGTH`](Self::MIN_LENGTH)..=[`MAX_LENGTH`](Self::MAX_LENGTH).
    pub length: usize,
    /// Smallest value (inclusive).
    pub min: i64,
    /// Largest value (inclusive).
    pub max: i64,
    /// Whether a value may appear more than once.
    pub allow_duplicates: bool,
}

impl GeneratorConfig {
    /// Shortest sequence produced.
    pub const MIN_LENGTH: usize = 1;
    /// Longest sequence produced; bar charts stop being readable beyond it.
    pub const MAX_LENGTH: usize = 50;

    /// Twelve values from 1 to 100, duplicates allowed.
    pub const DEFAULT: Self = Self {
        length: 12,
        min: 1,
        max: 100,
        allow_duplicates: true,
    };

    /// Returns a copy with `length` clamped and `min`/`max` in order.
    #[must_use]
    pub const fn normalized(self) -> Self {
        let length = if self.length < Self::MIN_LENGTH {
            Self::MIN_LENGTH
        } else if self.length > Self::MAX_LENGTH {
            Self::MAX_LENGTH
        } else {
            self.length
        };
        let (min, max) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        Self {
            length,
            min,
            max,
            allow_duplicates: self.allow_duplicates,
        }
    }

    /// Number of distinct values in `min..=max`.
    #[must_use]
    pub const fn range_size(&self) -> u128 {
        self.max.abs_diff(self.min) as u128 + 1
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Generates a sequence using the thread-local RNG.
#[must_use]
pub fn generate(config: &GeneratorConfig) -> Vec<f64> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generates a sequence from the given RNG.
///
/// The config is [normalized](GeneratorConfig::normalized) first, so the
/// result always holds between 1 and 50 values inside the (ordered) range.
pub fn generate_with_rng<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<f64> {
    let config = config.normalized();
    let (min, max) = (config.min, config.max);

    // usize → u128 is lossless.
    if config.allow_duplicates || config.length as u128 > config.range_size() {
        return (0..config.length)
            .map(|_| rng.gen_range(min..=max) as f64)
            .collect();
    }

    let mut used = HashSet::with_capacity(config.length);
    let mut values = Vec::with_capacity(config.length);
    while values.len() < config.length {
        let value = rng.gen_range(min..=max);
        if used.insert(value) {
            values.push(value);
        }
    }
    values.shuffle(rng);
    values.into_iter().map(|v| v as f64).collect()
}
