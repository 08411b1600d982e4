// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clock readings in nanoseconds.
//!
//! A run is timed by two [`HostTime`] readings from a
//! [`Clock`](crate::clock::Clock); their difference is an [`Elapsed`] that
//! ends up in [`SortResult::execution_time_ms`](crate::step::SortResult).

use core::fmt;

/// A monotonic clock reading, in nanoseconds from the clock's origin.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the time elapsed since `earlier`, or zero if `earlier` is
    /// actually later.
    #[inline]
    #[must_use]
    pub const fn saturating_elapsed_since(self, earlier: Self) -> Elapsed {
        Elapsed(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}ns)", self.0)
    }
}

/// The nanoseconds between two [`HostTime`] readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elapsed(pub u64);

impl Elapsed {
    /// No time at all.
    pub const ZERO: Self = Self(0);

    /// Converts to fractional milliseconds.
    #[inline]
    #[must_use]
    pub fn as_millis_f64(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}
