// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clock sources used to time engine runs.
//!
//! Engines read the clock exactly twice per run: once before the first step
//! is recorded and once after the last. The reading never influences the
//! trace itself, so a run is deterministic regardless of the clock used.

use crate::time::HostTime;

/// A monotonic time source.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> HostTime;
}

/// A clock that always returns the same instant.
///
/// Runs timed with a `FixedClock` report an execution time of zero, which
/// makes whole [`SortResult`](crate::step::SortResult) values comparable in
/// tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub HostTime);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> HostTime {
        self.0
    }
}

/// Wall-clock time from [`std::time::Instant`], in nanoseconds since
/// the clock was created.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Creates a clock whose tick zero is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> HostTime {
        let nanos = self.origin.elapsed().as_nanos();
        HostTime(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
