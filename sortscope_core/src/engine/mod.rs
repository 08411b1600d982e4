// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four instrumented sorting engines.
//!
//! Every engine has the same external contract: it copies the input into a
//! private working array, runs its algorithm to completion, and returns a
//! [`SortResult`] whose trace holds one [`Step`] per event. The engines share
//! nothing but the [`Run`] bookkeeping below; each one drives its own state
//! machine.
//!
//! | engine | module | actions |
//! |---|---|---|
//! | exchange (bubble) | [`bubble`] | `init`, `compare`, `swap`, `pass_complete`, `complete` |
//! | selection | [`selection`] | `init`, `select_min`, `compare`, `new_min`, `swap`, `no_swap`, `complete` |
//! | insertion | [`insertion`] | `init`, `pick_key`, `compare`, `shift`, `insert`, `complete` |
//! | bottom-up merge | [`merge`] | `init`, `outer_loop_start`, `merge_start`, `compare`, `copy`, `copy_remaining_left`, `copy_remaining_right`, `merge_step_complete`, `copy_back`, `complete` |
//!
//! Engines are total over finite numbers; rejecting anything else is the
//! job of [`input::parse_sequence`](crate::input::parse_sequence).

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod selection;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::clock::Clock;
use crate::step::{Action, Cursor, SortResult, Step};
use crate::trace::Tracer;

/// Selects one of the engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exchange sort with a shrinking inner bound.
    Bubble,
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Iterative bottom-up merge sort.
    Merge,
}

impl Algorithm {
    /// Every engine, in presentation order.
    pub const ALL: [Self; 4] = [Self::Bubble, Self::Selection, Self::Insertion, Self::Merge];

    /// Returns the short lowercase name used on the command line and in
    /// exported traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
        }
    }

    /// Runs this engine on `input`, timed by the wall clock.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn run(self, input: &[f64]) -> SortResult {
        self.run_with(input, &crate::clock::StdClock::new(), &mut Tracer::none())
    }

    /// Runs this engine on `input` with an explicit clock and tracer.
    pub fn run_with(
        self,
        input: &[f64],
        clock: &dyn Clock,
        tracer: &mut Tracer<'_>,
    ) -> SortResult {
        execute(self, input, clock, tracer)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Algorithm`] name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm;

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown algorithm (expected bubble, selection, insertion or merge)")
    }
}

impl core::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names = [
            ("bubble", Self::Bubble),
            ("exchange", Self::Bubble),
            ("selection", Self::Selection),
            ("insertion", Self::Insertion),
            ("merge", Self::Merge),
        ];
        let s = s.trim();
        names
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, algorithm)| algorithm)
            .ok_or(UnknownAlgorithm)
    }
}

/// Runs `algorithm` over any copyable, partially ordered element type.
///
/// The public entry points only accept `f64`; the generic form exists so the
/// engines can be checked with tagged values.
pub(crate) fn execute<T: Copy + PartialOrd>(
    algorithm: Algorithm,
    input: &[T],
    clock: &dyn Clock,
    tracer: &mut Tracer<'_, T>,
) -> SortResult<T> {
    let start = clock.now();
    tracer.run_begin(algorithm, input);
    let mut run = Run::new(input, tracer);
    match algorithm {
        Algorithm::Bubble => bubble::run(&mut run),
        Algorithm::Selection => selection::run(&mut run),
        Algorithm::Insertion => insertion::run(&mut run),
        Algorithm::Merge => merge::run(&mut run),
    }
    let Run {
        comparisons,
        swaps,
        trace,
        ..
    } = run;
    let elapsed = clock.now().saturating_elapsed_since(start);
    let result = SortResult {
        algorithm,
        trace,
        comparisons,
        swaps,
        execution_time_ms: elapsed.as_millis_f64(),
    };
    tracer.run_end(&result);
    result
}

/// Bookkeeping shared by the engines: the working copy, the cumulative
/// counters, and the trace under construction.
pub(crate) struct Run<'t, 's, T> {
    data: Vec<T>,
    comparisons: u64,
    swaps: u64,
    trace: Vec<Step<T>>,
    tracer: &'t mut Tracer<'s, T>,
}

impl<'t, 's, T: Copy> Run<'t, 's, T> {
    fn new(input: &[T], tracer: &'t mut Tracer<'s, T>) -> Self {
        Self {
            data: input.to_vec(),
            comparisons: 0,
            swaps: 0,
            trace: Vec::new(),
            tracer,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> T {
        self.data[index]
    }

    /// Read-only view of the working copy.
    #[inline]
    pub(crate) fn data(&self) -> &[T] {
        &self.data
    }

    /// Counts one comparison.
    #[inline]
    pub(crate) fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Counts one relocation that does not touch the working copy (merge
    /// writes into its scratch buffer).
    #[inline]
    pub(crate) fn count_move(&mut self) {
        self.swaps += 1;
    }

    /// Exchanges two slots and counts one relocation.
    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.swaps += 1;
    }

    /// Overwrites one slot. Whether the write counts as a relocation is up
    /// to the caller.
    #[inline]
    pub(crate) fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    /// Replaces the whole working copy; used by merge's copy-back.
    pub(crate) fn overwrite(&mut self, values: &[T]) {
        self.data.copy_from_slice(values);
    }

    /// Appends a step with a fresh snapshot of the working copy.
    pub(crate) fn record(&mut self, action: Action, cursor: Cursor) {
        let step = Step {
            array: self.data.clone(),
            action,
            comparisons: self.comparisons,
            swaps: self.swaps,
            cursor,
        };
        self.tracer.step(&step);
        self.trace.push(step);
    }
}
