// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exchange (bubble) sort.
//!
//! Each outer pass walks the adjacent pairs of the unsorted prefix and
//! exchanges a pair when the right value is strictly less than the left, so
//! the largest remaining value settles at the end of the prefix. The inner
//! bound shrinks by one per pass. There is deliberately no early exit on a
//! pass without exchanges: the outer loop always runs `n` times, and the
//! trace shape and comparison count (`n(n-1)/2`) depend only on `n`.
//!
//! Steps: `init`, then per pair a `compare` and, if exchanged, a `swap`;
//! a `pass_complete` after every outer pass; finally `complete`.
//! Inputs shorter than two elements record only `init` and `complete`.

use super::Run;
use crate::clock::Clock;
use crate::step::{Action, Cursor, SortResult};
use crate::trace::Tracer;

/// Sorts a copy of `input` with exchange sort, timed by the wall clock.
#[cfg(feature = "std")]
#[must_use]
pub fn bubble_sort(input: &[f64]) -> SortResult {
    super::Algorithm::Bubble.run(input)
}

/// Like [`bubble_sort`], with an explicit clock and tracer.
pub fn bubble_sort_with(input: &[f64], clock: &dyn Clock, tracer: &mut Tracer<'_>) -> SortResult {
    super::execute(super::Algorithm::Bubble, input, clock, tracer)
}

const fn pair(i: usize) -> Cursor {
    Cursor::Bubble {
        comparing_with: Some(i),
        comparing_with_next: Some(i + 1),
    }
}

const IDLE: Cursor = Cursor::Bubble {
    comparing_with: None,
    comparing_with_next: None,
};

pub(crate) fn run<T: Copy + PartialOrd>(run: &mut Run<'_, '_, T>) {
    let n = run.len();
    run.record(Action::Init, IDLE);
    if n <= 1 {
        run.record(Action::Complete, IDLE);
        return;
    }

    for pass in 0..n {
        for i in 0..n - 1 - pass {
            run.count_comparison();
            run.record(Action::Compare, pair(i));
            if run.get(i + 1) < run.get(i) {
                run.swap(i, i + 1);
                run.record(Action::Swap, pair(i));
            }
        }
        run.record(Action::PassComplete, IDLE);
    }

    run.record(Action::Complete, IDLE);
}
