// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion sort.
//!
//! Index 0 is a sorted prefix of length one. For every later index `j` the
//! engine lifts the value out as the key, scans the prefix right to left and
//! shifts each strictly greater value one slot to the right, then writes the
//! key into the slot left free. The scan stops at the first value `<=` the
//! key, so equal values keep their input order.
//!
//! While a shift is in progress the snapshot holds the shifted value twice;
//! the key only lives in the engine until the `insert` step.

use super::Run;
use crate::clock::Clock;
use crate::step::{Action, Cursor, SortResult};
use crate::trace::Tracer;

/// Sorts a copy of `input` with insertion sort, timed by the wall clock.
#[cfg(feature = "std")]
#[must_use]
pub fn insertion_sort(input: &[f64]) -> SortResult {
    super::Algorithm::Insertion.run(input)
}

/// Like [`insertion_sort`], with an explicit clock and tracer.
pub fn insertion_sort_with(
    input: &[f64],
    clock: &dyn Clock,
    tracer: &mut Tracer<'_>,
) -> SortResult {
    super::execute(super::Algorithm::Insertion, input, clock, tracer)
}

const fn cursor(
    sorted_up_to: usize,
    key_index: Option<usize>,
    comparing_with: Option<usize>,
) -> Cursor {
    Cursor::Insertion {
        sorted_up_to,
        key_index,
        comparing_with,
    }
}

pub(crate) fn run<T: Copy + PartialOrd>(run: &mut Run<'_, '_, T>) {
    let n = run.len();

    // Nothing to insert: short-circuit with zero work.
    if n <= 1 {
        run.record(Action::Init, cursor(n, None, None));
        run.record(Action::Complete, cursor(n, None, None));
        return;
    }

    run.record(Action::Init, cursor(1, None, None));

    for j in 1..n {
        let key = run.get(j);
        run.record(Action::PickKey, cursor(j, Some(j), Some(j - 1)));

        // `hole` is the slot the key will land in; everything right of it
        // up to `j` has already been shifted.
        let mut hole = j;
        while hole > 0 {
            let i = hole - 1;
            run.count_comparison();
            run.record(Action::Compare, cursor(j, Some(j), Some(i)));
            if run.get(i) <= key {
                break;
            }
            run.set(hole, run.get(i));
            run.count_move();
            run.record(Action::Shift, cursor(j, Some(j), Some(i)));
            hole = i;
        }

        run.set(hole, key);
        run.record(Action::Insert, cursor(j + 1, Some(hole), None));
    }

    run.record(Action::Complete, cursor(n, None, None));
}
