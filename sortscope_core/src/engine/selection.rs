// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection sort.
//!
//! For each position `i` in `0..n-1` the engine scans the unsorted suffix for
//! the minimum and exchanges it into `i`. An outer iteration always ends in
//! either `swap` or `no_swap`, so a consumer can tell a wasted pass from a
//! productive one.
//!
//! On the `swap` step, `current_min` keeps the index the minimum came from,
//! and `sorted_up_to - 1` is the slot it went to.

use super::Run;
use crate::clock::Clock;
use crate::step::{Action, Cursor, SortResult};
use crate::trace::Tracer;

/// Sorts a copy of `input` with selection sort, timed by the wall clock.
#[cfg(feature = "std")]
#[must_use]
pub fn selection_sort(input: &[f64]) -> SortResult {
    super::Algorithm::Selection.run(input)
}

/// Like [`selection_sort`], with an explicit clock and tracer.
pub fn selection_sort_with(
    input: &[f64],
    clock: &dyn Clock,
    tracer: &mut Tracer<'_>,
) -> SortResult {
    super::execute(super::Algorithm::Selection, input, clock, tracer)
}

pub(crate) fn run<T: Copy + PartialOrd>(run: &mut Run<'_, '_, T>) {
    let n = run.len();
    run.record(
        Action::Init,
        Cursor::Selection {
            sorted_up_to: 0,
            current_min: None,
            comparing_with: None,
        },
    );

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        run.record(
            Action::SelectMin,
            Cursor::Selection {
                sorted_up_to: i,
                current_min: Some(min),
                comparing_with: Some(i),
            },
        );

        for j in i + 1..n {
            run.count_comparison();
            run.record(
                Action::Compare,
                Cursor::Selection {
                    sorted_up_to: i,
                    current_min: Some(min),
                    comparing_with: Some(j),
                },
            );
            if run.get(j) < run.get(min) {
                min = j;
                run.record(
                    Action::NewMin,
                    Cursor::Selection {
                        sorted_up_to: i,
                        current_min: Some(min),
                        comparing_with: Some(j),
                    },
                );
            }
        }

        if min != i {
            run.swap(i, min);
            run.record(
                Action::Swap,
                Cursor::Selection {
                    sorted_up_to: i + 1,
                    current_min: Some(min),
                    comparing_with: None,
                },
            );
        } else {
            run.record(
                Action::NoSwap,
                Cursor::Selection {
                    sorted_up_to: i + 1,
                    current_min: None,
                    comparing_with: None,
                },
            );
        }
    }

    run.record(
        Action::Complete,
        Cursor::Selection {
            sorted_up_to: n,
            current_min: None,
            comparing_with: None,
        },
    );
}
