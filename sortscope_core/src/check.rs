// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared trace checks for the engine tests.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::clock::FixedClock;
use crate::engine::{Algorithm, execute};
use crate::step::{Action, Cursor, SortResult, Step};
use crate::trace::Tracer;

/// Inputs every engine is checked against.
pub(crate) const SAMPLES: &[&[f64]] = &[
    &[],
    &[42.0],
    &[2.0, 1.0],
    &[1.0, 2.0],
    &[5.0, 2.0, 8.0, 1.0, 9.0, 3.0],
    &[6.0, 5.0, 3.0, 1.0, 8.0, 7.0, 2.0, 4.0],
    &[9.0, 4.0, 7.0, 1.0, 5.0, 2.0, 8.0],
    &[3.0, 3.0, 3.0, 3.0],
    &[10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0],
    &[-1.5, 0.0, 1e9, -1e9, 0.25, 0.25, -0.0, 7.0, 7.0],
];

/// Runs an engine with a clock that never advances.
pub(crate) fn run_fixed(algorithm: Algorithm, input: &[f64]) -> SortResult {
    execute(algorithm, input, &FixedClock::default(), &mut Tracer::none())
}

/// A value that remembers its input position. Only `value` takes part in
/// comparisons.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tagged {
    pub(crate) value: f64,
    pub(crate) tag: usize,
}

impl Tagged {
    pub(crate) fn sequence(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(tag, &value)| Self { value, tag })
            .collect()
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

pub(crate) fn run_tagged(algorithm: Algorithm, input: &[Tagged]) -> SortResult<Tagged> {
    execute(algorithm, input, &FixedClock::default(), &mut Tracer::none())
}

/// Asserts that `output` is sorted and that equal values kept input order.
pub(crate) fn assert_stable(input: &[Tagged], output: &[Tagged]) {
    assert_eq!(input.len(), output.len(), "length changed");
    for pair in output.windows(2) {
        assert!(pair[0].value <= pair[1].value, "not sorted: {output:?}");
        if pair[0].value == pair[1].value {
            assert!(
                pair[0].tag < pair[1].tag,
                "equal values reordered: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
    let mut tags: Vec<_> = output.iter().map(|t| t.tag).collect();
    tags.sort_unstable();
    assert!(
        tags.iter().copied().eq(0..input.len()),
        "output is not a permutation of the input"
    );
}

/// Checks every property a trace must satisfy for `input`.
pub(crate) fn assert_trace_invariants(input: &[f64], result: &SortResult) {
    let trace = &result.trace;
    let algorithm = result.algorithm;

    // Boundaries.
    let first = trace.first().expect("trace is never empty");
    let last = trace.last().expect("trace is never empty");
    assert_eq!(first.action, Action::Init, "{algorithm}: first step");
    assert_eq!(first.array, input, "{algorithm}: init snapshot");
    assert_eq!(last.action, Action::Complete, "{algorithm}: last step");
    if input.len() <= 1 {
        assert_eq!(trace.len(), 2, "{algorithm}: trivial input");
        assert_eq!((last.comparisons, last.swaps), (0, 0), "{algorithm}");
    }

    // Sorted permutation of the input.
    let mut expected = input.to_vec();
    expected.sort_by(f64::total_cmp);
    let mut actual = result.sorted().to_vec();
    assert!(
        actual.windows(2).all(|w| w[0] <= w[1]),
        "{algorithm}: not sorted: {actual:?}"
    );
    actual.sort_by(f64::total_cmp);
    assert_eq!(actual, expected, "{algorithm}: not a permutation");

    // Counters.
    assert_eq!(result.comparisons, last.comparisons, "{algorithm}");
    assert_eq!(result.swaps, last.swaps, "{algorithm}");
    for pair in trace.windows(2) {
        assert!(pair[1].comparisons >= pair[0].comparisons, "{algorithm}");
        assert!(pair[1].swaps >= pair[0].swaps, "{algorithm}");
        assert_local_change(&pair[0], &pair[1], algorithm);
    }

    // Determinism.
    assert_eq!(*result, run_fixed(algorithm, input), "{algorithm}: rerun differs");
}

/// Asserts that `next` only differs from `prev` where its action may write.
fn assert_local_change(prev: &Step, next: &Step, algorithm: Algorithm) {
    assert_eq!(prev.array.len(), next.array.len());
    let changed: Vec<usize> = (0..prev.array.len())
        .filter(|&i| prev.array[i].to_bits() != next.array[i].to_bits())
        .collect();
    if next.action.is_marker() {
        assert!(
            changed.is_empty(),
            "{algorithm}: marker {} changed {changed:?}",
            next.action
        );
        return;
    }
    let allowed: Vec<usize> = match (next.action, next.cursor) {
        (
            Action::Swap,
            Cursor::Bubble {
                comparing_with: Some(i),
                ..
            },
        ) => alloc::vec![i, i + 1],
        (
            Action::Swap,
            Cursor::Selection {
                sorted_up_to,
                current_min: Some(min),
                ..
            },
        ) => alloc::vec![sorted_up_to - 1, min],
        (
            Action::Shift,
            Cursor::Insertion {
                comparing_with: Some(i),
                ..
            },
        ) => alloc::vec![i + 1],
        (
            Action::Insert,
            Cursor::Insertion {
                key_index: Some(k),
                ..
            },
        ) => alloc::vec![k],
        (Action::CopyBack, Cursor::Merge { .. }) => (0..next.array.len()).collect(),
        (action, cursor) => panic!("{algorithm}: unexpected {action} with {cursor:?}"),
    };
    assert!(
        changed.iter().all(|i| allowed.contains(i)),
        "{algorithm}: {} changed {changed:?}, allowed {allowed:?}",
        next.action
    );
}
