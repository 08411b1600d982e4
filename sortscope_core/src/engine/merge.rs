// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Iterative bottom-up merge sort.
//!
//! The run width `h` starts at 1 and doubles after every pass until it
//! reaches `n`. A pass walks the array in blocks of `2h`; each block
//! `[left, right)` is split at `mid = min(left + h, n)` and its two runs are
//! merged into a scratch buffer of length `n`:
//!
//! ```text
//!   working  [ left run | right run ][ left run | right run ] ...
//!              i →        j →
//!   scratch  [ merged block          ][ merged block         ] ...
//!              k →
//! ```
//!
//! Heads are compared with `<=` so ties take the left run and the sort is
//! stable. Once every block of the pass is merged, the whole scratch buffer
//! is copied back into the working copy in one step.
//!
//! The working copy only changes at `copy_back`; every other step of a pass
//! carries the same snapshot and describes progress through `i`, `j`, `k`.
//! Each write into the scratch buffer counts as one relocation; only
//! head-to-head comparisons count as comparisons.

use super::Run;
use crate::clock::Clock;
use crate::step::{Action, Cursor, SortResult};
use crate::trace::Tracer;

/// Sorts a copy of `input` with bottom-up merge sort, timed by the wall
/// clock.
#[cfg(feature = "std")]
#[must_use]
pub fn merge_sort(input: &[f64]) -> SortResult {
    super::Algorithm::Merge.run(input)
}

/// Like [`merge_sort`], with an explicit clock and tracer.
pub fn merge_sort_with(input: &[f64], clock: &dyn Clock, tracer: &mut Tracer<'_>) -> SortResult {
    super::execute(super::Algorithm::Merge, input, clock, tracer)
}

/// A cursor outside of any block.
const fn between_blocks(h: usize, step: usize) -> Cursor {
    Cursor::Merge {
        h,
        step,
        i: None,
        j: None,
        k: None,
    }
}

/// A cursor inside the block starting at `left`.
const fn in_block(h: usize, left: usize, i: usize, j: usize, k: usize) -> Cursor {
    Cursor::Merge {
        h,
        step: left,
        i: Some(i),
        j: Some(j),
        k: Some(k),
    }
}

pub(crate) fn run<T: Copy + PartialOrd>(run: &mut Run<'_, '_, T>) {
    let n = run.len();
    run.record(Action::Init, between_blocks(0, 0));
    if n <= 1 {
        run.record(Action::Complete, between_blocks(0, 0));
        return;
    }

    // Every slot is written once per pass before it is read back, so the
    // initial contents only need the right length and type.
    let mut scratch = run.data().to_vec();
    let mut h = 1;

    while h < n {
        run.record(Action::OuterLoopStart, between_blocks(h, 0));

        let mut left = 0;
        while left < n {
            let mid = (left + h).min(n);
            let right = (left + 2 * h).min(n);
            let (mut i, mut j, mut k) = (left, mid, left);
            run.record(Action::MergeStart, in_block(h, left, i, j, k));

            while i < mid && j < right {
                run.count_comparison();
                run.record(Action::Compare, in_block(h, left, i, j, k));
                if run.get(i) <= run.get(j) {
                    scratch[k] = run.get(i);
                    i += 1;
                } else {
                    scratch[k] = run.get(j);
                    j += 1;
                }
                k += 1;
                run.count_move();
                run.record(Action::Copy, in_block(h, left, i, j, k));
            }

            while i < mid {
                scratch[k] = run.get(i);
                i += 1;
                k += 1;
                run.count_move();
                run.record(Action::CopyRemainingLeft, in_block(h, left, i, j, k));
            }

            while j < right {
                scratch[k] = run.get(j);
                j += 1;
                k += 1;
                run.count_move();
                run.record(Action::CopyRemainingRight, in_block(h, left, i, j, k));
            }

            left += 2 * h;
            run.record(Action::MergeStepComplete, between_blocks(h, left));
        }

        run.overwrite(&scratch);
        h *= 2;
        run.record(Action::CopyBack, between_blocks(h, 0));
    }

    run.record(Action::Complete, between_blocks(h, 0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{self, Tagged};
    use crate::engine::Algorithm;
    use alloc::vec::Vec;

    fn widths(result: &SortResult) -> Vec<usize> {
        result
            .trace
            .iter()
            .filter(|s| matches!(s.action, Action::OuterLoopStart | Action::Complete))
            .map(|s| match s.cursor {
                Cursor::Merge { h, .. } => h,
                other => panic!("expected a merge cursor, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn sorts_odd_length_input() {
        let result = check::run_fixed(Algorithm::Merge, &[9.0, 4.0, 7.0, 1.0, 5.0, 2.0, 8.0]);
        assert_eq!(result.sorted(), &[1.0, 2.0, 4.0, 5.0, 7.0, 8.0, 9.0]);
        assert_eq!(widths(&result), [1, 2, 4, 8], "h doubles until it reaches n");
    }

    #[test]
    fn every_pass_moves_every_element_once() {
        let input = [9.0, 4.0, 7.0, 1.0, 5.0, 2.0, 8.0];
        let result = check::run_fixed(Algorithm::Merge, &input);
        let passes = result.actions().filter(|&a| a == Action::CopyBack).count();
        assert_eq!(passes, 3);
        assert_eq!(result.swaps, (passes * input.len()) as u64);
    }

    #[test]
    fn working_copy_only_changes_at_copy_back() {
        let result = check::run_fixed(Algorithm::Merge, &[4.0, 3.0, 2.0, 1.0]);
        for pair in result.trace.windows(2) {
            if pair[1].action != Action::CopyBack {
                assert_eq!(pair[0].array, pair[1].array, "{:?}", pair[1].action);
            }
        }
        let copy_backs: Vec<_> = result
            .trace
            .iter()
            .filter(|s| s.action == Action::CopyBack)
            .map(|s| s.array.clone())
            .collect();
        assert_eq!(
            copy_backs,
            [alloc::vec![3.0, 4.0, 1.0, 2.0], alloc::vec![1.0, 2.0, 3.0, 4.0]]
        );
    }

    #[test]
    fn first_block_of_a_pass() {
        let result = check::run_fixed(Algorithm::Merge, &[2.0, 1.0, 3.0]);
        let actions: Vec<_> = result.actions().take(7).collect();
        assert_eq!(
            actions,
            [
                Action::Init,
                Action::OuterLoopStart,
                Action::MergeStart,
                Action::Compare,
                Action::Copy,
                Action::CopyRemainingLeft,
                Action::MergeStepComplete,
            ]
        );
        assert_eq!(result.trace[2].cursor, in_block(1, 0, 0, 1, 0));
        // 1 < 2, so the right head is taken first.
        assert_eq!(result.trace[4].cursor, in_block(1, 0, 0, 2, 1));
        assert_eq!(result.trace[6].cursor, between_blocks(1, 2));
        // The trailing single element forms a block with an empty right run.
        assert_eq!(result.trace[7].action, Action::MergeStart);
        assert_eq!(result.trace[8].action, Action::CopyRemainingLeft);
    }

    #[test]
    fn comparisons_only_count_head_to_head() {
        // [1, 2] then [3, 4]: the left run drains after two comparisons.
        let result = check::run_fixed(Algorithm::Merge, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(result.comparisons, 2 + 2);
        assert_eq!(result.swaps, 8);
    }

    #[test]
    fn preserves_order_of_equal_values() {
        let input = Tagged::sequence(&[2.0, 1.0, 2.0, 1.0, 0.0, 2.0, 1.0, 0.0, 2.0]);
        let result = check::run_tagged(Algorithm::Merge, &input);
        check::assert_stable(&input, result.sorted());
    }

    #[test]
    fn trace_properties_hold() {
        for input in check::SAMPLES {
            let result = check::run_fixed(Algorithm::Merge, input);
            check::assert_trace_invariants(input, &result);
        }
    }
}
