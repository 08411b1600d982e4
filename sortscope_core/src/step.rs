// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The step and result types produced by every engine.
//!
//! A trace is a `Vec<Step>`: one [`Step`] per event of interest, each holding
//! a full snapshot of the working copy, the cumulative counters at that
//! instant, and the cursor positions the algorithm was looking at.
//!
//! # Memory cost
//!
//! Every step owns an independent copy of the array, so a trace costs
//! `O(n)` per step. The quadratic engines emit `O(n²)` steps, which puts the
//! whole trace at `O(n³)` values in the worst case. Callers that need to keep
//! large traces around should record them through a delta-encoding sink
//! instead (see `sortscope_debug::recorder`).

use alloc::vec::Vec;
use core::fmt;

use crate::engine::Algorithm;

/// What happened at a step.
///
/// The set is shared by all engines; each engine only emits the subset that
/// applies to it (see the engine modules for the exact vocabulary).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Initial state before any work.
    Init,
    /// Two values are about to be (or were just) compared.
    Compare,
    /// Two slots were exchanged.
    Swap,
    /// Bubble sort finished an outer pass.
    PassComplete,
    /// Selection sort started looking for the minimum of the unsorted suffix.
    SelectMin,
    /// Selection sort found a strictly smaller candidate.
    NewMin,
    /// Selection sort found the minimum already in place.
    NoSwap,
    /// Insertion sort picked the next key.
    PickKey,
    /// Insertion sort moved a prefix element one slot right.
    Shift,
    /// Insertion sort wrote the key into its slot.
    Insert,
    /// Merge sort started a pass at a new width.
    OuterLoopStart,
    /// Merge sort started merging a new block.
    MergeStart,
    /// Merge sort wrote the smaller head into the scratch buffer.
    Copy,
    /// Merge sort copied a leftover element of the left run.
    CopyRemainingLeft,
    /// Merge sort copied a leftover element of the right run.
    CopyRemainingRight,
    /// Merge sort finished a block.
    MergeStepComplete,
    /// Merge sort flushed the scratch buffer back into the working copy.
    CopyBack,
    /// The working copy is sorted.
    Complete,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Init,
        Self::Compare,
        Self::Swap,
        Self::PassComplete,
        Self::SelectMin,
        Self::NewMin,
        Self::NoSwap,
        Self::PickKey,
        Self::Shift,
        Self::Insert,
        Self::OuterLoopStart,
        Self::MergeStart,
        Self::Copy,
        Self::CopyRemainingLeft,
        Self::CopyRemainingRight,
        Self::MergeStepComplete,
        Self::CopyBack,
        Self::Complete,
    ];

    /// Returns the snake_case tag consumers match on.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::PassComplete => "pass_complete",
            Self::SelectMin => "select_min",
            Self::NewMin => "new_min",
            Self::NoSwap => "no_swap",
            Self::PickKey => "pick_key",
            Self::Shift => "shift",
            Self::Insert => "insert",
            Self::OuterLoopStart => "outer_loop_start",
            Self::MergeStart => "merge_start",
            Self::Copy => "copy",
            Self::CopyRemainingLeft => "copy_remaining_left",
            Self::CopyRemainingRight => "copy_remaining_right",
            Self::MergeStepComplete => "merge_step_complete",
            Self::CopyBack => "copy_back",
            Self::Complete => "complete",
        }
    }

    /// Returns `true` for steps whose snapshot is identical to the previous
    /// one by construction.
    #[must_use]
    pub const fn is_marker(self) -> bool {
        !matches!(self, Self::Swap | Self::Shift | Self::Insert | Self::CopyBack)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indices an engine was looking at when it recorded a step.
///
/// `None` means "not applicable at this step".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Bubble sort: the adjacent pair under comparison.
    Bubble {
        /// Left element of the pair.
        comparing_with: Option<usize>,
        /// Right element of the pair.
        comparing_with_next: Option<usize>,
    },
    /// Selection sort.
    Selection {
        /// Length of the sorted prefix.
        sorted_up_to: usize,
        /// Index of the current minimum candidate.
        current_min: Option<usize>,
        /// Index being compared against the candidate.
        comparing_with: Option<usize>,
    },
    /// Insertion sort.
    Insertion {
        /// Length of the sorted prefix.
        sorted_up_to: usize,
        /// Index of the key (or, on `insert`, where it landed).
        key_index: Option<usize>,
        /// Prefix index compared against the key.
        comparing_with: Option<usize>,
    },
    /// Bottom-up merge sort.
    Merge {
        /// Current run width; `0` before the first pass.
        h: usize,
        /// Left edge of the current block (`0` when not in a block).
        step: usize,
        /// Head of the left run.
        i: Option<usize>,
        /// Head of the right run.
        j: Option<usize>,
        /// Next write position in the scratch buffer.
        k: Option<usize>,
    },
}

/// One recorded event.
///
/// Steps are immutable once recorded. The default element type is `f64`;
/// the engines are only exposed for numeric input.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<T = f64> {
    /// Snapshot of the working copy at this instant.
    pub array: Vec<T>,
    /// What happened.
    pub action: Action,
    /// Cumulative comparison count.
    pub comparisons: u64,
    /// Cumulative element-relocation count (swaps, shifts and copies).
    pub swaps: u64,
    /// Algorithm-specific cursor positions.
    pub cursor: Cursor,
}

/// The outcome of one engine run.
#[derive(Clone, Debug, PartialEq)]
pub struct SortResult<T = f64> {
    /// Which engine produced this result.
    pub algorithm: Algorithm,
    /// Every recorded step, in order.
    pub trace: Vec<Step<T>>,
    /// Total comparisons; equals the last step's counter.
    pub comparisons: u64,
    /// Total relocations; equals the last step's counter.
    pub swaps: u64,
    /// Wall-clock time of the whole run, in milliseconds.
    pub execution_time_ms: f64,
}

impl<T> SortResult<T> {
    /// Returns the final snapshot, which is the sorted copy of the input.
    #[must_use]
    pub fn sorted(&self) -> &[T] {
        self.trace.last().map_or(&[], |step| step.array.as_slice())
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Returns `true` if no steps were recorded. Engines always record at
    /// least two, so this only holds for hand-built values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Returns the actions of the trace, in order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.trace.iter().map(|step| step.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn action_tags_are_unique() {
        for (i, a) in Action::ALL.iter().enumerate() {
            for b in &Action::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "{a:?} and {b:?} share a tag");
            }
        }
    }

    #[test]
    fn only_mutating_actions_are_not_markers() {
        let mutating: Vec<_> = Action::ALL.iter().filter(|a| !a.is_marker()).collect();
        assert_eq!(
            mutating,
            [&Action::Swap, &Action::Shift, &Action::Insert, &Action::CopyBack]
        );
    }

    #[test]
    fn sorted_is_last_snapshot() {
        let cursor = Cursor::Bubble {
            comparing_with: None,
            comparing_with_next: None,
        };
        let result = SortResult {
            algorithm: Algorithm::Bubble,
            trace: vec![
                Step {
                    array: vec![2.0, 1.0],
                    action: Action::Init,
                    comparisons: 0,
                    swaps: 0,
                    cursor,
                },
                Step {
                    array: vec![1.0, 2.0],
                    action: Action::Complete,
                    comparisons: 1,
                    swaps: 1,
                    cursor,
                },
            ],
            comparisons: 1,
            swaps: 1,
            execution_time_ms: 0.0,
        };
        assert_eq!(result.sorted(), &[1.0, 2.0]);
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.actions().collect::<Vec<_>>(),
            [Action::Init, Action::Complete]
        );
    }

    #[test]
    fn empty_result_has_no_sorted_values() {
        let result: SortResult = SortResult {
            algorithm: Algorithm::Merge,
            trace: Vec::new(),
            comparisons: 0,
            swaps: 0,
            execution_time_ms: 0.0,
        };
        assert!(result.is_empty());
        assert!(result.sorted().is_empty());
    }
}
