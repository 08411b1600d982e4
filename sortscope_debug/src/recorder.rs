// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact delta recording and replay.
//!
//! An in-memory trace stores a full snapshot per step. [`RecorderSink`]
//! implements [`StepSink`] and instead encodes, for every step, only the
//! slots whose value changed since the previous step, as little-endian
//! records in a `Vec<u8>`. Marker steps (`compare`, `pass_complete`, …)
//! therefore cost a fixed handful of bytes regardless of `n`.
//!
//! [`decode`] reads the records back as an iterator of [`RecordedEvent`];
//! [`replay`] goes one step further and rebuilds full [`Step`]s, snapshot
//! included, by applying the deltas in order.

use sortscope_core::engine::Algorithm;
use sortscope_core::step::{Action, Cursor, SortResult, Step};
use sortscope_core::trace::StepSink;

// ---------------------------------------------------------------------------
// Record type discriminants
// ---------------------------------------------------------------------------

const TAG_RUN_BEGIN: u8 = 1;
const TAG_STEP: u8 = 2;
const TAG_RUN_END: u8 = 3;

const CURSOR_BUBBLE: u8 = 0;
const CURSOR_SELECTION: u8 = 1;
const CURSOR_INSERTION: u8 = 2;
const CURSOR_MERGE: u8 = 3;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`StepSink`] that delta-encodes steps into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
    /// Snapshot of the previous step, the base for the next delta.
    last: Vec<f64>,
    steps: usize,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns the number of steps recorded so far, across all runs.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Records a finished result in one go, as if it had been observed live.
    pub fn record_result(&mut self, result: &SortResult) {
        let input = result.trace.first().map_or(&[][..], |s| s.array.as_slice());
        self.on_run_begin(result.algorithm, input);
        for step in &result.trace {
            self.on_step(step);
        }
        self.on_run_end(result);
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_u64(v as u64);
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_option_usize(&mut self, v: Option<usize>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_usize(val);
            }
            None => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
    }

    fn write_cursor(&mut self, cursor: &Cursor) {
        match *cursor {
            Cursor::Bubble {
                comparing_with,
                comparing_with_next,
            } => {
                self.write_u8(CURSOR_BUBBLE);
                self.write_option_usize(comparing_with);
                self.write_option_usize(comparing_with_next);
            }
            Cursor::Selection {
                sorted_up_to,
                current_min,
                comparing_with,
            } => {
                self.write_u8(CURSOR_SELECTION);
                self.write_usize(sorted_up_to);
                self.write_option_usize(current_min);
                self.write_option_usize(comparing_with);
            }
            Cursor::Insertion {
                sorted_up_to,
                key_index,
                comparing_with,
            } => {
                self.write_u8(CURSOR_INSERTION);
                self.write_usize(sorted_up_to);
                self.write_option_usize(key_index);
                self.write_option_usize(comparing_with);
            }
            Cursor::Merge { h, step, i, j, k } => {
                self.write_u8(CURSOR_MERGE);
                self.write_usize(h);
                self.write_usize(step);
                self.write_option_usize(i);
                self.write_option_usize(j);
                self.write_option_usize(k);
            }
        }
    }
}

/// Index of `action` in [`Action::ALL`].
fn action_code(action: Action) -> u8 {
    let index = Action::ALL.iter().position(|&a| a == action).unwrap_or(0);
    u8::try_from(index).unwrap_or(u8::MAX)
}

fn algorithm_code(algorithm: Algorithm) -> u8 {
    let index = Algorithm::ALL
        .iter()
        .position(|&a| a == algorithm)
        .unwrap_or(0);
    u8::try_from(index).unwrap_or(u8::MAX)
}

impl StepSink for RecorderSink {
    fn on_run_begin(&mut self, algorithm: Algorithm, input: &[f64]) {
        self.write_u8(TAG_RUN_BEGIN);
        self.write_u8(algorithm_code(algorithm));
        self.write_usize(input.len());
        self.last.clear();
    }

    fn on_step(&mut self, step: &Step) {
        let len = step.array.len();
        self.last.resize(len, 0.0);
        let changes: Vec<(usize, f64)> = step
            .array
            .iter()
            .zip(&self.last)
            .enumerate()
            .filter(|(_, (new, old))| new.to_bits() != old.to_bits())
            .map(|(index, (&new, _))| (index, new))
            .collect();

        self.write_u8(TAG_STEP);
        self.write_u8(action_code(step.action));
        self.write_u64(step.comparisons);
        self.write_u64(step.swaps);
        self.write_cursor(&step.cursor);
        self.write_usize(len);
        self.write_usize(changes.len());
        for &(index, value) in &changes {
            self.write_usize(index);
            self.write_f64(value);
        }

        self.last.copy_from_slice(&step.array);
        self.steps += 1;
    }

    fn on_run_end(&mut self, result: &SortResult) {
        self.write_u8(TAG_RUN_END);
        self.write_u64(result.comparisons);
        self.write_u64(result.swaps);
        self.write_f64(result.execution_time_ms);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// One step as stored in a recording: everything but the full snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedStep {
    /// What happened.
    pub action: Action,
    /// Cumulative comparison count.
    pub comparisons: u64,
    /// Cumulative relocation count.
    pub swaps: u64,
    /// Cursor positions.
    pub cursor: Cursor,
    /// Length of the snapshot.
    pub len: usize,
    /// Slots that differ from the previous snapshot, with their new values.
    pub changes: Vec<(usize, f64)>,
}

/// A decoded record from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// Start of a run.
    RunBegin {
        /// Which engine ran.
        algorithm: Algorithm,
        /// Input length.
        len: usize,
    },
    /// A [`RecordedStep`].
    Step(RecordedStep),
    /// End of a run.
    RunEnd {
        /// Total comparisons.
        comparisons: u64,
        /// Total relocations.
        swaps: u64,
        /// Wall-clock time of the run.
        execution_time_ms: f64,
    },
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
        run_len: None,
    }
}

/// Iterator over decoded records.
///
/// Iteration stops at the first unknown tag or truncated record, and at
/// any step that lies outside a run or whose length differs from the
/// length its run began with.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
    /// Input length of the open run, if any.
    run_len: Option<usize>,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_usize(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_f64(&mut self) -> Option<f64> {
        Some(f64::from_bits(self.read_u64()?))
    }

    fn read_option_usize(&mut self) -> Option<Option<usize>> {
        let present = self.read_u8()?;
        let val = self.read_usize()?;
        Some(if present != 0 { Some(val) } else { None })
    }

    fn read_cursor(&mut self) -> Option<Cursor> {
        Some(match self.read_u8()? {
            CURSOR_BUBBLE => Cursor::Bubble {
                comparing_with: self.read_option_usize()?,
                comparing_with_next: self.read_option_usize()?,
            },
            CURSOR_SELECTION => Cursor::Selection {
                sorted_up_to: self.read_usize()?,
                current_min: self.read_option_usize()?,
                comparing_with: self.read_option_usize()?,
            },
            CURSOR_INSERTION => Cursor::Insertion {
                sorted_up_to: self.read_usize()?,
                key_index: self.read_option_usize()?,
                comparing_with: self.read_option_usize()?,
            },
            CURSOR_MERGE => Cursor::Merge {
                h: self.read_usize()?,
                step: self.read_usize()?,
                i: self.read_option_usize()?,
                j: self.read_option_usize()?,
                k: self.read_option_usize()?,
            },
            _ => return None,
        })
    }

    fn decode_run_begin(&mut self) -> Option<RecordedEvent> {
        let algorithm = *Algorithm::ALL.get(usize::from(self.read_u8()?))?;
        let len = self.read_usize()?;
        self.run_len = Some(len);
        Some(RecordedEvent::RunBegin { algorithm, len })
    }

    fn decode_step(&mut self) -> Option<RecordedEvent> {
        let action = *Action::ALL.get(usize::from(self.read_u8()?))?;
        let comparisons = self.read_u64()?;
        let swaps = self.read_u64()?;
        let cursor = self.read_cursor()?;
        let len = self.read_usize()?;
        if self.run_len != Some(len) {
            return None;
        }
        let count = self.read_usize()?;
        // Each change takes 16 bytes; refuse counts the buffer cannot hold.
        if count > self.remaining() / 16 {
            return None;
        }
        let mut changes = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.read_usize()?;
            if index >= len {
                return None;
            }
            changes.push((index, self.read_f64()?));
        }
        Some(RecordedEvent::Step(RecordedStep {
            action,
            comparisons,
            swaps,
            cursor,
            len,
            changes,
        }))
    }

    fn decode_run_end(&mut self) -> Option<RecordedEvent> {
        self.run_len = None;
        Some(RecordedEvent::RunEnd {
            comparisons: self.read_u64()?,
            swaps: self.read_u64()?,
            execution_time_ms: self.read_f64()?,
        })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_RUN_BEGIN => self.decode_run_begin(),
            TAG_STEP => self.decode_step(),
            TAG_RUN_END => self.decode_run_end(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Brings `array` from the previous snapshot to the one `step` describes.
///
/// Returns `None` if the snapshot cannot be allocated, which only happens
/// for a corrupt length.
pub(crate) fn apply_changes(array: &mut Vec<f64>, step: &RecordedStep) -> Option<()> {
    if let Some(extra) = step.len.checked_sub(array.len()) {
        array.try_reserve_exact(extra).ok()?;
    }
    array.resize(step.len, 0.0);
    for &(index, value) in &step.changes {
        array[index] = value;
    }
    Some(())
}

/// Rebuilds full [`Step`]s from a recording.
pub fn replay(bytes: &[u8]) -> Replay<'_> {
    Replay {
        events: decode(bytes),
        array: Vec::new(),
    }
}

/// Iterator over replayed steps; see [`replay`].
#[derive(Debug)]
pub struct Replay<'a> {
    events: DecodeIter<'a>,
    array: Vec<f64>,
}

impl Iterator for Replay<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.events.next()? {
                RecordedEvent::RunBegin { .. } => self.array.clear(),
                RecordedEvent::RunEnd { .. } => {}
                RecordedEvent::Step(step) => {
                    apply_changes(&mut self.array, &step)?;
                    return Some(Step {
                        array: self.array.clone(),
                        action: step.action,
                        comparisons: step.comparisons,
                        swaps: step.swaps,
                        cursor: step.cursor,
                    });
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
