// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`StepSink`] and writes one line per step
//! to a [`Write`](std::io::Write) destination (default: stderr), followed by
//! a summary line with the run's counters and timing.

use std::io::Write;

use sortscope_core::engine::Algorithm;
use sortscope_core::step::{Cursor, SortResult, Step};
use sortscope_core::trace::StepSink;

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    show_arrays: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("show_arrays", &self.show_arrays)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            show_arrays: true,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            show_arrays: true,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            show_arrays: true,
        }
    }

    /// Controls whether each line ends with the full snapshot. On by default.
    #[must_use]
    pub fn show_arrays(mut self, show: bool) -> Self {
        self.show_arrays = show;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Formats an optional index, using `-` when not applicable.
struct Index(Option<usize>);

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(i) => write!(f, "{i}"),
            None => f.write_str("-"),
        }
    }
}

fn cursor_fields(cursor: &Cursor) -> String {
    match *cursor {
        Cursor::Bubble {
            comparing_with,
            comparing_with_next,
        } => format!("pair={}/{}", Index(comparing_with), Index(comparing_with_next)),
        Cursor::Selection {
            sorted_up_to,
            current_min,
            comparing_with,
        } => format!(
            "sorted={sorted_up_to} min={} cmp={}",
            Index(current_min),
            Index(comparing_with)
        ),
        Cursor::Insertion {
            sorted_up_to,
            key_index,
            comparing_with,
        } => format!(
            "sorted={sorted_up_to} key={} cmp={}",
            Index(key_index),
            Index(comparing_with)
        ),
        Cursor::Merge { h, step, i, j, k } => format!(
            "h={h} block={step} i={} j={} k={}",
            Index(i),
            Index(j),
            Index(k)
        ),
    }
}

impl<W: Write> StepSink for PrettyPrintSink<W> {
    fn on_run_begin(&mut self, algorithm: Algorithm, input: &[f64]) {
        let _ = writeln!(self.writer, "[{algorithm}] n={} input={input:?}", input.len());
    }

    fn on_step(&mut self, step: &Step) {
        let _ = write!(
            self.writer,
            "[{}] cmp={} mov={} {}",
            step.action,
            step.comparisons,
            step.swaps,
            cursor_fields(&step.cursor),
        );
        let _ = if self.show_arrays {
            writeln!(self.writer, " {:?}", step.array)
        } else {
            writeln!(self.writer)
        };
    }

    fn on_run_end(&mut self, result: &SortResult) {
        let _ = writeln!(
            self.writer,
            "[summary] {} steps={} comparisons={} swaps={} time={:.3}ms",
            result.algorithm,
            result.len(),
            result.comparisons,
            result.swaps,
            result.execution_time_ms,
        );
    }
}
