// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instrumented sorting engines that emit replayable step traces.
//!
//! `sortscope_core` runs one of four classic sorting algorithms over a copy
//! of a numeric input and records every comparison and data movement as a
//! [`Step`](step::Step). A consumer can reconstruct the array at any point of
//! the run from the trace alone, and the same input always yields the same
//! trace. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   &str ──► input::parse_sequence() ──► Vec<f64>
//!                                           │
//!                 ┌─────────────────────────┘
//!                 ▼
//!   Algorithm::run_with(input, clock, tracer) ──► SortResult { trace, counters, time }
//!                                    │
//!                                    └──► StepSink::on_step() (live, per step)
//! ```
//!
//! **[`engine`]**: [`Algorithm`](engine::Algorithm) selection and the four
//! engines: [`bubble`](engine::bubble), [`selection`](engine::selection),
//! [`insertion`](engine::insertion) and [`merge`](engine::merge).
//!
//! **[`step`]**: [`Step`](step::Step), [`Action`](step::Action),
//! [`Cursor`](step::Cursor) and [`SortResult`](step::SortResult).
//!
//! **[`trace`]**: [`StepSink`](trace::StepSink) trait for observing runs as
//! they happen, with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`input`]**: Parsing comma/space separated number lists.
//!
//! **[`clock`]** / **[`time`]**: Clock sources and tick arithmetic for
//! timing runs.
//!
//! # Example
//!
//! ```
//! use sortscope_core::clock::FixedClock;
//! use sortscope_core::engine::Algorithm;
//! use sortscope_core::input::parse_sequence;
//! use sortscope_core::step::Action;
//! use sortscope_core::trace::Tracer;
//!
//! let input = parse_sequence("5, 2, 8, 1, 9, 3").unwrap();
//! let result = Algorithm::Bubble.run_with(&input, &FixedClock::default(), &mut Tracer::none());
//! assert_eq!(result.sorted(), &[1.0, 2.0, 3.0, 5.0, 8.0, 9.0]);
//! assert_eq!(result.trace[0].action, Action::Init);
//! assert_eq!(result.comparisons, 15);
//! ```
//!
//! # Crate features
//!
//! - `std` (enabled by default): Adds [`StdClock`](clock::StdClock) and the
//!   wall-clock convenience entry points such as
//!   [`Algorithm::run`](engine::Algorithm::run).
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per recorded step).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod clock;
pub mod engine;
pub mod input;
pub mod step;
pub mod time;
pub mod trace;

#[cfg(test)]
mod check;
