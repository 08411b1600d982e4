// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live observation of engine runs.
//!
//! Engines always build their own `Vec<Step>` trace. In addition, every step
//! is offered to a [`StepSink`] the moment it is recorded, so diagnostics
//! (pretty-printing, compact recording) can follow a run without holding on
//! to the full trace.
//!
//! [`Tracer`] wraps an optional `&mut dyn StepSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per step).

use crate::engine::Algorithm;
use crate::step::{SortResult, Step};

// ---------------------------------------------------------------------------
// StepSink trait
// ---------------------------------------------------------------------------

/// Receives steps from an engine run.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait StepSink<T = f64> {
    /// Called before the first step of a run.
    fn on_run_begin(&mut self, algorithm: Algorithm, input: &[T]) {
        _ = (algorithm, input);
    }

    /// Called for every step, in trace order.
    fn on_step(&mut self, step: &Step<T>) {
        _ = step;
    }

    /// Called once the run is complete, with the finished result.
    fn on_run_end(&mut self, result: &SortResult<T>) {
        _ = result;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`StepSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl<T> StepSink<T> for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`StepSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a, T = f64> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn StepSink<T>>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn StepSink<T>>,
}

impl<T> core::fmt::Debug for Tracer<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a, T> Tracer<'a, T> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn StepSink<T>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Announces the start of a run.
    #[inline]
    pub fn run_begin(&mut self, algorithm: Algorithm, input: &[T]) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_run_begin(algorithm, input);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (algorithm, input);
        }
    }

    /// Emits a recorded [`Step`].
    #[inline]
    pub fn step(&mut self, step: &Step<T>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_step(step);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = step;
        }
    }

    /// Announces the end of a run.
    #[inline]
    pub fn run_end(&mut self, result: &SortResult<T>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_run_end(result);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = result;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
