// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, compact recording, and JSON export for sortscope traces.
//!
//! This crate provides [`StepSink`](sortscope_core::trace::StepSink)
//! implementations and exporters for development and front ends:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-step output.
//! - [`recorder::RecorderSink`]: delta-encoded binary recording with
//!   [`recorder::decode`] and [`recorder::replay`] for playback.
//! - [`json::export`]: writes a result (or a whole recording) as JSON with
//!   the camelCase field names a browser renderer consumes.

pub mod json;
pub mod pretty;
pub mod recorder;
