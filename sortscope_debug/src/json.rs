// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export for front ends.
//!
//! [`export`] writes one [`SortResult`] as a JSON object; cursor fields use
//! camelCase names and `-1` for "not applicable", which is the shape a
//! browser-side renderer expects:
//!
//! ```json
//! {
//!   "algorithm": "bubble",
//!   "comparisons": 1, "swaps": 1, "executionTimeMs": 0.004,
//!   "steps": [
//!     { "array": [2, 1], "action": "init", "comparisons": 0, "swaps": 0,
//!       "comparingWith": -1, "comparingWithNext": -1 },
//!     ...
//!   ]
//! }
//! ```
//!
//! Selection `swap` steps export `currentMin` as `-1` even though the
//! in-memory cursor still names the slot the minimum came from; renderers
//! stop highlighting the minimum once it has been placed.
//!
//! [`export_recording`] does the same for every run stored in bytes from a
//! [`RecorderSink`](crate::recorder::RecorderSink), writing a JSON array.

use std::io::{self, Write};

use serde_json::{Map, Value, json};

use sortscope_core::engine::Algorithm;
use sortscope_core::step::{Action, Cursor, SortResult, Step};

use crate::recorder::{RecordedEvent, apply_changes, decode};

/// Converts a result to its JSON form.
#[must_use]
pub fn to_value(result: &SortResult) -> Value {
    run_value(
        result.algorithm,
        result.trace.iter().map(step_value).collect(),
        result.comparisons,
        result.swaps,
        result.execution_time_ms,
    )
}

/// Writes `result` as pretty-printed JSON.
pub fn export(result: &SortResult, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &to_value(result))?;
    writeln!(writer)
}

/// Writes every run in a recording as a JSON array of result objects.
///
/// A run whose end record is missing (a truncated recording) is still
/// written, with its counters taken from its last step and a time of `0`.
/// Decoding stops at the first corrupt record, and at a step whose
/// snapshot cannot be allocated.
pub fn export_recording(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut runs: Vec<Value> = Vec::new();
    let mut open: Option<OpenRun> = None;

    for event in decode(bytes) {
        match event {
            RecordedEvent::RunBegin { algorithm, .. } => {
                if let Some(run) = open.take() {
                    runs.push(run.finish(None));
                }
                open = Some(OpenRun {
                    algorithm,
                    array: Vec::new(),
                    steps: Vec::new(),
                    counters: (0, 0),
                });
            }
            RecordedEvent::Step(recorded) => {
                let Some(run) = open.as_mut() else {
                    continue;
                };
                if apply_changes(&mut run.array, &recorded).is_none() {
                    break;
                }
                run.counters = (recorded.comparisons, recorded.swaps);
                run.steps.push(step_value(&Step {
                    array: run.array.clone(),
                    action: recorded.action,
                    comparisons: recorded.comparisons,
                    swaps: recorded.swaps,
                    cursor: recorded.cursor,
                }));
            }
            RecordedEvent::RunEnd {
                comparisons,
                swaps,
                execution_time_ms,
            } => {
                if let Some(run) = open.take() {
                    runs.push(run.finish(Some((comparisons, swaps, execution_time_ms))));
                }
            }
        }
    }
    if let Some(run) = open.take() {
        runs.push(run.finish(None));
    }

    serde_json::to_writer_pretty(&mut *writer, &Value::Array(runs))?;
    writeln!(writer)
}

/// A run being rebuilt from a recording.
struct OpenRun {
    algorithm: Algorithm,
    array: Vec<f64>,
    steps: Vec<Value>,
    counters: (u64, u64),
}

impl OpenRun {
    fn finish(self, end: Option<(u64, u64, f64)>) -> Value {
        let (comparisons, swaps, time) =
            end.unwrap_or((self.counters.0, self.counters.1, 0.0));
        run_value(self.algorithm, self.steps, comparisons, swaps, time)
    }
}

fn run_value(
    algorithm: Algorithm,
    steps: Vec<Value>,
    comparisons: u64,
    swaps: u64,
    execution_time_ms: f64,
) -> Value {
    json!({
        "algorithm": algorithm.name(),
        "comparisons": comparisons,
        "swaps": swaps,
        "executionTimeMs": execution_time_ms,
        "steps": steps,
    })
}

/// `-1` stands for "not applicable".
fn index(i: Option<usize>) -> Value {
    i.map_or_else(|| json!(-1), |i| json!(i))
}

fn step_value(step: &Step) -> Value {
    let mut object = Map::new();
    object.insert("array".into(), json!(step.array));
    object.insert("action".into(), json!(step.action.as_str()));
    object.insert("comparisons".into(), json!(step.comparisons));
    object.insert("swaps".into(), json!(step.swaps));
    match step.cursor {
        Cursor::Bubble {
            comparing_with,
            comparing_with_next,
        } => {
            object.insert("comparingWith".into(), index(comparing_with));
            object.insert("comparingWithNext".into(), index(comparing_with_next));
        }
        Cursor::Selection {
            sorted_up_to,
            current_min,
            comparing_with,
        } => {
            object.insert("sortedUpTo".into(), json!(sorted_up_to));
            let current_min = if step.action == Action::Swap {
                None
            } else {
                current_min
            };
            object.insert("currentMin".into(), index(current_min));
            object.insert("comparingWith".into(), index(comparing_with));
        }
        Cursor::Insertion {
            sorted_up_to,
            key_index,
            comparing_with,
        } => {
            object.insert("sortedUpTo".into(), json!(sorted_up_to));
            object.insert("keyIndex".into(), index(key_index));
            object.insert("comparingWith".into(), index(comparing_with));
        }
        Cursor::Merge { h, step, i, j, k } => {
            object.insert("h".into(), json!(h));
            object.insert("step".into(), json!(step));
            object.insert("i".into(), index(i));
            object.insert("j".into(), index(j));
            object.insert("k".into(), index(k));
        }
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use sortscope_core::clock::FixedClock;
    use sortscope_core::trace::Tracer;

    fn run(algorithm: Algorithm, input: &[f64]) -> SortResult {
        algorithm.run_with(input, &FixedClock::default(), &mut Tracer::none())
    }

    #[test]
    fn bubble_fields_and_sentinels() {
        let value = to_value(&run(Algorithm::Bubble, &[2.0, 1.0]));
        assert_eq!(value["algorithm"], "bubble");
        assert_eq!(value["comparisons"], 1);
        assert_eq!(value["swaps"], 1);
        assert_eq!(value["executionTimeMs"], 0.0);

        let steps = value["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0]["action"], "init");
        assert_eq!(steps[0]["comparingWith"], -1);
        assert_eq!(steps[1]["action"], "compare");
        assert_eq!(steps[1]["comparingWith"], 0);
        assert_eq!(steps[1]["comparingWithNext"], 1);
        assert_eq!(steps[2]["array"], json!([1.0, 2.0]));
    }

    #[test]
    fn cursor_keys_per_algorithm() {
        let keys = |algorithm: Algorithm| {
            let value = to_value(&run(algorithm, &[3.0, 1.0, 2.0]));
            let mut keys: Vec<String> = value["steps"][0]
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect();
            keys.sort();
            keys
        };
        assert_eq!(
            keys(Algorithm::Selection),
            ["action", "array", "comparingWith", "comparisons", "currentMin", "sortedUpTo", "swaps"]
        );
        assert_eq!(
            keys(Algorithm::Insertion),
            ["action", "array", "comparingWith", "comparisons", "keyIndex", "sortedUpTo", "swaps"]
        );
        assert_eq!(
            keys(Algorithm::Merge),
            ["action", "array", "comparisons", "h", "i", "j", "k", "step", "swaps"]
        );
    }

    #[test]
    fn export_writes_parseable_json() {
        let result = run(Algorithm::Merge, &[4.0, 2.0, 3.0]);
        let mut out = Vec::new();
        export(&result, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, to_value(&result));
    }

    #[test]
    fn recording_export_matches_direct_export() {
        let mut rec = RecorderSink::new();
        let mut expected = Vec::new();
        for algorithm in Algorithm::ALL {
            let result =
                algorithm.run_with(&[5.0, 1.0, 4.0, 1.0], &FixedClock::default(), &mut Tracer::new(&mut rec));
            expected.push(to_value(&result));
        }
        let mut out = Vec::new();
        export_recording(rec.as_bytes(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, Value::Array(expected));
    }

    #[test]
    fn truncated_recording_keeps_partial_run() {
        let mut rec = RecorderSink::new();
        let result = Algorithm::Insertion.run_with(
            &[3.0, 2.0, 1.0],
            &FixedClock::default(),
            &mut Tracer::new(&mut rec),
        );
        // Drop the 25-byte run end record.
        let bytes = rec.as_bytes();
        let mut out = Vec::new();
        export_recording(&bytes[..bytes.len() - 25], &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let runs = parsed.as_array().unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0]["steps"].as_array().unwrap().len(), result.len());
        assert_eq!(runs[0]["comparisons"], result.comparisons);
        assert_eq!(runs[0]["executionTimeMs"], 0.0);
    }

    #[test]
    fn selection_swap_clears_current_min() {
        let result = run(Algorithm::Selection, &[3.0, 1.0, 2.0]);
        let swap = result
            .trace
            .iter()
            .find(|s| s.action == Action::Swap)
            .unwrap();
        assert!(matches!(
            swap.cursor,
            Cursor::Selection {
                current_min: Some(1),
                ..
            }
        ));

        let value = to_value(&result);
        let steps = value["steps"].as_array().unwrap();
        let exported = steps.iter().find(|s| s["action"] == "swap").unwrap();
        assert_eq!(exported["currentMin"], -1);
        assert_eq!(exported["sortedUpTo"], 1);
        let new_min = steps.iter().find(|s| s["action"] == "new_min").unwrap();
        assert_eq!(new_min["currentMin"], 1);
    }

    #[test]
    fn huge_run_length_is_not_preallocated() {
        let mut bytes = vec![1, 0];
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        let mut out = Vec::new();
        export_recording(&bytes, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let runs = parsed.as_array().unwrap();
        assert_eq!(runs.len(), 1);
        assert!(runs[0]["steps"].as_array().unwrap().is_empty());
    }

    #[test]
    fn unallocatable_step_ends_export() {
        let len = u64::MAX / 4;
        let mut rec = RecorderSink::new();
        Algorithm::Bubble.run_with(&[2.0, 1.0], &FixedClock::default(), &mut Tracer::new(&mut rec));
        let mut bytes = rec.into_bytes();
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&len.to_le_bytes());
        // An `init` step with a bubble cursor and no changes.
        bytes.extend_from_slice(&[2, 0]);
        bytes.extend_from_slice(&[0; 16]);
        bytes.push(0);
        bytes.extend_from_slice(&[0; 18]);
        bytes.extend_from_slice(&len.to_le_bytes());
        bytes.extend_from_slice(&[0; 8]);

        let mut out = Vec::new();
        export_recording(&bytes, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let runs = parsed.as_array().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["steps"].as_array().unwrap().len(), 6);
        assert!(runs[1]["steps"].as_array().unwrap().is_empty());
    }
}
