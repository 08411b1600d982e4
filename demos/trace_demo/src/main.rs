// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs the sorting engines end to end and dumps their traces.
//!
//! ```text
//! trace_demo [--algorithm NAME|all] [--seed N] [--length N] [--json PATH] [--quiet] [NUMBERS...]
//! ```
//!
//! Input comes from NUMBERS (parsed like a text field, so `5,2,8` and
//! `5 2 8` both work) or, when none are given, from the random generator.
//! Each run is observed by a
//! [`PrettyPrintSink`](sortscope_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](sortscope_debug::recorder::RecorderSink); the recording
//! is then replayed and checked against the in-memory traces before the
//! optional JSON export. The times in the summary come from a second,
//! untraced run so they leave out the sinks' printing and encoding.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sortscope_core::clock::{Clock, StdClock};
use sortscope_core::engine::{Algorithm, UnknownAlgorithm};
use sortscope_core::input::{InputError, parse_sequence};
use sortscope_core::step::{SortResult, Step};
use sortscope_core::trace::{StepSink, Tracer};

use sortscope_debug::json;
use sortscope_debug::pretty::PrettyPrintSink;
use sortscope_debug::recorder::{RecorderSink, replay};

use sortscope_playback::generate::{GeneratorConfig, generate, generate_with_rng};
use sortscope_playback::player::{PlaybackConfig, Player};

const USAGE: &str = "usage: trace_demo [--algorithm NAME|all] [--seed N] [--length N] \
                     [--json PATH] [--quiet] [NUMBERS...]";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings gathered from the command line.
#[derive(Clone, Debug, PartialEq)]
struct DemoConfig {
    algorithms: Vec<Algorithm>,
    seed: Option<u64>,
    generator: GeneratorConfig,
    json: Option<PathBuf>,
    quiet: bool,
    /// Raw number tokens; empty means "generate".
    numbers: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            seed: None,
            generator: GeneratorConfig::DEFAULT,
            json: None,
            quiet: false,
            numbers: Vec::new(),
        }
    }
}

impl DemoConfig {
    /// Parses arguments (without the program name).
    fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Option<Self>, DemoError> {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "-a" | "--algorithm" => {
                    let name = value_of(&arg, args.next())?;
                    config.algorithms = if name.eq_ignore_ascii_case("all") {
                        Algorithm::ALL.to_vec()
                    } else {
                        vec![Algorithm::from_str(&name)?]
                    };
                }
                "--seed" => config.seed = Some(number_of(&arg, args.next())?),
                "--length" => config.generator.length = number_of(&arg, args.next())?,
                "--json" => config.json = Some(PathBuf::from(value_of(&arg, args.next())?)),
                "-q" | "--quiet" => config.quiet = true,
                flag if is_flag(flag) => {
                    return Err(DemoError::Usage(format!("unknown option `{flag}`")));
                }
                other => config.numbers.push(other.to_owned()),
            }
        }
        Ok(Some(config))
    }

    /// Builds the engine input from the numbers given, or generates one.
    fn input(&self) -> Result<Vec<f64>, DemoError> {
        if !self.numbers.is_empty() {
            return Ok(parse_sequence(&self.numbers.join(" "))?);
        }
        Ok(match self.seed {
            Some(seed) => generate_with_rng(&self.generator, &mut StdRng::seed_from_u64(seed)),
            None => generate(&self.generator),
        })
    }
}

/// `-3` is a number, `-x` and `--x` are options.
fn is_flag(arg: &str) -> bool {
    match arg.as_bytes() {
        [b'-', b'-', ..] => true,
        [b'-', next, ..] => !next.is_ascii_digit() && *next != b'.',
        _ => false,
    }
}

fn value_of(flag: &str, value: Option<String>) -> Result<String, DemoError> {
    value.ok_or_else(|| DemoError::Usage(format!("`{flag}` needs a value")))
}

fn number_of<N: FromStr>(flag: &str, value: Option<String>) -> Result<N, DemoError> {
    let value = value_of(flag, value)?;
    value
        .parse()
        .map_err(|_| DemoError::Usage(format!("`{flag}` expects a number, got `{value}`")))
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum DemoError {
    Usage(String),
    Algorithm(UnknownAlgorithm),
    Input(InputError),
    Io(io::Error),
    /// The replayed recording disagrees with the in-memory trace.
    ReplayMismatch { step: usize },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}\n{USAGE}"),
            Self::Algorithm(e) => write!(f, "{e}"),
            Self::Input(e) => write!(f, "invalid input: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ReplayMismatch { step } => {
                write!(f, "recording does not replay: first difference at step {step}")
            }
        }
    }
}

impl std::error::Error for DemoError {}

impl From<UnknownAlgorithm> for DemoError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::Algorithm(e)
    }
}

impl From<InputError> for DemoError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Forwards every callback to the optional printer and the recorder.
#[derive(Debug)]
struct DemoSink {
    pretty: Option<PrettyPrintSink>,
    recorder: RecorderSink,
}

impl StepSink for DemoSink {
    fn on_run_begin(&mut self, algorithm: Algorithm, input: &[f64]) {
        if let Some(pretty) = &mut self.pretty {
            pretty.on_run_begin(algorithm, input);
        }
        self.recorder.on_run_begin(algorithm, input);
    }

    fn on_step(&mut self, step: &Step) {
        if let Some(pretty) = &mut self.pretty {
            pretty.on_step(step);
        }
        self.recorder.on_step(step);
    }

    fn on_run_end(&mut self, result: &SortResult) {
        if let Some(pretty) = &mut self.pretty {
            pretty.on_run_end(result);
        }
        self.recorder.on_run_end(result);
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("trace_demo: {e}");
            return ExitCode::from(2);
        }
    };
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("trace_demo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &DemoConfig) -> Result<(), DemoError> {
    let input = config.input()?;

    let mut sink = DemoSink {
        pretty: (!config.quiet).then(|| PrettyPrintSink::new(Box::new(io::stdout()))),
        recorder: RecorderSink::new(),
    };
    let clock = StdClock::new();
    let results: Vec<SortResult> = config
        .algorithms
        .iter()
        .map(|algorithm| algorithm.run_with(&input, &clock, &mut Tracer::new(&mut sink)))
        .collect();

    verify_replay(sink.recorder.as_bytes(), &results)?;

    if let Some(path) = &config.json {
        let mut writer = BufWriter::new(File::create(path)?);
        match results.as_slice() {
            [single] => json::export(single, &mut writer)?,
            _ => json::export_recording(sink.recorder.as_bytes(), &mut writer)?,
        }
        writer.flush()?;
        println!("wrote {}", path.display());
    }

    let times: Vec<f64> = config
        .algorithms
        .iter()
        .map(|&algorithm| untraced(algorithm, &input, &clock).execution_time_ms)
        .collect();
    print_summary(&input, &results, &times, sink.recorder.as_bytes().len());
    Ok(())
}

/// Runs `algorithm` without a sink, so the measured time covers the sort
/// alone.
fn untraced(algorithm: Algorithm, input: &[f64], clock: &dyn Clock) -> SortResult {
    algorithm.run_with(input, clock, &mut Tracer::none())
}

/// Checks that the compact recording reproduces every in-memory step.
fn verify_replay(bytes: &[u8], results: &[SortResult]) -> Result<(), DemoError> {
    let mut expected = results.iter().flat_map(|r| r.trace.iter());
    let mut replayed = replay(bytes);
    let mut step = 0;
    loop {
        match (expected.next(), replayed.next()) {
            (None, None) => return Ok(()),
            (Some(a), Some(b)) if *a == b => step += 1,
            _ => return Err(DemoError::ReplayMismatch { step }),
        }
    }
}

fn print_summary(input: &[f64], results: &[SortResult], times: &[f64], recorded_bytes: usize) {
    println!();
    println!("input ({} values): {input:?}", input.len());
    println!(
        "{:<10} {:>7} {:>12} {:>7} {:>11} {:>10}",
        "algorithm", "steps", "comparisons", "swaps", "time (ms)", "playback"
    );
    for (result, time_ms) in results.iter().zip(times) {
        // Length of an auto-mode playback at the default delay.
        let playback = Player::new(&result.trace, PlaybackConfig::AUTO).remaining();
        println!(
            "{:<10} {:>7} {:>12} {:>7} {:>11.3} {:>9.1}s",
            result.algorithm.name(),
            result.len(),
            result.comparisons,
            result.swaps,
            time_ms,
            playback.as_secs_f64(),
        );
    }
    let snapshot_bytes: usize = results
        .iter()
        .flat_map(|r| &r.trace)
        .map(|s| s.array.len() * size_of::<f64>())
        .sum();
    println!("recording: {recorded_bytes} bytes (snapshots: {snapshot_bytes} bytes)");
}
