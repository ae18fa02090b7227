//! Input generation and timed trial execution.
//!
//! Each trial gets a synthetic input of a known size, generated up front
//! from an RNG seeded with that size so runs are reproducible. Only the
//! algorithm call itself sits between the timer reset and the reading.

use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, info_span};

use textbench_core::{encode, longest_frequent_substring, reformat_date};

/// Smallest accepted trial count.
pub const MIN_TRIALS: usize = 10;

/// Default frequency threshold for the substring search.
pub const LFS_K: usize = 20;

/// Smallest date input: room for the longest `YYYY-MM-DD` string.
pub const MIN_DATE_SIZE: usize = 10;

pub const DEFAULT_START_SIZE: usize = 100;
pub const DEFAULT_STEP: usize = 100;

/// Algorithm under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    #[serde(rename = "rle")]
    RunLength,
    #[serde(rename = "lfs")]
    FrequentSubstring,
    #[serde(rename = "date")]
    Date,
}

impl Algorithm {
    /// Short name used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::RunLength => "rle",
            Self::FrequentSubstring => "lfs",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub algorithm: Algorithm,
    /// Number of trials to run.
    pub trials: usize,
    /// Input size of the first trial.
    pub start_size: usize,
    /// Growth in input size between consecutive trials.
    pub step: usize,
    /// Frequency threshold, used by the substring search only.
    pub k: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::RunLength,
            trials: MIN_TRIALS,
            start_size: DEFAULT_START_SIZE,
            step: DEFAULT_STEP,
            k: LFS_K,
        }
    }
}

impl BenchConfig {
    #[must_use]
    pub fn new(algorithm: Algorithm, trials: usize) -> Self {
        Self {
            algorithm,
            trials,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_start_size(mut self, start_size: usize) -> Self {
        self.start_size = start_size;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Input sizes of all trials, in run order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.trials).map(|index| {
            self.start_size
                .saturating_add(index.saturating_mul(self.step))
        })
    }
}

/// Measurement of one timed call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialResult {
    /// Input length in bytes.
    pub size: usize,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub algorithm: Algorithm,
    pub k: usize,
    pub trials: Vec<TrialResult>,
}

impl BenchReport {
    pub fn total_secs(&self) -> f64 {
        self.trials.iter().map(|trial| trial.elapsed_secs).sum()
    }
}

/// Wall-clock stopwatch.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Seconds since construction or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Build a synthetic input of exactly `size` bytes for `algorithm`.
///
/// `rle` and `lfs` get random lowercase letters. `date` gets a random
/// unpadded `Y-M-D` date (day 1-31 regardless of month) left-padded with
/// spaces.
///
/// # Errors
///
/// Fails for date inputs smaller than [`MIN_DATE_SIZE`].
pub fn generate_input(size: usize, algorithm: Algorithm) -> Result<String> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    match algorithm {
        Algorithm::RunLength | Algorithm::FrequentSubstring => Ok((0..size)
            .map(|_| char::from(rng.random_range(b'a'..=b'z')))
            .collect()),
        Algorithm::Date => {
            ensure!(
                size >= MIN_DATE_SIZE,
                "date input size must be at least {MIN_DATE_SIZE}, got {size}"
            );
            let year: u16 = rng.random_range(1900..=2099);
            let month: u8 = rng.random_range(1..=12);
            let day: u8 = rng.random_range(1..=31);
            let date = format!("{year}-{month}-{day}");
            Ok(format!("{date:>size$}"))
        }
    }
}

/// Run the algorithm once, discarding the output.
fn run_algorithm(algorithm: Algorithm, input: &str, k: usize) -> textbench_core::Result<()> {
    match algorithm {
        Algorithm::RunLength => {
            black_box(encode(black_box(input))?);
        }
        Algorithm::FrequentSubstring => {
            black_box(longest_frequent_substring(black_box(input), k));
        }
        Algorithm::Date => {
            black_box(reformat_date(black_box(input))?);
        }
    }
    Ok(())
}

/// Generate every input, then time the algorithm on each in turn.
///
/// # Errors
///
/// Fails if an input cannot be generated or the algorithm rejects one.
pub fn run_trials(config: &BenchConfig) -> Result<BenchReport> {
    let span = info_span!("bench", algo = %config.algorithm, trials = config.trials);
    let _guard = span.enter();

    let inputs = config
        .sizes()
        .map(|size| generate_input(size, config.algorithm))
        .collect::<Result<Vec<_>>>()
        .context("generate inputs")?;
    info!(count = inputs.len(), "inputs generated");

    let mut timer = Timer::new();
    let mut trials = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        timer.reset();
        let outcome = run_algorithm(config.algorithm, input, config.k);
        let elapsed_secs = timer.elapsed();
        outcome.with_context(|| format!("trial {index} (size {})", input.len()))?;
        debug!(trial = index, size = input.len(), elapsed_secs, "trial finished");
        trials.push(TrialResult {
            size: input.len(),
            elapsed_secs,
        });
    }

    info!("benchmark finished");
    Ok(BenchReport {
        algorithm: config.algorithm,
        k: config.k,
        trials,
    })
}
