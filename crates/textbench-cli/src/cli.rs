//! CLI argument definitions for the timing harness.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use textbench_cli::bench::{Algorithm, DEFAULT_START_SIZE, DEFAULT_STEP, LFS_K, MIN_TRIALS};

#[derive(Parser)]
#[command(
    name = "textbench",
    version,
    about = "Time text algorithms against synthetic inputs of increasing size",
    long_about = "Time text algorithms against synthetic inputs of increasing size.\n\n\
                  Runs <N> trials; trial i uses an input of size START + i * STEP.\n\
                  Inputs are random lowercase letters (rle, lfs) or a random\n\
                  date left-padded with spaces (date).",
    after_help = "Example:\n    $ textbench rle 50"
)]
pub struct Cli {
    /// Algorithm to time.
    #[arg(value_name = "ALGO", value_enum)]
    pub algo: AlgoArg,

    /// Number of trials (at least 10).
    #[arg(
        value_name = "N",
        value_parser = parse_trial_count,
        allow_negative_numbers = true
    )]
    pub trials: usize,

    /// Input size of the first trial.
    #[arg(long = "start", value_name = "SIZE", default_value_t = DEFAULT_START_SIZE)]
    pub start_size: usize,

    /// Input size increase between trials.
    #[arg(long = "step", value_name = "SIZE", default_value_t = DEFAULT_STEP)]
    pub step: usize,

    /// Frequency threshold for the lfs algorithm.
    #[arg(long = "k", value_name = "K", default_value_t = LFS_K)]
    pub k: usize,

    /// Report format written to stdout.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty/compact log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
}

/// CLI algorithm choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgoArg {
    /// Run-length encoding.
    Rle,
    /// Longest frequent substring.
    Lfs,
    /// Date reformatting.
    Date,
}

impl From<AlgoArg> for Algorithm {
    fn from(arg: AlgoArg) -> Self {
        match arg {
            AlgoArg::Rle => Algorithm::RunLength,
            AlgoArg::Lfs => Algorithm::FrequentSubstring,
            AlgoArg::Date => Algorithm::Date,
        }
    }
}

/// CLI report format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Text,
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_trial_count(value: &str) -> Result<usize, String> {
    let signed: i64 = value
        .parse()
        .map_err(|_| "<N> must be an integer".to_string())?;
    if signed < 0 {
        return Err("<N> must be non-negative".to_string());
    }
    let count = usize::try_from(signed).map_err(|_| "<N> is too large".to_string())?;
    if count < MIN_TRIALS {
        return Err(format!("<N> must be at least {MIN_TRIALS}"));
    }
    Ok(count)
}
