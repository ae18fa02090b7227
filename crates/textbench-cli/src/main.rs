//! Textbench timing harness CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use textbench_cli::bench::{BenchConfig, BenchReport, run_trials};
use textbench_cli::logging::{LogConfig, LogFormat, init_logging};
use textbench_cli::summary::{render_json, render_table, render_text};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, OutputArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = bench_config_from_cli(&cli);
    let exit_code = match run_trials(&config) {
        Ok(report) => match print_report(&report, cli.output) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn bench_config_from_cli(cli: &Cli) -> BenchConfig {
    BenchConfig::new(cli.algo.into(), cli.trials)
        .with_start_size(cli.start_size)
        .with_step(cli.step)
        .with_k(cli.k)
}

fn print_report(report: &BenchReport, output: OutputArg) -> anyhow::Result<()> {
    match output {
        OutputArg::Text => print!("{}", render_text(report)),
        OutputArg::Table => println!("{}", render_table(report)),
        OutputArg::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    // Explicit level flags win over RUST_LOG.
    let use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());

    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(use_env_filter)
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
