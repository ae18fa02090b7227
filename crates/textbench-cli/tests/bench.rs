//! Integration tests for the benchmark runner.

use textbench_cli::bench::{Algorithm, BenchConfig, MIN_TRIALS, generate_input, run_trials};
use textbench_cli::summary::render_text;

fn small_config(algorithm: Algorithm) -> BenchConfig {
    BenchConfig::new(algorithm, MIN_TRIALS)
        .with_start_size(20)
        .with_step(10)
}

#[test]
fn test_run_trials_for_every_algorithm() {
    for algorithm in [
        Algorithm::RunLength,
        Algorithm::FrequentSubstring,
        Algorithm::Date,
    ] {
        let report = run_trials(&small_config(algorithm)).unwrap();
        assert_eq!(report.algorithm, algorithm);
        assert_eq!(report.trials.len(), MIN_TRIALS);
        let sizes: Vec<usize> = report.trials.iter().map(|trial| trial.size).collect();
        assert_eq!(sizes, (0..MIN_TRIALS).map(|i| 20 + i * 10).collect::<Vec<_>>());
        assert!(report.trials.iter().all(|trial| trial.elapsed_secs >= 0.0));
    }
}

#[test]
fn test_run_trials_reports_k() {
    let config = small_config(Algorithm::FrequentSubstring).with_k(3);
    let report = run_trials(&config).unwrap();
    assert_eq!(report.k, 3);
}

#[test]
fn test_date_trials_below_minimum_size_fail() {
    let config = small_config(Algorithm::Date).with_start_size(4).with_step(1);
    let error = run_trials(&config).unwrap_err();
    assert!(format!("{error:#}").contains("date input size must be at least"));
}

#[test]
fn test_generated_letters_encode() {
    let input = generate_input(500, Algorithm::RunLength).unwrap();
    let encoded = textbench_core::encode(&input).unwrap();
    assert_eq!(textbench_core::decode(&encoded).unwrap(), input);
}

#[test]
fn test_text_report_has_line_per_trial() {
    let report = run_trials(&small_config(Algorithm::RunLength)).unwrap();
    let rendered = render_text(&report);
    let trial_lines = rendered
        .lines()
        .filter(|line| line.starts_with("elapsed time="))
        .count();
    assert_eq!(trial_lines, MIN_TRIALS);
    assert!(rendered.contains("algo = rle"));
}
