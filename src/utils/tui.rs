//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the benchmark CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Flamey Utils Sort Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", algo.available_variants().join(", "));

    let content_width = [
        name_line.chars().count(),
        cat_line.chars().count(),
        desc_line.chars().count(),
        var_line.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let line = |text: &str| {
        println!(
            "│ {:<width$} │",
            truncate(text, content_width),
            width = content_width
        )
    };

    println!("┌{}┐", border);
    line(&name_line);
    line(&cat_line);
    line(desc_line);
    println!("├{}┤", border);
    line(&var_line);
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size.
/// The first result is the baseline for speedup and relative error.
pub fn print_results_table(results: &[BenchmarkResult], size: usize, runs: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    let fixed_width = 85;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 77 + 7;

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Median",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        println!("  {}", result_row(result, baseline, variant_col_width));
    }
    println!();
}

/// One table row, compared against `baseline`
fn result_row(result: &BenchmarkResult, baseline: &BenchmarkResult, v_width: usize) -> String {
    let speedup = if result.avg_nanos_f64 > 0.0 {
        baseline.avg_nanos_f64 / result.avg_nanos_f64
    } else {
        0.0
    };

    let std_dev_ns = result.std_dev.as_nanos() as f64;
    let cv = if result.avg_nanos_f64 > 0.0 {
        std_dev_ns / result.avg_nanos_f64
    } else {
        0.0
    };

    let relative_error = match (result.result_sample, baseline.result_sample) {
        (Some(res), Some(base)) => {
            let diff = (res - base).abs();
            if base.abs() > 1e-9 {
                diff / base.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    };

    format!(
        "{:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
        truncate(&result.name, v_width),
        format_measurement(result.avg_time),
        format_measurement(result.median_time),
        format_measurement(result.min_time),
        format_measurement(result.max_time),
        speedup,
        cv * 100.0,
        relative_error,
        v_width = v_width
    )
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        println!("  {:<20} variants: {}", "", algo.available_variants().join(", "));
    }
}

/// Print the outcome of one algorithm's verification
pub fn print_verification(algo: &dyn AlgorithmRunner, outcome: &crate::error::Result<()>) {
    match outcome {
        Ok(()) => println!("  ✅ Algorithm '{}' passed verification", algo.name()),
        Err(e) => println!("  ❌ Algorithm '{}' failed verification: {}", algo.name(), e),
    }
}
