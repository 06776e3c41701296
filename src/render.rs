//! # Results panel
//!
//! Formats a [Calculation] the way the calculators have always shown it:
//!
//! ```text
//! Binomial distribution
//!
//! Probability
//!   0.246094
//!   24.6094%
//!   Probability of exactly 5 successes in 10 trials
//!
//! Mean (μ)                 5.0000
//! Variance (σ²)            2.5000
//! Standard deviation (σ)   1.5811
//!
//! Parameters used:
//!   n = 10 (trials)
//!   p = 0.5 (probability of success)
//!   q = 0.5000 (probability of failure)
//! ```
//!
//! When validation fails the whole panel is replaced by [error_panel].

use crate::{
    calculator::{Calculation, Outcome, ParameterEcho},
    configuration::display::{PERCENTAGE_DECIMALS, PROBABILITY_DECIMALS, STATISTIC_DECIMALS},
    errors::CalcError,
};

const LABEL_WIDTH: usize = 24;

/// The results panel of a successful calculation.
#[must_use]
pub fn results_panel(calculation: &Calculation) -> String {
    let outcome: &Outcome = &calculation.outcome;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{} distribution", capitalize(calculation.distribution)));
    lines.push(String::new());

    lines.push(String::from("Probability"));
    lines.push(format!("  {:.*}", PROBABILITY_DECIMALS, outcome.probability));
    lines.push(format!("  {:.*}%", PERCENTAGE_DECIMALS, outcome.probability * 100.0));
    lines.push(format!("  {}", outcome.explanation));
    lines.push(String::new());

    lines.push(statistic_line("Mean (μ)", outcome.statistics.mean));
    lines.push(statistic_line("Variance (σ²)", outcome.statistics.variance));
    lines.push(statistic_line(
        "Standard deviation (σ)",
        outcome.statistics.standard_deviation,
    ));
    if let Some(z) = outcome.standard_score {
        lines.push(statistic_line("Z-score", z));
    }
    lines.push(String::new());

    lines.push(String::from("Parameters used:"));
    lines.extend(calculation.parameters.iter().map(parameter_line));

    return lines.join("\n");
}

/// The panel shown instead of the results when the input is invalid.
#[must_use]
pub fn error_panel(error: &CalcError) -> String {
    return format!("Error: {}", error.message());
}

fn statistic_line(label: &str, value: f64) -> String {
    // `width` counts chars, not bytes, so greek letters are padded correctly
    return format!("{:<width$} {:.*}", label, STATISTIC_DECIMALS, value, width = LABEL_WIDTH);
}

fn parameter_line(parameter: &ParameterEcho) -> String {
    return format!(
        "  {} = {} ({})",
        parameter.symbol, parameter.value, parameter.meaning
    );
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    return match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
}
