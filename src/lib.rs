#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::excessive_precision
)]
// ^Disable warning "crate `ProbabilityCalculators` should have a snake case name"
// and the one for the distribution modules. The rest of the names follow the
// snake_case convention.

//! # Probability Calculators
//!
//! Calculators for the most common textbook distributions. Each one reads a
//! few parameters, validates them, computes a probability together with the
//! mean, variance and standard deviation, and prepares the data for a chart.
//!
//! ## Distributions
//!
//! ### Discrete distributions:
//!
//!  - [x] [Binomial](distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] [Poisson](distributions::Poisson) ([Wiki](https://en.wikipedia.org/wiki/Poisson_distribution))
//!  - [x] [Hypergeometric](distributions::Hypergeometric) ([Wiki](https://en.wikipedia.org/wiki/Hypergeometric_distribution))
//!
//! ### Continuous distributions:
//!
//!  - [x] [Exponential](distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Normal](distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!
//! The math lives in plain structs implementing
//! [DiscreteDistribution](distribution_trait::DiscreteDistribution) or
//! [ContinuousDistribution](distribution_trait::ContinuousDistribution), so it
//! can be used (and tested) without any user interface.
//!
//! ## Calculators
//!
//! Every distribution also has a [Calculator](calculator::Calculator): the
//! strategy that reads the form fields, validates them, computes the
//! [Outcome](calculator::Outcome) and describes the parameters used. A
//! [CalculatorSession](calculator::CalculatorSession) runs a calculator and
//! owns the chart of the last result.
//!
//! ```
//! use ProbabilityCalculators::{
//!     calculator::{calculate, Calculation},
//!     distributions::Binomial::{BinomialCalculator, BinomialParams},
//! };
//!
//! let params: BinomialParams = BinomialParams::builder().n(10).p(0.5).k(5).build();
//! let result: Calculation = calculate(&BinomialCalculator, &params).unwrap();
//! assert!((result.outcome.probability - 0.246094).abs() < 1e-6);
//! ```
//!
//! ## Precision
//!
//! Everything is computed with the closed form formulas in double precision.
//! Factorials overflow after `170!` and the normal cdf uses an approximation
//! of the error function with an error of about `1.5 * 10^-7`
//! (see [euclid::erf]).
//!
//! ***
//!

pub mod calculator;
pub mod chart;
pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod input;
pub mod render;
