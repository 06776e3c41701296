//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! A poission event does not have memory. Mathematically, if `e` follows
//! an Exponential distribution and `t_1 < t_2`
//! `P(t_1 < e) = P(t_1 < e | t_2 < e)`
//!
//! The Exponential distribution has a parameter: the rate `lambda` wich determines
//! how fast do events happen.

use bon::Builder;

use crate::{
    calculator::{Calculator, Outcome, ParameterEcho, Query, QueryMode, Statistics},
    chart::ChartSeries,
    configuration::chart::{CONTINUOUS_CHART_POINTS, EXPONENTIAL_CHART_QUANTILE},
    distribution_trait::{ContinuousDistribution, Moments},
    domain::ContinuousDomain,
    errors::CalcError,
    euclid,
    input::{FormFields, ModeSelector},
};

/// An [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Creates a new [Exponential] distribution. It is requiered that `0.0 < lambda`
    /// (and finite) or an error will be returned.
    pub fn new(lambda: f64) -> Result<Exponential, CalcError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(CalcError::invalid("The rate λ must be greater than 0"));
        }

        return Ok(Exponential { lambda });
    }

    #[must_use]
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// The [quantile function](https://en.wikipedia.org/wiki/Quantile_function):
    /// `-ln(1 - x) / lambda`.
    ///
    /// Returns `0.0` for `x <= 0` and `+inf` for `1 <= x`.
    #[must_use]
    pub fn quantile(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if 1.0 <= x {
            return f64::INFINITY;
        }
        return -(1.0 - x).ln() / self.lambda;
    }
}

impl Moments for Exponential {
    fn expected_value(&self) -> Option<f64> {
        return Some(1.0 / self.lambda);
    }

    fn variance(&self) -> Option<f64> {
        return Some(1.0 / (self.lambda * self.lambda));
    }

    fn standard_deviation(&self) -> Option<f64> {
        return Some(1.0 / self.lambda);
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        return self.lambda * (-self.lambda * x).exp();
    }

    /// `1 - e^(-lambda * x)` for `0 <= x`, `0.0` otherwise.
    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        return 1.0 - (-self.lambda * x).exp();
    }

    fn get_domain(&self) -> ContinuousDomain {
        return ContinuousDomain::From(0.0);
    }
}

/// The raw parameters of the exponential calculator.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ExponentialParams {
    /// Rate of occurrence
    pub lambda: f64,
    /// Elapsed time
    pub x: f64,
    #[builder(default = QueryMode::AtMost)]
    pub mode: QueryMode<f64>,
}

/// Calculator for waiting times.
///
/// Form fields: `lambda`, `x`, `mode` (default `at-most`) and `upper`.
/// The `exact` mode is rejected: a single time has no probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialCalculator;

impl Calculator for ExponentialCalculator {
    type Params = ExponentialParams;
    type Model = Query<Exponential, f64>;

    fn name(&self) -> &'static str {
        return "exponential";
    }

    fn read(&self, fields: &FormFields) -> Result<ExponentialParams, CalcError> {
        let mode: QueryMode<f64> = fields
            .mode(ModeSelector::AtMost)?
            .into_query(|| fields.real("upper"))?;

        return Ok(ExponentialParams {
            lambda: fields.real("lambda")?,
            x: fields.real("x")?,
            mode,
        });
    }

    fn validate(&self, params: &ExponentialParams) -> Result<Query<Exponential, f64>, CalcError> {
        let distribution: Exponential = Exponential::new(params.lambda)?;

        if !params.x.is_finite() || !distribution.get_domain().contains(params.x) {
            return Err(CalcError::invalid(
                "The time must be greater than or equal to 0",
            ));
        }

        let mode: QueryMode<f64> = match params.mode {
            QueryMode::Exact => {
                return Err(CalcError::invalid(
                    "P(X = x) is always 0 for a continuous distribution, choose at-most, at-least or between",
                ));
            }
            QueryMode::Between(upper) if !upper.is_finite() || upper <= params.x => {
                return Err(CalcError::invalid(
                    "The upper time must be greater than the lower time",
                ));
            }
            other => other,
        };

        return Ok(Query {
            distribution,
            at: params.x,
            mode,
        });
    }

    fn compute(&self, model: &Query<Exponential, f64>) -> Result<Outcome, CalcError> {
        let x: f64 = model.at;

        let explanation: String = match model.mode {
            QueryMode::Exact => format!("Probability that the time is exactly {x}"),
            QueryMode::AtMost => format!("Probability that the time is less than or equal to {x}"),
            QueryMode::AtLeast => format!("Probability that the time is greater than {x}"),
            QueryMode::Between(upper) => {
                format!("Probability that the time is between {x} and {upper}")
            }
        };

        return Ok(Outcome {
            probability: model.probability(),
            explanation,
            statistics: Statistics::of(&model.distribution)?,
            standard_score: None,
        });
    }

    fn describe(&self, model: &Query<Exponential, f64>) -> Vec<ParameterEcho> {
        return vec![
            ParameterEcho::new("λ", model.distribution.get_lambda(), "rate of occurrence"),
            ParameterEcho::new("x", model.at, "observed time"),
            ParameterEcho::new("e", "2.71828", "Euler's number"),
        ];
    }

    fn chart(&self, model: &Query<Exponential, f64>) -> ChartSeries {
        let distribution: &Exponential = &model.distribution;
        let title: String = format!("Exponential distribution (λ={})", distribution.get_lambda());

        // for readability, the chart only goes up to the quantile 99.99%
        let (start, _): (f64, f64) = distribution.get_domain().get_bounds();
        let max: f64 = distribution.quantile(EXPONENTIAL_CHART_QUANTILE).max(model.at);
        let points: Vec<f64> = euclid::linspace(start, max, CONTINUOUS_CHART_POINTS);

        return ChartSeries::continuous(
            title,
            "Time (x)",
            &points,
            |x: f64| distribution.pdf(x),
            model.at,
        );
    }
}
