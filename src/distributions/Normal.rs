//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremly well studied.
//! It also has a key role en the [Central Limit Theorem](https://en.wikipedia.org/wiki/Central_limit_theorem).
//!
//! The cdf has no closed form. We compute it trough the error function
//! approximation of [euclid::erf], so every probability computed here has an
//! absolute error of at most about `1.5 * 10^-7`.

use bon::Builder;

use crate::{
    calculator::{Calculator, Outcome, ParameterEcho, Query, QueryMode, Statistics},
    chart::ChartSeries,
    configuration::chart::{CONTINUOUS_CHART_POINTS, NORMAL_CHART_SIGMAS},
    distribution_trait::{ContinuousDistribution, Moments},
    domain::ContinuousDomain,
    errors::CalcError,
    euclid,
    input::{FormFields, ModeSelector},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, an error will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, CalcError> {
        if !mean.is_finite() {
            return Err(CalcError::invalid(
                "Please enter a valid value for the mean μ",
            ));
        }
        if !standard_deviation.is_finite() || standard_deviation <= 0.0 {
            return Err(CalcError::invalid(
                "The standard deviation must be greater than 0",
            ));
        }

        return Ok(Normal {
            mean,
            standard_deviation,
        });
    }

    /// Returns the mean, the first parameter of the normal distribution.
    #[must_use]
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal distribution.
    #[must_use]
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    /// The [z-score](https://en.wikipedia.org/wiki/Standard_score) of `x`:
    /// `(x - mean) / standard_deviation`.
    #[must_use]
    pub fn z_score(&self, x: f64) -> f64 {
        return (x - self.mean) / self.standard_deviation;
    }
}

impl Moments for Normal {
    fn expected_value(&self) -> Option<f64> {
        return Some(self.mean);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.standard_deviation * self.standard_deviation);
    }

    fn standard_deviation(&self) -> Option<f64> {
        return Some(self.standard_deviation);
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z: f64 = self.z_score(x);
        return euclid::INV_SQRT_2_PI / self.standard_deviation * (-z * z * 0.5).exp();
    }

    /// `std_normal_cdf((x - mean) / standard_deviation)`
    fn cdf(&self, x: f64) -> f64 {
        return euclid::std_normal_cdf(self.z_score(x));
    }

    fn get_domain(&self) -> ContinuousDomain {
        return ContinuousDomain::Reals;
    }
}

/// The raw parameters of the normal calculator.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct NormalParams {
    /// Mean
    pub mu: f64,
    /// Standard deviation
    pub sigma: f64,
    /// Observed value
    pub x: f64,
    #[builder(default = QueryMode::AtMost)]
    pub mode: QueryMode<f64>,
}

/// Calculator for normally distributed values. Also reports the z-score of `x`.
///
/// Form fields: `mu`, `sigma`, `x`, `mode` (default `at-most`) and `upper`.
/// The `exact` mode is rejected: a single value has no probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalCalculator;

impl Calculator for NormalCalculator {
    type Params = NormalParams;
    type Model = Query<Normal, f64>;

    fn name(&self) -> &'static str {
        return "normal";
    }

    fn read(&self, fields: &FormFields) -> Result<NormalParams, CalcError> {
        let mode: QueryMode<f64> = fields
            .mode(ModeSelector::AtMost)?
            .into_query(|| fields.real("upper"))?;

        return Ok(NormalParams {
            mu: fields.real("mu")?,
            sigma: fields.real("sigma")?,
            x: fields.real("x")?,
            mode,
        });
    }

    fn validate(&self, params: &NormalParams) -> Result<Query<Normal, f64>, CalcError> {
        let distribution: Normal = Normal::new(params.mu, params.sigma)?;

        if !params.x.is_finite() {
            return Err(CalcError::invalid("Please enter a valid value for x"));
        }

        let mode: QueryMode<f64> = match params.mode {
            QueryMode::Exact => {
                return Err(CalcError::invalid(
                    "P(X = x) is always 0 for a continuous distribution, choose at-most, at-least or between",
                ));
            }
            QueryMode::Between(upper) if !upper.is_finite() || upper <= params.x => {
                return Err(CalcError::invalid(
                    "The upper value must be greater than the lower value",
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

    fn compute(&self, model: &Query<Normal, f64>) -> Result<Outcome, CalcError> {
        let x: f64 = model.at;

        let explanation: String = match model.mode {
            QueryMode::Exact => format!("Probability that X is exactly {x}"),
            QueryMode::AtMost => format!("Probability that X is less than or equal to {x}"),
            QueryMode::AtLeast => format!("Probability that X is greater than or equal to {x}"),
            QueryMode::Between(upper) => format!("Probability that X is between {x} and {upper}"),
        };

        return Ok(Outcome {
            probability: model.probability(),
            explanation,
            statistics: Statistics::of(&model.distribution)?,
            standard_score: Some(model.distribution.z_score(x)),
        });
    }

    fn describe(&self, model: &Query<Normal, f64>) -> Vec<ParameterEcho> {
        let distribution: &Normal = &model.distribution;
        return vec![
            ParameterEcho::new("μ", distribution.get_mean(), "mean"),
            ParameterEcho::new("σ", distribution.get_standard_deviation(), "standard deviation"),
            ParameterEcho::new("x", model.at, "observed value"),
            ParameterEcho::new(
                "Z",
                format!("{:.4}", distribution.z_score(model.at)),
                "standardized value",
            ),
        ];
    }

    fn chart(&self, model: &Query<Normal, f64>) -> ChartSeries {
        let distribution: &Normal = &model.distribution;
        let title: String = format!(
            "Normal distribution (μ={}, σ={})",
            distribution.get_mean(),
            distribution.get_standard_deviation()
        );

        let half_width: f64 = NORMAL_CHART_SIGMAS * distribution.get_standard_deviation();
        let points: Vec<f64> = euclid::linspace(
            distribution.get_mean() - half_width,
            distribution.get_mean() + half_width,
            CONTINUOUS_CHART_POINTS,
        );

        return ChartSeries::continuous(title, "Value (x)", &points, |x: f64| distribution.pdf(x), model.at);
    }
}
