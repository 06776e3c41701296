//! # Poisson distribution
//!
//! The [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
//! is a discrete distribution that counts the number of poisson events in a
//! given time with a given rate.
//!
//! The poisson distribution has a single parameter: the rate `lambda`. Lambda
//! represents the avarage number of events that happen in a given amount of time.
//! Both the mean and the variance are equal to `lambda`.
//!
//! The support is infinite, so the chart is cut at
//! `ceil(lambda + 3 * sqrt(lambda))` (see [crate::configuration::chart]).

use bon::Builder;

use crate::{
    calculator::{Calculator, Outcome, ParameterEcho, Query, QueryMode, Statistics},
    chart::ChartSeries,
    configuration::chart::POISSON_CHART_SIGMAS,
    distribution_trait::{DiscreteDistribution, Moments},
    domain::DiscreteDomain,
    errors::CalcError,
    euclid::{factorial, stirling_correction, MAX_FINITE_FACTORIAL},
    input::{FormFields, ModeSelector},
};

pub const POISSON_DOMAIN: DiscreteDomain = DiscreteDomain::From(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new [Poisson] distribution.
    ///
    ///  - `lambda` indicates rate. And must fullfill:
    ///      - Must be finite (no `+-inf` nor NaNs)
    ///      - `0.0 < lambda`
    ///
    /// Otherwise an error will be returned.
    pub fn new(lambda: f64) -> Result<Poisson, CalcError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(CalcError::invalid(
                "The average rate λ must be greater than 0",
            ));
        }

        return Ok(Poisson { lambda });
    }

    /// Returns the rate `lambda`.
    #[must_use]
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// The last value of `k` shown in the chart: `ceil(lambda + 3 * sqrt(lambda))`.
    #[must_use]
    pub fn chart_cutoff(&self) -> u64 {
        return (self.lambda + POISSON_CHART_SIGMAS * self.lambda.sqrt()).ceil() as u64;
    }
}

impl Moments for Poisson {
    fn expected_value(&self) -> Option<f64> {
        return Some(self.lambda);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.lambda);
    }
}

impl Poisson {
    /// `ln(P(X = k))`.
    ///
    /// After [MAX_FINITE_FACTORIAL] it is written around the saddle point
    /// `k = lambda`, so the big terms `k * ln(lambda)` and `lambda` cancel
    /// before rounding:
    /// `k * ln(lambda / k) + (k - lambda) - ln(sqrt(2 * pi * k)) - stirling_correction(k)`
    fn ln_pmf(&self, k: u64) -> f64 {
        let lambda: f64 = self.lambda;
        if k <= MAX_FINITE_FACTORIAL {
            return (k as f64) * lambda.ln() - lambda - factorial(k).ln();
        }

        let x: f64 = k as f64;
        return x * ((lambda - x) / x).ln_1p() + (x - lambda)
            - 0.5 * (2.0 * std::f64::consts::PI * x).ln()
            - stirling_correction(x);
    }
}

impl DiscreteDistribution for Poisson {
    /// `lambda^k * e^-lambda / k!`
    ///
    /// When `k!`, `lambda^k` or `e^-lambda` do not fit in a `f64` it is
    /// computed in log space instead.
    fn pmf(&self, k: u64) -> f64 {
        if k <= MAX_FINITE_FACTORIAL {
            let direct: f64 = self.lambda.powf(k as f64) * (-self.lambda).exp() / factorial(k);
            if direct.is_normal() {
                return direct;
            }
        }
        return self.ln_pmf(k).exp();
    }

    fn get_domain(&self) -> DiscreteDomain {
        return POISSON_DOMAIN;
    }

    /// `floor(lambda)`
    fn mode(&self) -> u64 {
        return self.lambda.floor() as u64;
    }
}

/// The raw parameters of the Poisson calculator.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct PoissonParams {
    /// Average rate of events
    pub lambda: f64,
    /// Number of events
    pub k: i64,
    #[builder(default = QueryMode::Exact)]
    pub mode: QueryMode<i64>,
}

/// Calculator for the number of events of a Poisson process.
///
/// Form fields: `lambda`, `k`, `mode` (default `exact`) and `upper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoissonCalculator;

impl Calculator for PoissonCalculator {
    type Params = PoissonParams;
    type Model = Query<Poisson, u64>;

    fn name(&self) -> &'static str {
        return "poisson";
    }

    fn read(&self, fields: &FormFields) -> Result<PoissonParams, CalcError> {
        let mode: QueryMode<i64> = fields
            .mode(ModeSelector::Exact)?
            .into_query(|| fields.integer("upper"))?;

        return Ok(PoissonParams {
            lambda: fields.real("lambda")?,
            k: fields.integer("k")?,
            mode,
        });
    }

    fn validate(&self, params: &PoissonParams) -> Result<Query<Poisson, u64>, CalcError> {
        let distribution: Poisson = Poisson::new(params.lambda)?;

        if params.k < 0 {
            return Err(CalcError::invalid(
                "The number of events must be greater than or equal to 0",
            ));
        }

        let mode: QueryMode<u64> = params.mode.try_map(|upper: i64| {
            if upper < params.k {
                return Err(CalcError::invalid(
                    "The upper bound must be greater than or equal to k",
                ));
            }
            return Ok(upper as u64);
        })?;

        return Ok(Query {
            distribution,
            at: params.k as u64,
            mode,
        });
    }

    fn compute(&self, model: &Query<Poisson, u64>) -> Result<Outcome, CalcError> {
        let k: u64 = model.at;

        let explanation: String = match model.mode {
            QueryMode::Exact => format!("Probability of exactly {k} events occurring"),
            QueryMode::AtMost => format!("Probability of {k} or fewer events occurring"),
            QueryMode::AtLeast => format!("Probability of {k} or more events occurring"),
            QueryMode::Between(upper) => {
                format!("Probability of between {k} and {upper} events occurring")
            }
        };

        return Ok(Outcome {
            probability: model.probability(),
            explanation,
            statistics: Statistics::of(&model.distribution)?,
            standard_score: None,
        });
    }

    fn describe(&self, model: &Query<Poisson, u64>) -> Vec<ParameterEcho> {
        return vec![
            ParameterEcho::new("λ", model.distribution.get_lambda(), "average rate of events"),
            ParameterEcho::new("k", model.at, "number of events observed"),
            ParameterEcho::new("e", "2.71828", "Euler's number"),
        ];
    }

    fn chart(&self, model: &Query<Poisson, u64>) -> ChartSeries {
        let distribution: &Poisson = &model.distribution;
        let title: String = format!("Poisson distribution (λ={})", distribution.get_lambda());

        return ChartSeries::discrete(
            title,
            "Events (k)",
            0..=distribution.chart_cutoff(),
            distribution.mode(),
            |k: u64| distribution.pmf(k),
            model.at,
        );
    }
}
