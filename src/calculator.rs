//! # Calculator pipeline
//!
//! Every calculator follows the same steps:
//!
//! > read inputs -> validate -> compute probability and statistics -> render (+ chart)
//!
//! The steps that change from one distribution to another are collected in the
//! [Calculator] trait. [calculate] runs them in order and
//! [CalculatorSession] adds the chart, owning at most one live chart at a time.
//!
//! Validation always happens before any computation. If it fails, nothing is
//! computed and the only result is a [CalcError::InvalidInput].

use crate::{
    chart::{ChartHandle, ChartRenderer, ChartSeries},
    distribution_trait::{ContinuousDistribution, DiscreteDistribution, Moments},
    errors::CalcError,
    input::FormFields,
};

/// Which probability is asked for, relative to the queried value `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode<T> {
    /// `P(X = v)`
    Exact,
    /// `P(X <= v)`
    AtMost,
    /// `P(X >= v)` (`P(X > v)` for continuous distributions, wich is the same)
    AtLeast,
    /// `P(v <= X <= upper)`
    Between(T),
}

impl<T> QueryMode<T> {
    /// Converts the upper bound of [QueryMode::Between], if there is one.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<QueryMode<U>, E> {
        return Ok(match self {
            QueryMode::Exact => QueryMode::Exact,
            QueryMode::AtMost => QueryMode::AtMost,
            QueryMode::AtLeast => QueryMode::AtLeast,
            QueryMode::Between(upper) => QueryMode::Between(f(upper)?),
        });
    }
}

/// A validated question: a distribution, the queried value and the mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Query<D, T> {
    pub distribution: D,
    pub at: T,
    pub mode: QueryMode<T>,
}

impl<D: DiscreteDistribution> Query<D, u64> {
    pub fn probability(&self) -> f64 {
        return match self.mode {
            QueryMode::Exact => self.distribution.pmf(self.at),
            QueryMode::AtMost => self.distribution.cumulative_at_most(self.at),
            QueryMode::AtLeast => self.distribution.cumulative_at_least(self.at),
            QueryMode::Between(upper) => self.distribution.between(self.at, upper),
        };
    }
}

impl<D: ContinuousDistribution> Query<D, f64> {
    pub fn probability(&self) -> f64 {
        return match self.mode {
            // a single point has no probability mass
            QueryMode::Exact => 0.0,
            QueryMode::AtMost => self.distribution.cdf(self.at),
            QueryMode::AtLeast => self.distribution.survival(self.at),
            QueryMode::Between(upper) => self.distribution.between(self.at, upper),
        };
    }
}

/// Mean, variance and standard deviation of a distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
}

impl Statistics {
    /// Collects the [Moments] of `distribution`. Fails if any of them is undefined.
    pub fn of<D: Moments + ?Sized>(distribution: &D) -> Result<Statistics, CalcError> {
        let undefined = || CalcError::invalid("The statistics are undefined for these parameters");

        return Ok(Statistics {
            mean: distribution.expected_value().ok_or_else(undefined)?,
            variance: distribution.variance().ok_or_else(undefined)?,
            standard_deviation: distribution.standard_deviation().ok_or_else(undefined)?,
        });
    }
}

/// What [Calculator::compute] produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub probability: f64,
    /// One sentence describing what `probability` is.
    pub explanation: String,
    pub statistics: Statistics,
    /// The z-score, for the distributions that report one.
    pub standard_score: Option<f64>,
}

/// One line of the "parameters used" section: `symbol = value (meaning)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterEcho {
    pub symbol: &'static str,
    pub value: String,
    pub meaning: &'static str,
}

impl ParameterEcho {
    pub fn new(symbol: &'static str, value: impl ToString, meaning: &'static str) -> ParameterEcho {
        return ParameterEcho {
            symbol,
            value: value.to_string(),
            meaning,
        };
    }
}

/// The complete result of a successful calculation, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Name of the distribution (`"binomial"`, `"poisson"`...)
    pub distribution: &'static str,
    pub outcome: Outcome,
    pub parameters: Vec<ParameterEcho>,
}

/// The per distribution part of the pipeline.
///
/// `Params` is the raw parameter record (as read from the form, not yet
/// validated) and `Model` the validated one. Only [Calculator::read] and
/// [Calculator::validate] can fail with user errors.
pub trait Calculator {
    type Params;
    type Model;

    /// Lowercase name of the distribution.
    fn name(&self) -> &'static str;

    /// Reads the parameters from the form fields.
    fn read(&self, fields: &FormFields) -> Result<Self::Params, CalcError>;

    /// Checks every range condition of the parameters.
    fn validate(&self, params: &Self::Params) -> Result<Self::Model, CalcError>;

    /// Computes the probability and the statistics.
    fn compute(&self, model: &Self::Model) -> Result<Outcome, CalcError>;

    /// The echo of the parameters used.
    fn describe(&self, model: &Self::Model) -> Vec<ParameterEcho>;

    /// The data of the distribution chart.
    fn chart(&self, model: &Self::Model) -> ChartSeries;
}

/// Runs validate, compute and describe. No partial result is ever returned.
pub fn calculate<C: Calculator>(calculator: &C, params: &C::Params) -> Result<Calculation, CalcError> {
    return run(calculator, params).map(|(calculation, _)| calculation);
}

fn run<C: Calculator>(calculator: &C, params: &C::Params) -> Result<(Calculation, C::Model), CalcError> {
    let model: C::Model = calculator.validate(params)?;
    let outcome: Outcome = calculator.compute(&model)?;
    let parameters: Vec<ParameterEcho> = calculator.describe(&model);

    tracing::debug!(
        distribution = calculator.name(),
        probability = outcome.probability,
        mean = outcome.statistics.mean,
        variance = outcome.statistics.variance,
        "calculation complete"
    );

    let calculation: Calculation = Calculation {
        distribution: calculator.name(),
        outcome,
        parameters,
    };
    return Ok((calculation, model));
}

/// A calculator together with the chart it currently shows.
///
/// The session owns at most one chart. Each submission destroys the previous
/// chart **before** the new one is drawn, so repeated calculations never
/// accumulate charts. A failed submission also destroys it.
pub struct CalculatorSession<C: Calculator, R: ChartRenderer> {
    calculator: C,
    renderer: R,
    charts_enabled: bool,
    active_chart: Option<R::Chart>,
}

impl<C: Calculator, R: ChartRenderer> CalculatorSession<C, R> {
    /// A session that draws a chart after every successful calculation.
    pub fn new(calculator: C, renderer: R) -> CalculatorSession<C, R> {
        return CalculatorSession {
            calculator,
            renderer,
            charts_enabled: true,
            active_chart: None,
        };
    }

    /// Disables (or enables) the chart.
    #[must_use]
    pub fn with_charts(mut self, enabled: bool) -> CalculatorSession<C, R> {
        self.charts_enabled = enabled;
        return self;
    }

    pub fn calculator(&self) -> &C {
        return &self.calculator;
    }

    /// The chart of the last successful calculation, if any.
    pub fn active_chart(&self) -> Option<&R::Chart> {
        return self.active_chart.as_ref();
    }

    /// Reads the form and runs the calculation.
    pub fn submit(&mut self, fields: &FormFields) -> Result<Calculation, CalcError> {
        let params: C::Params = match self.calculator.read(fields) {
            Ok(params) => params,
            Err(error) => {
                self.release_chart();
                return Err(error);
            }
        };
        return self.submit_params(&params);
    }

    /// Runs the calculation with already read parameters.
    pub fn submit_params(&mut self, params: &C::Params) -> Result<Calculation, CalcError> {
        self.release_chart();

        let (calculation, model): (Calculation, C::Model) = run(&self.calculator, params)?;

        if self.charts_enabled {
            let series: ChartSeries = self.calculator.chart(&model);
            self.active_chart = Some(self.renderer.draw(&series));
        }

        return Ok(calculation);
    }

    /// Destroys the active chart, if there is one.
    pub fn release_chart(&mut self) {
        if let Some(chart) = self.active_chart.take() {
            chart.destroy();
        }
    }
}

impl<C: Calculator, R: ChartRenderer> Drop for CalculatorSession<C, R> {
    fn drop(&mut self) {
        self.release_chart();
    }
}
