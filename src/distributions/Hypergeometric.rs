//! # Hypergeometric distribution
//!
//! The [Hypergeometric distribution](https://en.wikipedia.org/wiki/Hypergeometric_distribution)
//! counts the successes in a sample of size `n` drawn **without replacement**
//! from a population of size `N` that contains `K` successes.
//!
//! For example, the number of aces in a poker hand follows a hypergeometric
//! distribution with `N = 52`, `K = 4` and `n = 5`.
//!
//! Unlike the [Poisson](crate::distributions::Poisson) distribution the support
//! is finite: `max(0, n - (N - K)) <= k <= min(n, K)`. The chart shows
//! exactly that range.
//!
//! The variance divides by `N - 1`, so it is undefined for a population of a
//! single element. The calculator rejects `N = 1`.

use bon::Builder;

use crate::{
    calculator::{Calculator, Outcome, ParameterEcho, Query, QueryMode, Statistics},
    chart::ChartSeries,
    configuration::numerical::DIRECT_PMF_MAX_SIZE,
    distribution_trait::{DiscreteDistribution, Moments},
    domain::DiscreteDomain,
    errors::CalcError,
    euclid::{binomial_coefficient, ln_binomial_coefficient},
    input::{FormFields, ModeSelector},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Hypergeometric {
    /// `N`
    population: u64,
    /// `K`
    successes: u64,
    /// `n`
    sample: u64,
}

impl Hypergeometric {
    /// Creates a new [Hypergeometric] distribution.
    ///
    ///  - `population` (`N`) must be at least `1`.
    ///  - `successes` (`K`) must be in `[0, N]`.
    ///  - `sample` (`n`) must be in `[1, N]`.
    ///
    /// Otherwise an error will be returned.
    pub fn new(population: u64, successes: u64, sample: u64) -> Result<Hypergeometric, CalcError> {
        if population < 1 {
            return Err(CalcError::invalid(
                "The population size must be greater than or equal to 1",
            ));
        }
        if population < successes {
            return Err(CalcError::invalid(
                "The successes in the population must be between 0 and N",
            ));
        }
        if sample < 1 || population < sample {
            return Err(CalcError::invalid("The sample size must be between 1 and N"));
        }

        return Ok(Hypergeometric {
            population,
            successes,
            sample,
        });
    }

    /// Return `N` (population size).
    #[must_use]
    pub const fn get_population(&self) -> u64 {
        return self.population;
    }

    /// Return `K` (successes in the population).
    #[must_use]
    pub const fn get_successes(&self) -> u64 {
        return self.successes;
    }

    /// Return `n` (sample size).
    #[must_use]
    pub const fn get_sample(&self) -> u64 {
        return self.sample;
    }

    /// The largest possible number of successes in the sample: `min(n, K)`.
    #[must_use]
    pub fn max_successes(&self) -> u64 {
        return self.sample.min(self.successes);
    }
}

impl Moments for Hypergeometric {
    /// `n * K / N`
    fn expected_value(&self) -> Option<f64> {
        return Some((self.sample as f64) * (self.successes as f64) / (self.population as f64));
    }

    /// `n * K * (N - K) * (N - n) / (N^2 * (N - 1))`. [None] if `N = 1`.
    fn variance(&self) -> Option<f64> {
        if self.population <= 1 {
            return None;
        }

        let big_n: f64 = self.population as f64;
        let big_k: f64 = self.successes as f64;
        let n: f64 = self.sample as f64;

        let numerator: f64 = n * big_k * (big_n - big_k) * (big_n - n);
        let denominator: f64 = big_n * big_n * (big_n - 1.0);
        return Some(numerator / denominator);
    }
}

impl DiscreteDistribution for Hypergeometric {
    /// `C(K, k) * C(N - K, n - k) / C(N, n)`, `0.0` if `n < k`.
    fn pmf(&self, k: u64) -> f64 {
        if self.sample < k {
            return 0.0;
        }

        let failures: u64 = self.population - self.successes;
        if self.population <= DIRECT_PMF_MAX_SIZE {
            let numerator: f64 = binomial_coefficient(self.successes, k)
                * binomial_coefficient(failures, self.sample - k);
            let denominator: f64 = binomial_coefficient(self.population, self.sample);
            return numerator / denominator;
        }

        let ln_pmf: f64 = ln_binomial_coefficient(self.successes, k)
            + ln_binomial_coefficient(failures, self.sample - k)
            - ln_binomial_coefficient(self.population, self.sample);
        return ln_pmf.exp();
    }

    /// `[max(0, n - (N - K)), min(n, K)]`
    fn get_domain(&self) -> DiscreteDomain {
        let failures: u64 = self.population - self.successes;
        let min: u64 = self.sample.saturating_sub(failures);
        return DiscreteDomain::Range(min, self.max_successes());
    }

    /// `floor((n + 1) * (K + 1) / (N + 2))`
    fn mode(&self) -> u64 {
        let numerator: u128 = (u128::from(self.sample) + 1) * (u128::from(self.successes) + 1);
        let mode: u128 = numerator / (u128::from(self.population) + 2);
        return u64::try_from(mode).unwrap_or(u64::MAX);
    }
}

/// The raw parameters of the hypergeometric calculator.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct HypergeometricParams {
    /// `N`
    pub population: i64,
    /// `K`
    pub population_successes: i64,
    /// `n`
    pub sample: i64,
    /// `k`
    pub sample_successes: i64,
    #[builder(default = QueryMode::Exact)]
    pub mode: QueryMode<i64>,
}

/// Calculator for draws without replacement.
///
/// Form fields: `N`, `K`, `n`, `k`, `mode` (default `exact`) and `upper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HypergeometricCalculator;

impl Calculator for HypergeometricCalculator {
    type Params = HypergeometricParams;
    type Model = Query<Hypergeometric, u64>;

    fn name(&self) -> &'static str {
        return "hypergeometric";
    }

    fn read(&self, fields: &FormFields) -> Result<HypergeometricParams, CalcError> {
        let mode: QueryMode<i64> = fields
            .mode(ModeSelector::Exact)?
            .into_query(|| fields.integer("upper"))?;

        return Ok(HypergeometricParams {
            population: fields.integer("N")?,
            population_successes: fields.integer("K")?,
            sample: fields.integer("n")?,
            sample_successes: fields.integer("k")?,
            mode,
        });
    }

    fn validate(
        &self,
        params: &HypergeometricParams,
    ) -> Result<Query<Hypergeometric, u64>, CalcError> {
        if params.population < 1 {
            return Err(CalcError::invalid(
                "The population size must be greater than or equal to 1",
            ));
        }
        if params.population_successes < 0 {
            return Err(CalcError::invalid(
                "The successes in the population must be between 0 and N",
            ));
        }
        if params.sample < 1 {
            return Err(CalcError::invalid("The sample size must be between 1 and N"));
        }

        let distribution: Hypergeometric = Hypergeometric::new(
            params.population as u64,
            params.population_successes as u64,
            params.sample as u64,
        )?;

        let max_successes: i64 = params.sample.min(params.population_successes);
        if params.sample_successes < 0 || max_successes < params.sample_successes {
            return Err(CalcError::invalid(
                "The successes in the sample must be between 0 and min(n, K)",
            ));
        }

        if distribution.variance().is_none() {
            return Err(CalcError::invalid(
                "The variance is undefined for a population of size 1, N must be at least 2",
            ));
        }

        let mode: QueryMode<u64> = params.mode.try_map(|upper: i64| {
            if upper < params.sample_successes || max_successes < upper {
                return Err(CalcError::invalid(
                    "The upper bound must be between k and min(n, K)",
                ));
            }
            return Ok(upper as u64);
        })?;

        return Ok(Query {
            distribution,
            at: params.sample_successes as u64,
            mode,
        });
    }

    fn compute(&self, model: &Query<Hypergeometric, u64>) -> Result<Outcome, CalcError> {
        let k: u64 = model.at;
        let n: u64 = model.distribution.get_sample();

        let explanation: String = match model.mode {
            QueryMode::Exact => {
                format!("Probability of exactly {k} successes in a sample of {n} items")
            }
            QueryMode::AtMost => {
                format!("Probability of {k} or fewer successes in a sample of {n} items")
            }
            QueryMode::AtLeast => {
                format!("Probability of {k} or more successes in a sample of {n} items")
            }
            QueryMode::Between(upper) => format!(
                "Probability of between {k} and {upper} successes in a sample of {n} items"
            ),
        };

        return Ok(Outcome {
            probability: model.probability(),
            explanation,
            statistics: Statistics::of(&model.distribution)?,
            standard_score: None,
        });
    }

    fn describe(&self, model: &Query<Hypergeometric, u64>) -> Vec<ParameterEcho> {
        let distribution: &Hypergeometric = &model.distribution;
        return vec![
            ParameterEcho::new("N", distribution.get_population(), "population size"),
            ParameterEcho::new("K", distribution.get_successes(), "successes in the population"),
            ParameterEcho::new("n", distribution.get_sample(), "sample size"),
            ParameterEcho::new("k", model.at, "successes in the sample"),
        ];
    }

    fn chart(&self, model: &Query<Hypergeometric, u64>) -> ChartSeries {
        let distribution: &Hypergeometric = &model.distribution;
        let title: String = format!(
            "Hypergeometric distribution (N={}, K={}, n={})",
            distribution.get_population(),
            distribution.get_successes(),
            distribution.get_sample()
        );

        return ChartSeries::discrete(
            title,
            "Successes in the sample (k)",
            distribution.get_domain().iter(),
            distribution.mode(),
            |k: u64| distribution.pmf(k),
            model.at,
        );
    }
}
