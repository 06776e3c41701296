//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is the distribution that models the number of successes of `n`
//! independent trials with succes probability `p`.
//!
//! For example, if you whant to know the probability to get exacly 17 heads in 22
//! throws of a coin, we can model this as a binomial distribution with parameters
//! `n = 22` and `p = 0.5` and evaluate the pmf at `17`.
//! To get the probability of getting 14 heads or less we can compute
//! [cumulative_at_most](DiscreteDistribution::cumulative_at_most) at `14`.

use bon::Builder;

use crate::{
    calculator::{Calculator, Outcome, ParameterEcho, Query, QueryMode, Statistics},
    chart::ChartSeries,
    configuration::numerical::DIRECT_PMF_MAX_SIZE,
    distribution_trait::{DiscreteDistribution, Moments},
    domain::DiscreteDomain,
    errors::CalcError,
    euclid,
    input::{FormFields, ModeSelector},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
    ///
    ///  - `n` indicates the number of trials. Must be at least `1`.
    ///  - `p` indicates the probability of success of each trial.
    ///      - `p` must belong in the interval `[0.0, 1.0]`.
    ///
    /// Otherwise an error will be returned.
    pub fn new(n: u64, p: f64) -> Result<Binomial, CalcError> {
        if n < 1 {
            return Err(CalcError::invalid(
                "Please enter a valid number of trials (n ≥ 1)",
            ));
        }
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(CalcError::invalid("The probability must be between 0 and 1"));
        }

        return Ok(Binomial { n, p });
    }

    /// Return `n` (number of trials).
    #[must_use]
    pub const fn get_n(&self) -> u64 {
        return self.n;
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Return `q = 1 - p` (probability of failure).
    #[must_use]
    pub fn get_q(&self) -> f64 {
        return 1.0 - self.p;
    }
}

impl Moments for Binomial {
    fn expected_value(&self) -> Option<f64> {
        return Some(self.n as f64 * self.p);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.n as f64 * self.p * (1.0 - self.p));
    }
}

impl DiscreteDistribution for Binomial {
    /// `C(n, k) * p^k * (1 - p)^(n - k)`, `0.0` if `n < k`.
    fn pmf(&self, k: u64) -> f64 {
        if self.n < k {
            return 0.0;
        }

        if self.n <= DIRECT_PMF_MAX_SIZE {
            let binomial_coef: f64 = euclid::binomial_coefficient(self.n, k);
            let prob_p: f64 = self.p.powf(k as f64);
            let prob_q: f64 = (1.0 - self.p).powf((self.n - k) as f64);

            return binomial_coef * prob_p * prob_q;
        }

        // `binomial_coef` can be very big and `prob_p * prob_q` very small,
        // so they are joined in log space. `ln(0)` needs the extremes apart.
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }

        let ln_pmf: f64 = euclid::ln_binomial_coefficient(self.n, k)
            + (k as f64) * self.p.ln()
            + ((self.n - k) as f64) * (-self.p).ln_1p();
        return ln_pmf.exp();
    }

    fn get_domain(&self) -> DiscreteDomain {
        return DiscreteDomain::Range(0, self.n);
    }

    /// `floor((n + 1) * p)`, or `n` if `p = 1`.
    fn mode(&self) -> u64 {
        return (((self.n as f64) + 1.0) * self.p).floor().min(self.n as f64) as u64;
    }
}

/// The raw parameters of the binomial calculator.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct BinomialParams {
    /// Number of trials
    pub n: i64,
    /// Probability of success
    pub p: f64,
    /// Number of successes
    pub k: i64,
    #[builder(default = QueryMode::Exact)]
    pub mode: QueryMode<i64>,
}

/// Calculator for `P(X = k)`, `P(X <= k)`, `P(X >= k)` and `P(k <= X <= upper)`.
///
/// Form fields: `n`, `p`, `k`, `mode` (default `exact`) and `upper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinomialCalculator;

impl Calculator for BinomialCalculator {
    type Params = BinomialParams;
    type Model = Query<Binomial, u64>;

    fn name(&self) -> &'static str {
        return "binomial";
    }

    fn read(&self, fields: &FormFields) -> Result<BinomialParams, CalcError> {
        let mode: QueryMode<i64> = fields
            .mode(ModeSelector::Exact)?
            .into_query(|| fields.integer("upper"))?;

        return Ok(BinomialParams {
            n: fields.integer("n")?,
            p: fields.real("p")?,
            k: fields.integer("k")?,
            mode,
        });
    }

    fn validate(&self, params: &BinomialParams) -> Result<Query<Binomial, u64>, CalcError> {
        if params.n < 1 {
            return Err(CalcError::invalid(
                "Please enter a valid number of trials (n ≥ 1)",
            ));
        }
        let distribution: Binomial = Binomial::new(params.n as u64, params.p)?;

        if params.k < 0 || params.n < params.k {
            return Err(CalcError::invalid(
                "The number of successes must be between 0 and n",
            ));
        }

        let mode: QueryMode<u64> = params.mode.try_map(|upper: i64| {
            if upper < params.k || params.n < upper {
                return Err(CalcError::invalid(
                    "The upper bound must be greater than or equal to k and less than or equal to n",
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

    fn compute(&self, model: &Query<Binomial, u64>) -> Result<Outcome, CalcError> {
        let n: u64 = model.distribution.get_n();
        let k: u64 = model.at;

        let explanation: String = match model.mode {
            QueryMode::Exact => format!("Probability of exactly {k} successes in {n} trials"),
            QueryMode::AtMost => format!("Probability of {k} or fewer successes in {n} trials"),
            QueryMode::AtLeast => format!("Probability of {k} or more successes in {n} trials"),
            QueryMode::Between(upper) => {
                format!("Probability of between {k} and {upper} successes in {n} trials")
            }
        };

        return Ok(Outcome {
            probability: model.probability(),
            explanation,
            statistics: Statistics::of(&model.distribution)?,
            standard_score: None,
        });
    }

    fn describe(&self, model: &Query<Binomial, u64>) -> Vec<ParameterEcho> {
        let distribution: &Binomial = &model.distribution;
        return vec![
            ParameterEcho::new("n", distribution.get_n(), "trials"),
            ParameterEcho::new("p", distribution.get_p(), "probability of success"),
            ParameterEcho::new(
                "q",
                format!("{:.4}", distribution.get_q()),
                "probability of failure",
            ),
        ];
    }

    fn chart(&self, model: &Query<Binomial, u64>) -> ChartSeries {
        let distribution: &Binomial = &model.distribution;
        let title: String = format!(
            "Binomial distribution (n={}, p={})",
            distribution.get_n(),
            distribution.get_p()
        );

        return ChartSeries::discrete(
            title,
            "Successes (k)",
            distribution.get_domain().iter(),
            distribution.mode(),
            |k: u64| distribution.pmf(k),
            model.at,
        );
    }
}
