//! This script contains the interfaces used to comunicate with the distributions.
//!
//! The only requiered methods are the pmf/pdf (and the cdf for the continuous
//! case, since every distribution here has a closed form for it) plus the
//! support (and the mode for the discrete case). The cumulative probabilities
//! are provided on top of them.

use crate::{
    configuration::numerical::{NEGLIGIBLE_TERM, NORMAL_APPROXIMATION_DEVIATION},
    domain::{ContinuousDomain, DiscreteDomain},
    euclid::std_normal_cdf,
};

/// The [moments](https://en.wikipedia.org/wiki/Moment_(mathematics)) shown next to
/// every probability.
///
/// They return [None] when the moment is undefined for the given parameters.
pub trait Moments {
    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value) (mean).
    fn expected_value(&self) -> Option<f64>;

    /// The [variance](https://en.wikipedia.org/wiki/Variance).
    fn variance(&self) -> Option<f64>;

    /// The [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation),
    /// `sqrt(variance)` unless the distribution knows better.
    fn standard_deviation(&self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }
}

/// The trait for any discrete distribution over the non-negative integers.
///
/// The distributions must be unimodal: the pmf does not increase when moving
/// away from [DiscreteDistribution::mode]. The provided sums rely on it to
/// stop as soon as the remaining terms are negligible, so their cost depends
/// on the spread of the distribution and not on the queried values.
pub trait DiscreteDistribution: Moments {
    // Requiered methods:

    /// Evaluates the [PMF](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// (Probability Mass Function) at `k`: `P(X = k)`.
    fn pmf(&self, k: u64) -> f64;

    /// Returns the support of the pmf.
    fn get_domain(&self) -> DiscreteDomain;

    /// A [mode](https://en.wikipedia.org/wiki/Mode_(statistics)): a value of
    /// the support where the pmf is maximal.
    fn mode(&self) -> u64;

    // Provided methods:

    /// `P(X <= k)`
    fn cumulative_at_most(&self, k: u64) -> f64 {
        return self.between(0, k);
    }

    /// `P(X >= k)`
    fn cumulative_at_least(&self, k: u64) -> f64 {
        return self.between(k, u64::MAX);
    }

    /// `P(a <= X <= b)`, both bounds inclusive. Returns `0.0` if `b < a`.
    ///
    /// The pmf is summed from the value of `[a, b]` closest to the mode
    /// outwards, until the terms are smaller than
    /// [NEGLIGIBLE_TERM](crate::configuration::numerical::NEGLIGIBLE_TERM)
    /// times the sum. Very wide distributions use the normal approximation
    /// (see [NORMAL_APPROXIMATION_DEVIATION](crate::configuration::numerical::NORMAL_APPROXIMATION_DEVIATION)).
    fn between(&self, a: u64, b: u64) -> f64 {
        if b < a {
            return 0.0;
        }

        let (min, max): (u64, Option<u64>) = self.get_domain().get_bounds();
        let first: u64 = a.max(min);
        let last: u64 = match max {
            Some(max) => b.min(max),
            None => b,
        };
        if last < first {
            return 0.0;
        }

        if let (Some(mean), Some(standard_deviation)) =
            (self.expected_value(), self.standard_deviation())
        {
            if NORMAL_APPROXIMATION_DEVIATION < standard_deviation {
                // continuity correction: the bar of `k` covers `[k - 0.5, k + 0.5]`
                let upper: f64 = std_normal_cdf((last as f64 + 0.5 - mean) / standard_deviation);
                let lower: f64 = std_normal_cdf((first as f64 - 0.5 - mean) / standard_deviation);
                return (upper - lower).max(0.0);
            }
        }

        let start: u64 = self.mode().clamp(first, last);
        let mut total: f64 = self.pmf(start);

        let mut k: u64 = start;
        while k < last {
            k += 1;
            let term: f64 = self.pmf(k);
            total += term;
            if is_negligible(term, total) {
                break;
            }
        }

        let mut k: u64 = start;
        while first < k {
            k -= 1;
            let term: f64 = self.pmf(k);
            total += term;
            if is_negligible(term, total) {
                break;
            }
        }

        return total.min(1.0);
    }
}

fn is_negligible(term: f64, total: f64) -> bool {
    return term.is_nan() || term <= NEGLIGIBLE_TERM * total;
}

/// The trait for any continuous distribution.
pub trait ContinuousDistribution: Moments {
    // Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) at `x`. Returns `0.0` outside the support.
    fn pdf(&self, x: f64) -> f64;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function): `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Returns the support of the pdf.
    fn get_domain(&self) -> ContinuousDomain;

    // Provided methods:

    /// `P(X > x) = 1 - cdf(x)`.
    fn survival(&self, x: f64) -> f64 {
        return 1.0 - self.cdf(x);
    }

    /// `P(a <= X <= b) = cdf(b) - cdf(a)`.
    fn between(&self, a: f64, b: f64) -> f64 {
        return self.cdf(b) - self.cdf(a);
    }
}
