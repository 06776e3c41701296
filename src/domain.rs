//! The [support](https://en.wikipedia.org/wiki/Support_(mathematics)) of a
//! distribution: the values it can take with nonzero probability.
//!
//!  - [DiscreteDomain]: for the pmf of Binomial, Poisson and Hypergeometric.
//!  - [ContinuousDomain]: for the pdf of Exponential and Normal.
//!
//! The discrete one decides how far the cumulative sums go and wich bars
//! are drawn in the charts.

/// The support of a pmf, as a set of consecutive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscreteDomain {
    /// `{.0, .0 + 1, ..., .1}`. Both ends are included and `.0 <= .1`.
    Range(u64, u64),
    /// `{.0, .0 + 1, ...}` without an upper end (Poisson).
    From(u64),
}

/// The support of a pdf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContinuousDomain {
    /// `(-inf, inf)` (Normal)
    Reals,
    /// `[.0, inf)` (Exponential)
    From(f64),
}

impl DiscreteDomain {
    /// The smallest value and, for a finite support, the largest one.
    #[must_use]
    pub fn get_bounds(&self) -> (u64, Option<u64>) {
        return match self {
            DiscreteDomain::Range(first, last) => (*first, Some(*last)),
            DiscreteDomain::From(first) => (*first, None),
        };
    }

    /// Every value of the support in increasing order.
    ///
    /// For [DiscreteDomain::From] the range ends at `u64::MAX`, so it must be
    /// cut with `take` or `take_while` before being consumed.
    #[must_use]
    pub fn iter(&self) -> std::ops::RangeInclusive<u64> {
        let (first, last): (u64, Option<u64>) = self.get_bounds();
        return first..=last.unwrap_or(u64::MAX);
    }
}

impl ContinuousDomain {
    /// `false` for NaN.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        return match self {
            ContinuousDomain::Reals => !x.is_nan(),
            ContinuousDomain::From(start) => *start <= x,
        };
    }

    /// `(lower, upper)`, with infinities for the open ends.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        return match self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::From(start) => (*start, f64::INFINITY),
        };
    }
}
