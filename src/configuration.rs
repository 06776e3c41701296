//! This file contains the deafult values and other value choices used trough the crate.
//!
//! There are no perfect values for the charts, they are just practical
//! visualization choices. The display precision follows what the results
//! panel has always shown.

/// How numbers are written in the results panel.
pub mod display {
    /// Decimals of the probability value (`0.246094`).
    pub static PROBABILITY_DECIMALS: usize = 6;

    /// Decimals of the probability as a percentage (`24.6094%`).
    pub static PERCENTAGE_DECIMALS: usize = 4;

    /// Decimals of the mean, variance, standard deviation and z-score.
    pub static STATISTIC_DECIMALS: usize = 4;
}

/// Ranges and resolution of the distribution charts.
pub mod chart {
    /// The Poisson chart goes from `0` to `ceil(lambda + POISSON_CHART_SIGMAS * sqrt(lambda))`.
    ///
    /// This is a visualization cutoff, the support of the Poisson is infinite.
    pub static POISSON_CHART_SIGMAS: f64 = 3.0;

    /// The normal chart covers `mu +- NORMAL_CHART_SIGMAS * sigma`.
    ///
    /// The area left out is `1 - erf(4/sqrt(2))`, less than `6.4 * 10^-5`.
    pub static NORMAL_CHART_SIGMAS: f64 = 4.0;

    /// The exponential chart goes from `0` up to this quantile.
    pub static EXPONENTIAL_CHART_QUANTILE: f64 = 0.9999;

    /// Number of points used to draw a continuous density.
    ///
    /// Odd, so that the center of a symmetric range is one of the points.
    pub static CONTINUOUS_CHART_POINTS: usize = 81;

    /// Width (in characters) of the longest bar of a text chart.
    pub static TEXT_BAR_WIDTH: usize = 40;

    /// Maximum number of bars of a discrete chart. Wider supports only show
    /// the bars around the mode.
    ///
    /// Odd, so that the mode is the bar in the middle.
    pub static MAX_CHART_BARS: usize = 201;
}

/// Choices for the sums of the discrete distributions.
pub mod numerical {
    /// Up to this many trials (binomial) or elements in the population
    /// (hypergeometric) the pmf is computed directly with the binomial
    /// coefficients. Bigger values are computed in log space.
    ///
    /// `C(1000, 500)` is still finite.
    pub static DIRECT_PMF_MAX_SIZE: u64 = 1000;

    /// The sum of a pmf stops once a term is smaller than
    /// `NEGLIGIBLE_TERM * (sum so far)`. The pmf keeps decreasing after that
    /// point, so the rest of the terms do not change the result.
    pub static NEGLIGIBLE_TERM: f64 = 1.0e-17;

    /// Above this standard deviation the cumulative probabilities use the
    /// normal approximation (with continuity correction) instead of adding
    /// every term. Its error is of the order of `10^-6` there.
    pub static NORMAL_APPROXIMATION_DEVIATION: f64 = 1.0e5;
}
