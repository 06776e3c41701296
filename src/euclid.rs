//! Euclid contains the small math functions shared by the calculators.
//!
//! Everything here works on plain `f64` and follows the textbook formulas.
//! There is no protection against overflow: [factorial] returns `+inf` after
//! `170!`, as any double precision implementation would.

/// `sqrt(2)`
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// `1 / sqrt(2 * pi)`, the normalitzation constant of the standard normal density.
pub const INV_SQRT_2_PI: f64 = 0.398942280401432677939946059934381868;

// Abramowitz and Stegun, formula 7.1.26
const ERF_P: f64 = 0.3275911;
const ERF_A1: f64 = 0.254829592;
const ERF_A2: f64 = -0.284496736;
const ERF_A3: f64 = 1.421413741;
const ERF_A4: f64 = -1.453152027;
const ERF_A5: f64 = 1.061405429;

/// Computes `n!` as the iterative product `2 * 3 * ... * n`.
///
/// `0! = 1! = 1`. The result is a float, so it is exact up to `18!` and
/// becomes `+inf` after `170!`.
#[must_use]
pub fn factorial(n: u64) -> f64 {
    if n <= 1 {
        return 1.0;
    }

    let mut result: f64 = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    return result;
}

/// Computes the [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient)
/// `C(n, k)`.
///
/// Returns `0.0` if `n < k` and `1.0` if `k` is `0` or `n`. Otherwise it uses
/// `C(n, k) = C(n, n - k)` and the multiplicative formula, alternating
/// multiplications and divisions so the intermediate values stay close to
/// the result instead of computing full factorials.
#[must_use]
pub fn binomial_coefficient(n: u64, k: u64) -> f64 {
    if n < k {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }

    let k: u64 = k.min(n - k);

    let mut result: f64 = 1.0;
    for i in 0..k {
        result *= (n - i) as f64;
        result /= (i + 1) as f64;
    }
    return result;
}

/// The largest `n` such that `n!` is finite as a `f64`.
pub const MAX_FINITE_FACTORIAL: u64 = 170;

/// The error of Stirling's approximation:
/// `ln(x!) - (x * ln(x) - x + ln(sqrt(2 * pi * x)))`.
///
/// Computed with the first 3 terms of the asymptotic series
/// `1/(12x) - 1/(360x^3) + 1/(1260x^5)`, so it is only meant for
/// `MAX_FINITE_FACTORIAL < x`.
#[must_use]
pub fn stirling_correction(x: f64) -> f64 {
    let inv: f64 = 1.0 / x;
    let inv_sq: f64 = inv * inv;
    return inv * (1.0 / 12.0 - inv_sq * (1.0 / 360.0 - inv_sq / 1260.0));
}

/// `ln(C(n, k))`, `-inf` if `n < k`.
///
/// Used instead of [binomial_coefficient] when the coefficient (or the
/// time needed to compute it) would be too big.
///
/// With `m = min(k, n - k)`, small values of `m` add up `ln((n - i) / (i + 1))`.
/// Otherwise [Stirling's series](https://en.wikipedia.org/wiki/Stirling%27s_approximation)
/// is written as
///
/// `m * ln(n / m) + (n - m) * ln(n / (n - m)) + ln(sqrt(n / (2 * pi * m * (n - m)))) + corrections`
///
/// where every term is positive. Subtracting `ln(n!) - ln(k!) - ln((n - k)!)`
/// directly would lose every digit once `n` is large.
#[must_use]
pub fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
    if n < k {
        return f64::NEG_INFINITY;
    }

    let m: u64 = k.min(n - k);
    if m <= MAX_FINITE_FACTORIAL {
        let mut result: f64 = 0.0;
        for i in 0..m {
            result += ((n - i) as f64 / (i + 1) as f64).ln();
        }
        return result;
    }

    let x: f64 = n as f64;
    let small: f64 = m as f64;
    let big: f64 = (n - m) as f64;
    let entropy: f64 = small * (x / small).ln() - big * (-small / x).ln_1p();
    let scale: f64 = 0.5 * (x / (2.0 * std::f64::consts::PI * small * big)).ln();
    let correction: f64 =
        stirling_correction(x) - stirling_correction(small) - stirling_correction(big);
    return entropy + scale + correction;
}

/// An approximation of the [error function](https://en.wikipedia.org/wiki/Error_function).
///
/// This is **not** an exact error function. It uses the rational approximation
/// 7.1.26 of Abramowitz and Stegun:
///
/// > `erf(x) ~= 1 - (a1*t + a2*t^2 + a3*t^3 + a4*t^4 + a5*t^5) * exp(-x^2)`
/// > with `t = 1 / (1 + 0.3275911 * |x|)`
///
/// wich has a maximum absolute error of about `1.5 * 10^-7`. Negative inputs
/// use `erf(-x) = -erf(x)`. Good enough to display probabilities, not for
/// further statistical work.
#[must_use]
pub fn erf(x: f64) -> f64 {
    let sign: f64 = if x < 0.0 { -1.0 } else { 1.0 };
    let x: f64 = x.abs();

    let t: f64 = 1.0 / (1.0 + ERF_P * x);
    let polynomial: f64 = ((((ERF_A5 * t + ERF_A4) * t + ERF_A3) * t + ERF_A2) * t + ERF_A1) * t;
    let y: f64 = 1.0 - polynomial * (-x * x).exp();

    return sign * y;
}

/// The cdf of the standard normal distribution: `0.5 * (1 + erf(z / sqrt(2)))`.
///
/// Inherits the error bound of [erf].
#[must_use]
pub fn std_normal_cdf(z: f64) -> f64 {
    return 0.5 * (1.0 + erf(z / SQRT_2));
}

/// Returns `count` evenly spaced points from `start` to `end` (both included).
///
/// Used to sample continuous densities for charts. If `count < 2` only
/// `start` is returned.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start];
    }

    let step: f64 = (end - start) / ((count - 1) as f64);
    return (0..count)
        .map(|i: usize| start + step * (i as f64))
        .collect::<Vec<f64>>();
}
