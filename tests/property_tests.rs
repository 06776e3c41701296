use assert_approx_eq::assert_approx_eq;
use rand::Rng;

use ProbabilityCalculators::{
    distribution_trait::{ContinuousDistribution, DiscreteDistribution},
    distributions::{
        Binomial::Binomial, Exponential::Exponential, Hypergeometric::Hypergeometric,
        Normal::Normal, Poisson::Poisson,
    },
    euclid,
};

#[cfg(test)]
mod property_tests {
    use super::*;

    const ITERATIONS: usize = 200;

    #[test]
    fn binomial_coefficient_is_symmetric() {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        for _ in 0..ITERATIONS {
            let n: u64 = rng.random_range(0..=60);
            let k: u64 = rng.random_range(0..=n);
            let direct: f64 = euclid::binomial_coefficient(n, k);
            let mirrored: f64 = euclid::binomial_coefficient(n, n - k);
            assert_approx_eq!(direct / mirrored, 1.0, 1e-12);
        }
    }

    #[test]
    fn binomial_pmf_sums_to_one() {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        for _ in 0..ITERATIONS {
            let n: u64 = rng.random_range(1..=60);
            let p: f64 = rng.random_range(0.0..=1.0);
            let binomial: Binomial = Binomial::new(n, p).expect("Parameters should be valid");

            let total: f64 = (0..=n).map(|k: u64| binomial.pmf(k)).sum();
            assert_approx_eq!(total, 1.0, 1e-9);

            let k: u64 = rng.random_range(0..=n);
            assert_approx_eq!(
                binomial.cumulative_at_most(k) + binomial.cumulative_at_least(k) - binomial.pmf(k),
                1.0,
                1e-9
            );
        }
    }

    #[test]
    fn poisson_tail_vanishes() {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        for _ in 0..ITERATIONS {
            let lambda: f64 = rng.random_range(0.1..20.0);
            let poisson: Poisson = Poisson::new(lambda).expect("Parameter should be valid");

            // far beyond the mean the cumulative probability has converged
            let far: u64 = (lambda + 12.0 * lambda.sqrt()).ceil() as u64 + 10;
            assert_approx_eq!(poisson.cumulative_at_most(far), 1.0, 1e-9);

            // the chart range keeps most of the mass
            assert!(0.95 < poisson.cumulative_at_most(poisson.chart_cutoff()));
        }
    }

    #[test]
    fn discrete_modes_are_maximal() {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        for _ in 0..ITERATIONS {
            let n: u64 = rng.random_range(1..=3000);
            let p: f64 = rng.random_range(0.01..0.99);
            let binomial: Binomial = Binomial::new(n, p).expect("Parameters should be valid");
            let mode: u64 = binomial.mode();
            assert!(binomial.pmf(mode + 1) <= binomial.pmf(mode) * (1.0 + 1e-9));
            assert!(binomial.pmf(mode.saturating_sub(1)) <= binomial.pmf(mode) * (1.0 + 1e-9));

            let lambda: f64 = rng.random_range(0.1..5000.0);
            let poisson: Poisson = Poisson::new(lambda).expect("Parameter should be valid");
            let mode: u64 = poisson.mode();
            assert!(poisson.pmf(mode + 1) <= poisson.pmf(mode) * (1.0 + 1e-9));
            assert!(poisson.pmf(mode.saturating_sub(1)) <= poisson.pmf(mode) * (1.0 + 1e-9));

            // the split between the two cumulative sums does not lose mass
            let k: u64 = rng.random_range(0..=(2.0 * lambda) as u64 + 1);
            assert_approx_eq!(
                poisson.cumulative_at_most(k) + poisson.cumulative_at_least(k + 1),
                1.0,
                1e-9
            );
        }
    }

    #[test]
    fn exponential_cdf_is_monotone() {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        for _ in 0..ITERATIONS {
            let lambda: f64 = rng.random_range(0.05..10.0);
            let exponential: Exponential =
                Exponential::new(lambda).expect("Parameter should be valid");

            assert_eq!(exponential.cdf(0.0), 0.0);
            assert_approx_eq!(exponential.cdf(100.0 / lambda), 1.0, 1e-12);

            let a: f64 = rng.random_range(0.0..10.0);
            let b: f64 = a + rng.random_range(0.0..10.0);
            assert!(exponential.cdf(a) <= exponential.cdf(b));
            assert!(0.0 <= exponential.between(a, b));
        }
    }

    #[test]
    fn normal_cdf_is_symmetric() {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        for _ in 0..ITERATIONS {
            let z: f64 = rng.random_range(-6.0..6.0);
            assert_approx_eq!(
                euclid::std_normal_cdf(z) + euclid::std_normal_cdf(-z),
                1.0,
                1e-8
            );

            let mean: f64 = rng.random_range(-100.0..100.0);
            let standard_deviation: f64 = rng.random_range(0.1..50.0);
            let normal: Normal =
                Normal::new(mean, standard_deviation).expect("Parameters should be valid");
            let x: f64 = mean + z * standard_deviation;
            assert_approx_eq!(normal.cdf(x), euclid::std_normal_cdf(z), 1e-9);
        }
    }

    #[test]
    fn hypergeometric_support_sums_to_one() {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        for _ in 0..ITERATIONS {
            let population: u64 = rng.random_range(2..=60);
            let successes: u64 = rng.random_range(0..=population);
            let sample: u64 = rng.random_range(1..=population);
            let hypergeometric: Hypergeometric = Hypergeometric::new(population, successes, sample)
                .expect("Parameters should be valid");

            let total: f64 = hypergeometric
                .get_domain()
                .iter()
                .map(|k: u64| hypergeometric.pmf(k))
                .sum();
            assert_approx_eq!(total, 1.0, 1e-9);
        }
    }
}
