use assert_approx_eq::assert_approx_eq;

use ProbabilityCalculators::{
    distribution_trait::{ContinuousDistribution, DiscreteDistribution, Moments},
    distributions::{
        Binomial::Binomial, Exponential::Exponential, Hypergeometric::Hypergeometric,
        Normal::Normal, Poisson::Poisson,
    },
    domain::DiscreteDomain,
    euclid,
};

#[cfg(test)]
mod euclid_tests {
    use super::*;

    #[test]
    fn erf_reference_values() {
        // reference values of the exact error function
        let reference: [(f64, f64); 5] = [
            (0.1, 0.1124629160182849),
            (0.5, 0.5204998778130465),
            (1.0, 0.8427007929497149),
            (2.0, 0.9953222650189527),
            (3.0, 0.9999779095030014),
        ];

        for (x, expected) in reference {
            assert_approx_eq!(euclid::erf(x), expected, 2e-7);
            assert_approx_eq!(euclid::erf(-x), -expected, 2e-7);
        }
    }

    #[test]
    fn std_normal_cdf_at_zero() {
        assert_approx_eq!(euclid::std_normal_cdf(0.0), 0.5, 1e-8);
    }
}

#[cfg(test)]
mod binomial_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let binomial: Binomial = Binomial::new(10, 0.5).expect("Parameters should be valid");
        assert_approx_eq!(binomial.pmf(5), 0.24609375, 1e-12);
        assert_approx_eq!(binomial.pmf(0), 1.0 / 1024.0, 1e-12);
        assert_eq!(binomial.pmf(11), 0.0);
    }

    #[test]
    fn test_cumulative() {
        let binomial: Binomial = Binomial::new(10, 0.5).expect("Parameters should be valid");
        assert_approx_eq!(binomial.cumulative_at_most(5), 638.0 / 1024.0, 1e-12);
        assert_approx_eq!(binomial.cumulative_at_least(5), 638.0 / 1024.0, 1e-12);
        assert_approx_eq!(binomial.between(3, 7), 912.0 / 1024.0, 1e-12);
        assert_approx_eq!(binomial.cumulative_at_most(10), 1.0, 1e-12);
        assert_eq!(binomial.cumulative_at_least(11), 0.0);
    }

    #[test]
    fn test_moments() {
        let binomial: Binomial = Binomial::new(20, 0.3).expect("Parameters should be valid");
        assert_approx_eq!(binomial.expected_value().unwrap(), 6.0);
        assert_approx_eq!(binomial.variance().unwrap(), 4.2);
        assert_approx_eq!(binomial.standard_deviation().unwrap(), 4.2_f64.sqrt());
        assert_approx_eq!(binomial.get_q(), 0.7);
    }

    #[test]
    fn test_degenerate_probabilities() {
        let never: Binomial = Binomial::new(4, 0.0).expect("p = 0 is a valid probability");
        assert_eq!(never.pmf(0), 1.0);
        assert_eq!(never.pmf(1), 0.0);

        let always: Binomial = Binomial::new(4, 1.0).expect("p = 1 is a valid probability");
        assert_eq!(always.pmf(4), 1.0);
        assert_eq!(always.pmf(3), 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Binomial::new(10, 1.5).is_err());
        assert!(Binomial::new(10, -0.1).is_err());
        assert!(Binomial::new(10, f64::NAN).is_err());
        assert!(Binomial::new(0, 0.5).is_err());
    }

    #[test]
    fn test_mode() {
        let fair: Binomial = Binomial::new(10, 0.5).expect("Parameters should be valid");
        assert_eq!(fair.mode(), 5);
        let biased: Binomial = Binomial::new(2000, 0.3).expect("Parameters should be valid");
        assert_eq!(biased.mode(), 600);
        let always: Binomial = Binomial::new(4, 1.0).expect("p = 1 is a valid probability");
        assert_eq!(always.mode(), 4);
    }

    #[test]
    fn test_many_trials() {
        // C(2000, 600) does not fit in a f64, the pmf is evaluated in log space
        let binomial: Binomial = Binomial::new(2000, 0.3).expect("Parameters should be valid");
        assert_approx_eq!(binomial.pmf(600), 0.019463338987300134, 1e-12);
        assert_approx_eq!(binomial.cumulative_at_most(600), 0.511028618635815, 1e-9);
        assert_approx_eq!(
            binomial.cumulative_at_most(600) + binomial.cumulative_at_least(601),
            1.0,
            1e-9
        );
    }

    #[test]
    fn test_huge_number_of_trials() {
        // a standard deviation of 10^6, summing every term is not an option
        let binomial: Binomial =
            Binomial::new(4_000_000_000_000, 0.5).expect("Parameters should be valid");
        assert_approx_eq!(binomial.cumulative_at_most(2_000_000_000_000), 0.5, 1e-5);
        assert_approx_eq!(binomial.between(0, 4_000_000_000_000), 1.0, 1e-9);
        assert!(binomial.cumulative_at_least(2_010_000_000_000) < 1e-9);
    }
}

#[cfg(test)]
mod poisson_tests {
    use super::*;

    #[test]
    fn test_poisson_pmf() {
        let poisson: Poisson = Poisson::new(3.0).expect("Parameter should be valid");
        assert_approx_eq!(poisson.pmf(0), 0.049787068367863944);
        assert_approx_eq!(poisson.pmf(1), 0.14936120510359183);
        assert_approx_eq!(poisson.pmf(3), 0.22404180765538775);
        assert_approx_eq!(poisson.pmf(5), 0.1008181344474244);
    }

    #[test]
    fn test_poisson_cumulative() {
        let poisson: Poisson = Poisson::new(2.0).expect("Parameter should be valid");
        assert_approx_eq!(poisson.cumulative_at_most(0), 0.1353352832366127);
        assert_approx_eq!(poisson.cumulative_at_most(2), 0.6766764161830634);
        assert_approx_eq!(poisson.cumulative_at_most(5), 0.9834371942939481);
        assert_approx_eq!(poisson.cumulative_at_least(0), 1.0);
        assert_approx_eq!(poisson.cumulative_at_least(1), 1.0 - 0.1353352832366127);
        assert_approx_eq!(
            poisson.between(1, 2),
            0.6766764161830634 - 0.1353352832366127
        );
    }

    #[test]
    fn test_poisson_moments_and_support() {
        let poisson: Poisson = Poisson::new(4.0).expect("Parameter should be valid");
        assert_eq!(poisson.expected_value(), Some(4.0));
        assert_eq!(poisson.variance(), Some(4.0));
        assert_eq!(poisson.standard_deviation(), Some(2.0));
        assert_eq!(poisson.get_domain(), DiscreteDomain::From(0));
        // ceil(4 + 3 * 2)
        assert_eq!(poisson.chart_cutoff(), 10);
    }

    #[test]
    fn test_invalid_rate() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-1.0).is_err());
        assert!(Poisson::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_large_event_counts() {
        // 171! is not a finite f64
        let poisson: Poisson = Poisson::new(100.0).expect("Parameter should be valid");
        assert_approx_eq!(poisson.pmf(171) / 2.9976001681978143e-11, 1.0, 1e-9);
        assert_approx_eq!(poisson.cumulative_at_most(171), 0.9999999999591567, 1e-12);
        assert_approx_eq!(poisson.cumulative_at_least(172), 4.088199357434214e-11, 1e-15);

        let poisson: Poisson = Poisson::new(3.0).expect("Parameter should be valid");
        assert_eq!(poisson.pmf(700), 0.0);
        assert_approx_eq!(poisson.cumulative_at_most(700), 1.0, 1e-12);
        assert_eq!(poisson.cumulative_at_least(701), 0.0);
        assert_approx_eq!(poisson.between(2, 700), 1.0 - 4.0 * (-3.0_f64).exp(), 1e-12);
    }

    #[test]
    fn test_unbounded_query() {
        let poisson: Poisson = Poisson::new(2.0).expect("Parameter should be valid");
        assert_approx_eq!(poisson.cumulative_at_most(i64::MAX as u64), 1.0, 1e-12);
        assert_approx_eq!(poisson.cumulative_at_most(u64::MAX), 1.0, 1e-12);
        assert_eq!(poisson.cumulative_at_least(u64::MAX), 0.0);
    }

    #[test]
    fn test_large_rate() {
        // lambda^k and e^-lambda are out of range, the pmf is evaluated in log space
        let poisson: Poisson = Poisson::new(1000.0).expect("Parameter should be valid");
        assert_eq!(poisson.mode(), 1000);
        assert_approx_eq!(poisson.pmf(1000), 0.012614611348719664, 1e-12);
        assert!(poisson.pmf(10).is_finite());

        let poisson: Poisson = Poisson::new(10_000.0).expect("Parameter should be valid");
        assert_approx_eq!(poisson.cumulative_at_most(10_000), 0.5026595812233905, 1e-9);

        // a standard deviation of 10^6
        let poisson: Poisson = Poisson::new(1.0e12).expect("Parameter should be valid");
        assert_approx_eq!(poisson.cumulative_at_most(1_000_000_000_000), 0.5, 1e-5);
        assert_approx_eq!(poisson.cumulative_at_most(u64::MAX), 1.0, 1e-9);
    }
}

#[cfg(test)]
mod exponential_tests {
    use super::*;

    #[test]
    fn test_cdf() {
        let exponential: Exponential = Exponential::new(2.0).expect("Parameter should be valid");
        assert_eq!(exponential.cdf(0.0), 0.0);
        assert_approx_eq!(exponential.cdf(1.0), 0.8646647167633873);
        assert_approx_eq!(exponential.survival(1.0), 0.1353352832366127);
        assert_approx_eq!(exponential.between(0.5, 1.0), 0.36787944117144233 - 0.1353352832366127);
        assert_eq!(exponential.cdf(-3.0), 0.0);
    }

    #[test]
    fn test_moments() {
        let exponential: Exponential = Exponential::new(2.0).expect("Parameter should be valid");
        assert_eq!(exponential.expected_value(), Some(0.5));
        assert_eq!(exponential.variance(), Some(0.25));
        assert_eq!(exponential.standard_deviation(), Some(0.5));
    }

    #[test]
    fn test_quantile_inverts_cdf() {
        let exponential: Exponential = Exponential::new(1.2).expect("Parameter should be valid");
        for p in [0.1, 0.5, 0.9, 0.9999] {
            assert_approx_eq!(exponential.cdf(exponential.quantile(p)), p, 1e-12);
        }
        assert_eq!(exponential.quantile(0.0), 0.0);
        assert!(exponential.quantile(1.0).is_infinite());
    }

    #[test]
    fn test_pdf() {
        let exponential: Exponential = Exponential::new(0.5).expect("Parameter should be valid");
        assert_eq!(exponential.pdf(0.0), 0.5);
        assert_eq!(exponential.pdf(-1.0), 0.0);
    }
}

#[cfg(test)]
mod normal_tests {
    use super::*;

    #[test]
    fn test_standard_cdf() {
        let normal: Normal = Normal::new(0.0, 1.0).expect("Parameters should be valid");
        assert_approx_eq!(normal.cdf(1.96), 0.975002, 1e-6);
        assert_approx_eq!(normal.z_score(1.96), 1.96);
        assert_approx_eq!(normal.between(-1.96, 1.96), 0.9500042, 1e-6);
    }

    #[test]
    fn test_shifted_cdf() {
        let normal: Normal = Normal::new(100.0, 15.0).expect("Parameters should be valid");
        assert_approx_eq!(normal.z_score(115.0), 1.0);
        assert_approx_eq!(normal.cdf(115.0), 0.8413447, 1e-6);
        assert_approx_eq!(normal.survival(115.0), 1.0 - 0.8413447, 1e-6);
        assert_approx_eq!(normal.cdf(100.0), 0.5, 1e-8);
    }

    #[test]
    fn test_pdf_and_moments() {
        let normal: Normal = Normal::new(1.0, 2.0).expect("Parameters should be valid");
        assert_approx_eq!(normal.pdf(1.0), euclid::INV_SQRT_2_PI / 2.0);
        assert_eq!(normal.expected_value(), Some(1.0));
        assert_eq!(normal.variance(), Some(4.0));
        assert_eq!(normal.standard_deviation(), Some(2.0));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
    }
}

#[cfg(test)]
mod hypergeometric_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(50, 5, 10).expect("Parameters should be valid");
        // C(5, 2) * C(45, 8) / C(50, 10)
        assert_approx_eq!(hypergeometric.pmf(2), 0.20983971757065453);
        assert_approx_eq!(hypergeometric.cumulative_at_most(2), 0.9517396968037909);
    }

    #[test]
    fn test_cumulative() {
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(50, 5, 10).expect("Parameters should be valid");
        assert_approx_eq!(hypergeometric.cumulative_at_least(2), 0.25810002076686356);
        assert_approx_eq!(hypergeometric.between(1, 3), 0.6853536974456758);
        assert_approx_eq!(hypergeometric.cumulative_at_least(0), 1.0);
        assert_eq!(hypergeometric.mode(), 1);

        // below the smallest possible number of successes
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(10, 7, 6).expect("Parameters should be valid");
        assert_approx_eq!(hypergeometric.cumulative_at_least(0), 1.0);
        assert_eq!(hypergeometric.cumulative_at_most(2), 0.0);
    }

    #[test]
    fn test_large_population() {
        // C(2000, 100) does not fit in a f64
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(2000, 500, 100).expect("Parameters should be valid");
        assert_eq!(hypergeometric.mode(), 25);
        assert_approx_eq!(hypergeometric.pmf(25), 0.09418360145736276, 1e-11);
        assert_approx_eq!(hypergeometric.cumulative_at_most(25), 0.5540769660678299, 1e-10);

        // drawing 10 items from 10^15 is very close to a Binomial(10, 0.4)
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(1_000_000_000_000_000, 400_000_000_000_000, 10)
                .expect("Parameters should be valid");
        assert_approx_eq!(hypergeometric.pmf(4), 0.250822656, 1e-9);
        assert_approx_eq!(hypergeometric.cumulative_at_most(10), 1.0, 1e-9);
    }

    #[test]
    fn test_poker_hand() {
        // exactly one ace in a poker hand
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(52, 4, 5).expect("Parameters should be valid");
        assert_approx_eq!(hypergeometric.pmf(1), 0.2994736356080894);
    }

    #[test]
    fn test_support() {
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(10, 7, 6).expect("Parameters should be valid");
        // max(0, 6 - 3) to min(6, 7)
        assert_eq!(hypergeometric.get_domain(), DiscreteDomain::Range(3, 6));
        assert_eq!(hypergeometric.pmf(2), 0.0);
        assert_eq!(hypergeometric.pmf(7), 0.0);
    }

    #[test]
    fn test_moments() {
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(50, 5, 10).expect("Parameters should be valid");
        assert_approx_eq!(hypergeometric.expected_value().unwrap(), 1.0);
        assert_approx_eq!(hypergeometric.variance().unwrap(), 0.7346938775510204);
    }

    #[test]
    fn test_single_element_population() {
        let hypergeometric: Hypergeometric =
            Hypergeometric::new(1, 1, 1).expect("Parameters should be valid");
        assert_eq!(hypergeometric.pmf(1), 1.0);
        assert_eq!(hypergeometric.variance(), None);
        assert_eq!(hypergeometric.standard_deviation(), None);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Hypergeometric::new(0, 0, 1).is_err());
        assert!(Hypergeometric::new(10, 11, 5).is_err());
        assert!(Hypergeometric::new(10, 5, 0).is_err());
        assert!(Hypergeometric::new(10, 5, 11).is_err());
    }
}
