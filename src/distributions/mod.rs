// Discrete
pub mod Binomial;
pub mod Hypergeometric;
pub mod Poisson;

// Continuous
pub mod Exponential;
pub mod Normal;
