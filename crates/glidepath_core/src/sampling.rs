//! Stochastic return sampling
//!
//! Pure sampling primitives for the growth models: a Box-Muller standard
//! normal, a Marsaglia-Tsang gamma (and the chi-squared / Student-t draws
//! built on it), and the three growth-factor strategies. Everything is
//! generic over `R: Rng + ?Sized` so tests can inject a seeded generator.

use std::f64::consts::PI;

use rand::Rng;

/// Standard-normal sample via the Box-Muller transform.
///
/// The first uniform is redrawn while it is exactly zero so the log is
/// always finite.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let mut u: f64 = 0.0;
    while u == 0.0 {
        u = rng.random();
    }
    let v: f64 = rng.random();
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Gamma(shape, scale) sample via the Marsaglia-Tsang method.
///
/// For `shape >= 1` this is the accept-reject loop with a normal proposal;
/// for `shape < 1` it uses the boost identity
/// gamma(shape) = gamma(shape + 1) * U^(1/shape).
pub fn gamma_sample<R: Rng + ?Sized>(rng: &mut R, shape: f64, scale: f64) -> f64 {
    if shape < 1.0 {
        let u: f64 = rng.random();
        return gamma_sample(rng, shape + 1.0, scale) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    loop {
        let x = standard_normal(rng);
        let v = (1.0 + c * x).powi(3);
        if v <= 0.0 {
            continue;
        }
        let u: f64 = rng.random();
        // Cheap squeeze test first, exact log test as fallback
        if u < 1.0 - 0.0331 * x.powi(4) {
            return d * v * scale;
        }
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return d * v * scale;
        }
    }
}

/// Chi-squared(df) sample: gamma(df/2, 2).
pub fn chi_squared<R: Rng + ?Sized>(rng: &mut R, df: f64) -> f64 {
    gamma_sample(rng, df / 2.0, 2.0)
}

/// Student-t(df) sample: N / sqrt(chi2(df) / df).
pub fn student_t<R: Rng + ?Sized>(rng: &mut R, df: f64) -> f64 {
    standard_normal(rng) / (chi_squared(rng, df) / df).sqrt()
}

/// Log-normal growth factor: exp(mu + sigma * N).
pub fn log_normal_growth_factor<R: Rng + ?Sized>(rng: &mut R, mu: f64, sigma: f64) -> f64 {
    (mu + sigma * standard_normal(rng)).exp()
}

/// Fat-tailed growth factor: exp(mean + std_dev * T(df)).
pub fn fat_tail_growth_factor<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64, df: f64) -> f64 {
    (mean + std_dev * student_t(rng, df)).exp()
}

/// Legacy additive growth factor: 1 + mean + std_dev * N.
pub fn legacy_growth_factor<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    1.0 + mean + std_dev * standard_normal(rng)
}
