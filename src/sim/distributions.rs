//! Distribution draws layered on [Rng].
//!
//! Every draw carries the scenario field it samples for, so a failed run
//! reports which input was misconfigured. Scenario parameters are validated
//! before a run starts; these checks catch values that only become invalid
//! mid-trial (e.g. a success probability derived from another draw).

use std::fmt;

use crate::sim::rng::Rng;

/// A distribution was asked to sample with inputs it cannot accept.
/// Aborts the whole run; indicates a configuration defect, not noise.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    InvertedIntRange {
        field: &'static str,
        low: i64,
        high: i64,
    },
    NegativeStdDev {
        field: &'static str,
        std: f64,
    },
    TriangularOrdering {
        field: &'static str,
        low: f64,
        mode: f64,
        high: f64,
    },
    NonPositiveBetaShape {
        field: &'static str,
        alpha: f64,
        beta: f64,
    },
    ProbabilityOutOfRange {
        field: &'static str,
        probability: f64,
    },
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { field, min, max } => {
                write!(f, "{field}: uniform range inverted ({min} > {max})")
            }
            Self::InvertedIntRange { field, low, high } => {
                write!(f, "{field}: integer range inverted ({low} > {high})")
            }
            Self::NegativeStdDev { field, std } => {
                write!(f, "{field}: negative standard deviation {std}")
            }
            Self::TriangularOrdering {
                field,
                low,
                mode,
                high,
            } => write!(
                f,
                "{field}: triangular parameters must satisfy low <= mode <= high, got ({low}, {mode}, {high})"
            ),
            Self::NonPositiveBetaShape { field, alpha, beta } => {
                write!(f, "{field}: beta shape parameters must be > 0, got ({alpha}, {beta})")
            }
            Self::ProbabilityOutOfRange { field, probability } => {
                write!(f, "{field}: probability {probability} outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for SamplingError {}

/// Uniform f64 in [min, max).
pub fn uniform(rng: &mut Rng, field: &'static str, min: f64, max: f64) -> Result<f64, SamplingError> {
    if !(min <= max) {
        return Err(SamplingError::InvertedRange { field, min, max });
    }
    Ok(min + (max - min) * rng.next_f64())
}

/// Uniform integer in [low, high], bounds inclusive.
pub fn uniform_int(
    rng: &mut Rng,
    field: &'static str,
    low: i64,
    high: i64,
) -> Result<i64, SamplingError> {
    if low > high {
        return Err(SamplingError::InvertedIntRange { field, low, high });
    }
    let span = (high - low) as u64 + 1;
    Ok(low + (rng.next_u64() % span) as i64)
}

/// Gaussian draw via the Box-Muller transform.
pub fn normal(rng: &mut Rng, field: &'static str, mean: f64, std: f64) -> Result<f64, SamplingError> {
    if !(std >= 0.0) {
        return Err(SamplingError::NegativeStdDev { field, std });
    }
    Ok(mean + std * standard_normal(rng))
}

/// Triangular draw over (low, mode, high) by inverting the CDF.
pub fn triangular(
    rng: &mut Rng,
    field: &'static str,
    low: f64,
    mode: f64,
    high: f64,
) -> Result<f64, SamplingError> {
    if !(low <= mode && mode <= high) {
        return Err(SamplingError::TriangularOrdering {
            field,
            low,
            mode,
            high,
        });
    }
    let width = high - low;
    if width == 0.0 {
        return Ok(low);
    }
    let u = rng.next_f64();
    let cut = (mode - low) / width;
    let value = if u < cut {
        low + (u * width * (mode - low)).sqrt()
    } else {
        high - ((1.0 - u) * width * (high - mode)).sqrt()
    };
    Ok(value)
}

/// Beta draw as a ratio of two gamma variates.
pub fn beta(
    rng: &mut Rng,
    field: &'static str,
    alpha: f64,
    beta: f64,
) -> Result<f64, SamplingError> {
    if !(alpha > 0.0 && beta > 0.0) {
        return Err(SamplingError::NonPositiveBetaShape { field, alpha, beta });
    }
    let a = gamma(rng, alpha);
    let b = gamma(rng, beta);
    Ok(a / (a + b))
}

/// Bernoulli trial: true with probability `probability`.
pub fn bernoulli(
    rng: &mut Rng,
    field: &'static str,
    probability: f64,
) -> Result<bool, SamplingError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(SamplingError::ProbabilityOutOfRange { field, probability });
    }
    Ok(rng.next_f64() < probability)
}

/// Binomial draw: successes in `n` Bernoulli trials. The population sizes in
/// this simulator are hostage-scale, so the direct sum is the fast path.
pub fn binomial(
    rng: &mut Rng,
    field: &'static str,
    n: u32,
    probability: f64,
) -> Result<u32, SamplingError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(SamplingError::ProbabilityOutOfRange { field, probability });
    }
    let mut successes = 0;
    for _ in 0..n {
        if rng.next_f64() < probability {
            successes += 1;
        }
    }
    Ok(successes)
}

fn standard_normal(rng: &mut Rng) -> f64 {
    // Box-Muller; clamp u1 away from zero to keep ln() finite.
    let u1 = rng.next_f64().max(f64::EPSILON);
    let u2 = rng.next_f64();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Marsaglia-Tsang gamma variate, shape `alpha`, scale 1.
fn gamma(rng: &mut Rng, alpha: f64) -> f64 {
    if alpha < 1.0 {
        // Boost: gamma(a) = gamma(a + 1) * U^(1/a)
        let u = rng.next_f64().max(f64::EPSILON);
        return gamma(rng, alpha + 1.0) * u.powf(1.0 / alpha);
    }
    let d = alpha - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    loop {
        let x = standard_normal(rng);
        let v = (1.0 + c * x).powi(3);
        if v <= 0.0 {
            continue;
        }
        let u = rng.next_f64();
        if u < 1.0 - 0.0331 * x.powi(4) {
            return d * v;
        }
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stays_in_range_and_rejects_inversion() {
        let mut rng = Rng::new(3);
        for _ in 0..1000 {
            let value = uniform(&mut rng, "rescue_time", 60.0, 240.0).unwrap();
            assert!((60.0..240.0).contains(&value));
        }
        assert!(matches!(
            uniform(&mut rng, "rescue_time", 5.0, 1.0),
            Err(SamplingError::InvertedRange { field: "rescue_time", .. })
        ));
    }

    #[test]
    fn uniform_int_bounds_are_inclusive() {
        let mut rng = Rng::new(11);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..10_000 {
            let value = uniform_int(&mut rng, "raid_window", 60, 63).unwrap();
            assert!((60..=63).contains(&value));
            seen_low |= value == 60;
            seen_high |= value == 63;
        }
        assert!(seen_low && seen_high, "inclusive bounds never drawn");
    }

    #[test]
    fn uniform_int_degenerate_range_is_constant() {
        let mut rng = Rng::new(5);
        for _ in 0..100 {
            assert_eq!(uniform_int(&mut rng, "casualties", 0, 0).unwrap(), 0);
        }
    }

    #[test]
    fn normal_tracks_mean_and_rejects_negative_std() {
        let mut rng = Rng::new(17);
        let samples = 20_000;
        let total: f64 = (0..samples)
            .map(|_| normal(&mut rng, "negotiation_duration", 90.0, 15.0).unwrap())
            .sum();
        let mean = total / f64::from(samples);
        assert!((mean - 90.0).abs() < 1.0, "sample mean drifted: {mean}");
        assert!(matches!(
            normal(&mut rng, "negotiation_duration", 90.0, -1.0),
            Err(SamplingError::NegativeStdDev { .. })
        ));
    }

    #[test]
    fn triangular_stays_within_support() {
        let mut rng = Rng::new(23);
        for _ in 0..5000 {
            let value = triangular(&mut rng, "terrain_difficulty", 0.1, 0.5, 0.8).unwrap();
            assert!((0.1..=0.8).contains(&value), "outside support: {value}");
        }
        assert!(matches!(
            triangular(&mut rng, "terrain_difficulty", 0.5, 0.1, 0.8),
            Err(SamplingError::TriangularOrdering { .. })
        ));
    }

    #[test]
    fn triangular_mode_side_split_matches_cut_point() {
        // With mode centered, roughly half the mass falls on each side.
        let mut rng = Rng::new(29);
        let below = (0..20_000)
            .filter(|_| triangular(&mut rng, "x", 0.0, 0.5, 1.0).unwrap() < 0.5)
            .count();
        assert!((8500..11500).contains(&below), "lopsided split: {below}");
    }

    #[test]
    fn beta_stays_in_unit_interval_with_plausible_mean() {
        let mut rng = Rng::new(31);
        let samples = 20_000;
        let mut total = 0.0;
        for _ in 0..samples {
            let value = beta(&mut rng, "aggressiveness", 3.0, 5.0).unwrap();
            assert!((0.0..=1.0).contains(&value), "outside unit interval: {value}");
            total += value;
        }
        // Beta(3, 5) has mean 3/8.
        let mean = total / f64::from(samples);
        assert!((mean - 0.375).abs() < 0.01, "sample mean drifted: {mean}");
        assert!(matches!(
            beta(&mut rng, "aggressiveness", 0.0, 5.0),
            Err(SamplingError::NonPositiveBetaShape { .. })
        ));
    }

    #[test]
    fn binomial_is_bounded_and_exact_at_probability_extremes() {
        let mut rng = Rng::new(37);
        for _ in 0..1000 {
            let value = binomial(&mut rng, "hostages", 12, 0.7).unwrap();
            assert!(value <= 12);
        }
        assert_eq!(binomial(&mut rng, "hostages", 12, 1.0).unwrap(), 12);
        assert_eq!(binomial(&mut rng, "hostages", 12, 0.0).unwrap(), 0);
        assert!(matches!(
            binomial(&mut rng, "hostages", 12, 1.5),
            Err(SamplingError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn bernoulli_respects_certainty() {
        let mut rng = Rng::new(41);
        assert!(bernoulli(&mut rng, "negotiation", 1.0).unwrap());
        assert!(!bernoulli(&mut rng, "negotiation", 0.0).unwrap());
    }

    #[test]
    fn errors_name_the_offending_field() {
        let mut rng = Rng::new(43);
        let err = normal(&mut rng, "hostage_health", 75.0, -10.0).unwrap_err();
        assert!(err.to_string().contains("hostage_health"));
    }
}
