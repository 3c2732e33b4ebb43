//! Scenario configuration: every distributional and structural input for a run.
//!
//! The bundle is built once, validated, and then only shared read-only; the
//! engine never mutates it and never reads configuration from anywhere else.
//! Defaults reproduce the reference scenario (12 hostages, 6 hostage-takers,
//! 1000 trials).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean/standard-deviation pair for a Gaussian-shaped input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianParams {
    pub mean: f64,
    pub std: f64,
}

/// (low, mode, high) triple for a triangular-shaped input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularParams {
    pub low: f64,
    pub mode: f64,
    pub high: f64,
}

/// Shape pair for a beta-shaped input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaParams {
    pub alpha: f64,
    pub beta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub num_simulations: usize,
    pub num_hostages: u32,
    pub num_hostage_takers: u32,

    /// Rescue-time window in minutes before terrain/skill/layout adjustment.
    pub rescue_time_min: f64,
    pub rescue_time_max: f64,

    /// Raid launch window in minutes from scenario start, bounds inclusive.
    pub raid_window_start: u32,
    pub raid_window_end: u32,

    pub hostage_behavior_prob: f64,
    pub hostage_injury_prob: f64,
    pub hostage_taker_injury_prob: f64,
    pub hostage_taker_capture_prob: f64,

    pub hostage_taker_aggressiveness: BetaParams,
    pub negotiation_success: TriangularParams,
    pub terrain_difficulty: TriangularParams,
    pub rescue_team_skill: TriangularParams,

    pub negotiation_duration: GaussianParams,
    pub entry_points: GaussianParams,
    pub hostage_health: GaussianParams,
    pub hostage_taker_strength: GaussianParams,
    pub communication_reliability: GaussianParams,

    /// Building layout: sampled as integers uniform within mean +/- std.
    pub num_rooms: GaussianParams,
    pub structure_entry_points: GaussianParams,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_simulations: 1000,
            num_hostages: 12,
            num_hostage_takers: 6,
            rescue_time_min: 60.0,
            rescue_time_max: 240.0,
            raid_window_start: 60,
            raid_window_end: 120,
            hostage_behavior_prob: 0.7,
            hostage_injury_prob: 0.2,
            hostage_taker_injury_prob: 0.3,
            hostage_taker_capture_prob: 0.4,
            hostage_taker_aggressiveness: BetaParams {
                alpha: 3.0,
                beta: 5.0,
            },
            negotiation_success: TriangularParams {
                low: 0.1,
                mode: 0.3,
                high: 0.5,
            },
            terrain_difficulty: TriangularParams {
                low: 0.1,
                mode: 0.5,
                high: 0.8,
            },
            rescue_team_skill: TriangularParams {
                low: 0.3,
                mode: 0.6,
                high: 0.9,
            },
            negotiation_duration: GaussianParams {
                mean: 90.0,
                std: 15.0,
            },
            entry_points: GaussianParams {
                mean: 1.5,
                std: 0.5,
            },
            hostage_health: GaussianParams {
                mean: 75.0,
                std: 10.0,
            },
            hostage_taker_strength: GaussianParams {
                mean: 0.5,
                std: 0.2,
            },
            communication_reliability: GaussianParams {
                mean: 0.8,
                std: 0.1,
            },
            num_rooms: GaussianParams {
                mean: 6.0,
                std: 2.0,
            },
            structure_entry_points: GaussianParams {
                mean: 2.0,
                std: 1.0,
            },
        }
    }
}

/// A scenario input that cannot describe a runnable simulation.
/// Raised at construction, before any trial runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NonPositiveCount {
        field: &'static str,
        value: usize,
    },
    ProbabilityOutOfRange {
        field: &'static str,
        value: f64,
    },
    InvertedBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
    TriangularOrdering {
        field: &'static str,
        low: f64,
        mode: f64,
        high: f64,
    },
    NonPositiveShape {
        field: &'static str,
        alpha: f64,
        beta: f64,
    },
    NegativeStdDev {
        field: &'static str,
        std: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCount { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::ProbabilityOutOfRange { field, value } => {
                write!(f, "{field} must lie in [0, 1], got {value}")
            }
            Self::InvertedBounds { field, min, max } => {
                write!(f, "{field} bounds inverted: {min} > {max}")
            }
            Self::TriangularOrdering {
                field,
                low,
                mode,
                high,
            } => write!(
                f,
                "{field} must satisfy low <= mode <= high, got ({low}, {mode}, {high})"
            ),
            Self::NonPositiveShape { field, alpha, beta } => {
                write!(f, "{field} shape parameters must be > 0, got ({alpha}, {beta})")
            }
            Self::NegativeStdDev { field, std } => {
                write!(f, "{field} standard deviation must be >= 0, got {std}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ScenarioParams {
    /// Blessed construction path: returns the bundle only if every input can
    /// describe a runnable simulation.
    pub fn validated(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_count("num_simulations", self.num_simulations)?;
        check_count("num_hostages", self.num_hostages as usize)?;
        check_count("num_hostage_takers", self.num_hostage_takers as usize)?;

        check_bounds("rescue_time", self.rescue_time_min, self.rescue_time_max)?;
        check_bounds(
            "raid_window",
            f64::from(self.raid_window_start),
            f64::from(self.raid_window_end),
        )?;

        check_probability("hostage_behavior_prob", self.hostage_behavior_prob)?;
        check_probability("hostage_injury_prob", self.hostage_injury_prob)?;
        check_probability("hostage_taker_injury_prob", self.hostage_taker_injury_prob)?;
        check_probability(
            "hostage_taker_capture_prob",
            self.hostage_taker_capture_prob,
        )?;

        check_beta(
            "hostage_taker_aggressiveness",
            self.hostage_taker_aggressiveness,
        )?;
        check_triangular("negotiation_success", self.negotiation_success)?;
        check_triangular("terrain_difficulty", self.terrain_difficulty)?;
        check_triangular("rescue_team_skill", self.rescue_team_skill)?;

        check_gaussian("negotiation_duration", self.negotiation_duration)?;
        check_gaussian("entry_points", self.entry_points)?;
        check_gaussian("hostage_health", self.hostage_health)?;
        check_gaussian("hostage_taker_strength", self.hostage_taker_strength)?;
        check_gaussian(
            "communication_reliability",
            self.communication_reliability,
        )?;
        check_gaussian("num_rooms", self.num_rooms)?;
        check_gaussian("structure_entry_points", self.structure_entry_points)?;

        Ok(())
    }
}

fn check_count(field: &'static str, value: usize) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::NonPositiveCount { field, value });
    }
    Ok(())
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::ProbabilityOutOfRange { field, value });
    }
    Ok(())
}

fn check_bounds(field: &'static str, min: f64, max: f64) -> Result<(), ValidationError> {
    if !(min <= max) {
        return Err(ValidationError::InvertedBounds { field, min, max });
    }
    Ok(())
}

fn check_triangular(field: &'static str, t: TriangularParams) -> Result<(), ValidationError> {
    if !(t.low <= t.mode && t.mode <= t.high) {
        return Err(ValidationError::TriangularOrdering {
            field,
            low: t.low,
            mode: t.mode,
            high: t.high,
        });
    }
    Ok(())
}

fn check_beta(field: &'static str, b: BetaParams) -> Result<(), ValidationError> {
    if !(b.alpha > 0.0 && b.beta > 0.0) {
        return Err(ValidationError::NonPositiveShape {
            field,
            alpha: b.alpha,
            beta: b.beta,
        });
    }
    Ok(())
}

fn check_gaussian(field: &'static str, g: GaussianParams) -> Result<(), ValidationError> {
    if !(g.std >= 0.0) {
        return Err(ValidationError::NegativeStdDev { field, std: g.std });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_validates() {
        assert!(ScenarioParams::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_injury_probability_is_rejected() {
        let params = ScenarioParams {
            hostage_injury_prob: 1.5,
            ..ScenarioParams::default()
        };
        let err = params.validated().unwrap_err();
        assert_eq!(
            err,
            ValidationError::ProbabilityOutOfRange {
                field: "hostage_injury_prob",
                value: 1.5,
            }
        );
    }

    #[test]
    fn zero_trial_count_is_rejected() {
        let params = ScenarioParams {
            num_simulations: 0,
            ..ScenarioParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NonPositiveCount {
                field: "num_simulations",
                ..
            })
        ));
    }

    #[test]
    fn inverted_rescue_window_is_rejected() {
        let params = ScenarioParams {
            rescue_time_min: 240.0,
            rescue_time_max: 60.0,
            ..ScenarioParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::InvertedBounds { field: "rescue_time", .. })
        ));
    }

    #[test]
    fn triangular_mode_outside_bounds_is_rejected() {
        let params = ScenarioParams {
            terrain_difficulty: TriangularParams {
                low: 0.1,
                mode: 0.9,
                high: 0.8,
            },
            ..ScenarioParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::TriangularOrdering {
                field: "terrain_difficulty",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_beta_shape_is_rejected() {
        let params = ScenarioParams {
            hostage_taker_aggressiveness: BetaParams {
                alpha: -3.0,
                beta: 5.0,
            },
            ..ScenarioParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NonPositiveShape { .. })
        ));
    }

    #[test]
    fn negative_std_is_rejected() {
        let params = ScenarioParams {
            hostage_health: GaussianParams {
                mean: 75.0,
                std: -10.0,
            },
            ..ScenarioParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NegativeStdDev {
                field: "hostage_health",
                ..
            })
        ));
    }

    #[test]
    fn scenario_round_trips_through_json() {
        let params = ScenarioParams::default();
        let payload = serde_json::to_string(&params).unwrap();
        let restored: ScenarioParams = serde_json::from_str(&payload).unwrap();
        assert_eq!(params, restored);
    }

    #[test]
    fn partial_scenario_json_fills_defaults() {
        let restored: ScenarioParams =
            serde_json::from_str(r#"{"num_hostages": 20, "hostage_behavior_prob": 0.9}"#).unwrap();
        assert_eq!(restored.num_hostages, 20);
        assert_eq!(restored.hostage_behavior_prob, 0.9);
        assert_eq!(restored.num_hostage_takers, 6);
    }
}
