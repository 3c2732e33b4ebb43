//! Summary statistics over a completed run.
//!
//! A read-only fold over the record sequence: arithmetic means for every
//! numeric field, plus the two rate metrics. Recomputed on demand, never
//! cached inside the engine.

use std::fmt;

use serde::Serialize;

use crate::scenario::ScenarioParams;
use crate::sim::trial::TrialRecord;

/// Share of the hostage count that must be rescued for a trial to count as a
/// success.
pub const SUCCESS_THRESHOLD: f64 = 0.8;

/// Named-field summary so report consumers never depend on field ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub trials: usize,

    pub avg_raid_time: f64,
    pub avg_base_rescue_time: f64,
    pub avg_rescue_time: f64,
    pub avg_hostages_rescued: f64,
    pub avg_hostages_injured: f64,
    pub avg_hostages_uninjured: f64,
    pub avg_hostage_casualties: f64,
    pub avg_hostage_taker_casualties: f64,
    pub avg_hostage_takers_injured: f64,
    pub avg_hostage_takers_captured: f64,
    pub avg_aggressiveness: f64,
    pub avg_negotiation_success_prob: f64,
    pub avg_terrain_difficulty: f64,
    pub avg_rescue_team_skill: f64,
    pub avg_negotiation_duration: f64,
    pub avg_entry_points: f64,
    pub avg_hostage_health: f64,
    pub avg_hostage_taker_strength: f64,
    pub avg_communication_reliability: f64,
    pub avg_num_rooms: f64,
    pub avg_structure_entry_points: f64,

    /// Fraction of trials rescuing at least [SUCCESS_THRESHOLD] of the
    /// hostage count.
    pub success_rate: f64,
    /// Mean of the binary negotiation outcome.
    pub negotiation_success_rate: f64,
}

/// Aggregation was asked for a mean over zero trials — a caller bug, kept
/// distinct from silently returning zero or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot summarize an empty trial-record sequence")
    }
}

impl std::error::Error for EmptyInputError {}

/// Fold the record sequence into summary statistics. Pure: records are only
/// read, and the result is a fresh value.
pub fn summarize(
    params: &ScenarioParams,
    records: &[TrialRecord],
) -> Result<SummaryStatistics, EmptyInputError> {
    if records.is_empty() {
        return Err(EmptyInputError);
    }

    let count = records.len() as f64;
    let mean = |extract: fn(&TrialRecord) -> f64| -> f64 {
        records.iter().map(extract).sum::<f64>() / count
    };

    let threshold = SUCCESS_THRESHOLD * f64::from(params.num_hostages);
    let successes = records
        .iter()
        .filter(|record| f64::from(record.hostages_rescued) >= threshold)
        .count();

    Ok(SummaryStatistics {
        trials: records.len(),
        avg_raid_time: mean(|r| f64::from(r.raid_time)),
        avg_base_rescue_time: mean(|r| r.base_rescue_time),
        avg_rescue_time: mean(|r| r.rescue_time),
        avg_hostages_rescued: mean(|r| f64::from(r.hostages_rescued)),
        avg_hostages_injured: mean(|r| f64::from(r.hostages_injured)),
        avg_hostages_uninjured: mean(|r| f64::from(r.hostages_uninjured)),
        avg_hostage_casualties: mean(|r| f64::from(r.hostage_casualties)),
        avg_hostage_taker_casualties: mean(|r| f64::from(r.hostage_taker_casualties)),
        avg_hostage_takers_injured: mean(|r| f64::from(r.hostage_takers_injured)),
        avg_hostage_takers_captured: mean(|r| f64::from(r.hostage_takers_captured)),
        avg_aggressiveness: mean(|r| r.aggressiveness),
        avg_negotiation_success_prob: mean(|r| r.negotiation_success_prob),
        avg_terrain_difficulty: mean(|r| r.terrain_difficulty),
        avg_rescue_team_skill: mean(|r| r.rescue_team_skill),
        avg_negotiation_duration: mean(|r| r.negotiation_duration),
        avg_entry_points: mean(|r| f64::from(r.entry_points)),
        avg_hostage_health: mean(|r| r.hostage_health),
        avg_hostage_taker_strength: mean(|r| r.hostage_taker_strength),
        avg_communication_reliability: mean(|r| r.communication_reliability),
        avg_num_rooms: mean(|r| f64::from(r.num_rooms)),
        avg_structure_entry_points: mean(|r| f64::from(r.structure_entry_points)),
        success_rate: successes as f64 / count,
        negotiation_success_rate: mean(|r| f64::from(u8::from(r.negotiation_outcome))),
    })
}
