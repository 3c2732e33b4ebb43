//! Draws one complete trial from the scenario distributions.
//!
//! Draw order is a contract, not an implementation detail: injured hostages
//! are binomial over the hostages already rescued this trial, casualties are
//! bounded by the uninjured remainder, and the adjusted rescue time consumes
//! the terrain/skill/layout draws of the same trial.

use crate::scenario::ScenarioParams;
use crate::sim::distributions::{self, SamplingError};
use crate::sim::rng::Rng;
use crate::sim::trial::TrialRecord;

/// Rescue duration after terrain, team skill, and building layout factors.
pub fn adjusted_rescue_time(
    base_rescue_time: f64,
    terrain_difficulty: f64,
    rescue_team_skill: f64,
    num_rooms: u32,
    structure_entry_points: u32,
) -> f64 {
    base_rescue_time
        * (1.0 + terrain_difficulty)
        * (1.0 - rescue_team_skill)
        * (1.0 + 0.05 * f64::from(num_rooms))
        * (1.0 + 0.1 * f64::from(structure_entry_points))
}

/// Sample a full, internally consistent record for one trial.
///
/// Pure apart from advancing `rng`; a seeded source reproduces the record
/// exactly. Parameters are assumed pre-validated, so an error here means the
/// random source was handed an impossible distribution input.
pub fn sample_trial(
    params: &ScenarioParams,
    trial: usize,
    rng: &mut Rng,
) -> Result<TrialRecord, SamplingError> {
    // Trial-level scalars, reused by several formulas below.
    let aggressiveness = distributions::beta(
        rng,
        "hostage_taker_aggressiveness",
        params.hostage_taker_aggressiveness.alpha,
        params.hostage_taker_aggressiveness.beta,
    )?;
    let negotiation_success_prob = distributions::triangular(
        rng,
        "negotiation_success",
        params.negotiation_success.low,
        params.negotiation_success.mode,
        params.negotiation_success.high,
    )?;
    let terrain_difficulty = distributions::triangular(
        rng,
        "terrain_difficulty",
        params.terrain_difficulty.low,
        params.terrain_difficulty.mode,
        params.terrain_difficulty.high,
    )?;
    let rescue_team_skill = distributions::triangular(
        rng,
        "rescue_team_skill",
        params.rescue_team_skill.low,
        params.rescue_team_skill.mode,
        params.rescue_team_skill.high,
    )?;

    let raid_time = distributions::uniform_int(
        rng,
        "raid_window",
        i64::from(params.raid_window_start),
        i64::from(params.raid_window_end),
    )? as u32;
    let base_rescue_time = distributions::uniform(
        rng,
        "rescue_time",
        params.rescue_time_min,
        params.rescue_time_max,
    )?;

    // Hostage chain: each count is drawn over the population left by the
    // previous draw, never over the scenario total.
    let hostages_rescued = distributions::binomial(
        rng,
        "hostage_behavior_prob",
        params.num_hostages,
        params.hostage_behavior_prob,
    )?;
    let hostages_injured = distributions::binomial(
        rng,
        "hostage_injury_prob",
        hostages_rescued,
        params.hostage_injury_prob,
    )?;
    let hostages_uninjured = hostages_rescued - hostages_injured;
    let casualty_cap = (0.3 * f64::from(hostages_uninjured)).floor() as i64;
    let hostage_casualties =
        distributions::uniform_int(rng, "hostage_casualties", 0, casualty_cap)? as u32;

    let hostage_taker_casualties = distributions::binomial(
        rng,
        "hostage_taker_aggressiveness",
        params.num_hostage_takers,
        1.0 - aggressiveness,
    )?;
    let hostage_takers_injured = distributions::binomial(
        rng,
        "hostage_taker_injury_prob",
        params.num_hostage_takers,
        params.hostage_taker_injury_prob,
    )?;
    let hostage_takers_captured = distributions::binomial(
        rng,
        "hostage_taker_capture_prob",
        params.num_hostage_takers,
        params.hostage_taker_capture_prob,
    )?;

    let negotiation_outcome =
        distributions::bernoulli(rng, "negotiation_success", negotiation_success_prob)?;
    let negotiation_duration = distributions::normal(
        rng,
        "negotiation_duration",
        params.negotiation_duration.mean,
        params.negotiation_duration.std,
    )?
    .max(0.0);
    let entry_points = (distributions::normal(
        rng,
        "entry_points",
        params.entry_points.mean,
        params.entry_points.std,
    )?
    .trunc() as i64)
        .max(1) as u32;
    let hostage_health = distributions::normal(
        rng,
        "hostage_health",
        params.hostage_health.mean,
        params.hostage_health.std,
    )?
    .clamp(0.0, 100.0);
    let hostage_taker_strength = distributions::normal(
        rng,
        "hostage_taker_strength",
        params.hostage_taker_strength.mean,
        params.hostage_taker_strength.std,
    )?
    .clamp(0.0, 1.0);
    let communication_reliability = distributions::normal(
        rng,
        "communication_reliability",
        params.communication_reliability.mean,
        params.communication_reliability.std,
    )?
    .clamp(0.0, 1.0);

    let num_rooms = layout_count(rng, "num_rooms", params.num_rooms)?;
    let structure_entry_points =
        layout_count(rng, "structure_entry_points", params.structure_entry_points)?;

    let rescue_time = adjusted_rescue_time(
        base_rescue_time,
        terrain_difficulty,
        rescue_team_skill,
        num_rooms,
        structure_entry_points,
    );

    Ok(TrialRecord {
        trial,
        raid_time,
        base_rescue_time,
        rescue_time,
        hostages_rescued,
        hostages_injured,
        hostages_uninjured,
        hostage_casualties,
        hostage_taker_casualties,
        hostage_takers_injured,
        hostage_takers_captured,
        aggressiveness,
        negotiation_success_prob,
        terrain_difficulty,
        rescue_team_skill,
        negotiation_outcome,
        negotiation_duration,
        entry_points,
        hostage_health,
        hostage_taker_strength,
        communication_reliability,
        num_rooms,
        structure_entry_points,
    })
}

/// Integer layout count uniform within mean +/- std, floored at 1.
fn layout_count(
    rng: &mut Rng,
    field: &'static str,
    shape: crate::scenario::GaussianParams,
) -> Result<u32, SamplingError> {
    let low = ((shape.mean - shape.std).floor()).max(1.0) as i64;
    let high = ((shape.mean + shape.std).floor() as i64).max(low);
    Ok(distributions::uniform_int(rng, field, low, high)? as u32)
}
