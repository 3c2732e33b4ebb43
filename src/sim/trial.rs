//! One simulated raid: every sampled and derived quantity for a single trial.

use serde::Serialize;

/// Immutable result of one trial. Records are independent across trials and
/// safe to reorder; `trial` ties a record back to its index in the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialRecord {
    pub trial: usize,

    /// Raid launch time in minutes, integer within the raid window.
    pub raid_time: u32,
    /// Rescue duration in minutes before terrain/skill/layout adjustment.
    pub base_rescue_time: f64,
    /// Rescue duration after all adjustment factors.
    pub rescue_time: f64,

    pub hostages_rescued: u32,
    pub hostages_injured: u32,
    pub hostages_uninjured: u32,
    pub hostage_casualties: u32,
    pub hostage_taker_casualties: u32,
    pub hostage_takers_injured: u32,
    pub hostage_takers_captured: u32,

    /// Per-trial scalars, drawn once and reused by the derived formulas.
    pub aggressiveness: f64,
    pub negotiation_success_prob: f64,
    pub terrain_difficulty: f64,
    pub rescue_team_skill: f64,

    pub negotiation_outcome: bool,
    pub negotiation_duration: f64,
    pub entry_points: u32,
    pub hostage_health: f64,
    pub hostage_taker_strength: f64,
    pub communication_reliability: f64,
    pub num_rooms: u32,
    pub structure_entry_points: u32,
}

/// Field names accepted by [TrialRecord::numeric_field], in record order.
/// Chart and report consumers iterate this instead of hard-coding columns.
pub const NUMERIC_FIELDS: &[&str] = &[
    "raid_time",
    "base_rescue_time",
    "rescue_time",
    "hostages_rescued",
    "hostages_injured",
    "hostages_uninjured",
    "hostage_casualties",
    "hostage_taker_casualties",
    "hostage_takers_injured",
    "hostage_takers_captured",
    "aggressiveness",
    "negotiation_success_prob",
    "terrain_difficulty",
    "rescue_team_skill",
    "negotiation_outcome",
    "negotiation_duration",
    "entry_points",
    "hostage_health",
    "hostage_taker_strength",
    "communication_reliability",
    "num_rooms",
    "structure_entry_points",
];

impl TrialRecord {
    /// Read one field by name as f64 (the binary negotiation outcome reads as
    /// 0/1). Returns None for unknown names so consumers can probe.
    pub fn numeric_field(&self, name: &str) -> Option<f64> {
        let value = match name {
            "raid_time" => f64::from(self.raid_time),
            "base_rescue_time" => self.base_rescue_time,
            "rescue_time" => self.rescue_time,
            "hostages_rescued" => f64::from(self.hostages_rescued),
            "hostages_injured" => f64::from(self.hostages_injured),
            "hostages_uninjured" => f64::from(self.hostages_uninjured),
            "hostage_casualties" => f64::from(self.hostage_casualties),
            "hostage_taker_casualties" => f64::from(self.hostage_taker_casualties),
            "hostage_takers_injured" => f64::from(self.hostage_takers_injured),
            "hostage_takers_captured" => f64::from(self.hostage_takers_captured),
            "aggressiveness" => self.aggressiveness,
            "negotiation_success_prob" => self.negotiation_success_prob,
            "terrain_difficulty" => self.terrain_difficulty,
            "rescue_team_skill" => self.rescue_team_skill,
            "negotiation_outcome" => f64::from(u8::from(self.negotiation_outcome)),
            "negotiation_duration" => self.negotiation_duration,
            "entry_points" => f64::from(self.entry_points),
            "hostage_health" => self.hostage_health,
            "hostage_taker_strength" => self.hostage_taker_strength,
            "communication_reliability" => self.communication_reliability,
            "num_rooms" => f64::from(self.num_rooms),
            "structure_entry_points" => f64::from(self.structure_entry_points),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioParams;
    use crate::sim::rng::Rng;
    use crate::sim::sampler::sample_trial;

    #[test]
    fn every_listed_field_resolves() {
        let params = ScenarioParams::default();
        let mut rng = Rng::new(1);
        let record = sample_trial(&params, 0, &mut rng).unwrap();
        for name in NUMERIC_FIELDS {
            assert!(
                record.numeric_field(name).is_some(),
                "unresolvable field {name}"
            );
        }
        assert!(record.numeric_field("no_such_field").is_none());
    }
}
