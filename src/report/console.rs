//! Console rendering of summary statistics.
//!
//! Reads the summary by named field only; the engine knows nothing about
//! formatting and this module knows nothing about sampling.

use std::fmt::Write as _;

use crate::stats::SummaryStatistics;

/// One line per metric, in briefing order: rescue outcome first, then the
/// hostage/hostage-taker tallies, then the environment draws.
pub fn render_summary(stats: &SummaryStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Average time taken for the rescue operation: {:.2} minutes",
        stats.avg_rescue_time
    );
    let _ = writeln!(out, "Success rate: {:.2}%", stats.success_rate * 100.0);
    let _ = writeln!(
        out,
        "Average number of hostages rescued: {:.2}",
        stats.avg_hostages_rescued
    );
    let _ = writeln!(
        out,
        "Average number of injured hostages: {:.2}",
        stats.avg_hostages_injured
    );
    let _ = writeln!(
        out,
        "Average number of hostage casualties: {:.2}",
        stats.avg_hostage_casualties
    );
    let _ = writeln!(
        out,
        "Average number of hostage-taker casualties: {:.2}",
        stats.avg_hostage_taker_casualties
    );
    let _ = writeln!(
        out,
        "Average number of injured hostage-takers: {:.2}",
        stats.avg_hostage_takers_injured
    );
    let _ = writeln!(
        out,
        "Average number of captured hostage-takers: {:.2}",
        stats.avg_hostage_takers_captured
    );
    let _ = writeln!(
        out,
        "Negotiation success rate: {:.2}%",
        stats.negotiation_success_rate * 100.0
    );
    let _ = writeln!(
        out,
        "Average negotiation duration: {:.2} minutes",
        stats.avg_negotiation_duration
    );
    let _ = writeln!(
        out,
        "Average number of entry points: {:.2}",
        stats.avg_entry_points
    );
    let _ = writeln!(
        out,
        "Average hostage health status: {:.2}%",
        stats.avg_hostage_health
    );
    let _ = writeln!(
        out,
        "Average hostage-taker strength: {:.2}",
        stats.avg_hostage_taker_strength
    );
    let _ = writeln!(
        out,
        "Average communication reliability: {:.2}%",
        stats.avg_communication_reliability * 100.0
    );
    let _ = writeln!(out, "Average raid time: {:.2} minutes", stats.avg_raid_time);
    out
}
