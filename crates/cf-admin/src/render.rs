//! Plain-text renderings of the reports; `--json` bypasses these.

use cf_core::{BurndownPoint, RoadmapDependency, SprintStats};
use cf_provision::{ProvisionReport, ResourceKind};

pub fn provision_report(report: &ProvisionReport) -> String {
    if report.tallies.is_empty() {
        return "Nothing to provision\n".to_string();
    }
    report
        .tallies
        .iter()
        .map(|(kind, tally)| {
            format!(
                "{:<12} {:>4} created {:>4} existing\n",
                plural(*kind),
                tally.created,
                tally.existing
            )
        })
        .collect()
}

fn plural(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Database => "databases",
        ResourceKind::Collection => "collections",
        ResourceKind::Attribute => "attributes",
        ResourceKind::Index => "indexes",
        ResourceKind::Bucket => "buckets",
    }
}

pub fn sprint_stats(stats: &SprintStats) -> String {
    format!(
        "Tasks:     {}/{} completed ({:.1}%)\n\
         Points:    {}/{} completed, {} remaining\n\
         Days:      {} of {} elapsed, {} remaining\n\
         Velocity:  {:.2} points/day\n",
        stats.completed_tasks,
        stats.total_tasks,
        stats.completion_rate,
        stats.completed_points,
        stats.total_points,
        stats.remaining_points,
        stats.days_elapsed,
        stats.total_days,
        stats.days_remaining,
        stats.velocity
    )
}

pub fn burndown(points: &[BurndownPoint]) -> String {
    let mut out = String::from("date        ideal   actual\n");
    for point in points {
        let actual = point
            .actual
            .map(|a| format!("{a:>6.1}"))
            .unwrap_or_else(|| format!("{:>6}", "-"));
        out.push_str(&format!("{}  {:>6.1}   {}\n", point.date, point.ideal, actual));
    }
    out
}

pub fn roadmap_dependencies(edges: &[RoadmapDependency]) -> String {
    if edges.is_empty() {
        return "No dependencies between roadmap items\n".to_string();
    }
    edges
        .iter()
        .map(|edge| {
            format!(
                "{} -> {} ({}, {} link{})\n",
                edge.from,
                edge.to,
                edge.dependency_type,
                edge.link_count,
                if edge.link_count == 1 { "" } else { "s" }
            )
        })
        .collect()
}
