//! Text rendering for the fit report.

use pathwise_fit::{FitResult, ProjectRecommendation};
use pathwise_recommend::LearningRecommendation;
use std::fmt::Write as _;

/// Render the full text report: ranked roles, learning path, aggregated
/// gaps, and suggested projects.
#[must_use]
pub fn fit_report(
    results: &[FitResult],
    recommendations: &[LearningRecommendation],
    missing: &[String],
    projects: &[ProjectRecommendation],
) -> String {
    let mut out = String::new();

    if results.is_empty() {
        out.push_str("No roles in the catalog.\n");
        return out;
    }

    out.push_str("Job fit\n");
    for (rank, result) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "#{} {} - {}% ({} fit)",
            rank + 1,
            result.role.role_name,
            result.fit_score,
            result.band().label()
        );
        if !result.matched_skills.is_empty() {
            let matched: Vec<String> = result
                .matched_skills
                .iter()
                .map(|m| format!("{} ({}%)", m.skill_name, m.confidence))
                .collect();
            let _ = writeln!(out, "   matched: {}", matched.join(", "));
        }
        if !result.missing_skills.is_empty() {
            let gaps: Vec<String> = result
                .missing_skills
                .iter()
                .map(|m| format!("{} (impact {})", m.skill_name, m.impact))
                .collect();
            let _ = writeln!(out, "   missing: {}", gaps.join(", "));
        }
    }

    if !recommendations.is_empty() {
        out.push_str("\nLearning path\n");
        for (i, rec) in recommendations.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {}: {}% -> {}% (+{}%) for {}",
                i + 1,
                rec.skill_name,
                rec.current_score,
                rec.new_score,
                rec.improvement,
                rec.role_name
            );
        }
    }

    if !missing.is_empty() {
        let _ = writeln!(out, "\nMissing across top roles: {}", missing.join(", "));
    }

    if !projects.is_empty() {
        out.push_str("\nSuggested projects\n");
        for project in projects {
            let _ = writeln!(
                out,
                "- {} ({}, {}%): {}",
                project.project_name,
                project.role_name,
                project.fit_score,
                project.project_description
            );
        }
    }

    out
}
