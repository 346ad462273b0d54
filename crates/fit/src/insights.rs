//! Cross-role views derived from ranked fit results.

use crate::score::FitResult;
use crate::TOP_ROLES;
use pathwise_catalog::normalize_skill_name;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A project idea surfaced because its role ranked near the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecommendation {
    pub project_name: String,
    pub project_description: String,
    /// Which role suggested this project.
    pub role_name: String,
    /// That role's fit score at the time of ranking.
    pub fit_score: i32,
}

/// Union of missing-skill names across the top-ranked roles.
///
/// Takes the ranking produced by [`crate::compute_fit`], considers only
/// the first [`TOP_ROLES`] results, and returns each missing skill once,
/// in first-seen order. Dedup goes through [`normalize_skill_name`], the
/// same identity used for matching, so catalogs that spell one skill two
/// ways across roles still produce a single entry (the first spelling
/// seen wins).
#[must_use]
pub fn aggregate_missing_skills(results: &[FitResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for result in results.iter().take(TOP_ROLES) {
        for missing in &result.missing_skills {
            if seen.insert(normalize_skill_name(&missing.skill_name)) {
                names.push(missing.skill_name.clone());
            }
        }
    }

    names
}

/// Project ideas from the top-ranked roles, flattened in rank order.
///
/// Each idea is annotated with its role's name and fit score so the
/// consumer can present provenance without holding the full results.
#[must_use]
pub fn project_recommendations(results: &[FitResult]) -> Vec<ProjectRecommendation> {
    results
        .iter()
        .take(TOP_ROLES)
        .flat_map(|result| {
            result.role.projects.iter().map(|project| ProjectRecommendation {
                project_name: project.project_name.clone(),
                project_description: project.project_description.clone(),
                role_name: result.role.role_name.clone(),
                fit_score: result.fit_score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_fit;
    use pathwise_test_utils::{role, role_with_projects, skill};

    #[test]
    fn test_aggregate_missing_skills_dedups_across_roles() {
        let roles = vec![
            role("a", "A", &[("Docker", 0.5), ("Kubernetes", 0.5)]),
            role("b", "B", &[("docker", 0.9)]),
            role("c", "C", &[("Terraform", 0.4)]),
        ];
        let results = compute_fit(&[], &roles);

        let missing = aggregate_missing_skills(&results);
        // "docker" collapses into the first spelling seen.
        assert_eq!(missing, vec!["Docker", "Kubernetes", "Terraform"]);
    }

    #[test]
    fn test_aggregate_missing_skills_only_top_three_roles() {
        let roles = vec![
            role("a", "A", &[("One", 0.9)]),
            role("b", "B", &[("Two", 0.8)]),
            role("c", "C", &[("Three", 0.7)]),
            role("d", "D", &[("Four", 0.6)]),
        ];
        let results = compute_fit(&[], &roles);

        // All score 0, so catalog order holds; the fourth role is ignored.
        let missing = aggregate_missing_skills(&results);
        assert_eq!(missing, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_aggregate_missing_skills_empty_results() {
        assert!(aggregate_missing_skills(&[]).is_empty());
    }

    #[test]
    fn test_project_recommendations_follow_rank_order() {
        let skills = vec![skill("Rust", 100)];
        let roles = vec![
            role_with_projects(
                "low",
                "Low",
                &[("Rust", 0.2)],
                &[("Low project", "For the low role")],
            ),
            role_with_projects(
                "high",
                "High",
                &[("Rust", 0.9)],
                &[
                    ("High project A", "First"),
                    ("High project B", "Second"),
                ],
            ),
        ];

        let results = compute_fit(&skills, &roles);
        let projects = project_recommendations(&results);

        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].project_name, "High project A");
        assert_eq!(projects[0].role_name, "High");
        assert_eq!(projects[0].fit_score, 90);
        assert_eq!(projects[2].project_name, "Low project");
    }

    #[test]
    fn test_project_recommendations_cap_at_top_roles() {
        let roles: Vec<_> = (0..5)
            .map(|i| {
                let project_name = format!("Project {i}");
                role_with_projects(
                    &format!("r{i}"),
                    &format!("Role {i}"),
                    &[("X", 0.5)],
                    &[(project_name.as_str(), "desc")],
                )
            })
            .collect();

        let results = compute_fit(&[], &roles);
        let projects = project_recommendations(&results);
        assert_eq!(projects.len(), 3);
    }

    #[test]
    fn test_project_recommendations_empty_results() {
        assert!(project_recommendations(&[]).is_empty());
    }
}
