//! The fit-scoring pass.

use pathwise_catalog::{normalize_skill_name, JobRole, Skill};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// A role requirement the user already covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSkill {
    /// Requirement name as spelled in the catalog.
    pub skill_name: String,
    /// The user's raw confidence for the matching skill, 0-100.
    pub confidence: u8,
    /// The role's weight for this requirement.
    pub weight: f64,
}

/// A role requirement the user does not cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill_name: String,
    pub weight: f64,
    /// Heuristic priority: `weight * 100`, a potential-score-gain proxy.
    pub impact: f64,
}

/// Coarse classification of a fit score, matching the display thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitBand {
    /// Score >= 70.
    Strong,
    /// Score >= 40.
    Moderate,
    /// Everything below.
    Weak,
}

impl FitBand {
    /// Classify a fit score.
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        if score >= 70 {
            Self::Strong
        } else if score >= 40 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Short label for display.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

/// The scored outcome for one role.
///
/// Superseded, never mutated: each scoring run produces a fresh set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// The catalog role this result describes.
    pub role: JobRole,
    /// Rounded percentage-like score. Can exceed 100 when a role's
    /// weights sum past 1; that is the catalog's problem, not ours.
    pub fit_score: i32,
    /// Requirements covered by the profile, in catalog order.
    pub matched_skills: Vec<MatchedSkill>,
    /// Uncovered requirements, sorted by descending impact.
    pub missing_skills: Vec<MissingSkill>,
}

impl FitResult {
    /// Classify this result's score.
    #[must_use]
    pub fn band(&self) -> FitBand {
        FitBand::from_score(self.fit_score)
    }
}

/// Score every catalog role against the user's skills.
///
/// For each requirement matched by a profile skill (case-insensitive
/// name), the contribution `(confidence / 100) * weight` accumulates into
/// the role's score, which is then scaled to a rounded percentage.
/// Unmatched requirements become [`MissingSkill`] entries with
/// `impact = weight * 100`.
///
/// Results come back sorted by descending score; roles with equal scores
/// keep their catalog order. Empty skills or an empty catalog produce
/// all-missing or empty output respectively, never an error.
#[must_use]
pub fn compute_fit(skills: &[Skill], roles: &[JobRole]) -> Vec<FitResult> {
    // Normalized-name index built once per call, so matching stays
    // O(skills + requirements).
    let confidence_by_name: HashMap<String, u8> = skills
        .iter()
        .map(|s| (normalize_skill_name(&s.name), s.confidence))
        .collect();

    let mut results: Vec<FitResult> = roles
        .iter()
        .map(|role| score_role(role, &confidence_by_name))
        .collect();

    // Stable sort: catalog order breaks score ties.
    results.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));

    debug!(
        roles = results.len(),
        skills = skills.len(),
        top_score = results.first().map(|r| r.fit_score),
        "computed fit scores"
    );

    results
}

fn score_role(role: &JobRole, confidence_by_name: &HashMap<String, u8>) -> FitResult {
    let mut accumulated = 0.0_f64;
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for requirement in &role.skills {
        match confidence_by_name.get(&normalize_skill_name(&requirement.skill_name)) {
            Some(&confidence) => {
                accumulated += f64::from(confidence) / 100.0 * requirement.weight;
                matched_skills.push(MatchedSkill {
                    skill_name: requirement.skill_name.clone(),
                    confidence,
                    weight: requirement.weight,
                });
            }
            None => {
                missing_skills.push(MissingSkill {
                    skill_name: requirement.skill_name.clone(),
                    weight: requirement.weight,
                    impact: requirement.weight * 100.0,
                });
            }
        }
    }

    // Stable sort keeps catalog order for equal impacts.
    missing_skills.sort_by(|a, b| {
        b.impact
            .partial_cmp(&a.impact)
            .unwrap_or(Ordering::Equal)
    });

    let fit_score = (accumulated * 100.0).round() as i32;

    debug!(
        role = %role.role_name,
        fit_score,
        matched = matched_skills.len(),
        missing = missing_skills.len(),
        "scored role"
    );

    FitResult {
        role: role.clone(),
        fit_score,
        matched_skills,
        missing_skills,
    }
}
