//! Learning-path recommendations from ranked fit results.
//!
//! Consumes the ordering [`pathwise_fit::compute_fit`] already
//! established: the top roles and their highest-impact missing skills
//! become candidate recommendations, each with a simulated score gain.
//! Pure function of its input; recomputed wholesale after every scoring
//! run.

use pathwise_fit::{FitResult, TOP_ROLES};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How many missing skills per role become candidates.
pub const TOP_MISSING_PER_ROLE: usize = 2;

/// Assumed fraction (in percent points per unit weight) of a skill's
/// theoretical max contribution realized when newly acquired. A fixed
/// heuristic, kept as the documented contract.
pub const ACQUISITION_FACTOR: f64 = 80.0;

/// Cap on returned recommendations.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// A suggested skill to learn next, with its projected payoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecommendation {
    pub skill_name: String,
    /// The role's fit score today.
    pub current_score: i32,
    /// Projected score after acquiring the skill, clamped to 100.
    pub new_score: i32,
    /// Projected gain. Computed before the clamp, so it can exceed
    /// `100 - current_score` for already-strong fits.
    pub improvement: i32,
    /// The role whose fit this skill improves most.
    pub role_name: String,
}

/// Derive learning recommendations from ranked fit results.
///
/// Considers the top [`TOP_ROLES`] results and each one's top
/// [`TOP_MISSING_PER_ROLE`] missing skills (both orderings come from the
/// scoring engine). Each candidate's projected score is
/// `min(100, fit_score + round(weight * ACQUISITION_FACTOR))`.
///
/// Candidates sharing a skill name are deduplicated keeping the highest
/// improvement (first seen wins ties), then sorted by descending
/// improvement and capped at [`MAX_RECOMMENDATIONS`].
#[must_use]
pub fn compute_recommendations(ranked: &[FitResult]) -> Vec<LearningRecommendation> {
    let mut candidates = Vec::new();

    for result in ranked.iter().take(TOP_ROLES) {
        for missing in result.missing_skills.iter().take(TOP_MISSING_PER_ROLE) {
            let projected =
                result.fit_score + (missing.weight * ACQUISITION_FACTOR).round() as i32;
            candidates.push(LearningRecommendation {
                skill_name: missing.skill_name.clone(),
                current_score: result.fit_score,
                new_score: projected.min(100),
                improvement: projected - result.fit_score,
                role_name: result.role.role_name.clone(),
            });
        }
    }

    let candidate_count = candidates.len();

    // Dedup by skill name, keeping the larger improvement. Replacement
    // requires a strictly greater improvement, so first seen wins ties.
    let mut unique: Vec<LearningRecommendation> = Vec::new();
    for candidate in candidates {
        match unique
            .iter_mut()
            .find(|existing| existing.skill_name == candidate.skill_name)
        {
            Some(existing) if existing.improvement < candidate.improvement => {
                *existing = candidate;
            }
            Some(_) => {}
            None => unique.push(candidate),
        }
    }

    // Stable sort, then cap.
    unique.sort_by(|a, b| b.improvement.cmp(&a.improvement));
    unique.truncate(MAX_RECOMMENDATIONS);

    debug!(
        candidates = candidate_count,
        returned = unique.len(),
        "computed learning recommendations"
    );

    unique
}

/// One-line summary of the top recommendation, for logs and CLI output.
#[must_use]
pub fn summarize(recommendations: &[LearningRecommendation]) -> String {
    match recommendations.first() {
        None => "No learning recommendations yet".to_string(),
        Some(top) => format!(
            "Learning {} increases {} fit: {}% -> {}% (+{}%)",
            top.skill_name, top.role_name, top.current_score, top.new_score, top.improvement
        ),
    }
}
