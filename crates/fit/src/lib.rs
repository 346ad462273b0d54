//! Job-fit scoring over a user skill profile and a role catalog.
//!
//! This crate provides:
//! - [`compute_fit`], the weighted scoring pass producing one ranked
//!   [`FitResult`] per catalog role
//! - Gap aggregation and project suggestions derived from the ranked
//!   results
//!
//! Everything here is a pure function over its inputs: no I/O, no shared
//! state, safe to call concurrently with independent snapshots. Callers
//! re-invoke [`compute_fit`] whenever the skill set or catalog changes and
//! replace previous results wholesale.

pub mod insights;
pub mod score;

pub use insights::{aggregate_missing_skills, project_recommendations, ProjectRecommendation};
pub use score::{compute_fit, FitBand, FitResult, MatchedSkill, MissingSkill};

/// How many top-ranked roles feed gap aggregation and recommendations.
pub const TOP_ROLES: usize = 3;
