//! JSON ingestion at the data-provider boundary.
//!
//! The provider hands us skills, the role catalog, and mind-map trees as
//! JSON. Unexpected shapes are rejected here so the engines can trust
//! their inputs. Blank or duplicate skill entries are normalized away
//! rather than rejected, matching how saved profiles are re-loaded.

use crate::model::{JobRole, MindMapNode, Skill};
use crate::profile::SkillProfile;
use thiserror::Error;

/// Errors from parsing provider-supplied JSON.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload was not valid JSON for the expected shape.
    #[error("failed to parse {what}: {source}")]
    Parse {
        /// What we were trying to parse ("skills", "roles", "tree").
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a user skill list, normalizing duplicates and blank names.
pub fn parse_skills(json: &str) -> Result<SkillProfile, CatalogError> {
    let skills: Vec<Skill> = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        what: "skills",
        source,
    })?;
    Ok(SkillProfile::from_skills(skills))
}

/// Parse the job-role catalog.
pub fn parse_roles(json: &str) -> Result<Vec<JobRole>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        what: "roles",
        source,
    })
}

/// Parse a mind-map tree.
pub fn parse_tree(json: &str) -> Result<MindMapNode, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        what: "tree",
        source,
    })
}
