//! Core data types shared across the workspace.

use serde::{Deserialize, Serialize};

/// Maximum confidence a user can claim for a skill.
pub const MAX_CONFIDENCE: u8 = 100;

/// Normalize a skill name for case-insensitive identity.
///
/// This is the single definition of skill identity: trimmed and
/// lower-cased. Every lookup and duplicate check in the workspace goes
/// through this function.
#[must_use]
pub fn normalize_skill_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A user-owned skill with a self-rated confidence level.
///
/// Identity is the case-insensitive name (see [`normalize_skill_name`]);
/// confidence is a 0-100 percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name as the user typed it.
    pub name: String,
    /// Self-rated confidence, 0-100.
    pub confidence: u8,
}

impl Skill {
    /// Create a skill, clamping confidence to [`MAX_CONFIDENCE`].
    pub fn new(name: impl Into<String>, confidence: u8) -> Self {
        Self {
            name: name.into(),
            confidence: confidence.min(MAX_CONFIDENCE),
        }
    }

    /// Normalized identity key for this skill.
    #[must_use]
    pub fn key(&self) -> String {
        normalize_skill_name(&self.name)
    }
}

/// A weighted skill requirement attached to a job role.
///
/// The weight is a role-specific importance coefficient. Weights across a
/// role are not required to sum to 1; catalogs that exceed that total
/// produce fit scores above 100, which is accepted rather than guarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSkillRequirement {
    /// Name of the required skill.
    pub skill_name: String,
    /// Importance coefficient, expected > 0 by provider contract.
    pub weight: f64,
}

/// A project idea attached to a role. Opaque pass-through data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub project_name: String,
    pub project_description: String,
}

/// A job role from the external catalog.
///
/// Read-only to the engines: supplied whole by the data provider, never
/// mutated or persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRole {
    /// Provider-assigned identifier.
    pub id: String,
    pub role_name: String,
    pub description: String,
    /// Weighted skill requirements.
    #[serde(default)]
    pub skills: Vec<RoleSkillRequirement>,
    /// Project ideas associated with this role.
    #[serde(default)]
    pub projects: Vec<ProjectIdea>,
}

/// A node in a mind-map tree.
///
/// Rooted and acyclic by provider contract; the layout engine trusts that
/// invariant and only reads `label` and `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapNode {
    /// Stable identifier, used to correlate layout output with nodes.
    pub id: String,
    pub label: String,
    /// Subtopics. Absent in JSON means leaf.
    #[serde(default)]
    pub children: Vec<MindMapNode>,
}

impl MindMapNode {
    /// Create a leaf node.
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn branch(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<MindMapNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children,
        }
    }

    /// Total number of nodes in this subtree, including self.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MindMapNode::node_count)
            .sum::<usize>()
    }
}
