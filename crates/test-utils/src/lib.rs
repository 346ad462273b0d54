//! Shared test fixtures for pathwise crates.
//!
//! Provides compact builders for skills, roles, and mind-map trees so
//! tests across the workspace construct scenarios the same way.

use pathwise_catalog::{JobRole, MindMapNode, ProjectIdea, RoleSkillRequirement, Skill};

/// Build a skill.
pub fn skill(name: &str, confidence: u8) -> Skill {
    Skill::new(name, confidence)
}

/// Build a role skill requirement.
pub fn requirement(skill_name: &str, weight: f64) -> RoleSkillRequirement {
    RoleSkillRequirement {
        skill_name: skill_name.to_string(),
        weight,
    }
}

/// Build a role from (skill_name, weight) pairs, no projects.
pub fn role(id: &str, role_name: &str, requirements: &[(&str, f64)]) -> JobRole {
    JobRole {
        id: id.to_string(),
        role_name: role_name.to_string(),
        description: format!("{role_name} role"),
        skills: requirements
            .iter()
            .map(|(name, weight)| requirement(name, *weight))
            .collect(),
        projects: Vec::new(),
    }
}

/// Build a role with project ideas attached.
pub fn role_with_projects(
    id: &str,
    role_name: &str,
    requirements: &[(&str, f64)],
    projects: &[(&str, &str)],
) -> JobRole {
    let mut built = role(id, role_name, requirements);
    built.projects = projects
        .iter()
        .map(|(name, description)| ProjectIdea {
            project_name: name.to_string(),
            project_description: description.to_string(),
        })
        .collect();
    built
}

/// The worked example from the scoring contract: Python@80 and SQL@50
/// against a Data Analyst role weighted {Python 0.5, SQL 0.3, Excel 0.2}.
/// Expected fit score: 55, missing Excel with impact 20.
pub fn data_analyst_scenario() -> (Vec<Skill>, Vec<JobRole>) {
    let skills = vec![skill("Python", 80), skill("SQL", 50)];
    let roles = vec![role(
        "analyst",
        "Data Analyst",
        &[("Python", 0.5), ("SQL", 0.3), ("Excel", 0.2)],
    )];
    (skills, roles)
}

/// A three-level mind-map tree: root with two branches, one of which has
/// two leaves.
pub fn sample_tree() -> MindMapNode {
    MindMapNode::branch(
        "root",
        "Physics",
        vec![
            MindMapNode::branch(
                "mechanics",
                "Mechanics",
                vec![
                    MindMapNode::leaf("kinematics", "Kinematics"),
                    MindMapNode::leaf("dynamics", "Dynamics"),
                ],
            ),
            MindMapNode::leaf("optics", "Optics"),
        ],
    )
}
