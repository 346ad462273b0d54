//! Data model for the career-fit and mind-map engines.
//!
//! This crate defines the plain in-memory structures the computation crates
//! operate on:
//! - User skills and the mutable [`SkillProfile`] that holds them
//! - The read-only job-role catalog (`JobRole` with weighted requirements
//!   and attached project ideas)
//! - The mind-map tree consumed by the layout engine
//!
//! Shape validation happens here, at the data-provider boundary. The
//! computation crates trust these types and never validate them again.

pub mod ingest;
pub mod model;
pub mod profile;

pub use ingest::{parse_roles, parse_skills, parse_tree, CatalogError};
pub use model::{
    normalize_skill_name, JobRole, MindMapNode, ProjectIdea, RoleSkillRequirement, Skill,
};
pub use profile::{ProfileError, SkillProfile};
