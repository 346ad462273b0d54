//! The user's mutable skill profile.
//!
//! Holds the in-memory skill set between scoring runs with the same
//! semantics the skill editor exposes: add rejects case-insensitive
//! duplicates, confidence is updated in place, removal is explicit.
//! Persistence belongs to the external data provider; callers snapshot
//! [`SkillProfile::skills`] whenever they want to re-score.

use crate::model::{normalize_skill_name, Skill};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from profile mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// Skill name was empty or whitespace.
    #[error("skill name must not be blank")]
    BlankSkillName,
    /// A skill with the same case-insensitive name already exists.
    #[error("skill already exists: {name}")]
    DuplicateSkill { name: String },
    /// No skill with this name in the profile.
    #[error("unknown skill: {name}")]
    UnknownSkill { name: String },
}

/// An ordered collection of user skills, unique by case-insensitive name.
///
/// Insertion order is preserved so that scoring output and display stay
/// stable as confidence values change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    skills: Vec<Skill>,
}

impl SkillProfile {
    /// Create an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from existing skills, dropping case-insensitive
    /// duplicates (first occurrence wins) and blank names.
    ///
    /// Used when loading a previously saved skill set from the provider.
    #[must_use]
    pub fn from_skills(skills: impl IntoIterator<Item = Skill>) -> Self {
        let mut profile = Self::new();
        for skill in skills {
            // Provider data may predate the duplicate check; skip quietly.
            let _ = profile.add(&skill.name, skill.confidence);
        }
        profile
    }

    /// Add a new skill. The name is stored trimmed, as typed.
    pub fn add(&mut self, name: &str, confidence: u8) -> Result<(), ProfileError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProfileError::BlankSkillName);
        }
        let key = normalize_skill_name(trimmed);
        if self.skills.iter().any(|s| s.key() == key) {
            return Err(ProfileError::DuplicateSkill {
                name: trimmed.to_string(),
            });
        }
        self.skills.push(Skill::new(trimmed, confidence));
        Ok(())
    }

    /// Update a skill's confidence in place.
    pub fn set_confidence(&mut self, name: &str, confidence: u8) -> Result<(), ProfileError> {
        let key = normalize_skill_name(name);
        match self.skills.iter_mut().find(|s| s.key() == key) {
            Some(skill) => {
                skill.confidence = confidence.min(crate::model::MAX_CONFIDENCE);
                Ok(())
            }
            None => Err(ProfileError::UnknownSkill {
                name: name.to_string(),
            }),
        }
    }

    /// Remove a skill by name.
    pub fn remove(&mut self, name: &str) -> Result<(), ProfileError> {
        let key = normalize_skill_name(name);
        let before = self.skills.len();
        self.skills.retain(|s| s.key() != key);
        if self.skills.len() == before {
            return Err(ProfileError::UnknownSkill {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// The skills in insertion order. This is the snapshot the scoring
    /// engine consumes.
    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Number of skills in the profile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the profile has no skills.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list() {
        let mut profile = SkillProfile::new();
        profile.add("Python", 80).unwrap();
        profile.add("SQL", 50).unwrap();

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.skills()[0].name, "Python");
        assert_eq!(profile.skills()[1].confidence, 50);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut profile = SkillProfile::new();
        assert_eq!(profile.add("   ", 50), Err(ProfileError::BlankSkillName));
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicate() {
        let mut profile = SkillProfile::new();
        profile.add("Python", 80).unwrap();

        let err = profile.add("python", 60).unwrap_err();
        assert_eq!(
            err,
            ProfileError::DuplicateSkill {
                name: "python".to_string()
            }
        );
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn test_add_trims_name() {
        let mut profile = SkillProfile::new();
        profile.add("  Python  ", 80).unwrap();
        assert_eq!(profile.skills()[0].name, "Python");
    }

    #[test]
    fn test_set_confidence_in_place() {
        let mut profile = SkillProfile::new();
        profile.add("Python", 80).unwrap();
        profile.add("SQL", 50).unwrap();

        profile.set_confidence("PYTHON", 95).unwrap();

        // Order unchanged, value updated.
        assert_eq!(profile.skills()[0].name, "Python");
        assert_eq!(profile.skills()[0].confidence, 95);
    }

    #[test]
    fn test_set_confidence_clamps() {
        let mut profile = SkillProfile::new();
        profile.add("Python", 80).unwrap();
        profile.set_confidence("Python", 250).unwrap();
        assert_eq!(profile.skills()[0].confidence, 100);
    }

    #[test]
    fn test_set_confidence_unknown_skill() {
        let mut profile = SkillProfile::new();
        let err = profile.set_confidence("Rust", 50).unwrap_err();
        assert_eq!(
            err,
            ProfileError::UnknownSkill {
                name: "Rust".to_string()
            }
        );
    }

    #[test]
    fn test_remove() {
        let mut profile = SkillProfile::new();
        profile.add("Python", 80).unwrap();
        profile.add("SQL", 50).unwrap();

        profile.remove("python").unwrap();
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.skills()[0].name, "SQL");
    }

    #[test]
    fn test_remove_unknown_skill() {
        let mut profile = SkillProfile::new();
        assert!(matches!(
            profile.remove("Rust"),
            Err(ProfileError::UnknownSkill { .. })
        ));
    }

    #[test]
    fn test_from_skills_drops_duplicates() {
        let profile = SkillProfile::from_skills(vec![
            Skill::new("Python", 80),
            Skill::new("python", 30),
            Skill::new("SQL", 50),
        ]);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.skills()[0].confidence, 80);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut profile = SkillProfile::new();
        profile.add("Python", 80).unwrap();

        let json = serde_json::to_string(&profile).unwrap();
        let parsed: SkillProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, parsed);
    }
}
