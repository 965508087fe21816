//! Error types for game mechanics.

use thiserror::Error;

/// Result type for mechanics operations.
pub type MechanicsResult<T> = Result<T, MechanicsError>;

/// Errors that can occur when resolving abilities, skills or checks.
#[derive(Debug, Error)]
pub enum MechanicsError {
    /// The named ability is not one of the six.
    #[error("unknown ability: \"{0}\"")]
    InvalidAbility(String),

    /// The named skill is not in the vocabulary.
    #[error("unknown skill: \"{0}\"")]
    InvalidSkill(String),

    /// A proficiency set must hold exactly three distinct skills.
    #[error("expected exactly 3 distinct skills, got {0}")]
    InvalidSkillCount(usize),
}
