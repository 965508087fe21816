//! Player profile records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qb_mechanics::ability::AbilityScores;
use qb_mechanics::skill::Skill;

/// A registered player's character sheet.
///
/// Owned exclusively by [`crate::PlayerStore`]; hit points are computed at
/// creation time and never recomputed, so a later score change (there is
/// none today) would not silently alter them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Opaque user key supplied by the transport.
    pub user: String,
    /// Character display name, capitalized.
    pub name: String,
    /// Character race, capitalized.
    pub race: String,
    /// Character class, capitalized.
    pub class: String,
    /// The six ability scores.
    pub scores: AbilityScores,
    /// Derived hit points, frozen at creation.
    pub hit_points: i32,
    /// Exactly three proficiency tags.
    pub proficiencies: [Skill; 3],
    /// Append-only list of chosen adventure actions, oldest first.
    pub history: Vec<String>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl PlayerProfile {
    /// Build a new profile. Hit points are derived from the scores here and
    /// frozen; the history starts empty.
    pub fn new(
        user: impl Into<String>,
        name: impl Into<String>,
        race: impl Into<String>,
        class: impl Into<String>,
        scores: AbilityScores,
        proficiencies: [Skill; 3],
    ) -> Self {
        let hit_points = scores.hit_points();
        Self {
            user: user.into(),
            name: name.into(),
            race: race.into(),
            class: class.into(),
            scores,
            hit_points,
            proficiencies,
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The documented default profile synthesized when an unregistered user
    /// takes an action that must be recorded: all scores 10, HP 10.
    pub fn synthesized(user: impl Into<String>) -> Self {
        Self::new(
            user,
            "Adventurer",
            "Human",
            "Wanderer",
            AbilityScores::baseline(),
            [Skill::Perception, Skill::Athletics, Skill::Survival],
        )
    }

    /// Whether this profile is proficient in the given skill.
    pub fn is_proficient(&self, skill: Skill) -> bool {
        self.proficiencies.contains(&skill)
    }
}
