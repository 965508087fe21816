//! The six ability scores and their derived values.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest rollable ability score.
pub const SCORE_MIN: i32 = 3;
/// Highest rollable ability score.
pub const SCORE_MAX: i32 = 18;
/// Score assigned to every ability of a synthesized default profile.
pub const SCORE_DEFAULT: i32 = 10;
/// Base hit points before the Constitution modifier is applied.
pub const BASE_HP: i32 = 10;

/// One of the six abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Raw physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance and vitality.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and willpower.
    Wisdom,
    /// Force of personality.
    Charisma,
}

/// All six abilities in display order.
pub const ALL_ABILITIES: [Ability; 6] = [
    Ability::Strength,
    Ability::Dexterity,
    Ability::Constitution,
    Ability::Intelligence,
    Ability::Wisdom,
    Ability::Charisma,
];

impl Ability {
    /// Parse an ability from user input. Accepts full names and the usual
    /// three-letter abbreviations.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "str" | "strength" => Some(Self::Strength),
            "dex" | "dexterity" => Some(Self::Dexterity),
            "con" | "constitution" => Some(Self::Constitution),
            "int" | "intelligence" => Some(Self::Intelligence),
            "wis" | "wisdom" => Some(Self::Wisdom),
            "cha" | "charisma" => Some(Self::Charisma),
            _ => None,
        }
    }

    /// Display name for this ability.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The modifier derived from an ability score: `floor((score - 10) / 2)`.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// A complete set of six ability scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Charisma score.
    pub charisma: i32,
}

impl AbilityScores {
    /// Roll a fresh score set: six independent uniform draws from 3..=18.
    pub fn roll(rng: &mut impl Rng) -> Self {
        let mut draw = || rng.random_range(SCORE_MIN..=SCORE_MAX);
        Self {
            strength: draw(),
            dexterity: draw(),
            constitution: draw(),
            intelligence: draw(),
            wisdom: draw(),
            charisma: draw(),
        }
    }

    /// The flat default score set (all 10s) used for synthesized profiles.
    pub fn baseline() -> Self {
        Self {
            strength: SCORE_DEFAULT,
            dexterity: SCORE_DEFAULT,
            constitution: SCORE_DEFAULT,
            intelligence: SCORE_DEFAULT,
            wisdom: SCORE_DEFAULT,
            charisma: SCORE_DEFAULT,
        }
    }

    /// Get the score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        modifier(self.get(ability))
    }

    /// Derived hit points: `max(10 + CON modifier, 1)`. Computed once at
    /// profile creation and frozen afterwards.
    pub fn hit_points(&self) -> i32 {
        (BASE_HP + modifier(self.constitution)).max(1)
    }
}
