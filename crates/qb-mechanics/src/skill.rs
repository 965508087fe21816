//! The fixed skill vocabulary and its mapping onto abilities.

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::error::{MechanicsError, MechanicsResult};

/// A skill a character can be proficient in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Climbing, jumping, swimming.
    Athletics,
    /// Balance and tumbling.
    Acrobatics,
    /// Moving unseen and unheard.
    Stealth,
    /// Magical lore.
    Arcana,
    /// Historical lore.
    History,
    /// Deduction and searching.
    Investigation,
    /// Natural lore.
    Nature,
    /// Religious lore.
    Religion,
    /// Reading intentions.
    Insight,
    /// Treating wounds.
    Medicine,
    /// Noticing things.
    Perception,
    /// Tracking and foraging.
    Survival,
    /// Lying convincingly.
    Deception,
    /// Menace and coercion.
    Intimidation,
    /// Entertaining a crowd.
    Performance,
    /// Winning people over.
    Persuasion,
}

/// Every skill in the vocabulary, in display order.
pub const ALL_SKILLS: [Skill; 16] = [
    Skill::Athletics,
    Skill::Acrobatics,
    Skill::Stealth,
    Skill::Arcana,
    Skill::History,
    Skill::Investigation,
    Skill::Nature,
    Skill::Religion,
    Skill::Insight,
    Skill::Medicine,
    Skill::Perception,
    Skill::Survival,
    Skill::Deception,
    Skill::Intimidation,
    Skill::Performance,
    Skill::Persuasion,
];

impl Skill {
    /// Parse a skill tag from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "athletics" => Some(Self::Athletics),
            "acrobatics" => Some(Self::Acrobatics),
            "stealth" => Some(Self::Stealth),
            "arcana" => Some(Self::Arcana),
            "history" => Some(Self::History),
            "investigation" => Some(Self::Investigation),
            "nature" => Some(Self::Nature),
            "religion" => Some(Self::Religion),
            "insight" => Some(Self::Insight),
            "medicine" => Some(Self::Medicine),
            "perception" => Some(Self::Perception),
            "survival" => Some(Self::Survival),
            "deception" => Some(Self::Deception),
            "intimidation" => Some(Self::Intimidation),
            "performance" => Some(Self::Performance),
            "persuasion" => Some(Self::Persuasion),
            _ => None,
        }
    }

    /// Display name for this skill.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Athletics => "Athletics",
            Self::Acrobatics => "Acrobatics",
            Self::Stealth => "Stealth",
            Self::Arcana => "Arcana",
            Self::History => "History",
            Self::Investigation => "Investigation",
            Self::Nature => "Nature",
            Self::Religion => "Religion",
            Self::Insight => "Insight",
            Self::Medicine => "Medicine",
            Self::Perception => "Perception",
            Self::Survival => "Survival",
            Self::Deception => "Deception",
            Self::Intimidation => "Intimidation",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
        }
    }

    /// The ability a check with this skill rolls against.
    pub fn ability(&self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::Stealth => Ability::Dexterity,
            Self::Arcana
            | Self::History
            | Self::Investigation
            | Self::Nature
            | Self::Religion => Ability::Intelligence,
            Self::Insight | Self::Medicine | Self::Perception | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }

    /// Parse a comma-separated proficiency list into exactly three distinct
    /// skills. Used by the registration wizard's skill step, which has no
    /// random fallback: anything short of a valid triplet is an error.
    pub fn parse_triplet(input: &str) -> MechanicsResult<[Skill; 3]> {
        let mut picked: Vec<Skill> = Vec::new();
        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let skill =
                Skill::parse(token).ok_or_else(|| MechanicsError::InvalidSkill(token.into()))?;
            if !picked.contains(&skill) {
                picked.push(skill);
            }
        }
        match picked[..] {
            [a, b, c] => Ok([a, b, c]),
            _ => Err(MechanicsError::InvalidSkillCount(picked.len())),
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
