//! d20 rolls and check outcomes.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Roll a single d20.
pub fn d20(rng: &mut impl Rng) -> i32 {
    rng.random_range(1..=20)
}

/// The resolved result of a d20 check: the raw roll, the applied modifier
/// and their total. A check for an unregistered player carries modifier 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The raw d20 roll (1..=20).
    pub roll: i32,
    /// The ability modifier applied, if any.
    pub modifier: i32,
    /// `roll + modifier`.
    pub total: i32,
}

impl CheckOutcome {
    /// Resolve a check from a roll and a modifier.
    pub fn new(roll: i32, modifier: i32) -> Self {
        Self {
            roll,
            modifier,
            total: roll + modifier,
        }
    }

    /// Roll a d20 and apply the given modifier.
    pub fn roll(rng: &mut impl Rng, modifier: i32) -> Self {
        Self::new(d20(rng), modifier)
    }

    /// A natural 20.
    pub fn is_critical(&self) -> bool {
        self.roll == 20
    }

    /// A natural 1.
    pub fn is_fumble(&self) -> bool {
        self.roll == 1
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifier == 0 {
            write!(f, "{}", self.roll)
        } else {
            write!(f, "{} ({}{:+})", self.total, self.roll, self.modifier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn d20_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let r = d20(&mut rng);
            assert!((1..=20).contains(&r));
        }
    }

    #[test]
    fn total_is_roll_plus_modifier() {
        let out = CheckOutcome::new(13, 3);
        assert_eq!(out.total, 16);
        let out = CheckOutcome::new(13, -4);
        assert_eq!(out.total, 9);
    }

    #[test]
    fn criticals() {
        assert!(CheckOutcome::new(20, -2).is_critical());
        assert!(CheckOutcome::new(1, 5).is_fumble());
        assert!(!CheckOutcome::new(10, 0).is_critical());
    }

    #[test]
    fn display_with_and_without_modifier() {
        assert_eq!(CheckOutcome::new(15, 0).to_string(), "15");
        assert_eq!(CheckOutcome::new(15, 2).to_string(), "17 (15+2)");
        assert_eq!(CheckOutcome::new(15, -1).to_string(), "14 (15-1)");
    }
}
