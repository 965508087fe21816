//! Game mechanics for the Questbote session engine.
//!
//! Ability scores with D&D-style modifiers, a fixed skill vocabulary with
//! skill-to-ability mapping, and d20 check resolution. Everything here is
//! pure state plus a seeded RNG; no IO.

pub mod ability;
pub mod dice;
pub mod error;
pub mod skill;

pub use ability::{Ability, AbilityScores, modifier};
pub use dice::{CheckOutcome, d20};
pub use error::{MechanicsError, MechanicsResult};
pub use skill::Skill;
