//! Offline table-driven generator for console play.
//!
//! Stands in for the remote text-generation service: adventure hooks come
//! from a fixed table, outcome narration from seeded phrase pools, so a
//! session is reproducible for a given seed.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qb_engine::{Generator, GeneratorError, ModelTier, Prompt};

const HOOKS: &[&str] = &[
    "A caravan has vanished on the old forest road. The innkeeper swears she \
     heard wheels pass at midnight, but nothing arrived at the gate.\n\
     1. Follow the wagon tracks into the forest\n\
     2. Question the innkeeper about the sound\n\
     3. Wait for nightfall and watch the road",
    "The village well has begun whispering names after dark, and last night \
     it spoke yours.\n\
     1. Climb down the well with a torch\n\
     2. Ask the village elder what the well wants\n\
     3. Seal the well and leave before dawn",
    "A wounded courier stumbles into the tavern clutching a sealed letter \
     addressed to a lord who died ten years ago.\n\
     1. Open the letter\n\
     2. Deliver it to the lord's ruined keep\n\
     3. Tend the courier and ask who is chasing him",
    "Smoke rises from the watchtower that has stood empty for a generation.\n\
     1. Climb the outer wall\n\
     2. Hail whoever is inside\n\
     3. Circle around through the marsh",
];

const OUTCOME_OPENERS: &[&str] = &[
    "It goes better than you had any right to expect.",
    "For a heartbeat everything holds its breath, then the moment breaks.",
    "The decision costs you something, though you will not know what until later.",
    "Fortune, for once, is paying attention.",
];

const OUTCOME_TWISTS: &[&str] = &[
    "A stranger was watching, and now they know your face.",
    "You find a token pressed into the mud: a ring bearing a crest nobody local wears.",
    "Somewhere behind you, a horn answers another horn.",
    "The next village will have heard of this before you arrive.",
];

/// Deterministic stand-in for the content-generation collaborator.
pub struct TableGenerator {
    rng: StdRng,
}

impl TableGenerator {
    /// Seeded constructor; the same seed replays the same session.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn draw<'a>(&mut self, pool: &'a [&'a str]) -> &'a str {
        pool[self.rng.random_range(0..pool.len())]
    }
}

impl Generator for TableGenerator {
    async fn generate(
        &mut self,
        _prompt: &Prompt,
        tier: ModelTier,
    ) -> Result<String, GeneratorError> {
        let text = match tier {
            ModelTier::Standard => self.draw(HOOKS).to_string(),
            ModelTier::Premium => {
                format!("{} {}", self.draw(OUTCOME_OPENERS), self.draw(OUTCOME_TWISTS))
            }
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qb_engine::parser::parse_scenario;

    #[test]
    fn every_hook_parses_into_three_choices() {
        for hook in HOOKS {
            let parsed = parse_scenario(hook).unwrap();
            assert_eq!(parsed.choices.len(), 3, "{hook}");
            assert!(!parsed.narrative.is_empty());
        }
    }

    #[tokio::test]
    async fn same_seed_same_hook() {
        let mut a = TableGenerator::new(9);
        let mut b = TableGenerator::new(9);
        let prompt = Prompt::adventure_hook();
        let x = a.generate(&prompt, ModelTier::Standard).await.unwrap();
        let y = b.generate(&prompt, ModelTier::Standard).await.unwrap();
        assert_eq!(x, y);
    }
}
