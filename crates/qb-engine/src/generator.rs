//! The text-generation collaborator.

use thiserror::Error;

/// Which quality tier a generation call should use: cheap open-ended
/// scenario generation versus higher-fidelity outcome narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Cheaper tier for adventure hooks.
    Standard,
    /// Higher-fidelity tier for outcome narration after a choice.
    Premium,
}

/// A prompt pair for the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Role/system instruction.
    pub system: String,
    /// The request itself.
    pub user: String,
}

impl Prompt {
    /// Prompt for a fresh adventure hook with three numbered choices.
    pub fn adventure_hook() -> Self {
        Self {
            system: "You are a Dungeon Master. Generate a BRIEF adventure hook \
                     with a challenge and exactly three choices, each on its own \
                     line numbered 1. 2. 3."
                .into(),
            user: "Generate a new adventure hook with three distinct choices.".into(),
        }
    }

    /// Prompt narrating the outcome of a chosen action.
    pub fn outcome(narrative: &str, choice: &str) -> Self {
        Self {
            system: "You are a Dungeon Master. Narrate the outcome of the \
                     player's chosen action in two or three vivid sentences."
                .into(),
            user: format!("The situation: {narrative}\nThe player chose: {choice}"),
        }
    }
}

/// The generator collaborator failed or returned an error.
#[derive(Debug, Error)]
#[error("generation unavailable: {0}")]
pub struct GeneratorError(pub String);

/// The content-generation collaborator.
///
/// Implementations must not block indefinitely; a call that errors is
/// surfaced to the user as a recoverable failure and never retried silently.
pub trait Generator {
    /// Generate text for a prompt at the given tier.
    fn generate(
        &mut self,
        prompt: &Prompt,
        tier: ModelTier,
    ) -> impl Future<Output = Result<String, GeneratorError>>;
}
