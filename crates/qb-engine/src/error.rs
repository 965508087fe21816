//! Error types for the session engine.

use thiserror::Error;

use qb_mechanics::MechanicsError;
use qb_store::StoreError;

use crate::generator::GeneratorError;
use crate::transport::TransportError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while handling a command.
///
/// Most variants are user-facing precondition or validation failures and are
/// rendered back through the transport; only transport and storage failures
/// propagate out of the message handler.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The command is still cooling down for this user.
    #[error("on cooldown for another {0}s")]
    OnCooldown(u64),

    /// The user has no profile yet.
    #[error("not registered")]
    NotRegistered,

    /// The user already has a profile.
    #[error("already registered")]
    AlreadyRegistered,

    /// A choice was made with no cached adventure.
    #[error("no active adventure")]
    NoActiveSession,

    /// The choice key does not map to a pending choice.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Generated text did not parse into the required number of choices.
    #[error("generated content had {0} choices instead of 3")]
    InsufficientChoices(usize),

    /// The content generator failed; recoverable, never retried silently.
    #[error(transparent)]
    GenerationUnavailable(#[from] GeneratorError),

    /// A wizard step timed out and the run was abandoned.
    #[error("wizard timed out awaiting a reply")]
    WizardTimeout,

    /// Invalid ability or skill input.
    #[error(transparent)]
    Mechanics(#[from] MechanicsError),

    /// Durable storage failure; fatal to the operation, not the process.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The transport could not deliver a message.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::OnCooldown(4).to_string(),
            "on cooldown for another 4s"
        );
        assert_eq!(
            EngineError::InsufficientChoices(2).to_string(),
            "generated content had 2 choices instead of 3"
        );
    }

    #[test]
    fn wraps_store_errors() {
        let err: EngineError = StoreError::NotFound("u1".into()).into();
        assert!(matches!(err, EngineError::Store(_)));
    }
}
