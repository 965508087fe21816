//! Conversational session engine for Questbote.
//!
//! Mediates between a message-based chat transport and a text-generation
//! service to run a lightweight multi-user role-playing interaction: a
//! per-user per-command cooldown gate, a TTL cache of generated adventures
//! with a text-to-choice parser, a prompt/await-reply registration wizard,
//! and durable player state with an archive lifecycle and decision log.
//!
//! The transport and the generator are collaborators behind traits
//! ([`Transport`], [`Generator`]); everything else is owned by [`Session`].

pub mod cache;
pub mod config;
pub mod cooldown;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod parser;
pub mod session;
pub mod transport;
pub mod wizard;

pub use cache::{Adventure, ScenarioCache};
pub use config::EngineConfig;
pub use cooldown::{Admission, CooldownGate};
pub use error::{EngineError, EngineResult};
pub use generator::{Generator, GeneratorError, ModelTier, Prompt};
pub use session::Session;
pub use transport::{ChannelId, IncomingMessage, Transport, TransportError, UserId};
