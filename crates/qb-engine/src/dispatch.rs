//! Declarative command routing.
//!
//! One table maps each command token to its handler id, cooldown duration
//! and help text. Routing itself is a pure function of the message text;
//! everything stateful lives in the stores the handlers compose.

use std::time::Duration;

/// Cooldown for quick stateless commands.
const SHORT: Duration = Duration::from_secs(3);
/// Cooldown for choice confirmation.
const CHOOSE: Duration = Duration::from_secs(5);
/// Cooldown for generation-backed commands.
const GENERATE: Duration = Duration::from_secs(10);
/// The wizard gates itself via its own timeouts, not the cooldown map.
const NONE: Duration = Duration::ZERO;

/// Which handler a token routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the registration wizard.
    Register,
    /// Start the reset confirmation wizard.
    Reset,
    /// Show the character sheet.
    Stats,
    /// Roll a bare d20.
    Roll,
    /// Attack roll (Strength-modified).
    Attack,
    /// Saving throw for a named ability.
    Save,
    /// Skill check for a named skill.
    Check,
    /// Generate or recall the pending adventure.
    Adventure,
    /// Pick one of the pending choices.
    Choose,
    /// Show recent chosen actions.
    History,
    /// List available commands.
    Help,
}

/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// The command token including its `!` prefix.
    pub token: &'static str,
    /// The handler this token routes to.
    pub command: Command,
    /// Per-command cooldown duration.
    pub cooldown: Duration,
    /// Usage line shown on bad arguments.
    pub usage: &'static str,
    /// One-line description for `!help`.
    pub summary: &'static str,
}

/// The full command table, in help display order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        token: "!register",
        command: Command::Register,
        cooldown: NONE,
        usage: "!register",
        summary: "create a character (guided)",
    },
    CommandSpec {
        token: "!reset",
        command: Command::Reset,
        cooldown: NONE,
        usage: "!reset",
        summary: "archive your character (asks to confirm)",
    },
    CommandSpec {
        token: "!stats",
        command: Command::Stats,
        cooldown: SHORT,
        usage: "!stats",
        summary: "show your character sheet",
    },
    CommandSpec {
        token: "!roll",
        command: Command::Roll,
        cooldown: SHORT,
        usage: "!roll",
        summary: "roll a d20",
    },
    CommandSpec {
        token: "!attack",
        command: Command::Attack,
        cooldown: SHORT,
        usage: "!attack",
        summary: "attack roll (d20 + Strength)",
    },
    CommandSpec {
        token: "!save",
        command: Command::Save,
        cooldown: SHORT,
        usage: "!save <ability>",
        summary: "saving throw (d20 + ability)",
    },
    CommandSpec {
        token: "!check",
        command: Command::Check,
        cooldown: SHORT,
        usage: "!check <skill>",
        summary: "skill check (d20 + linked ability)",
    },
    CommandSpec {
        token: "!adventure",
        command: Command::Adventure,
        cooldown: GENERATE,
        usage: "!adventure",
        summary: "get an adventure hook with three choices",
    },
    CommandSpec {
        token: "!choose",
        command: Command::Choose,
        cooldown: CHOOSE,
        usage: "!choose <1-3>",
        summary: "commit to one of the choices",
    },
    CommandSpec {
        token: "!history",
        command: Command::History,
        cooldown: SHORT,
        usage: "!history",
        summary: "show your recent actions",
    },
    CommandSpec {
        token: "!help",
        command: Command::Help,
        cooldown: NONE,
        usage: "!help",
        summary: "list commands",
    },
];

/// Route message text to a command table row plus its argument remainder.
/// Non-command text routes nowhere and is ignored by the session.
pub fn route(text: &str) -> Option<(&'static CommandSpec, &str)> {
    let trimmed = text.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    COMMANDS
        .iter()
        .find(|spec| spec.token.eq_ignore_ascii_case(head))
        .map(|spec| (spec, rest))
}
