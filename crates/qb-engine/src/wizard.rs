//! The interactive prompt/await-reply wizards.
//!
//! Short linear state machines, not a workflow engine. Registration walks
//! the [`STEPS`] table (`AwaitName → AwaitRace → AwaitClass → AwaitSkills`);
//! reset is a single confirmation step. Each step sends its prompt, then
//! suspends on the transport until the same user replies in the same
//! channel or the step's timeout budget elapses.
//!
//! Timeout policy is per step and deliberately asymmetric: the three text
//! fields substitute a drawn default and continue, while the skill step and
//! the reset confirmation abort the whole run with no mutation. Likewise
//! only the text fields honor the `random` sentinel; the proficiency
//! triplet must always be explicit.

use rand::Rng;
use rand::rngs::StdRng;

use qb_mechanics::skill::Skill;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::transport::{ChannelId, Transport, UserId};

/// Default names drawn for `random` replies and name-step timeouts.
pub const NAME_POOL: &[&str] = &[
    "Aldric", "Brenna", "Caspian", "Darya", "Edwyn", "Fiora", "Garrick", "Hesta",
];

/// Default races drawn for `random` replies and race-step timeouts.
pub const RACE_POOL: &[&str] = &["Human", "Elf", "Dwarf", "Halfling", "Gnome", "Half-Orc"];

/// Default classes drawn for `random` replies and class-step timeouts.
pub const CLASS_POOL: &[&str] = &["Fighter", "Wizard", "Rogue", "Cleric", "Ranger", "Bard"];

/// Reply sentinel that resolves a text field from its pool.
const RANDOM_SENTINEL: &str = "random";

/// The registration wizard's await states, in step order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardState {
    AwaitName,
    AwaitRace,
    AwaitClass,
    AwaitSkills,
}

/// What a step does when no reply arrives in time.
#[derive(Debug, Clone, Copy)]
enum TimeoutPolicy {
    /// Draw a default from the pool and continue.
    RandomDefault(&'static [&'static str]),
    /// Abandon the whole run with no mutation.
    Abort,
}

/// One row of the registration step table.
struct Step {
    state: WizardState,
    prompt: &'static str,
    /// Multi-value steps get the longer reply budget.
    long_budget: bool,
    policy: TimeoutPolicy,
}

/// The registration step table: prompt, timeout budget and fallback policy
/// per state.
const STEPS: [Step; 4] = [
    Step {
        state: WizardState::AwaitName,
        prompt: "What is your character's name? (reply `random` to let fate decide)",
        long_budget: false,
        policy: TimeoutPolicy::RandomDefault(NAME_POOL),
    },
    Step {
        state: WizardState::AwaitRace,
        prompt: "What race are they? (reply `random` to let fate decide)",
        long_budget: false,
        policy: TimeoutPolicy::RandomDefault(RACE_POOL),
    },
    Step {
        state: WizardState::AwaitClass,
        prompt: "And their class? (reply `random` to let fate decide)",
        long_budget: false,
        policy: TimeoutPolicy::RandomDefault(CLASS_POOL),
    },
    Step {
        state: WizardState::AwaitSkills,
        prompt: "Pick exactly three proficiencies, comma-separated. Options: \
                 Athletics, Acrobatics, Stealth, Arcana, History, Investigation, \
                 Nature, Religion, Insight, Medicine, Perception, Survival, \
                 Deception, Intimidation, Performance, Persuasion.",
        long_budget: true,
        policy: TimeoutPolicy::Abort,
    },
];

/// The collected result of a completed registration wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    /// Character name, capitalized.
    pub name: String,
    /// Character race, capitalized.
    pub race: String,
    /// Character class, capitalized.
    pub class: String,
    /// Exactly three distinct proficiencies.
    pub skills: [Skill; 3],
}

/// How a reset confirmation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The user confirmed; the caller may archive.
    Confirmed,
    /// The user declined; nothing changes.
    Cancelled,
    /// No reply in time; nothing changes.
    TimedOut,
}

/// Run the registration wizard for one (user, channel) pair.
///
/// Name, race and class fall back to a pool draw on timeout and continue;
/// the skill step does not — a missing or malformed skill reply aborts the
/// whole run, so no partial profile ever reaches the caller.
pub async fn run_registration<T: Transport>(
    transport: &mut T,
    rng: &mut StdRng,
    config: &EngineConfig,
    user: &UserId,
    channel: &ChannelId,
) -> EngineResult<RegistrationDraft> {
    let mut name = String::new();
    let mut race = String::new();
    let mut class = String::new();
    let mut skills: Option<[Skill; 3]> = None;

    for step in &STEPS {
        transport.send(channel, step.prompt).await?;
        let budget = if step.long_budget {
            config.skills_timeout
        } else {
            config.reply_timeout
        };
        let reply = transport.await_reply(user, channel, budget).await;

        let value = match (reply, step.policy) {
            (Some(reply), TimeoutPolicy::RandomDefault(pool)) => {
                let text = reply.text.trim();
                if text.eq_ignore_ascii_case(RANDOM_SENTINEL) {
                    draw(rng, pool)
                } else {
                    capitalize(text)
                }
            }
            (None, TimeoutPolicy::RandomDefault(pool)) => {
                let drawn = draw(rng, pool);
                transport
                    .send(channel, &format!("No reply — going with {drawn}."))
                    .await?;
                drawn
            }
            (Some(reply), TimeoutPolicy::Abort) => {
                skills = Some(Skill::parse_triplet(&reply.text)?);
                continue;
            }
            (None, TimeoutPolicy::Abort) => return Err(EngineError::WizardTimeout),
        };

        match step.state {
            WizardState::AwaitName => name = value,
            WizardState::AwaitRace => race = value,
            WizardState::AwaitClass => class = value,
            WizardState::AwaitSkills => unreachable!("skill step handled by policy"),
        }
    }

    match skills {
        Some(skills) => Ok(RegistrationDraft {
            name,
            race,
            class,
            skills,
        }),
        // The skill step either set `skills` or returned early above.
        None => Err(EngineError::WizardTimeout),
    }
}

/// Run the reset confirmation for one (user, channel) pair. Read-only: the
/// caller acts on the outcome.
pub async fn run_reset_confirmation<T: Transport>(
    transport: &mut T,
    config: &EngineConfig,
    user: &UserId,
    channel: &ChannelId,
) -> EngineResult<ResetOutcome> {
    transport
        .send(
            channel,
            "This archives your character and deletes them from the active roster. \
             Reply `confirm` to proceed or `cancel` to keep them.",
        )
        .await?;

    let outcome = match transport
        .await_reply(user, channel, config.reply_timeout)
        .await
    {
        Some(reply) if reply.text.trim().eq_ignore_ascii_case("confirm") => ResetOutcome::Confirmed,
        Some(_) => ResetOutcome::Cancelled,
        None => ResetOutcome::TimedOut,
    };
    Ok(outcome)
}

/// Uppercase the first letter, leave the rest as typed.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn draw(rng: &mut StdRng, pool: &[&str]) -> String {
    pool[rng.random_range(0..pool.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;

    use rand::SeedableRng;

    use qb_mechanics::skill::ALL_SKILLS;

    use crate::transport::{IncomingMessage, TransportError};

    /// Scripted transport: pops one entry per `await_reply`; `None` plays a
    /// timeout. Records everything sent.
    struct Script {
        replies: VecDeque<Option<String>>,
        sent: Vec<String>,
    }

    impl Script {
        fn new(replies: &[Option<&str>]) -> Self {
            Self {
                replies: replies.iter().map(|r| r.map(str::to_string)).collect(),
                sent: Vec::new(),
            }
        }
    }

    impl Transport for Script {
        async fn send(&mut self, _channel: &ChannelId, text: &str) -> Result<(), TransportError> {
            self.sent.push(text.to_string());
            Ok(())
        }

        async fn await_reply(
            &mut self,
            user: &UserId,
            channel: &ChannelId,
            _timeout: Duration,
        ) -> Option<IncomingMessage> {
            self.replies
                .pop_front()
                .flatten()
                .map(|text| IncomingMessage::new(user.clone(), channel.clone(), text))
        }
    }

    fn ids() -> (UserId, ChannelId) {
        (UserId::new("u1"), ChannelId::new("tavern"))
    }

    #[test]
    fn skill_prompt_covers_the_whole_vocabulary() {
        let prompt = STEPS[3].prompt;
        for skill in ALL_SKILLS {
            assert!(prompt.contains(skill.name()), "{}", skill.name());
        }
    }

    #[tokio::test]
    async fn full_run_with_explicit_replies() {
        let mut t = Script::new(&[
            Some("kara"),
            Some("elf"),
            Some("ranger"),
            Some("stealth, arcana, perception"),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        let (user, channel) = ids();

        let draft = run_registration(&mut t, &mut rng, &EngineConfig::default(), &user, &channel)
            .await
            .unwrap();
        assert_eq!(draft.name, "Kara");
        assert_eq!(draft.race, "Elf");
        assert_eq!(draft.class, "Ranger");
        assert_eq!(
            draft.skills,
            [Skill::Stealth, Skill::Arcana, Skill::Perception]
        );
        // Four prompts were sent, no timeout notices.
        assert_eq!(t.sent.len(), 4);
    }

    #[tokio::test]
    async fn random_sentinel_draws_from_pool() {
        let mut t = Script::new(&[
            Some("RANDOM"),
            Some("random"),
            Some("random"),
            Some("athletics, history, medicine"),
        ]);
        let mut rng = StdRng::seed_from_u64(2);
        let (user, channel) = ids();

        let draft = run_registration(&mut t, &mut rng, &EngineConfig::default(), &user, &channel)
            .await
            .unwrap();
        assert!(NAME_POOL.contains(&draft.name.as_str()));
        assert!(RACE_POOL.contains(&draft.race.as_str()));
        assert!(CLASS_POOL.contains(&draft.class.as_str()));
    }

    #[tokio::test]
    async fn text_field_timeout_substitutes_and_continues() {
        let mut t = Script::new(&[
            None, // name times out
            Some("dwarf"),
            Some("cleric"),
            Some("religion, insight, medicine"),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let (user, channel) = ids();

        let draft = run_registration(&mut t, &mut rng, &EngineConfig::default(), &user, &channel)
            .await
            .unwrap();
        assert!(NAME_POOL.contains(&draft.name.as_str()));
        assert_eq!(draft.race, "Dwarf");
        // The substitution was announced.
        assert!(t.sent.iter().any(|m| m.starts_with("No reply")));
    }

    #[tokio::test]
    async fn skill_step_timeout_aborts() {
        let mut t = Script::new(&[Some("Kara"), Some("Elf"), Some("Ranger"), None]);
        let mut rng = StdRng::seed_from_u64(4);
        let (user, channel) = ids();

        let err = run_registration(&mut t, &mut rng, &EngineConfig::default(), &user, &channel)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::WizardTimeout));
    }

    #[tokio::test]
    async fn short_skill_reply_aborts() {
        let mut t = Script::new(&[
            Some("Kara"),
            Some("Elf"),
            Some("Ranger"),
            Some("stealth, arcana"),
        ]);
        let mut rng = StdRng::seed_from_u64(5);
        let (user, channel) = ids();

        let err = run_registration(&mut t, &mut rng, &EngineConfig::default(), &user, &channel)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Mechanics(_)));
    }

    #[tokio::test]
    async fn reset_confirm() {
        let mut t = Script::new(&[Some("CONFIRM")]);
        let (user, channel) = ids();
        let outcome = run_reset_confirmation(&mut t, &EngineConfig::default(), &user, &channel)
            .await
            .unwrap();
        assert_eq!(outcome, ResetOutcome::Confirmed);
    }

    #[tokio::test]
    async fn reset_cancel_and_anything_else() {
        for reply in ["cancel", "never mind", "confrim"] {
            let mut t = Script::new(&[Some(reply)]);
            let (user, channel) = ids();
            let outcome = run_reset_confirmation(&mut t, &EngineConfig::default(), &user, &channel)
                .await
                .unwrap();
            assert_eq!(outcome, ResetOutcome::Cancelled, "{reply}");
        }
    }

    #[tokio::test]
    async fn reset_timeout() {
        let mut t = Script::new(&[None]);
        let (user, channel) = ids();
        let outcome = run_reset_confirmation(&mut t, &EngineConfig::default(), &user, &channel)
            .await
            .unwrap();
        assert_eq!(outcome, ResetOutcome::TimedOut);
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("kara"), "Kara");
        assert_eq!(capitalize("half-orc barbarian"), "Half-orc barbarian");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Élan"), "Élan");
    }
}
