//! The command orchestrator.
//!
//! One [`Session`] owns the cooldown gate, scenario cache, player store,
//! decision log and RNG, plus the two collaborators (transport, generator).
//! `handle_message` routes a normalized command token to one handler; the
//! handlers compose the stores and hold no state of their own.

use rand::SeedableRng;
use rand::rngs::StdRng;

use qb_mechanics::ability::{ALL_ABILITIES, Ability};
use qb_mechanics::dice::CheckOutcome;
use qb_mechanics::{AbilityScores, MechanicsError, Skill};
use qb_store::{DecisionLog, PlayerProfile, PlayerStore, StoreError};

use crate::cache::ScenarioCache;
use crate::config::EngineConfig;
use crate::cooldown::{Admission, CooldownGate};
use crate::dispatch::{self, Command, CommandSpec};
use crate::error::{EngineError, EngineResult};
use crate::generator::{Generator, ModelTier, Prompt};
use crate::parser::parse_scenario;
use crate::transport::{IncomingMessage, Transport, UserId};
use crate::wizard::{self, ResetOutcome};

/// A running session engine bound to one transport and one generator.
pub struct Session<T, G> {
    transport: T,
    generator: G,
    config: EngineConfig,
    cooldowns: CooldownGate,
    cache: ScenarioCache,
    players: PlayerStore,
    decisions: DecisionLog,
    rng: StdRng,
}

impl<T: Transport, G: Generator> Session<T, G> {
    /// Wire up a session from its collaborators and stores.
    pub fn new(
        transport: T,
        generator: G,
        config: EngineConfig,
        players: PlayerStore,
        decisions: DecisionLog,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let cache = ScenarioCache::new(config.cache_ttl);
        Self {
            transport,
            generator,
            config,
            cooldowns: CooldownGate::new(),
            cache,
            players,
            decisions,
            rng,
        }
    }

    /// The player store (read-only).
    pub fn players(&self) -> &PlayerStore {
        &self.players
    }

    /// The transport, for drivers that own the inbound message loop.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Handle one inbound message. Non-command text is ignored. User-facing
    /// failures are rendered back through the transport; only transport and
    /// storage failures surface as `Err`.
    pub async fn handle_message(&mut self, msg: &IncomingMessage) -> EngineResult<()> {
        let Some((spec, args)) = dispatch::route(&msg.text) else {
            return Ok(());
        };

        match self.run_command(spec, args, msg).await {
            Ok(reply) => self.transport.send(&msg.channel, &reply).await?,
            Err(err) => match user_reply(&err, spec) {
                Some(text) => self.transport.send(&msg.channel, &text).await?,
                None => return Err(err),
            },
        }
        Ok(())
    }

    async fn run_command(
        &mut self,
        spec: &'static CommandSpec,
        args: &str,
        msg: &IncomingMessage,
    ) -> EngineResult<String> {
        if let Admission::Cooling { remaining_secs } =
            self.cooldowns
                .check_and_reserve(&msg.user, spec.token, spec.cooldown)
        {
            return Err(EngineError::OnCooldown(remaining_secs));
        }

        match spec.command {
            Command::Register => self.do_register(msg).await,
            Command::Reset => self.do_reset(msg).await,
            Command::Stats => self.do_stats(&msg.user),
            Command::Roll => Ok(self.do_roll()),
            Command::Attack => Ok(self.do_attack(&msg.user)),
            Command::Save => self.do_save(&msg.user, args),
            Command::Check => self.do_check(&msg.user, args),
            Command::Adventure => self.do_adventure(msg).await,
            Command::Choose => self.do_choose(msg, args).await,
            Command::History => self.do_history(&msg.user),
            Command::Help => Ok(do_help()),
        }
    }

    async fn do_register(&mut self, msg: &IncomingMessage) -> EngineResult<String> {
        if self.players.get(msg.user.as_str()).is_some() {
            return Err(EngineError::AlreadyRegistered);
        }

        let draft = wizard::run_registration(
            &mut self.transport,
            &mut self.rng,
            &self.config,
            &msg.user,
            &msg.channel,
        )
        .await?;

        let scores = AbilityScores::roll(&mut self.rng);
        let profile = PlayerProfile::new(
            msg.user.as_str(),
            draft.name,
            draft.race,
            draft.class,
            scores,
            draft.skills,
        );
        let sheet = format_sheet(&profile);
        self.players.register(profile)?;
        Ok(format!("Your character is ready!\n\n{sheet}"))
    }

    async fn do_reset(&mut self, msg: &IncomingMessage) -> EngineResult<String> {
        if self.players.get(msg.user.as_str()).is_none() {
            return Err(EngineError::NotRegistered);
        }

        let outcome = wizard::run_reset_confirmation(
            &mut self.transport,
            &self.config,
            &msg.user,
            &msg.channel,
        )
        .await?;

        match outcome {
            ResetOutcome::Confirmed => {
                let archived = self.players.archive_and_delete(msg.user.as_str())?;
                Ok(format!(
                    "{} has been archived. Use !register to start a new character.",
                    archived.name
                ))
            }
            ResetOutcome::Cancelled => Ok("Reset cancelled; your character is safe.".into()),
            ResetOutcome::TimedOut => Err(EngineError::WizardTimeout),
        }
    }

    fn do_stats(&self, user: &UserId) -> EngineResult<String> {
        let profile = self
            .players
            .get(user.as_str())
            .ok_or(EngineError::NotRegistered)?;
        Ok(format_sheet(profile))
    }

    fn do_roll(&mut self) -> String {
        let outcome = CheckOutcome::roll(&mut self.rng, 0);
        format!("You rolled a {} (1d20).", outcome.roll)
    }

    fn do_attack(&mut self, user: &UserId) -> String {
        match self.players.get(user.as_str()) {
            Some(profile) => {
                let modifier = profile.scores.modifier(Ability::Strength);
                let outcome = CheckOutcome::roll(&mut self.rng, modifier);
                format!("Attack: {outcome}{}", flourish(outcome))
            }
            None => {
                let outcome = CheckOutcome::roll(&mut self.rng, 0);
                format!("Attack: {outcome} (unregistered — no modifier applied)")
            }
        }
    }

    fn do_save(&mut self, user: &UserId, args: &str) -> EngineResult<String> {
        let ability = Ability::parse(args)
            .ok_or_else(|| MechanicsError::InvalidAbility(args.to_string()))?;
        match self.players.get(user.as_str()) {
            Some(profile) => {
                let outcome = CheckOutcome::roll(&mut self.rng, profile.scores.modifier(ability));
                Ok(format!("{ability} save: {outcome}{}", flourish(outcome)))
            }
            None => {
                let outcome = CheckOutcome::roll(&mut self.rng, 0);
                Ok(format!(
                    "{ability} save: {outcome} (unregistered — no modifier applied)"
                ))
            }
        }
    }

    fn do_check(&mut self, user: &UserId, args: &str) -> EngineResult<String> {
        let skill =
            Skill::parse(args).ok_or_else(|| MechanicsError::InvalidSkill(args.to_string()))?;
        let ability = skill.ability();
        match self.players.get(user.as_str()) {
            Some(profile) => {
                let outcome = CheckOutcome::roll(&mut self.rng, profile.scores.modifier(ability));
                let tag = if profile.is_proficient(skill) {
                    " [proficient]"
                } else {
                    ""
                };
                Ok(format!(
                    "{skill} ({ability}) check: {outcome}{tag}{}",
                    flourish(outcome)
                ))
            }
            None => {
                let outcome = CheckOutcome::roll(&mut self.rng, 0);
                Ok(format!(
                    "{skill} ({ability}) check: {outcome} (unregistered — no modifier applied)"
                ))
            }
        }
    }

    async fn do_adventure(&mut self, msg: &IncomingMessage) -> EngineResult<String> {
        if let Some(adventure) = self.cache.fresh(&msg.user) {
            return Ok(format_adventure(adventure.narrative.as_str(), adventure.choices()));
        }

        let raw = self
            .generator
            .generate(&Prompt::adventure_hook(), ModelTier::Standard)
            .await?;
        let parsed = parse_scenario(&raw)?;
        let adventure = self.cache.store(msg.user.clone(), parsed);
        Ok(format_adventure(adventure.narrative.as_str(), adventure.choices()))
    }

    async fn do_choose(&mut self, msg: &IncomingMessage, args: &str) -> EngineResult<String> {
        let (choice, narrative) = {
            let adventure = self
                .cache
                .fresh(&msg.user)
                .ok_or(EngineError::NoActiveSession)?;
            let choice = adventure
                .choice(args)
                .ok_or_else(|| EngineError::InvalidChoice(args.to_string()))?;
            (choice.to_string(), adventure.narrative.clone())
        };

        // Narrate first: a failed generation leaves no trace, so the user
        // can retry without duplicating history or decision records.
        let outcome = self
            .generator
            .generate(&Prompt::outcome(&narrative, &choice), ModelTier::Premium)
            .await?;

        if self.players.get(msg.user.as_str()).is_none() {
            self.players
                .register(PlayerProfile::synthesized(msg.user.as_str()))?;
        }
        self.players.append_history(msg.user.as_str(), &choice)?;
        self.decisions
            .append(msg.user.as_str(), &choice, &narrative)?;

        Ok(format!("You chose: {choice}\n\n{outcome}"))
    }

    fn do_history(&self, user: &UserId) -> EngineResult<String> {
        let profile = self
            .players
            .get(user.as_str())
            .ok_or(EngineError::NotRegistered)?;
        if profile.history.is_empty() {
            return Ok("No actions chosen yet. Use !adventure to find one.".into());
        }
        let start = profile.history.len().saturating_sub(10);
        let mut out = format!("{}'s recent actions:\n", profile.name);
        for (i, action) in profile.history[start..].iter().enumerate() {
            out.push_str(&format!("  {}. {action}\n", start + i + 1));
        }
        Ok(out.trim_end().to_string())
    }
}

/// Render a user-facing failure, or `None` for faults that must propagate.
fn user_reply(err: &EngineError, spec: &CommandSpec) -> Option<String> {
    match err {
        EngineError::OnCooldown(secs) => Some(format!(
            "Please wait {secs}s before using {} again.",
            spec.token
        )),
        EngineError::NotRegistered => {
            Some("You are not registered! Use !register to create a character.".into())
        }
        EngineError::AlreadyRegistered | EngineError::Store(StoreError::AlreadyRegistered(_)) => {
            Some("You are already registered! Use !stats to view your character.".into())
        }
        EngineError::NoActiveSession => {
            Some("No active adventure! Use !adventure to start one.".into())
        }
        EngineError::InvalidChoice(_) => Some(format!(
            "That is not one of the choices. Usage: {}",
            spec.usage
        )),
        EngineError::InsufficientChoices(_) => {
            Some("The adventure came back garbled. Try !adventure again.".into())
        }
        EngineError::GenerationUnavailable(_) => {
            Some("Adventure generation is unavailable right now. Please try again later.".into())
        }
        EngineError::WizardTimeout => {
            Some("Timed out waiting for your reply. Nothing was changed.".into())
        }
        EngineError::Mechanics(e) => Some(format!("{e}. Usage: {}", spec.usage)),
        EngineError::Store(_) | EngineError::Transport(_) => None,
    }
}

fn flourish(outcome: CheckOutcome) -> &'static str {
    if outcome.is_critical() {
        " Critical!"
    } else if outcome.is_fumble() {
        " Fumble!"
    } else {
        ""
    }
}

fn format_sheet(profile: &PlayerProfile) -> String {
    let mut out = format!(
        "{} — {} {}\nHP: {}\n",
        profile.name, profile.race, profile.class, profile.hit_points
    );
    for ability in ALL_ABILITIES {
        let score = profile.scores.get(ability);
        out.push_str(&format!(
            "  {:<13} {:>2} ({:+})\n",
            ability.name(),
            score,
            qb_mechanics::modifier(score)
        ));
    }
    let skills: Vec<&str> = profile.proficiencies.iter().map(Skill::name).collect();
    out.push_str(&format!("Proficient: {}\n", skills.join(", ")));
    out.push_str(&format!("Actions logged: {}", profile.history.len()));
    out
}

fn format_adventure(narrative: &str, choices: &[String]) -> String {
    let mut out = format!("Adventure hook:\n{narrative}\n\nChoices:\n");
    for (i, choice) in choices.iter().enumerate() {
        out.push_str(&format!("  {}. {choice}\n", i + 1));
    }
    out.push_str("\nUse !choose 1, !choose 2 or !choose 3 to decide.");
    out
}

fn do_help() -> String {
    let mut out = String::from("Questbote commands:\n");
    for spec in dispatch::COMMANDS {
        out.push_str(&format!("  {:<11} {}\n", spec.token, spec.summary));
    }
    out.trim_end().to_string()
}
