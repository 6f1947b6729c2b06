//! Game session - the turn state machine behind the game screen
//!
//! A session owns the story, the player's health and the single outstanding
//! scenario request. The UI drives it with three calls:
//!
//! 1. [`GameSession::start`] on mount, which hands back the opening turn
//! 2. [`GameSession::select_choice`] on every click
//! 3. [`GameSession::resolve_turn`] when a generation request finishes
//!
//! Generation itself runs outside the session ([`ScenarioTurn::run`]) so the
//! session never holds a borrow across an await point. Every request carries
//! a [`TurnTicket`]; a completion whose ticket is no longer active is
//! dropped.
//!
//! A pick closes the day as soon as it is made, but it only joins the
//! history and the per-day tally once its follow-up scenario has been
//! applied. A turn that ends in the fallback leaves both untouched.

use std::time::Duration;

use survive_domain::{Health, StoryState};

use crate::application::dto::Notification;
use crate::ports::outbound::{
    storage_keys, GeneratedScenario, GenerationError, ScenarioGeneratorPort, ScenarioPrompt,
    StorageProvider,
};

/// How long the game-over screen lingers before returning to the start menu
pub const GAME_OVER_RETURN_DELAY: Duration = Duration::from_millis(3000);

/// Identifies one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnTicket(u64);

impl TurnTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A generation request the caller should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioTurn {
    pub ticket: TurnTicket,
    pub prompt: ScenarioPrompt,
}

impl ScenarioTurn {
    /// Run the request against `generator`.
    pub async fn run<G>(self, generator: &G) -> TurnOutcome
    where
        G: ScenarioGeneratorPort + ?Sized,
    {
        tracing::debug!(
            turn = self.ticket.value(),
            opening = self.prompt.is_opening(),
            "Generating scenario"
        );
        let result = generator.generate(self.prompt).await;
        TurnOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// Result of a finished generation request, tagged with its ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub ticket: TurnTicket,
    pub result: Result<GeneratedScenario, GenerationError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Playing,
    GameOver,
}

/// What the UI should do after a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// Run this generation request
    Generate(ScenarioTurn),
    /// Health ran out; return to the start screen after the delay
    GameOver { return_after: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceResolution {
    /// In display order
    pub notifications: Vec<Notification>,
    pub next: NextStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResolution {
    /// The generated scenario is now on screen
    Applied,
    /// Generation failed and the fallback scenario is on screen
    Fallback(Notification),
    /// The ticket was no longer active; nothing changed
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("A scenario is still being generated")]
    TurnInProgress,
    #[error("The game is over")]
    GameOver,
    #[error("No choice at index {0}")]
    NoSuchChoice(usize),
    #[error("The game has not started")]
    NotStarted,
}

/// A pick waiting on its follow-up scenario
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingDecision {
    choice_text: String,
    closed_day: bool,
}

pub struct GameSession<S: StorageProvider> {
    storage: S,
    story: StoryState,
    health: Health,
    phase: SessionPhase,
    active_ticket: Option<TurnTicket>,
    pending: Option<PendingDecision>,
    issued: u64,
}

impl<S: StorageProvider> GameSession<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            story: StoryState::new(),
            health: Health::full(),
            phase: SessionPhase::NotStarted,
            active_ticket: None,
            pending: None,
            issued: 0,
        }
    }

    pub fn story(&self) -> &StoryState {
        &self.story
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True while a generation request is outstanding
    pub fn is_busy(&self) -> bool {
        self.active_ticket.is_some()
    }

    /// Begin a run: restore health and request the opening scenario.
    ///
    /// Calling this again restarts the run; any request still in flight
    /// becomes stale.
    pub fn start(&mut self) -> ScenarioTurn {
        let stored = self.storage.load(storage_keys::HEALTH);
        let restored = Health::from_stored(stored.as_deref());
        if let Some(raw) = stored.as_deref().filter(|raw| raw.parse::<Health>().is_err()) {
            tracing::warn!(stored = %raw, "Ignoring unreadable stored health");
        }
        self.health = if restored.is_depleted() {
            tracing::warn!("Stored health was depleted; starting at full health");
            Health::full()
        } else {
            restored
        };

        self.story = StoryState::new();
        self.pending = None;
        self.phase = SessionPhase::Playing;

        let turn = self.issue(ScenarioPrompt::Opening);
        tracing::info!(turn = turn.ticket.value(), health = self.health.value(), "Game started");
        turn
    }

    /// Apply the player's pick of the choice at `index`.
    pub fn select_choice(&mut self, index: usize) -> Result<ChoiceResolution, GameError> {
        match self.phase {
            SessionPhase::NotStarted => return Err(GameError::NotStarted),
            SessionPhase::GameOver => return Err(GameError::GameOver),
            SessionPhase::Playing => {}
        }
        if self.is_busy() {
            return Err(GameError::TurnInProgress);
        }
        let choice = self
            .story
            .choice(index)
            .cloned()
            .ok_or(GameError::NoSuchChoice(index))?;

        let mut notifications = Vec::new();
        let mut fatal = false;

        if choice.is_bad {
            let outcome = self.health.apply_harmful_choice();
            fatal = outcome.is_fatal();
            self.health = outcome.health();
            self.storage
                .save(storage_keys::HEALTH, &self.health.to_stored());
            notifications.push(Notification::health_lost(Health::HARMFUL_CHOICE_PENALTY));
            tracing::info!(health = self.health.value(), choice = %choice.text, "Harmful choice");
        }

        let completion = self.story.close_day_if_due();
        if let Some(completion) = completion {
            tracing::info!(day = completion.completed_day, "Day complete");
            notifications.push(Notification::day_complete(completion.completed_day));
        }

        if fatal {
            self.phase = SessionPhase::GameOver;
            notifications.push(Notification::game_over());
            tracing::info!(day = self.story.current_day(), "Game over");
            return Ok(ChoiceResolution {
                notifications,
                next: NextStep::GameOver {
                    return_after: GAME_OVER_RETURN_DELAY,
                },
            });
        }

        let prompt =
            ScenarioPrompt::continue_from(self.story.scenario.clone(), choice.text.clone());
        let turn = self.issue(prompt);
        self.pending = Some(PendingDecision {
            choice_text: choice.text,
            closed_day: completion.is_some(),
        });
        Ok(ChoiceResolution {
            notifications,
            next: NextStep::Generate(turn),
        })
    }

    /// Apply a finished generation request.
    pub fn resolve_turn(&mut self, outcome: TurnOutcome) -> TurnResolution {
        if self.active_ticket != Some(outcome.ticket) {
            tracing::debug!(turn = outcome.ticket.value(), "Dropping stale scenario");
            return TurnResolution::Stale;
        }
        self.active_ticket = None;
        let pending = self.pending.take();

        match outcome.result {
            Ok(generated) => {
                if let Some(decision) = pending {
                    self.story.commit_decision(decision.choice_text, decision.closed_day);
                }
                tracing::debug!(
                    turn = outcome.ticket.value(),
                    choices = generated.choices.len(),
                    "Scenario applied"
                );
                self.story.apply_scenario(generated.scenario, generated.choices);
                TurnResolution::Applied
            }
            Err(e) => {
                tracing::error!(turn = outcome.ticket.value(), error = %e, "Scenario generation failed");
                self.story.apply_fallback();
                TurnResolution::Fallback(Notification::generation_failed(e.to_string()))
            }
        }
    }

    /// Leave the game: forget the character and drop any pending request.
    pub fn exit(&mut self) {
        self.storage.remove(storage_keys::HEALTH);
        self.storage.remove(storage_keys::CHARACTER_NAME);
        self.active_ticket = None;
        self.pending = None;
        self.phase = SessionPhase::NotStarted;
        self.story = StoryState::new();
        self.health = Health::full();
        tracing::info!("Left the game");
    }

    fn issue(&mut self, prompt: ScenarioPrompt) -> ScenarioTurn {
        self.issued += 1;
        let ticket = TurnTicket(self.issued);
        self.active_ticket = Some(ticket);
        ScenarioTurn { ticket, prompt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::NotificationSeverity;
    use crate::infrastructure::platform::mock::MemoryStorageProvider;
    use crate::ports::outbound::{LlmError, MockScenarioGeneratorPort};
    use survive_domain::{Choice, FALLBACK_SCENARIO};

    fn scenario(text: &str, harmful: &[usize]) -> GeneratedScenario {
        GeneratedScenario {
            scenario: text.to_string(),
            choices: (0..5)
                .map(|i| Choice::new(format!("{} option {}", text, i), harmful.contains(&i)))
                .collect(),
        }
    }

    fn ok(turn: &ScenarioTurn, generated: GeneratedScenario) -> TurnOutcome {
        TurnOutcome {
            ticket: turn.ticket,
            result: Ok(generated),
        }
    }

    fn expect_generate(next: NextStep) -> ScenarioTurn {
        match next {
            NextStep::Generate(turn) => turn,
            other => panic!("expected a generation request, got {:?}", other),
        }
    }

    /// Session started with the opening scenario applied
    fn playing(storage: MemoryStorageProvider) -> GameSession<MemoryStorageProvider> {
        let mut session = GameSession::new(storage);
        let turn = session.start();
        assert_eq!(
            session.resolve_turn(ok(&turn, scenario("Opening", &[1, 3]))),
            TurnResolution::Applied
        );
        session
    }

    /// Pick `index`, then answer the follow-up request with a fresh scenario.
    fn pick(session: &mut GameSession<MemoryStorageProvider>, index: usize) -> ChoiceResolution {
        let resolution = session.select_choice(index).unwrap();
        if let NextStep::Generate(turn) = &resolution.next {
            session.resolve_turn(ok(turn, scenario("Next", &[1, 3])));
        }
        resolution
    }

    #[test]
    fn start_restores_stored_health() {
        let storage = MemoryStorageProvider::with_entries([("health", "60")]);
        let mut session = GameSession::new(storage);

        let turn = session.start();

        assert_eq!(session.health().value(), 60);
        assert_eq!(turn.prompt, ScenarioPrompt::Opening);
        assert!(session.is_busy());
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn depleted_stored_health_starts_at_full() {
        let mut session = GameSession::new(MemoryStorageProvider::with_entries([("health", "0")]));

        session.start();

        assert_eq!(session.health(), Health::full());
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn start_defaults_to_full_health() {
        let mut session = GameSession::new(MemoryStorageProvider::new());
        session.start();
        assert_eq!(session.health(), Health::full());
    }

    #[test]
    fn unreadable_stored_health_is_full() {
        for raw in ["abc", "250", "-5", ""] {
            let mut session = GameSession::new(MemoryStorageProvider::with_entries([("health", raw)]));
            session.start();
            assert_eq!(session.health().value(), 100, "stored {:?}", raw);
        }
    }

    #[test]
    fn selecting_before_start_is_rejected() {
        let mut session = GameSession::new(MemoryStorageProvider::new());
        assert_eq!(session.select_choice(0), Err(GameError::NotStarted));
    }

    #[test]
    fn harmful_choice_costs_twenty_and_persists() {
        let storage = MemoryStorageProvider::new();
        let mut session = playing(storage.clone());

        let resolution = session.select_choice(1).unwrap();

        assert_eq!(session.health().value(), 80);
        assert_eq!(storage.load("health").as_deref(), Some("80"));
        assert_eq!(resolution.notifications, vec![Notification::health_lost(20)]);
        let turn = expect_generate(resolution.next);
        assert_eq!(
            turn.prompt,
            ScenarioPrompt::continue_from("Opening", "Opening option 1")
        );
    }

    #[test]
    fn safe_choice_never_changes_health() {
        let storage = MemoryStorageProvider::with_entries([("health", "40")]);
        let mut session = playing(storage.clone());

        for _ in 0..12 {
            let resolution = pick(&mut session, 0);
            assert!(resolution.notifications.iter().all(|n| n.title != "Bad Choice!"));
            assert_eq!(session.health().value(), 40);
        }
        assert_eq!(storage.load("health").as_deref(), Some("40"));
    }

    #[test]
    fn health_follows_max_zero_formula() {
        for n in 0..=5u8 {
            let mut session = playing(MemoryStorageProvider::new());
            for _ in 0..n {
                pick(&mut session, 1);
            }
            let expected = 100u8.saturating_sub(20 * n);
            assert_eq!(session.health().value(), expected, "after {} harmful picks", n);
        }
    }

    #[test]
    fn day_advances_every_five_decisions() {
        let mut session = playing(MemoryStorageProvider::new());

        for decision in 1..=15u32 {
            let resolution = pick(&mut session, 0);
            let day_done = resolution
                .notifications
                .iter()
                .any(|n| n.title == "Day Complete!");

            assert_eq!(day_done, decision % 5 == 0, "decision {}", decision);
            assert_eq!(session.story().current_day(), decision / 5 + 1);
            assert_eq!(session.story().decisions_this_day(), decision % 5);
        }
    }

    #[test]
    fn day_complete_names_the_day_just_survived() {
        let mut session = playing(MemoryStorageProvider::new());
        for _ in 0..4 {
            pick(&mut session, 0);
        }

        let resolution = pick(&mut session, 2);

        assert_eq!(resolution.notifications, vec![Notification::day_complete(1)]);
        assert_eq!(session.story().current_day(), 2);
    }

    #[test]
    fn fifth_harmful_pick_ends_the_game_after_closing_the_day() {
        let storage = MemoryStorageProvider::new();
        let mut session = playing(storage.clone());

        let first = pick(&mut session, 1);
        assert_eq!(session.health().value(), 80);
        assert_eq!(first.notifications.len(), 1);

        for _ in 0..3 {
            pick(&mut session, 3);
        }
        assert_eq!(session.health().value(), 20);

        let last = session.select_choice(1).unwrap();

        assert_eq!(session.health().value(), 0);
        assert_eq!(storage.load("health").as_deref(), Some("0"));
        assert_eq!(
            last.notifications,
            vec![
                Notification::health_lost(20),
                Notification::day_complete(1),
                Notification::game_over(),
            ]
        );
        assert_eq!(
            last.next,
            NextStep::GameOver {
                return_after: Duration::from_secs(3)
            }
        );
        assert_eq!(session.phase(), SessionPhase::GameOver);
        assert!(!session.is_busy());
        assert_eq!(session.select_choice(0), Err(GameError::GameOver));
    }

    #[test]
    fn selection_while_pending_is_rejected() {
        let mut session = playing(MemoryStorageProvider::new());
        session.select_choice(1).unwrap();
        let story_before = session.story().clone();

        assert_eq!(session.select_choice(3), Err(GameError::TurnInProgress));
        assert_eq!(session.health().value(), 80);
        assert_eq!(session.story(), &story_before);
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let mut session = playing(MemoryStorageProvider::new());
        assert_eq!(session.select_choice(5), Err(GameError::NoSuchChoice(5)));
        assert_eq!(session.story().decisions_this_day(), 0);
    }

    #[test]
    fn failed_generation_shows_fallback_and_keeps_counters() {
        let mut session = playing(MemoryStorageProvider::new());
        pick(&mut session, 0);
        let turn = expect_generate(session.select_choice(0).unwrap().next);

        let resolution = session.resolve_turn(TurnOutcome {
            ticket: turn.ticket,
            result: Err(GenerationError::format("Missing 'scenario' field")),
        });

        let TurnResolution::Fallback(notification) = resolution else {
            panic!("expected fallback");
        };
        assert_eq!(notification.severity, NotificationSeverity::Error);
        assert_eq!(notification.duration, Duration::from_secs(5));
        assert_eq!(session.story().scenario, FALLBACK_SCENARIO);
        assert_eq!(session.story().choices.len(), 5);
        assert!(session.story().choices.iter().all(|c| !c.is_bad));
        assert_eq!(session.story().decisions_this_day(), 1);
        assert_eq!(session.story().previous_choices, vec!["Opening option 0"]);
        assert!(!session.is_busy());
    }

    #[test]
    fn fallback_turns_never_advance_the_day() {
        let mut session = playing(MemoryStorageProvider::new());

        for _ in 0..5 {
            let resolution = session.select_choice(0).unwrap();
            assert!(resolution.notifications.is_empty());
            let turn = expect_generate(resolution.next);
            session.resolve_turn(TurnOutcome {
                ticket: turn.ticket,
                result: Err(LlmError::RequestFailed("timeout".into()).into()),
            });
        }

        assert_eq!(session.story().current_day(), 1);
        assert_eq!(session.story().decisions_this_day(), 0);
        assert!(session.story().previous_choices.is_empty());
    }

    #[test]
    fn day_closing_pick_counts_once_its_scenario_arrives() {
        let mut session = playing(MemoryStorageProvider::new());
        for _ in 0..4 {
            pick(&mut session, 0);
        }

        let resolution = session.select_choice(0).unwrap();
        assert_eq!(resolution.notifications, vec![Notification::day_complete(1)]);
        assert_eq!(session.story().current_day(), 2);
        assert_eq!(session.story().previous_choices.len(), 4);

        let turn = expect_generate(resolution.next);
        session.resolve_turn(ok(&turn, scenario("Dawn", &[])));

        assert_eq!(session.story().decisions_this_day(), 0);
        assert_eq!(session.story().previous_choices.len(), 5);
    }

    #[test]
    fn fallback_choices_are_playable() {
        let mut session = GameSession::new(MemoryStorageProvider::new());
        let turn = session.start();
        session.resolve_turn(TurnOutcome {
            ticket: turn.ticket,
            result: Err(LlmError::RequestFailed("timeout".into()).into()),
        });

        let next = expect_generate(session.select_choice(0).unwrap().next);

        assert_eq!(
            next.prompt,
            ScenarioPrompt::continue_from(FALLBACK_SCENARIO, "Try again")
        );
        assert_eq!(session.health().value(), 100);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut session = GameSession::new(MemoryStorageProvider::new());
        let first = session.start();
        let second = session.start();

        assert_eq!(
            session.resolve_turn(ok(&first, scenario("Old", &[]))),
            TurnResolution::Stale
        );
        assert!(session.story().scenario.is_empty());
        assert!(session.is_busy());

        assert_eq!(
            session.resolve_turn(ok(&second, scenario("New", &[]))),
            TurnResolution::Applied
        );
        assert_eq!(session.story().scenario, "New");
    }

    #[test]
    fn completion_after_exit_is_discarded() {
        let storage = MemoryStorageProvider::new();
        let mut session = playing(storage.clone());
        let turn = expect_generate(session.select_choice(0).unwrap().next);

        session.exit();

        assert_eq!(
            session.resolve_turn(ok(&turn, scenario("Late", &[]))),
            TurnResolution::Stale
        );
        assert_eq!(session.phase(), SessionPhase::NotStarted);
    }

    #[test]
    fn exit_clears_persisted_character() {
        let storage =
            MemoryStorageProvider::with_entries([("health", "40"), ("characterName", "Mira")]);
        let mut session = playing(storage.clone());

        session.exit();

        assert!(storage.is_empty());
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn run_passes_the_prompt_to_the_generator() {
        let mut generator = MockScenarioGeneratorPort::new();
        generator
            .expect_generate()
            .withf(|prompt| prompt.is_opening())
            .times(1)
            .returning(|_| Ok(scenario("Dunes", &[0, 4])));

        let mut session = GameSession::new(MemoryStorageProvider::new());
        let turn = session.start();
        let outcome = turn.run(&generator).await;

        assert_eq!(session.resolve_turn(outcome), TurnResolution::Applied);
        assert_eq!(session.story().scenario, "Dunes");
        assert_eq!(session.story().choices.iter().filter(|c| c.is_bad).count(), 2);
    }
}
