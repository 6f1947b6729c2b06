//! Application services
//!
//! - `CharacterService`: seeds and clears the persisted character
//! - `GameSession`: the turn state machine behind the game screen
//! - `LlmScenarioGenerator`: scenario generation over an `LlmPort`

pub mod character_service;
pub mod game_session;
pub mod scenario_generator;

pub use character_service::CharacterService;
pub use game_session::{
    ChoiceResolution, GameError, GameSession, NextStep, ScenarioTurn, SessionPhase, TurnOutcome,
    TurnResolution, TurnTicket, GAME_OVER_RETURN_DELAY,
};
pub use scenario_generator::LlmScenarioGenerator;
