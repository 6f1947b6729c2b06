//! Game route - the survival loop

use std::sync::Arc;

use dioxus::prelude::*;
use survive_player::application::services::{ScenarioTurn, SessionPhase};
use survive_player::ports::outbound::ScenarioGeneratorPort;
use survive_player::state::PlatformStorageAdapter;
use survive_player::{GameSession, NextStep, Platform, TurnResolution};

use super::Route;
use crate::presentation::components::HealthBar;
use crate::presentation::services::use_scenario_generator;
use crate::presentation::state::{use_toast_state, ToastState};

type Session = GameSession<PlatformStorageAdapter>;

/// Run one generation request and apply its outcome to the session.
async fn play_turn(
    mut session: Signal<Session>,
    generator: Arc<dyn ScenarioGeneratorPort>,
    mut toasts: ToastState,
    turn: ScenarioTurn,
) {
    let outcome = turn.run(generator.as_ref()).await;
    if let TurnResolution::Fallback(notification) = session.write().resolve_turn(outcome) {
        toasts.push(notification);
    }
}

#[component]
pub fn GameRoute() -> Element {
    let navigator = use_navigator();
    let platform = use_context::<Platform>();
    let generator = use_scenario_generator();
    let mut toasts = use_toast_state();
    let mut session = use_signal(|| GameSession::new(platform.storage_adapter()));

    // Opening scenario on mount
    {
        let generator = generator.clone();
        let platform = platform.clone();
        use_effect(move || {
            platform.set_page_title("Survive The AI");
            let turn = session.write().start();
            spawn(play_turn(session, generator.clone(), toasts, turn));
        });
    }

    let on_choice = {
        let platform = platform.clone();
        use_callback(move |index: usize| {
            let resolution = match session.write().select_choice(index) {
                Ok(resolution) => resolution,
                Err(e) => {
                    tracing::debug!(index, error = %e, "Choice ignored");
                    return;
                }
            };

            for notification in resolution.notifications {
                toasts.push(notification);
            }

            match resolution.next {
                NextStep::Generate(turn) => {
                    spawn(play_turn(session, generator.clone(), toasts, turn));
                }
                NextStep::GameOver { return_after } => {
                    let platform = platform.clone();
                    spawn(async move {
                        let delay_ms = u64::try_from(return_after.as_millis()).unwrap_or(u64::MAX);
                        platform.sleep_ms(delay_ms).await;
                        session.write().exit();
                        navigator.push(Route::StartMenuRoute {});
                    });
                }
            }
        })
    };

    let on_home = move |_: MouseEvent| {
        session.write().exit();
        navigator.push(Route::StartMenuRoute {});
    };

    let (day, scenario, choices, health, busy, over) = {
        let state = session.read();
        let story = state.story();
        (
            story.current_day(),
            story.scenario.clone(),
            story.choices.clone(),
            state.health(),
            state.is_busy(),
            state.phase() == SessionPhase::GameOver,
        )
    };

    let choice_class = if busy { "choice pending" } else { "choice" };

    rsx! {
        div {
            class: "screen game",

            h1 { class: "day-heading", "Day {day}" }

            div {
                class: "status-row",
                div {
                    class: "health",
                    h2 { "Health" }
                    HealthBar { health }
                }
                button {
                    class: "secondary",
                    onclick: on_home,
                    "Home"
                }
            }

            div {
                class: "panel scenario",
                h2 { "Current Scenario" }
                if busy {
                    p { class: "loading", "Loading..." }
                } else {
                    p { "{scenario}" }
                }
            }

            div {
                class: "choices",
                for (index, choice) in choices.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: choice_class,
                        disabled: busy || over,
                        "aria-busy": busy,
                        onclick: move |_| on_choice.call(index),
                        if busy {
                            span { class: "spinner" }
                        } else {
                            "{choice.text}"
                        }
                    }
                }
            }
        }
    }
}
