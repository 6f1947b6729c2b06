//! Character creation route

use dioxus::prelude::*;
use survive_player::{CharacterService, Platform};

use super::Route;

/// Whether the typed name is enough to start a run
fn can_begin(name: &str) -> bool {
    !name.trim().is_empty()
}

#[component]
pub fn CharacterCreationRoute() -> Element {
    let navigator = use_navigator();
    let platform = use_context::<Platform>();
    let characters = use_hook(|| CharacterService::new(platform.storage_adapter()));
    let mut name = use_signal(String::new);

    let title_platform = platform.clone();
    use_effect(move || {
        title_platform.set_page_title("Create Your Character");
    });

    let ready = can_begin(&name.read());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !can_begin(&name.read()) {
            return;
        }
        match characters.create(&name.read()) {
            Ok(created) => {
                tracing::debug!(character = %created.as_str(), "Starting game");
                navigator.push(Route::GameRoute {});
            }
            Err(e) => {
                tracing::warn!(error = %e, "Character rejected");
            }
        }
    };

    rsx! {
        form {
            class: "screen character-creation",
            onsubmit: on_submit,
            h1 { class: "title", "Create Your Character" }

            div {
                class: "panel",
                label {
                    r#for: "character-name",
                    "Character Name"
                }
                input {
                    id: "character-name",
                    r#type: "text",
                    placeholder: "Enter your character's name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                p {
                    class: "hint",
                    "Your character starts with 100 health points. Choose wisely in the game to survive!"
                }
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: !ready,
                "Begin Adventure"
            }
        }
    }
}
