//! Start menu route

use dioxus::prelude::*;
use survive_player::Platform;

use super::Route;
use crate::presentation::state::use_theme_state;

#[component]
pub fn StartMenuRoute() -> Element {
    let navigator = use_navigator();
    let platform = use_context::<Platform>();
    let mut theme = use_theme_state();

    use_effect(move || {
        platform.set_page_title("Survive The AI");
    });

    let sound_effects = theme.sound_effects_enabled();
    let dark_mode = theme.is_dark();

    rsx! {
        div {
            class: "screen start-menu",
            h1 { class: "title", "Survive The AI" }

            div {
                class: "panel settings",
                label {
                    class: "toggle",
                    r#for: "sound-toggle",
                    "Sound Effects"
                    input {
                        id: "sound-toggle",
                        r#type: "checkbox",
                        checked: sound_effects,
                        onchange: move |_| theme.toggle_sound_effects(),
                    }
                }
                label {
                    class: "toggle",
                    r#for: "theme-toggle",
                    "Dark Mode"
                    input {
                        id: "theme-toggle",
                        r#type: "checkbox",
                        checked: dark_mode,
                        onchange: move |_| theme.toggle_dark_mode(),
                    }
                }
            }

            div {
                class: "panel controls",
                h2 { "Controls" }
                p { "Use mouse to select choices" }
                p { "Press ESC to pause" }
            }

            button {
                class: "primary",
                onclick: move |_| {
                    navigator.push(Route::CharacterCreationRoute {});
                },
                "Start Game"
            }
        }
    }
}
