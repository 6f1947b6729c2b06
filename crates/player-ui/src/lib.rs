//! Survive The AI - Dioxus screens and routing.

use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use presentation::components::ToastHost;
use presentation::state::{ThemeState, ToastState};

const APP_CSS: &str = include_str!("../assets/style.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // These must be created inside an active Dioxus runtime.
    use_context_provider(ToastState::new);
    let theme = use_context_provider(ThemeState::new);

    let theme_class = if theme.is_dark() { "app dark" } else { "app light" };

    rsx! {
        style { {APP_CSS} }

        div {
            class: theme_class,
            Router::<Route> {}
            ToastHost {}
        }
    }
}
