//! Health bar

use dioxus::prelude::*;
use survive_domain::Health;

/// Colour class for the bar: green above the healthy threshold, red otherwise
pub fn health_bar_tone(health: Health) -> &'static str {
    if health.is_healthy() {
        "green"
    } else {
        "red"
    }
}

#[component]
pub fn HealthBar(health: Health) -> Element {
    let value = health.value();
    let max = Health::MAX;
    let tone = health_bar_tone(health);

    rsx! {
        div {
            class: "health-bar",
            "role": "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "{max}",
            "aria-valuenow": "{value}",
            div {
                class: "health-bar-fill {tone}",
                style: "width: {value}%;",
            }
        }
        p { class: "health-label", "{health}" }
    }
}
