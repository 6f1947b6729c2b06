//! Start-menu settings

use dioxus::prelude::*;

/// Presentation toggles from the start menu.
///
/// Sound effects are remembered but nothing plays sound yet.
#[derive(Clone, Copy)]
pub struct ThemeState {
    dark_mode: Signal<bool>,
    sound_effects: Signal<bool>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            dark_mode: Signal::new(false),
            sound_effects: Signal::new(true),
        }
    }

    pub fn is_dark(&self) -> bool {
        *self.dark_mode.read()
    }

    pub fn toggle_dark_mode(&mut self) {
        let dark = self.is_dark();
        self.dark_mode.set(!dark);
    }

    pub fn sound_effects_enabled(&self) -> bool {
        *self.sound_effects.read()
    }

    pub fn toggle_sound_effects(&mut self) {
        let enabled = self.sound_effects_enabled();
        self.sound_effects.set(!enabled);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme_state() -> ThemeState {
    use_context::<ThemeState>()
}
