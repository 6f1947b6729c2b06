//! Route table

use dioxus::prelude::*;

mod character_creation;
mod game;
mod start_menu;

pub use character_creation::CharacterCreationRoute;
pub use game::GameRoute;
pub use start_menu::StartMenuRoute;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    StartMenuRoute {},
    #[route("/character-creation")]
    CharacterCreationRoute {},
    #[route("/game")]
    GameRoute {},
}
