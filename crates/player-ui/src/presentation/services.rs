//! Service providers for the presentation layer
//!
//! The composition root hands a [`Services`] bundle to the launcher as
//! context; components reach it through the hooks below rather than naming
//! infrastructure types.

use dioxus::prelude::*;
use std::sync::Arc;

use survive_player::ports::outbound::ScenarioGeneratorPort;

#[derive(Clone)]
pub struct Services {
    pub scenario_generator: Arc<dyn ScenarioGeneratorPort>,
}

impl Services {
    pub fn new(scenario_generator: Arc<dyn ScenarioGeneratorPort>) -> Self {
        Self { scenario_generator }
    }
}

/// Hook to access the scenario generator from context
pub fn use_scenario_generator() -> Arc<dyn ScenarioGeneratorPort> {
    let services = use_context::<Services>();
    services.scenario_generator.clone()
}
