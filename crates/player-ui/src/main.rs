//! Survive The AI - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use survive_player::infrastructure::{platform::create_platform, LlmConfig, OpenAiClient};
use survive_player::{LlmScenarioGenerator, Platform};
use survive_player_ui::presentation::Services;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        survive_player::infrastructure::config::load_dotenv_from_repo_root();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    "survive_player=debug,survive_player_ui=debug,dioxus=info".into()
                }),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = LlmConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; requests will be sent without a bearer token");
    }
    tracing::info!(
        model = %config.model,
        base_url = %config.base_url,
        "Starting Survive The AI"
    );

    // LLM
    let llm = Arc::new(OpenAiClient::new(&config));
    let generator = Arc::new(LlmScenarioGenerator::new(llm));

    // Platform
    let platform = create_platform();

    launch(platform, Services::new(generator));
    Ok(())
}

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn launch(platform: Platform, services: Services) {
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    {
        let window = dioxus::desktop::WindowBuilder::new().with_title("Survive The AI");
        builder = builder.with_cfg(dioxus::desktop::Config::new().with_window(window));
    }

    builder
        .with_context(platform)
        .with_context(services)
        .launch(survive_player_ui::app);
}

#[cfg(not(any(feature = "desktop", target_arch = "wasm32")))]
fn launch(_platform: Platform, _services: Services) {
    tracing::error!(
        "No renderer compiled in; run with `cargo run -p survive-player-ui --features desktop`"
    );
}
