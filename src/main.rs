use std::{process::ExitCode, sync::Arc};

use calorie_duel::{app, config::Config, provider::SpoonacularProvider, telemetry};
use tracing::{error, info};

fn main() -> ExitCode {
    telemetry::init_tracing();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let provider = match SpoonacularProvider::new(&config) {
        Ok(provider) => provider,
        Err(err) => {
            error!(%err, "could not set up the recipe client");
            return ExitCode::FAILURE;
        }
    };

    info!(
        api_base = %config.api_base,
        reveal_ms = config.reveal_delay.as_millis() as u64,
        "starting calorie duel"
    );
    app::run(Arc::new(provider), config.reveal_delay);
    ExitCode::SUCCESS
}
