//! One-shot runners, startup configuration and logging setup

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use crate::application::ports::{ConfigStore, GenerationError};
use crate::application::{AdviceUseCase, MusicRecommendationUseCase, RecommendationCache};
use crate::domain::config::AppConfig;
use crate::domain::profile::Mood;
use crate::infrastructure::{GeminiGenerator, SystemClock, XdgConfigStore};

use super::args::AdviceArgs;
use super::presenter::Presenter;
use super::session::{show_advice, show_music, MusicOutcome, ADVICE_SPINNER, MUSIC_SPINNER};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

const MISSING_API_KEY: &str = "Missing API key. Set GEMINI_API_KEY (or GOOGLE_API_KEY) or run 'life-coach config set api_key <key>'";

/// Install the stderr log subscriber.
///
/// Defaults to warnings only; `verbose` enables this crate's debug logs.
/// `RUST_LOG` overrides both.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        concat!("warn,", env!("CARGO_CRATE_NAME"), "=debug")
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        api_key: api_key_from_env(),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|key| !key.trim().is_empty())
}

/// The configured API key; its absence is a startup error
pub fn require_api_key(config: &AppConfig) -> Result<String, String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| MISSING_API_KEY.to_string())
}

/// Create the Gemini adapter from configuration
pub fn build_generator(
    config: &AppConfig,
    api_key: String,
) -> Result<GeminiGenerator, GenerationError> {
    GeminiGenerator::new(api_key)
        .with_model(config.model_or_default())
        .with_base_url(config.base_url_or_default())
        .with_timeout(config.timeout_or_default().as_std())
}

/// API key check plus adapter construction, as one user-facing error
pub fn configured_generator(config: &AppConfig) -> Result<GeminiGenerator, String> {
    let api_key = require_api_key(config)?;
    build_generator(config, api_key).map_err(|e| e.to_string())
}

/// Run a one-shot advice request
pub async fn run_advice(args: AdviceArgs, config: &AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let generator = match configured_generator(config) {
        Ok(generator) => generator,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let form = match args.to_form() {
        Ok(form) => form,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let use_case = AdviceUseCase::new(generator);
    let request = form.snapshot();

    // Incomplete requests fail without ever showing the spinner
    if !request.is_complete() {
        return ExitCode::from(show_advice(&presenter, use_case.dispatch_advice(&request).await));
    }

    presenter.start_spinner(ADVICE_SPINNER);
    let result = use_case.dispatch_advice(&request).await;
    presenter.stop_spinner();

    ExitCode::from(show_advice(&presenter, result))
}

/// Run a one-shot music recommendation
pub async fn run_music(mood: Mood, config: &AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let generator = match configured_generator(config) {
        Ok(generator) => generator,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let cache = Arc::new(RecommendationCache::new(
        SystemClock,
        config.cache_ttl_or_default().as_std(),
    ));
    let use_case = MusicRecommendationUseCase::new(generator, cache);

    presenter.start_spinner(MUSIC_SPINNER);
    let outcome = match use_case.get_recommendations(mood).await {
        Some(text) => MusicOutcome::Recommendations { mood, text },
        None => MusicOutcome::Unavailable { mood },
    };
    presenter.stop_spinner();

    ExitCode::from(show_music(&presenter, &outcome))
}
