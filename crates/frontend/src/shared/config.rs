//! Runtime configuration for the frontend
//!
//! The upload endpoint is injected through Leptos context instead of living
//! inside the submission code.

use contracts::shared::config::{load_config, AppConfig, ConfigOverrides, IntakeConfig};
use leptos::prelude::*;

/// Build-time override, e.g. `WORKALERT_UPLOAD_ENDPOINT=http://localhost:5000/api/upload trunk serve`
const ENDPOINT_OVERRIDE: Option<&str> = option_env!("WORKALERT_UPLOAD_ENDPOINT");
/// Build-time override of the health probe URL; derived from the endpoint when unset.
const HEALTH_ENDPOINT_OVERRIDE: Option<&str> = option_env!("WORKALERT_HEALTH_ENDPOINT");

/// Load the configuration, falling back to the embedded defaults.
pub fn load_app_config() -> AppConfig {
    let overrides = ConfigOverrides {
        endpoint: ENDPOINT_OVERRIDE,
        health_endpoint: HEALTH_ENDPOINT_OVERRIDE,
    };
    match load_config(overrides) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, using defaults: {:#}", e);
            AppConfig::default()
        }
    }
}

pub fn provide_app_config(config: AppConfig) {
    log::info!("Upload endpoint: {}", config.intake.endpoint);
    provide_context(config);
}

/// Intake section of the provided configuration.
pub fn use_intake_config() -> IntakeConfig {
    use_context::<AppConfig>()
        .unwrap_or_else(|| {
            log::warn!("AppConfig context not found, using defaults");
            AppConfig::default()
        })
        .intake
}
