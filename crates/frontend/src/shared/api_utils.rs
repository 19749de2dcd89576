//! API utilities for talking to the WorkAlert service
//!
//! The service lives on another origin; every URL comes from the injected
//! configuration (see `shared::config`).

use contracts::domain::a001_job_alert_intake::HealthStatus;
use gloo_net::http::Request;

/// Probe the service health endpoint
///
/// # Example
/// ```rust,ignore
/// let health = fetch_health(&use_intake_config().health_url()).await?;
/// ```
pub async fn fetch_health(url: &str) -> Result<HealthStatus, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Health check failed: {}", response.status()));
    }

    response
        .json::<HealthStatus>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
