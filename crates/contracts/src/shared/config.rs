use anyhow::{bail, Context};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub intake: IntakeConfig,
}

/// Where and how the intake form submits.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IntakeConfig {
    /// Multipart upload endpoint.
    pub endpoint: String,
    /// Health probe; derived from `endpoint` when absent.
    #[serde(default)]
    pub health_endpoint: Option<String>,
    /// File picker hint, not enforced.
    pub accepted_extensions: Vec<String>,
    /// Displayed size hint, not enforced.
    pub max_file_size_hint_mb: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[intake]
endpoint = "https://workalert.fly.dev/api/upload"
accepted_extensions = [".pdf", ".doc", ".docx"]
max_file_size_hint_mb = 5
"#;

/// Build-time overrides of the embedded defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides<'a> {
    /// Typically `option_env!("WORKALERT_UPLOAD_ENDPOINT")`.
    pub endpoint: Option<&'a str>,
    /// Typically `option_env!("WORKALERT_HEALTH_ENDPOINT")`.
    pub health_endpoint: Option<&'a str>,
}

/// Load the embedded configuration and apply the non-blank overrides.
pub fn load_config(overrides: ConfigOverrides<'_>) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig =
        toml::from_str(DEFAULT_CONFIG).context("embedded default config is invalid")?;

    if let Some(endpoint) = non_blank(overrides.endpoint) {
        log::info!("Using upload endpoint override: {}", endpoint);
        config.intake.endpoint = endpoint.to_string();
    }
    if let Some(health) = non_blank(overrides.health_endpoint) {
        log::info!("Using health endpoint override: {}", health);
        config.intake.health_endpoint = Some(health.to_string());
    }

    validate_endpoint(&config.intake.endpoint)?;
    if let Some(health) = &config.intake.health_endpoint {
        validate_endpoint(health)?;
    }
    Ok(config)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn validate_endpoint(url: &str) -> anyhow::Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
        _ => bail!("endpoint must be an absolute http(s) URL, got {:?}", url),
    }
}

impl IntakeConfig {
    /// `accept` attribute value for the CV file input.
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions.join(",")
    }

    /// Hint text shown under the file picker, e.g. "Accepts PDF, DOC, DOCX (Max 5MB)".
    pub fn file_hint(&self) -> String {
        let kinds: Vec<String> = self
            .accepted_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_uppercase())
            .collect();
        format!(
            "Accepts {} (Max {}MB)",
            kinds.join(", "),
            self.max_file_size_hint_mb
        )
    }

    /// Health probe URL: the sibling `health` path of the upload endpoint.
    pub fn health_url(&self) -> String {
        if let Some(explicit) = &self.health_endpoint {
            return explicit.clone();
        }
        let base = self.endpoint.trim_end_matches('/');
        match base.rsplit_once('/') {
            Some((parent, _)) if parent.contains("://") && !parent.ends_with('/') => {
                format!("{}/health", parent)
            }
            _ => format!("{}/health", base),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        // The embedded TOML is covered by tests.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| AppConfig {
            intake: IntakeConfig {
                endpoint: "https://workalert.fly.dev/api/upload".to_string(),
                health_endpoint: None,
                accepted_extensions: vec![".pdf".into(), ".doc".into(), ".docx".into()],
                max_file_size_hint_mb: 5,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(url: &str) -> ConfigOverrides<'_> {
        ConfigOverrides {
            endpoint: Some(url),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_loads() {
        let config = load_config(ConfigOverrides::default()).unwrap();
        assert_eq!(config.intake.endpoint, "https://workalert.fly.dev/api/upload");
        assert_eq!(config.intake.accept_attribute(), ".pdf,.doc,.docx");
        assert_eq!(config.intake.file_hint(), "Accepts PDF, DOC, DOCX (Max 5MB)");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_endpoint_override() {
        let config = load_config(endpoint("  http://localhost:5000/api/upload ")).unwrap();
        assert_eq!(config.intake.endpoint, "http://localhost:5000/api/upload");

        let blank = load_config(endpoint("   ")).unwrap();
        assert_eq!(blank.intake.endpoint, "https://workalert.fly.dev/api/upload");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        assert!(load_config(endpoint("ftp://example.com/upload")).is_err());
        assert!(load_config(endpoint("https://")).is_err());
    }

    #[test]
    fn test_health_url() {
        let config = load_config(ConfigOverrides::default()).unwrap();
        assert_eq!(config.intake.health_url(), "https://workalert.fly.dev/api/health");

        let local = load_config(endpoint("http://localhost:8000/upload")).unwrap();
        assert_eq!(local.intake.health_url(), "http://localhost:8000/health");

        let bare = load_config(endpoint("http://localhost:8000")).unwrap();
        assert_eq!(bare.intake.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_health_endpoint_override() {
        let config = load_config(ConfigOverrides {
            endpoint: Some("http://localhost:5000/api/upload"),
            health_endpoint: Some(" http://localhost:5000/status "),
        })
        .unwrap();
        assert_eq!(
            config.intake.health_endpoint.as_deref(),
            Some("http://localhost:5000/status")
        );
        assert_eq!(config.intake.health_url(), "http://localhost:5000/status");

        let blank = load_config(ConfigOverrides {
            health_endpoint: Some(""),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(blank.intake.health_endpoint, None);
    }

    #[test]
    fn test_invalid_health_override_is_rejected() {
        let result = load_config(ConfigOverrides {
            health_endpoint: Some("localhost/health"),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
