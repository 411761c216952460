//! Client settings: defaults, then `calculator.toml`, then environment.

use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7001/api/probabilities";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const SETTINGS_FILE_NAME: &str = "calculator.toml";

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("invalid calculation service URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("calculation service URL '{value}' must use http or https")]
    UnsupportedScheme { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Applies a command line `--api-url`, which wins over every other source.
    pub fn with_api_url_override(mut self, raw: Option<&str>) -> Result<Self, SettingsError> {
        if let Some(raw) = raw {
            self.api_base_url = normalize_base_url(raw)?;
        }
        Ok(self)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE_NAME), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    settings_file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(settings_file) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_base_url {
                    apply_base_url(&mut settings, &v, "settings file");
                }
                match file_cfg.request_timeout_secs {
                    Some(v) if v > 0 => settings.request_timeout_secs = v,
                    Some(v) => tracing::warn!(
                        value = v,
                        "ignoring non-positive request_timeout_secs in settings file"
                    ),
                    None => {}
                }
            }
            Err(err) => tracing::warn!(
                path = %settings_file.display(),
                "ignoring unreadable settings file: {err}"
            ),
        }
    }

    if let Some(v) = env("CALCULATOR_API_URL") {
        apply_base_url(&mut settings, &v, "CALCULATOR_API_URL");
    }
    if let Some(v) = env("APP__API_URL") {
        apply_base_url(&mut settings, &v, "APP__API_URL");
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) if parsed > 0 => settings.request_timeout_secs = parsed,
            _ => tracing::warn!(value = %v, "ignoring invalid APP__REQUEST_TIMEOUT_SECS"),
        }
    }

    settings
}

fn apply_base_url(settings: &mut ClientSettings, raw: &str, source: &str) {
    if raw.trim().is_empty() {
        return;
    }
    match normalize_base_url(raw) {
        Ok(url) => settings.api_base_url = url,
        Err(err) => tracing::warn!(source, "keeping previous calculation service URL: {err}"),
    }
}

/// Trims whitespace and trailing slashes, then checks the result is an http(s) URL.
pub fn normalize_base_url(raw: &str) -> Result<String, SettingsError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|source| SettingsError::InvalidBaseUrl {
        value: trimmed.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SettingsError::UnsupportedScheme {
            value: trimmed.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
