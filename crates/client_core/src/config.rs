use std::{fs, io, path::Path};

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const SETTINGS_FILE: &str = "flashcards.toml";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

const API_URL_ENV_VARS: [&str; 2] = ["FLASHCARDS_API_URL", "APP__API_URL"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    api_url: Option<String>,
}

/// Loads settings from `flashcards.toml` in the working directory, then the
/// process environment.
pub fn load_settings() -> Result<ClientSettings, ConfigError> {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

/// Layers defaults, the settings file (if present) and environment lookups.
/// Later layers win; the resulting url is normalized.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, ConfigError> {
    let mut settings = ClientSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: SettingsFile =
                toml::from_str(&raw).map_err(|source| ConfigError::ParseSettings {
                    path: path.to_path_buf(),
                    source,
                })?;
            if let Some(v) = file_cfg.api_url {
                settings.api_url = v;
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(ConfigError::ReadSettings {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    for name in API_URL_ENV_VARS {
        if let Some(v) = env(name) {
            settings.api_url = v;
        }
    }

    settings.api_url = normalize_api_url(&settings.api_url)?;
    Ok(settings)
}

/// Trims whitespace and trailing slashes, then checks the url is an http(s)
/// base the card routes can be appended to.
pub fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyApiUrl);
    }
    parse_api_url(trimmed)?;
    Ok(trimmed.to_string())
}

pub(crate) fn parse_api_url(api_url: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(api_url).map_err(|source| ConfigError::InvalidApiUrl {
        url: api_url.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            url: api_url.to_string(),
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
