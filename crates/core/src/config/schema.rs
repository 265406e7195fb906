//! Settings schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root settings schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// `[http]` client settings
    #[serde(default)]
    pub http: HttpSettings,

    /// `[endpoints]` base URL overrides
    #[serde(default)]
    pub endpoints: EndpointSettings,

    /// `[logging]` settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Reject values no client could run with
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_config_value(
                "http.timeout_secs",
                "must be greater than zero",
            ));
        }
        if self.http.connect_timeout_secs == 0 {
            return Err(Error::invalid_config_value(
                "http.connect_timeout_secs",
                "must be greater than zero",
            ));
        }

        for (key, value) in self.endpoints.iter() {
            if let Some(url) = value {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(Error::invalid_config_value(
                        &format!("endpoints.{key}"),
                        "must start with http:// or https://",
                    ));
                }
            }
        }

        Ok(())
    }
}

/// HTTP transport settings shared by all sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Log response bodies at trace level
    #[serde(default)]
    pub log_bodies: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            log_bodies: false,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "samplekit/1.0".to_string()
}

/// Base URL overrides per sample source
///
/// `None` keeps the source's built-in default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EndpointSettings {
    /// Employee directory base URL
    pub employees: Option<String>,
    /// Placeholder posts base URL
    pub posts: Option<String>,
    /// Picture list base URL
    pub pictures: Option<String>,
    /// Repository browser base URL
    pub repos: Option<String>,
}

impl EndpointSettings {
    /// Iterate `(source name, override)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("employees", self.employees.as_deref()),
            ("posts", self.posts.as_deref()),
            ("pictures", self.pictures.as_deref()),
            ("repos", self.repos.as_deref()),
        ]
        .into_iter()
    }

    /// Look up the override for a source by name
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == source)
            .and_then(|(_, url)| url)
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of the compact format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_lookup() {
        let endpoints = EndpointSettings {
            posts: Some("http://localhost:3000/".to_string()),
            ..Default::default()
        };

        assert_eq!(endpoints.get("posts"), Some("http://localhost:3000/"));
        assert_eq!(endpoints.get("employees"), None);
        assert_eq!(endpoints.get("unknown"), None);
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let settings = Settings {
            endpoints: EndpointSettings {
                pictures: Some("ftp://picsum.photos/v2/".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = settings.validate().unwrap_err();
        assert!(err.message.contains("endpoints.pictures"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("[logging]\njson = true\n").unwrap();
        assert!(settings.logging.json);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.http.user_agent, "samplekit/1.0");
    }
}
