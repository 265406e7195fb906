//! Configuration for the sample clients
//!
//! Each sample source talks to its own host, so a [`ClientConfig`] is built
//! per [`Source`]. Values come from built-in defaults, environment variables,
//! or a `samplekit.toml` settings file.

use crate::error::{ApiError, ApiResult};
use samplekit_core::config::Settings;
use std::env;
use std::fmt;
use std::time::Duration;

/// Default request and connect timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = "samplekit-api-client/1.0";

/// Environment variable for the request timeout in seconds
pub const TIMEOUT_ENV: &str = "SAMPLEKIT_TIMEOUT_SECS";

/// Environment variable enabling response body logging
pub const LOG_BODIES_ENV: &str = "SAMPLEKIT_LOG_BODIES";

/// The remote sources the samples fetch from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Employee directory
    Employees,
    /// Placeholder posts
    Posts,
    /// Picture list
    Pictures,
    /// Wallpaper repository browser
    Repos,
}

impl Source {
    /// All sources
    pub const ALL: [Source; 4] = [Self::Employees, Self::Posts, Self::Pictures, Self::Repos];

    /// Lowercase name used in settings files and metrics
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Posts => "posts",
            Self::Pictures => "pictures",
            Self::Repos => "repos",
        }
    }

    /// Built-in base URL; the repository browser has none
    #[must_use]
    pub fn default_base_url(self) -> Option<&'static str> {
        match self {
            Self::Employees => Some("https://s3.amazonaws.com/sq-mobile-interview/"),
            Self::Posts => Some("https://jsonplaceholder.typicode.com/"),
            Self::Pictures => Some("https://picsum.photos/v2/"),
            Self::Repos => None,
        }
    }

    /// Environment variable overriding the base URL
    #[must_use]
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Employees => "SAMPLEKIT_EMPLOYEES_URL",
            Self::Posts => "SAMPLEKIT_POSTS_URL",
            Self::Pictures => "SAMPLEKIT_PICTURES_URL",
            Self::Repos => "SAMPLEKIT_REPOS_URL",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is joined onto
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Log response bodies at trace level
    pub log_bodies: bool,
}

impl ClientConfig {
    /// Create configuration for an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_bodies: false,
        }
    }

    /// Create configuration with a source's built-in base URL
    ///
    /// [`Source::Repos`] has no default and fails validation until a base URL
    /// is set.
    #[must_use]
    pub fn for_source(source: Source) -> Self {
        Self::new(source.default_base_url().unwrap_or_default())
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SAMPLEKIT_<SOURCE>_URL`: base URL override for the source
    /// - `SAMPLEKIT_TIMEOUT_SECS`: request and connect timeout in seconds
    /// - `SAMPLEKIT_LOG_BODIES`: `1`/`true` to log response bodies
    pub fn from_env(source: Source) -> ApiResult<Self> {
        Self::from_lookup(source, |key| env::var(key).ok())
    }

    /// Create configuration from any key/value lookup
    pub fn from_lookup<F>(source: Source, lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::for_source(source);

        if let Some(url) = lookup(source.env_var()) {
            config.base_url = url;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::config(format!(
                    "{TIMEOUT_ENV} must be a number of seconds, got `{raw}`"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
            config.connect_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(LOG_BODIES_ENV) {
            config.log_bodies = matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from a loaded settings file
    pub fn from_settings(source: Source, settings: &Settings) -> ApiResult<Self> {
        let mut config = Self::for_source(source)
            .with_timeout(Duration::from_secs(settings.http.timeout_secs))
            .with_connect_timeout(Duration::from_secs(settings.http.connect_timeout_secs))
            .with_user_agent(settings.http.user_agent.clone())
            .with_log_bodies(settings.http.log_bodies);

        if let Some(url) = settings.endpoints.get(source.name()) {
            config.base_url = url.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the connect timeout
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Builder-style method to set the User-Agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builder-style method to toggle body logging
    #[must_use]
    pub fn with_log_bodies(mut self, enabled: bool) -> Self {
        self.log_bodies = enabled;
        self
    }

    /// Join a request path onto the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        if self.connect_timeout.is_zero() {
            return Err(ApiError::config("connect_timeout cannot be zero"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ApiError::config("user_agent cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samplekit_core::config::Config;
    use std::collections::HashMap;

    #[test]
    fn test_source_defaults() {
        let config = ClientConfig::for_source(Source::Employees);
        assert_eq!(config.base_url, "https://s3.amazonaws.com/sq-mobile-interview/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_repos_requires_base_url() {
        let config = ClientConfig::for_source(Source::Repos);
        assert!(config.validate().is_err());

        let config = config.with_base_url("https://wallpapers.example.com/api/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_url_for_joins_single_slash() {
        let config = ClientConfig::for_source(Source::Posts);
        assert_eq!(config.url_for("posts"), "https://jsonplaceholder.typicode.com/posts");
        assert_eq!(config.url_for("/posts"), "https://jsonplaceholder.typicode.com/posts");

        let bare = ClientConfig::new("http://localhost:8080");
        assert_eq!(bare.url_for("list"), "http://localhost:8080/list");
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SAMPLEKIT_PICTURES_URL", "http://localhost:9000/v2/"),
            (TIMEOUT_ENV, "5"),
            (LOG_BODIES_ENV, "true"),
        ]);

        let config =
            ClientConfig::from_lookup(Source::Pictures, |k| vars.get(k).map(ToString::to_string))
                .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/v2/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.log_bodies);
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let result = ClientConfig::from_lookup(Source::Posts, |k| {
            (k == TIMEOUT_ENV).then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_from_settings() {
        let config = Config::from_toml_str(
            r#"
[http]
timeout_secs = 12
user_agent = "samplekit-tests"

[endpoints]
repos = "http://localhost:4000/"
"#,
        )
        .unwrap();

        let repos = ClientConfig::from_settings(Source::Repos, &config.settings).unwrap();
        assert_eq!(repos.base_url, "http://localhost:4000/");
        assert_eq!(repos.timeout, Duration::from_secs(12));
        assert_eq!(repos.user_agent, "samplekit-tests");

        let posts = ClientConfig::from_settings(Source::Posts, &config.settings).unwrap();
        assert_eq!(posts.base_url, "https://jsonplaceholder.typicode.com/");
    }

    #[test]
    fn test_validation() {
        let invalid = ClientConfig::new("ftp://example.com");
        assert!(invalid.validate().is_err());

        let zero = ClientConfig::for_source(Source::Posts).with_timeout(Duration::ZERO);
        assert!(zero.validate().is_err());
    }
}
