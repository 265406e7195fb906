//! Settings file loading

use super::schema::Settings;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

/// Locations searched, in order, when no explicit path is given
pub const CONFIG_CANDIDATES: [&str; 3] = [
    ".samplekit.toml",
    "samplekit.toml",
    ".config/samplekit.toml",
];

/// Loaded settings plus the file they came from
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings, defaults when no file was found
    pub settings: Settings,
    /// File the settings came from
    pub path: Option<String>,
}

impl Config {
    /// Load settings from a file path or fall back to defaults
    ///
    /// An explicit path must exist. Without one, the first existing entry of
    /// [`CONFIG_CANDIDATES`] is used, and defaults apply when none exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !Path::new(p).exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_string()),
            None => find_config_file(Path::new(".")),
        };

        let settings = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => Settings::default(),
        };

        Ok(Self {
            settings,
            path: config_path,
        })
    }

    /// Load settings from the first candidate file found under `dir`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = find_config_file(dir);
        let settings = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => Settings::default(),
        };

        Ok(Self {
            settings,
            path: config_path,
        })
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(Self {
            settings,
            path: None,
        })
    }
}

fn find_config_file(dir: &Path) -> Option<String> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|candidate| candidate.exists())
        .map(|candidate| candidate.to_string_lossy().into_owned())
}

fn load_config_file(path: &str) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {path}"))?;

    let settings: Settings = toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {path}"))?;

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.settings.http.timeout_secs, 30);
    }

    #[test]
    fn test_config_load_from_empty_dir() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap();
        assert!(config.path.is_none());
        assert!(config.settings.endpoints.repos.is_none());
    }

    #[test]
    fn test_config_load_candidate_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("samplekit.toml"),
            r#"
[http]
timeout_secs = 5

[endpoints]
repos = "https://wallpapers.example.com/api/"
"#,
        )
        .unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap();
        assert!(config.path.unwrap().ends_with("samplekit.toml"));
        assert_eq!(config.settings.http.timeout_secs, 5);
        assert_eq!(
            config.settings.endpoints.repos.as_deref(),
            Some("https://wallpapers.example.com/api/")
        );
    }

    #[test]
    fn test_config_load_missing_explicit_path() {
        let err = Config::load(Some("/definitely/not/here/samplekit.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_parse_error_has_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samplekit.toml");
        fs::write(&path, "[http\ntimeout_secs = ").unwrap();

        let err = Config::load(Some(path.to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.unwrap().contains("Failed to parse"));
    }

    #[test]
    fn test_from_toml_str_rejects_zero_timeout() {
        let err = Config::from_toml_str("[http]\ntimeout_secs = 0\n").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }
}
