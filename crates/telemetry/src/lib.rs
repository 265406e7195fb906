//! Logging setup and fetch metrics for the samplekit samples
//!
//! - Structured logging with `tracing`, compact or JSON lines
//! - A session id attached to the startup log line
//! - Per-source fetch counters and timings

use once_cell::sync::Lazy;
use samplekit_core::config::LoggingSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global fetch metrics
static METRICS: Lazy<FetchMetrics> = Lazy::new(FetchMetrics::new);

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize logging with defaults
pub fn init() -> anyhow::Result<()> {
    init_with_config(TelemetryConfig::default())
}

/// Initialize logging with custom configuration
///
/// `RUST_LOG` takes precedence over `config.log_level`. Fails if a global
/// subscriber is already installed.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let result = if config.json {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_target(config.show_target)
                .with_thread_ids(config.show_thread_ids)
                .with_file(config.show_file)
                .with_line_number(config.show_line_number)
                .json(),
        );
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_target(config.show_target)
                .with_thread_ids(config.show_thread_ids)
                .with_file(config.show_file)
                .with_line_number(config.show_line_number)
                .compact(),
        );
        tracing::subscriber::set_global_default(subscriber)
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::info!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Include the event target
    pub show_target: bool,
    /// Include thread ids
    pub show_thread_ids: bool,
    /// Include the source file
    pub show_file: bool,
    /// Include the source line
    pub show_line_number: bool,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_target: false,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Build from the `[logging]` section of a settings file
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            log_level: settings.level.clone(),
            json: settings.json,
            ..Self::default()
        }
    }

    /// Verbose preset: debug level with targets shown
    pub fn verbose() -> Self {
        Self {
            log_level: "samplekit_api_client=debug,samplekit_telemetry=debug,info".to_string(),
            show_target: true,
            ..Self::default()
        }
    }
}

/// Counters and timings for one source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceStats {
    /// Fetches that returned records
    pub successes: u64,
    /// Fetches that returned an error
    pub failures: u64,
    /// Sum of all fetch durations
    pub total_ms: f64,
    /// Duration of the latest fetch
    pub last_ms: Option<f64>,
}

impl SourceStats {
    /// Successes plus failures
    pub fn attempts(&self) -> u64 {
        self.successes + self.failures
    }

    /// Mean duration, `None` before the first fetch
    pub fn mean_ms(&self) -> Option<f64> {
        let attempts = self.attempts();
        if attempts == 0 {
            None
        } else {
            Some(self.total_ms / attempts as f64)
        }
    }
}

/// Fetch outcomes keyed by source name
pub struct FetchMetrics {
    sources: RwLock<BTreeMap<String, SourceStats>>,
}

impl FetchMetrics {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            sources: RwLock::new(BTreeMap::new()),
        }
    }

    /// Record one fetch for a source
    pub fn record(&self, source: &str, success: bool, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        let mut sources = self
            .sources
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let stats = sources.entry(source.to_string()).or_default();
        if success {
            stats.successes += 1;
        } else {
            stats.failures += 1;
        }
        stats.total_ms += ms;
        stats.last_ms = Some(ms);
    }

    /// Stats for one source, if it was ever recorded
    pub fn source(&self, source: &str) -> Option<SourceStats> {
        self.sources
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(source)
            .cloned()
    }

    /// Export all sources as JSON
    pub fn export_json(&self) -> serde_json::Value {
        let sources = self
            .sources
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        serde_json::json!({
            "session_id": session_id(),
            "sources": &*sources,
        })
    }
}

impl Default for FetchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the global fetch metrics
pub fn metrics() -> &'static FetchMetrics {
    &METRICS
}

/// Timer for a single fetch
pub struct Timer {
    source: String,
    start: Instant,
}

impl Timer {
    /// Start timing a fetch for `source`
    pub fn start(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            start: Instant::now(),
        }
    }

    /// Stop the timer and record the outcome in the global metrics
    pub fn finish(self, success: bool) -> Duration {
        let duration = self.start.elapsed();
        metrics().record(&self.source, success, duration);
        tracing::debug!(
            source = %self.source,
            success,
            duration_ms = duration.as_millis(),
            "Fetch timed"
        );
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let metrics = FetchMetrics::new();
        metrics.record("employees", true, Duration::from_millis(10));
        metrics.record("employees", false, Duration::from_millis(30));

        let stats = metrics.source("employees").unwrap();
        assert_eq!(stats.successes, 1);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.attempts(), 2);
        assert!((stats.mean_ms().unwrap() - 20.0).abs() < 1.0);
        assert!(metrics.source("posts").is_none());
    }

    #[test]
    fn test_export_json() {
        let metrics = FetchMetrics::new();
        metrics.record("pictures", true, Duration::from_millis(5));

        let json = metrics.export_json();
        assert_eq!(json["sources"]["pictures"]["successes"], 1);
        assert!(json["session_id"].is_string());
    }

    #[test]
    fn test_timer_records_globally() {
        let before = metrics().source("timer-test").map_or(0, |s| s.attempts());
        let timer = Timer::start("timer-test");
        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.finish(true);
        assert!(duration.as_millis() >= 10);
        assert_eq!(metrics().source("timer-test").unwrap().attempts(), before + 1);
    }

    #[test]
    fn test_config_from_settings() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            json: true,
        };
        let config = TelemetryConfig::from_settings(&settings);
        assert_eq!(config.log_level, "debug");
        assert!(config.json);
        assert!(!config.show_file);
    }

    #[test]
    fn test_init_only_once() {
        let first = init();
        let second = init();
        assert!(first.is_ok());
        assert!(second.is_err());
    }

    #[test]
    fn test_session_id() {
        let id = session_id();
        assert!(Uuid::parse_str(id).is_ok());
    }
}
