//! Configuration module for the census engine.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Default number of census periods between consecutive bucket boundaries.
const DEFAULT_STRIDE: usize = 6;

/// Default total span covered by all buckets, in census periods.
const DEFAULT_HORIZON: usize = 42;

/// Engine configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Census periods between consecutive bucket boundaries
    pub stride: usize,
    /// Total span covered by the rolling window, in census periods
    pub horizon: usize,
    /// Role tags a user must hold (any of) to survive ingestion; empty keeps everyone
    pub tracked_roles: Vec<String>,
    /// Channel-name keywords that surface first in the channel filter list
    pub priority_channel_keywords: Vec<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let stride = env::var("CENSUS_STRIDE")
            .map(|v| v.parse().expect("Invalid CENSUS_STRIDE format"))
            .unwrap_or(DEFAULT_STRIDE);
        assert!(stride > 0, "CENSUS_STRIDE must be positive");

        let horizon = env::var("CENSUS_HORIZON")
            .map(|v| v.parse().expect("Invalid CENSUS_HORIZON format"))
            .unwrap_or(DEFAULT_HORIZON);
        assert!(horizon >= stride, "CENSUS_HORIZON must be at least CENSUS_STRIDE");

        let tracked_roles = parse_list(env::var("CENSUS_TRACKED_ROLES").ok());
        let priority_channel_keywords = parse_list(env::var("CENSUS_PRIORITY_CHANNELS").ok());

        let log_level = env::var("CENSUS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            stride,
            horizon,
            tracked_roles,
            priority_channel_keywords,
            log_level,
        }
    }

    /// Bucket boundary offsets into the snapshot series: stride, 2×stride, …, horizon.
    pub fn bucket_offsets(&self) -> Vec<usize> {
        (1..=self.bucket_count()).map(|i| i * self.stride).collect()
    }

    /// Number of buckets in the rolling window.
    pub fn bucket_count(&self) -> usize {
        self.horizon / self.stride
    }

    /// Series offset of the single-step "daily" comparison point.
    pub fn daily_offset(&self) -> usize {
        self.stride
    }

    /// Series offset of the full-window "weekly" comparison point.
    pub fn weekly_offset(&self) -> usize {
        self.horizon
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            horizon: DEFAULT_HORIZON,
            tracked_roles: Vec::new(),
            priority_channel_keywords: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

/// Parse a comma-separated environment value into a trimmed, non-empty list.
fn parse_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
