//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML and
//! default every field, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for a router.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Identifier shown in logs and delegate output.
    pub identifier: Option<String>,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Limits applied to registered patterns.
    pub limits: LimitsConfig,
}

/// Logging and metrics settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"typed_router=debug"`.
    pub log_level: String,

    /// Emit a warning whenever a path fails to match.
    pub log_unmatched: bool,

    /// Record resolution counters and latency histograms.
    pub metrics_enabled: bool,

    /// Prefix used by the tracing delegate.
    pub trace_prefix: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_unmatched: true,
            metrics_enabled: true,
            trace_prefix: "router".to_string(),
        }
    }
}

/// Limits applied when registering patterns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum pattern length in bytes.
    pub max_pattern_length: usize,

    /// Maximum number of `/`-separated segments in a pattern.
    pub max_segments: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_pattern_length: 1024,
            max_segments: 32,
        }
    }
}
