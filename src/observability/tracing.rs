//! Tracing delegate.
//!
//! # Responsibilities
//! - Log every resolution event with the router name and a fixed prefix
//! - Forward each event to an optional wrapped delegate
//!
//! # Design Decisions
//! - Holds the wrapped delegate strongly; the router holds this one weakly
//! - Successful events log at debug, failures at info

use std::sync::Arc;
use std::time::Duration;

use crate::alias::AliasMatchError;
use crate::config::ObservabilityConfig;
use crate::path::Path;
use crate::routing::{Router, RouterDelegate};

/// A [`RouterDelegate`] that logs and then forwards.
pub struct TracingDelegate<R> {
    wrapping: Option<Arc<dyn RouterDelegate<R>>>,
    prefix: String,
}

impl<R> TracingDelegate<R> {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            wrapping: None,
            prefix: prefix.into(),
        }
    }

    /// Use `config.trace_prefix` as the prefix.
    pub fn from_config(config: &ObservabilityConfig) -> Self {
        Self::new(config.trace_prefix.clone())
    }

    /// Log events, then pass them to `delegate`.
    pub fn wrapping(delegate: Arc<dyn RouterDelegate<R>>, prefix: impl Into<String>) -> Self {
        Self {
            wrapping: Some(delegate),
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<R> RouterDelegate<R> for TracingDelegate<R> {
    fn will_match_path(&self, router: &Router<R>, path: &Path) {
        tracing::debug!(prefix = %self.prefix, router = %router, path = %path, "Will match path");
        if let Some(inner) = &self.wrapping {
            inner.will_match_path(router, path);
        }
    }

    fn did_match_path(&self, router: &Router<R>, path: &Path, duration: Duration) {
        tracing::debug!(
            prefix = %self.prefix,
            router = %router,
            path = %path,
            elapsed = ?duration,
            "Did match path"
        );
        if let Some(inner) = &self.wrapping {
            inner.did_match_path(router, path, duration);
        }
    }

    fn failed_to_match_path(&self, router: &Router<R>, path: &Path, duration: Duration) {
        tracing::info!(
            prefix = %self.prefix,
            router = %router,
            path = %path,
            elapsed = ?duration,
            "Failed to match path"
        );
        if let Some(inner) = &self.wrapping {
            inner.failed_to_match_path(router, path, duration);
        }
    }

    fn will_match_alias(&self, router: &Router<R>, identifier: &str) {
        tracing::debug!(prefix = %self.prefix, router = %router, alias = %identifier, "Will match alias");
        if let Some(inner) = &self.wrapping {
            inner.will_match_alias(router, identifier);
        }
    }

    fn did_match_alias(&self, router: &Router<R>, identifier: &str, path: &Path, duration: Duration) {
        tracing::debug!(
            prefix = %self.prefix,
            router = %router,
            alias = %identifier,
            path = %path,
            elapsed = ?duration,
            "Did match alias"
        );
        if let Some(inner) = &self.wrapping {
            inner.did_match_alias(router, identifier, path, duration);
        }
    }

    fn failed_to_match_alias(
        &self,
        router: &Router<R>,
        identifier: &str,
        reason: AliasMatchError,
        duration: Duration,
    ) {
        tracing::info!(
            prefix = %self.prefix,
            router = %router,
            alias = %identifier,
            reason = %reason,
            elapsed = ?duration,
            "Failed to match alias"
        );
        if let Some(inner) = &self.wrapping {
            inner.failed_to_match_alias(router, identifier, reason, duration);
        }
    }
}
