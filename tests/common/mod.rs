//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use typed_router::{AliasMatchError, NotFound, Path, Router, RouterDelegate};

/// A rendered screen: either a handler's output or a not-found page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Page(String),
    Missing(String),
}

impl View {
    pub fn page(text: impl Into<String>) -> Self {
        View::Page(text.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, View::Missing(_))
    }
}

impl From<NotFound> for View {
    fn from(not_found: NotFound) -> Self {
        View::Missing(not_found.to_string())
    }
}

/// Records every delegate callback as a short string.
#[derive(Default)]
pub struct RecordingDelegate {
    events: Mutex<Vec<String>>,
}

impl RecordingDelegate {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl RouterDelegate<View> for RecordingDelegate {
    fn will_match_path(&self, _router: &Router<View>, path: &Path) {
        self.push(format!("will_match_path {path}"));
    }

    fn did_match_path(&self, _router: &Router<View>, path: &Path, _duration: Duration) {
        self.push(format!("did_match_path {path}"));
    }

    fn failed_to_match_path(&self, _router: &Router<View>, path: &Path, _duration: Duration) {
        self.push(format!("failed_to_match_path {path}"));
    }

    fn will_match_alias(&self, _router: &Router<View>, identifier: &str) {
        self.push(format!("will_match_alias {identifier}"));
    }

    fn did_match_alias(&self, _router: &Router<View>, identifier: &str, path: &Path, _duration: Duration) {
        self.push(format!("did_match_alias {identifier} {path}"));
    }

    fn failed_to_match_alias(
        &self,
        _router: &Router<View>,
        identifier: &str,
        reason: AliasMatchError,
        _duration: Duration,
    ) {
        self.push(format!("failed_to_match_alias {identifier} {reason:?}"));
    }
}
