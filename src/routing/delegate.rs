//! Resolution observers.
//!
//! Every resolution fires exactly one `will_*` callback followed by exactly
//! one `did_*` or `failed_*` callback, synchronously and in that order.
//! Alias resolutions that succeed go on to fire the path callbacks for the
//! mapped path.

use std::time::Duration;

use super::router::Router;
use crate::alias::AliasMatchError;
use crate::path::Path;

/// Receives notifications around each resolution attempt.
///
/// All methods default to doing nothing. The router keeps only a weak
/// reference to its delegate.
pub trait RouterDelegate<R>: Send + Sync {
    fn will_match_path(&self, _router: &Router<R>, _path: &Path) {}

    fn did_match_path(&self, _router: &Router<R>, _path: &Path, _duration: Duration) {}

    fn failed_to_match_path(&self, _router: &Router<R>, _path: &Path, _duration: Duration) {}

    fn will_match_alias(&self, _router: &Router<R>, _identifier: &str) {}

    fn did_match_alias(&self, _router: &Router<R>, _identifier: &str, _path: &Path, _duration: Duration) {}

    fn failed_to_match_alias(
        &self,
        _router: &Router<R>,
        _identifier: &str,
        _reason: AliasMatchError,
        _duration: Duration,
    ) {
    }
}
