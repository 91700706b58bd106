//! Metrics collection.
//!
//! # Responsibilities
//! - Count path and alias resolutions by outcome
//! - Record resolution latency
//!
//! # Metrics
//! - `typed_router_path_resolutions_total` (counter): by `outcome` (matched, unmatched)
//! - `typed_router_path_resolution_duration_seconds` (histogram)
//! - `typed_router_alias_resolutions_total` (counter): by `outcome`
//!   (matched, not_found, context_returned_nil)
//! - `typed_router_alias_resolution_duration_seconds` (histogram)
//!
//! # Design Decisions
//! - Uses the `metrics` facade; installing an exporter is the host's job
//! - Without a recorder every call is a no-op

use std::time::Duration;

use crate::alias::AliasMatchError;

pub fn record_path_resolution(matched: bool, duration: Duration) {
    let outcome = if matched { "matched" } else { "unmatched" };
    metrics::counter!("typed_router_path_resolutions_total", "outcome" => outcome).increment(1);
    metrics::histogram!("typed_router_path_resolution_duration_seconds").record(duration.as_secs_f64());
}

pub fn record_alias_resolution(result: Result<(), AliasMatchError>, duration: Duration) {
    let outcome = match result {
        Ok(()) => "matched",
        Err(AliasMatchError::NotFound) => "not_found",
        Err(AliasMatchError::ContextReturnedNil) => "context_returned_nil",
    };
    metrics::counter!("typed_router_alias_resolutions_total", "outcome" => outcome).increment(1);
    metrics::histogram!("typed_router_alias_resolution_duration_seconds").record(duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};

    use crate::alias::Alias;
    use crate::config::RouterConfig;
    use crate::path::Path;
    use crate::routing::Router;

    /// Remembers every counter and histogram key it is asked to register.
    #[derive(Default)]
    struct CapturingRecorder {
        keys: Mutex<Vec<String>>,
    }

    impl CapturingRecorder {
        fn capture(&self, key: &Key) {
            let labels = key
                .labels()
                .map(|label| format!("{}={}", label.key(), label.value()))
                .collect::<Vec<_>>();
            let rendered = if labels.is_empty() {
                key.name().to_string()
            } else {
                format!("{}{{{}}}", key.name(), labels.join(","))
            };
            self.keys.lock().unwrap().push(rendered);
        }

        fn keys(&self) -> Vec<String> {
            self.keys.lock().unwrap().clone()
        }
    }

    impl Recorder for CapturingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            self.capture(key);
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, key: &Key, _: &Metadata<'_>) -> Histogram {
            self.capture(key);
            Histogram::noop()
        }
    }

    fn router(config: &RouterConfig) -> Router<()> {
        let mut router = Router::from_config(config);
        router.add_path("home", || ()).unwrap();
        router.alias_void(&Alias::new("alias.home"), || Some(Path::from("home")));
        router.alias_void(&Alias::new("alias.nil"), || None);
        router
    }

    fn exercise(router: &Router<()>) {
        router.resolve("home");
        router.resolve("nope");
        router.resolve_void_alias(&Alias::new("alias.home"));
        router.resolve_void_alias(&Alias::new("alias.missing"));
        router.resolve_void_alias(&Alias::new("alias.nil"));
    }

    #[test]
    fn test_resolutions_are_counted_by_outcome() {
        let recorder = CapturingRecorder::default();
        let router = router(&RouterConfig::default());
        metrics::with_local_recorder(&recorder, || exercise(&router));

        let keys = recorder.keys();
        for expected in [
            "typed_router_path_resolutions_total{outcome=matched}",
            "typed_router_path_resolutions_total{outcome=unmatched}",
            "typed_router_path_resolution_duration_seconds",
            "typed_router_alias_resolutions_total{outcome=matched}",
            "typed_router_alias_resolutions_total{outcome=not_found}",
            "typed_router_alias_resolutions_total{outcome=context_returned_nil}",
            "typed_router_alias_resolution_duration_seconds",
        ] {
            assert!(keys.iter().any(|key| key == expected), "missing {expected} in {keys:?}");
        }
    }

    #[test]
    fn test_nothing_recorded_when_disabled() {
        let mut config = RouterConfig::default();
        config.observability.metrics_enabled = false;

        let recorder = CapturingRecorder::default();
        let router = router(&config);
        metrics::with_local_recorder(&recorder, || exercise(&router));

        assert!(recorder.keys().is_empty());
    }
}
