//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router resolutions produce:
//!     → tracing events (warnings for unmatched paths and alias failures)
//!     → metrics.rs (counters and latency histograms)
//!     → RouterDelegate callbacks (tracing.rs logs them when installed)
//!
//! Consumers:
//!     → logging.rs installs a subscriber for hosts without one
//!     → any `metrics` recorder the host installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; hosts choose subscribers and exporters
//! - Metrics are cheap (no-ops without a recorder)
//! - Delegate logging is opt-in via `TracingDelegate`

pub mod logging;
pub mod metrics;
pub mod tracing;

pub use self::logging::{init_logging, LoggingError};
pub use self::tracing::TracingDelegate;
