//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     pattern or Template<Args> + Handler<Args, R>
//!     → matcher.rs (erase into a RouteMatcher<R>)
//!     → table.rs (append in registration order)
//!
//! Resolution:
//!     Path or Alias<C> + context
//!     → router.rs (delegate callbacks, timing, metrics)
//!     → alias table (context → Path), then table.rs
//!     → newest matching route decodes its captures and runs its handler
//!     → Resolution::Matched(R) or Resolution::NotFound
//! ```
//!
//! # Design Decisions
//! - Newest registration wins, so later routes override earlier ones
//! - A route whose captures fail to decode is skipped, not an error
//! - Deterministic: same table and input always give the same route

pub mod delegate;
pub mod handler;
pub mod matcher;
pub mod resolution;
pub mod router;
pub mod table;

pub use delegate::RouterDelegate;
pub use handler::Handler;
pub use matcher::{Route, RouteMatcher};
pub use resolution::{NotFound, Resolution, Unmatched};
pub use router::{Router, RouterError, RouterResult};
pub use table::RouteTable;
