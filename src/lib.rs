//! Typed route registration and dispatch.
//!
//! Routes are string templates such as `product/:category/:page` whose
//! placeholders decode into the argument types of a handler. Aliases map a
//! named, optionally context-carrying lookup onto a path. The [`Router`]
//! resolves either into a handler result or an explicit [`NotFound`] report.

pub mod alias;
pub mod config;
pub mod observability;
pub mod path;
pub mod routing;
pub mod template;

pub use alias::{Alias, AliasMatchError};
pub use config::RouterConfig;
pub use observability::TracingDelegate;
pub use path::Path;
pub use routing::{NotFound, Resolution, Router, RouterDelegate, RouterError, RouterResult, Unmatched};
pub use template::{Placeholder, Template, TemplateBuilder, TemplateError};
