//! Route and alias lookup and dispatch.
//!
//! # Responsibilities
//! - Own the route table and alias table
//! - Resolve paths and aliases, timing each attempt
//! - Notify the delegate around every attempt
//! - Return a matched result or an explicit not-found report
//!
//! # Design Decisions
//! - Registration needs `&mut self`, resolution only `&self`; wrap the router
//!   in a lock if it must be shared across threads
//! - Explicit NotFound rather than silent default
//! - Registration never notifies the delegate

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Instant;

use thiserror::Error;

use super::delegate::RouterDelegate;
use super::handler::Handler;
use super::resolution::{NotFound, Resolution, Unmatched};
use super::table::RouteTable;
use crate::alias::{Alias, AliasTable};
use crate::config::{LimitsConfig, ObservabilityConfig, RouterConfig};
use crate::observability::metrics;
use crate::path::Path;
use crate::template::compiler::SEPARATOR;
use crate::template::{Placeholders, Template, TemplateError};

/// Errors raised when registering routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The pattern could not be turned into a template of the handler's arity.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The pattern exceeds `limits.max_pattern_length`.
    #[error("pattern length {length} exceeds maximum allowed length of {max} bytes")]
    PatternTooLong { length: usize, max: usize },

    /// The pattern exceeds `limits.max_segments`.
    #[error("pattern has {segments} path segments, exceeding maximum of {max}")]
    TooManySegments { segments: usize, max: usize },
}

/// Result type for router registration.
pub type RouterResult<T> = Result<T, RouterError>;

/// Typed router producing results of type `R`.
///
/// ```
/// use typed_router::{Resolution, Router};
///
/// let mut router: Router<String> = Router::new();
/// router
///     .add_path("product/:category/:page", |category: String, page: u32| {
///         format!("{category} page {page}")
///     })
///     .unwrap();
///
/// assert_eq!(
///     router.resolve("product/hats/2"),
///     Resolution::Matched("hats page 2".to_string())
/// );
/// assert!(router.resolve("product/hats/two").is_not_found());
/// ```
pub struct Router<R> {
    identifier: Option<String>,
    routes: RouteTable<R>,
    aliases: AliasTable,
    delegate: Option<Weak<dyn RouterDelegate<R>>>,
    limits: LimitsConfig,
    observability: ObservabilityConfig,
}

impl<R: 'static> Router<R> {
    /// A router without an identifier, using default configuration.
    pub fn new() -> Self {
        Self::from_config(&RouterConfig::default())
    }

    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        let mut router = Self::new();
        router.identifier = Some(identifier.into());
        router
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self {
            identifier: config.identifier.clone(),
            routes: RouteTable::new(),
            aliases: AliasTable::new(),
            delegate: None,
            limits: config.limits.clone(),
            observability: config.observability.clone(),
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Observe resolutions. Only a weak reference is kept.
    pub fn set_delegate<D>(&mut self, delegate: &Arc<D>)
    where
        D: RouterDelegate<R> + 'static,
    {
        let weak: Weak<D> = Arc::downgrade(delegate);
        let weak: Weak<dyn RouterDelegate<R>> = weak;
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn delegate(&self) -> Option<Arc<dyn RouterDelegate<R>>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Register `handler` for a template.
    pub fn add<Args, H>(&mut self, template: &Template<Args>, handler: H) -> RouterResult<()>
    where
        Args: Placeholders,
        H: Handler<Args, R>,
    {
        self.check_limits(template.pattern())?;
        self.routes.register(template.clone(), handler);
        tracing::debug!(router = %self, pattern = %template.pattern(), arity = Args::ARITY, "Registered route");
        Ok(())
    }

    /// Register `handler` for a pattern such as `product/:category/:page`.
    ///
    /// Fails if the pattern's placeholder count differs from the handler's arity.
    pub fn add_path<Args, H>(&mut self, pattern: &str, handler: H) -> RouterResult<()>
    where
        Args: Placeholders,
        H: Handler<Args, R>,
    {
        self.check_limits(pattern)?;
        let template = Template::<Args>::parse(pattern)?;
        self.add(&template, handler)
    }

    /// Register an alias, replacing any alias with the same identifier.
    pub fn alias<C, F>(&mut self, alias: &Alias<C>, mapper: F)
    where
        C: 'static,
        F: Fn(&C) -> Option<Path> + Send + Sync + 'static,
    {
        let replaced = self.aliases.register(alias, mapper);
        tracing::debug!(router = %self, alias = %alias.identifier(), replaced, "Registered alias");
    }

    /// Register an alias that needs no context.
    pub fn alias_void<F>(&mut self, alias: &Alias<()>, mapper: F)
    where
        F: Fn() -> Option<Path> + Send + Sync + 'static,
    {
        self.alias(alias, move |_: &()| mapper());
    }

    /// Whether some route matches `path`. No handler runs and no delegate is notified.
    pub fn can_match(&self, path: impl AsRef<str>) -> bool {
        self.routes.can_match(path.as_ref())
    }

    /// Whether an alias with this identifier is registered. The mapper does not run.
    pub fn can_match_alias<C>(&self, alias: &Alias<C>) -> bool {
        self.aliases.can_match(alias.identifier())
    }

    /// Run the handler of the most recently registered route matching `path`.
    pub fn resolve(&self, path: impl Into<Path>) -> Resolution<R> {
        let path = path.into();
        let delegate = self.delegate();
        if let Some(delegate) = &delegate {
            delegate.will_match_path(self, &path);
        }

        let start = Instant::now();
        let matched = self.routes.resolve(path.as_str());
        let elapsed = start.elapsed();

        if self.observability.metrics_enabled {
            metrics::record_path_resolution(matched.is_some(), elapsed);
        }

        match matched {
            Some(result) => {
                tracing::debug!(router = %self, path = %path, elapsed = ?elapsed, "Matched path");
                if let Some(delegate) = &delegate {
                    delegate.did_match_path(self, &path, elapsed);
                }
                Resolution::Matched(result)
            }
            None => {
                if self.observability.log_unmatched {
                    tracing::warn!(router = %self, path = %path, "Failed to match path");
                }
                if let Some(delegate) = &delegate {
                    delegate.failed_to_match_path(self, &path, elapsed);
                }
                Resolution::NotFound(self.not_found(Unmatched::Path(path)))
            }
        }
    }

    /// Map `context` to a path through `alias`, then resolve that path.
    ///
    /// If the alias itself fails, the not-found report names the alias
    /// identifier; if the mapped path fails, it names the path.
    pub fn resolve_alias<C: 'static>(&self, alias: &Alias<C>, context: &C) -> Resolution<R> {
        let identifier = alias.identifier();
        let delegate = self.delegate();
        if let Some(delegate) = &delegate {
            delegate.will_match_alias(self, identifier);
        }

        let start = Instant::now();
        let mapped = self.aliases.resolve(alias, context);
        let elapsed = start.elapsed();

        if self.observability.metrics_enabled {
            metrics::record_alias_resolution(mapped.as_ref().map(|_| ()).map_err(|e| *e), elapsed);
        }

        match mapped {
            Ok(path) => {
                tracing::debug!(router = %self, alias = %identifier, path = %path, "Matched alias");
                if let Some(delegate) = &delegate {
                    delegate.did_match_alias(self, identifier, &path, elapsed);
                }
                self.resolve(path)
            }
            Err(reason) => {
                tracing::warn!(router = %self, alias = %identifier, reason = %reason, "Failed to match alias");
                if let Some(delegate) = &delegate {
                    delegate.failed_to_match_alias(self, identifier, reason, elapsed);
                }
                Resolution::NotFound(self.not_found(Unmatched::Alias(identifier.to_string())))
            }
        }
    }

    pub fn resolve_void_alias(&self, alias: &Alias<()>) -> Resolution<R> {
        self.resolve_alias(alias, &())
    }

    /// Like [`resolve`](Router::resolve), rendering failures through `R::from`.
    pub fn view(&self, path: impl Into<Path>) -> R
    where
        R: From<NotFound>,
    {
        self.resolve(path).unwrap_or_else(R::from)
    }

    pub fn view_alias<C: 'static>(&self, alias: &Alias<C>, context: &C) -> R
    where
        R: From<NotFound>,
    {
        self.resolve_alias(alias, context).unwrap_or_else(R::from)
    }

    pub fn view_void_alias(&self, alias: &Alias<()>) -> R
    where
        R: From<NotFound>,
    {
        self.resolve_void_alias(alias).unwrap_or_else(R::from)
    }

    /// One route description per line, in registration order.
    pub fn debug_routes(&self) -> String {
        self.routes.descriptions().collect::<Vec<_>>().join("\n")
    }

    /// One alias description per line, in registration order.
    pub fn debug_aliases(&self) -> String {
        self.aliases.descriptions().collect::<Vec<_>>().join("\n")
    }

    /// Routes followed by aliases, one per line.
    pub fn debug_description(&self) -> String {
        self.routes
            .descriptions()
            .chain(self.aliases.descriptions())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    fn not_found(&self, target: Unmatched) -> NotFound {
        NotFound::new(
            target,
            self.routes.descriptions().map(str::to_string).collect(),
            self.aliases.descriptions().map(str::to_string).collect(),
        )
    }

    fn check_limits(&self, pattern: &str) -> RouterResult<()> {
        if pattern.len() > self.limits.max_pattern_length {
            return Err(RouterError::PatternTooLong {
                length: pattern.len(),
                max: self.limits.max_pattern_length,
            });
        }

        let segments = pattern.split(SEPARATOR).count();
        if segments > self.limits.max_segments {
            return Err(RouterError::TooManySegments {
                segments,
                max: self.limits.max_segments,
            });
        }
        Ok(())
    }
}

impl<R: 'static> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Display for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identifier {
            Some(identifier) => write!(f, "Router({})", identifier),
            None => f.write_str("Router"),
        }
    }
}

impl<R: 'static> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("identifier", &self.identifier)
            .field("routes", &self.routes.len())
            .field("aliases", &self.aliases.len())
            .finish_non_exhaustive()
    }
}
