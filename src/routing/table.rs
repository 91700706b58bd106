//! Ordered route storage.
//!
//! # Design Decisions
//! - Routes are tried newest first; the first structural match wins
//! - Registering an identical pattern again keeps both entries, so the newer
//!   one overrides
//! - Exactly one handler runs per resolution

use super::handler::Handler;
use super::matcher::{Route, RouteMatcher};
use crate::template::{Placeholders, Template};

/// Registered routes in insertion order.
pub struct RouteTable<R> {
    routes: Vec<Box<dyn RouteMatcher<R>>>,
}

impl<R: 'static> RouteTable<R> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route. Arity agreement is enforced by the `Handler` bound.
    pub fn register<Args, H>(&mut self, template: Template<Args>, handler: H)
    where
        Args: Placeholders,
        H: Handler<Args, R>,
    {
        self.routes.push(Box::new(Route::new(template, handler)));
    }

    /// Whether any route matches. No handler is invoked.
    pub fn can_match(&self, candidate: &str) -> bool {
        self.routes.iter().any(|route| route.matches(candidate))
    }

    /// Invoke the most recently registered matching route.
    pub fn resolve(&self, candidate: &str) -> Option<R> {
        self.routes
            .iter()
            .rev()
            .find_map(|route| route.dispatch(candidate))
    }

    /// Route descriptions in registration order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.description())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<R: 'static> Default for RouteTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
