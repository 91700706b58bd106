//! Route matching.
//!
//! # Responsibilities
//! - Pair a typed template with a handler of the same arity
//! - Erase the placeholder types so routes of any arity share one table
//!
//! # Design Decisions
//! - `matches` decodes but never calls the handler
//! - `dispatch` calls the handler only after a full, successful decode

use std::marker::PhantomData;

use super::handler::Handler;
use crate::template::codec::type_label;
use crate::template::{Placeholders, Template};

/// Type-erased route producing `R`.
pub trait RouteMatcher<R>: Send + Sync {
    /// Returns true if the candidate matches and all placeholders decode.
    fn matches(&self, candidate: &str) -> bool;

    /// Match the candidate and, on success, invoke the handler.
    fn dispatch(&self, candidate: &str) -> Option<R>;

    fn pattern(&self) -> &str;

    /// `pattern (arg types) -> result type`
    fn description(&self) -> &str;
}

/// A template bound to its handler.
pub struct Route<Args, H, R> {
    template: Template<Args>,
    handler: H,
    description: String,
    _result: PhantomData<fn() -> R>,
}

impl<Args, H, R> Route<Args, H, R>
where
    Args: Placeholders,
    H: Handler<Args, R>,
    R: 'static,
{
    pub fn new(template: Template<Args>, handler: H) -> Self {
        let description = format!("{} -> {}", template.signature(), type_label::<R>());
        Self {
            template,
            handler,
            description,
            _result: PhantomData,
        }
    }
}

impl<Args, H, R> RouteMatcher<R> for Route<Args, H, R>
where
    Args: Placeholders,
    H: Handler<Args, R>,
    R: 'static,
{
    fn matches(&self, candidate: &str) -> bool {
        self.template.is_match(candidate)
    }

    fn dispatch(&self, candidate: &str) -> Option<R> {
        let args = self.template.matches(candidate)?;
        Some(self.handler.call(args))
    }

    fn pattern(&self) -> &str {
        self.template.pattern()
    }

    fn description(&self) -> &str {
        &self.description
    }
}
