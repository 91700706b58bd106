//! Alias storage and lookup.

use std::any::{Any, TypeId};

use thiserror::Error;

use super::Alias;
use crate::path::Path;
use crate::template::codec::type_label;

/// Why an alias could not be turned into a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AliasMatchError {
    /// No alias with this identifier (and context type) is registered.
    #[error("no alias registered with this identifier")]
    NotFound,

    /// The alias exists but its mapper returned no path for the context.
    #[error("alias context did not produce a path")]
    ContextReturnedNil,
}

type ErasedMapper = Box<dyn Fn(&dyn Any) -> Option<Path> + Send + Sync>;

/// Type-erased alias entry.
struct AnyAlias {
    identifier: String,
    context: TypeId,
    description: String,
    apply: ErasedMapper,
}

/// Alias entries in registration order, at most one per identifier.
#[derive(Default)]
pub struct AliasTable {
    entries: Vec<AnyAlias>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `mapper` for `alias`, replacing any entry with the same identifier.
    ///
    /// Returns `true` if an existing entry was replaced.
    pub fn register<C, F>(&mut self, alias: &Alias<C>, mapper: F) -> bool
    where
        C: 'static,
        F: Fn(&C) -> Option<Path> + Send + Sync + 'static,
    {
        let replaced = match self.position(alias.identifier()) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        };

        let description = if TypeId::of::<C>() == TypeId::of::<()>() {
            alias.identifier().to_string()
        } else {
            format!("{}<{}>", alias.identifier(), type_label::<C>())
        };

        self.entries.push(AnyAlias {
            identifier: alias.identifier().to_string(),
            context: TypeId::of::<C>(),
            description,
            apply: Box::new(move |context: &dyn Any| context.downcast_ref::<C>().and_then(&mapper)),
        });
        replaced
    }

    /// Whether an entry with this identifier exists. The mapper is not run.
    pub fn can_match(&self, identifier: &str) -> bool {
        self.position(identifier).is_some()
    }

    /// Map `context` to a path through the alias registered for `alias`.
    pub fn resolve<C: 'static>(&self, alias: &Alias<C>, context: &C) -> Result<Path, AliasMatchError> {
        let index = self
            .position(alias.identifier())
            .ok_or(AliasMatchError::NotFound)?;
        let entry = &self.entries[index];

        if entry.context != TypeId::of::<C>() {
            tracing::debug!(
                alias = %alias.identifier(),
                registered = %entry.description,
                requested = %type_label::<C>(),
                "Alias context type mismatch"
            );
            return Err(AliasMatchError::NotFound);
        }

        (entry.apply)(context).ok_or(AliasMatchError::ContextReturnedNil)
    }

    /// `identifier` or `identifier<Context>` per entry, in registration order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.description.as_str())
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, identifier: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.identifier == identifier)
    }
}
