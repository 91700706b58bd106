//! Alias subsystem.
//!
//! # Data Flow
//! ```text
//! Alias<C>("product.details") + context C
//!     → table.rs (lookup by identifier, typed mapper C → Option<Path>)
//!     → Path, or AliasMatchError (NotFound | ContextReturnedNil)
//!     → routing (resolve the path as usual)
//! ```
//!
//! # Design Decisions
//! - The context type is a type parameter of the alias, so callers cannot
//!   pass the wrong context at compile time
//! - One entry per identifier; re-registering replaces
//! - A stored entry whose context type differs from the caller's is treated as not found

pub mod table;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use table::{AliasMatchError, AliasTable};

/// A symbolic name for a path, resolved from a context value of type `C`.
///
/// Use `Alias<()>` for aliases that need no context.
pub struct Alias<C = ()> {
    identifier: String,
    _context: PhantomData<fn(&C)>,
}

impl<C> Alias<C> {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            _context: PhantomData,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl<C> Clone for Alias<C> {
    fn clone(&self) -> Self {
        Self::new(self.identifier.clone())
    }
}

impl<C> PartialEq for Alias<C> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl<C> Eq for Alias<C> {}

impl<C> Hash for Alias<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl<C> fmt::Debug for Alias<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alias").field(&self.identifier).finish()
    }
}

impl<C> fmt::Display for Alias<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
