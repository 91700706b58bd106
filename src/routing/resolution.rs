//! Resolution outcomes.
//!
//! A failed lookup is an ordinary value, not an error: callers get a
//! [`NotFound`] describing what was asked for and what the router knows
//! about, and decide how to render it.

use std::fmt;

use crate::path::Path;

/// What failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unmatched {
    /// No route matched this path.
    Path(Path),
    /// This alias identifier could not be turned into a path.
    Alias(String),
}

impl fmt::Display for Unmatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unmatched::Path(path) => write!(f, "no route matches path '{}'", path),
            Unmatched::Alias(identifier) => write!(f, "no route matches alias '{}'", identifier),
        }
    }
}

/// The not-found result, with a snapshot of the registered routes and aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    target: Unmatched,
    routes: Vec<String>,
    aliases: Vec<String>,
}

impl NotFound {
    pub fn new(target: Unmatched, routes: Vec<String>, aliases: Vec<String>) -> Self {
        Self {
            target,
            routes,
            aliases,
        }
    }

    pub fn target(&self) -> &Unmatched {
        &self.target
    }

    /// The unmatched path, if a path was being resolved.
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            Unmatched::Path(path) => Some(path),
            Unmatched::Alias(_) => None,
        }
    }

    /// The alias identifier, if the alias itself failed.
    pub fn alias(&self) -> Option<&str> {
        match &self.target {
            Unmatched::Alias(identifier) => Some(identifier),
            Unmatched::Path(_) => None,
        }
    }

    /// Route descriptions known at the time of the failure.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    /// Alias descriptions known at the time of the failure.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "404: Not Found")?;
        writeln!(f, "{}", self.target)?;
        writeln!(f)?;
        writeln!(f, "Known Routes")?;
        for route in &self.routes {
            writeln!(f, "  {}", route)?;
        }
        writeln!(f)?;
        write!(f, "Known Aliases")?;
        for alias in &self.aliases {
            write!(f, "\n  {}", alias)?;
        }
        Ok(())
    }
}

/// Outcome of resolving a path or alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<R> {
    /// A handler ran and produced this result.
    Matched(R),
    /// Nothing matched.
    NotFound(NotFound),
}

impl<R> Resolution<R> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound(_))
    }

    pub fn matched(self) -> Option<R> {
        match self {
            Resolution::Matched(result) => Some(result),
            Resolution::NotFound(_) => None,
        }
    }

    pub fn not_found(&self) -> Option<&NotFound> {
        match self {
            Resolution::NotFound(not_found) => Some(not_found),
            Resolution::Matched(_) => None,
        }
    }

    pub fn into_result(self) -> Result<R, NotFound> {
        match self {
            Resolution::Matched(result) => Ok(result),
            Resolution::NotFound(not_found) => Err(not_found),
        }
    }

    /// The handler's result, or one rendered from the not-found report.
    pub fn unwrap_or_else(self, render: impl FnOnce(NotFound) -> R) -> R {
        match self {
            Resolution::Matched(result) => result,
            Resolution::NotFound(not_found) => render(not_found),
        }
    }
}
