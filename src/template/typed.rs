//! Statically typed templates.
//!
//! # Responsibilities
//! - Carry the tuple of placeholder types alongside a compiled pattern
//! - Decode captures into that tuple and generate paths from it
//!
//! # Design Decisions
//! - Arity lives in the type: `Template<(String, i32)>` always has two placeholders
//! - Tuples up to ten elements are supported

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::codec::{type_label, Placeholder};
use super::compiler::{parse_segments, CompiledPattern, Segment, TemplateError, TemplateResult};
use crate::path::Path;

/// A tuple of placeholder value types.
pub trait Placeholders: Sized + 'static {
    /// Number of placeholders.
    const ARITY: usize;

    /// Regex fragment per position.
    fn match_patterns() -> Vec<&'static str>;

    /// Short type name per position.
    fn type_names() -> Vec<String>;

    /// Decode captures in order. Any failure rejects the whole tuple.
    fn decode(captures: &[&str]) -> Option<Self>;

    /// Encode each element in order.
    fn encode(&self) -> Vec<String>;
}

/// Extends a placeholder tuple by one type.
pub trait Append<T> {
    type Output;
}

macro_rules! impl_placeholders {
    ($arity:expr; $($ty:ident => $idx:tt),*) => {
        impl<$($ty: Placeholder),*> Placeholders for ($($ty,)*) {
            const ARITY: usize = $arity;

            fn match_patterns() -> Vec<&'static str> {
                vec![$(<$ty as Placeholder>::match_pattern()),*]
            }

            fn type_names() -> Vec<String> {
                vec![$(type_label::<$ty>()),*]
            }

            fn decode(captures: &[&str]) -> Option<Self> {
                if captures.len() != Self::ARITY {
                    return None;
                }
                Some(($(<$ty as Placeholder>::decode(captures[$idx])?,)*))
            }

            fn encode(&self) -> Vec<String> {
                vec![$(Placeholder::encode(&self.$idx)),*]
            }
        }
    };
}

macro_rules! impl_append {
    ($($ty:ident),*) => {
        impl<$($ty,)* Next> Append<Next> for ($($ty,)*) {
            type Output = ($($ty,)* Next,);
        }
    };
}

impl_placeholders!(0;);
impl_placeholders!(1; A => 0);
impl_placeholders!(2; A => 0, B => 1);
impl_placeholders!(3; A => 0, B => 1, C => 2);
impl_placeholders!(4; A => 0, B => 1, C => 2, D => 3);
impl_placeholders!(5; A => 0, B => 1, C => 2, D => 3, E => 4);
impl_placeholders!(6; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_placeholders!(7; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_placeholders!(8; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
impl_placeholders!(9; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8);
impl_placeholders!(10; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9);

impl_append!();
impl_append!(A);
impl_append!(A, B);
impl_append!(A, B, C);
impl_append!(A, B, C, D);
impl_append!(A, B, C, D, E);
impl_append!(A, B, C, D, E, F);
impl_append!(A, B, C, D, E, F, G);
impl_append!(A, B, C, D, E, F, G, H);
impl_append!(A, B, C, D, E, F, G, H, I);

/// An immutable compiled template whose placeholders decode to `Args`.
///
/// Cloning is cheap; the compiled pattern is shared.
pub struct Template<Args> {
    compiled: Arc<CompiledPattern>,
    _args: PhantomData<fn() -> Args>,
}

impl<Args: Placeholders> Template<Args> {
    /// Parse a pattern such as `product/:category/:page`.
    ///
    /// Fails when the number of `:` segments differs from the arity of `Args`.
    pub fn parse(pattern: &str) -> TemplateResult<Self> {
        let segments = parse_segments(pattern);
        let found = segments.iter().filter(|s| s.is_placeholder()).count();
        if found != Args::ARITY {
            return Err(TemplateError::ArityMismatch {
                pattern: pattern.to_string(),
                expected: Args::ARITY,
                found,
            });
        }
        Ok(Self::from_segments(segments))
    }

    /// Callers guarantee the placeholder count equals `Args::ARITY`.
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        let compiled = CompiledPattern::compile(segments, &Args::match_patterns());
        Self {
            compiled: Arc::new(compiled),
            _args: PhantomData,
        }
    }

    pub fn pattern(&self) -> &str {
        self.compiled.pattern()
    }

    pub fn arity(&self) -> usize {
        Args::ARITY
    }

    /// Match a candidate and decode its placeholders.
    pub fn matches(&self, candidate: &str) -> Option<Args> {
        let captures = self.compiled.captures(candidate)?;
        Args::decode(&captures)
    }

    /// Whether `candidate` matches and every placeholder decodes.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.matches(candidate).is_some()
    }

    /// Build a path by substituting `values` into the placeholders.
    pub fn path(&self, values: Args) -> Path {
        self.compiled
            .expand(&values.encode())
            .unwrap_or_else(|e| {
                tracing::warn!(pattern = %self.pattern(), error = %e, "Could not form path from template");
                Path::default()
            })
    }

    /// `pattern (TypeA, TypeB)`
    pub fn signature(&self) -> String {
        format!("{} ({})", self.pattern(), Args::type_names().join(", "))
    }
}

impl<Args> Clone for Template<Args> {
    fn clone(&self) -> Self {
        Self {
            compiled: Arc::clone(&self.compiled),
            _args: PhantomData,
        }
    }
}

impl<Args> fmt::Debug for Template<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("pattern", &self.compiled.pattern())
            .field("arity", &self.compiled.arity())
            .finish()
    }
}

impl<Args> fmt::Display for Template<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.compiled.pattern())
    }
}
