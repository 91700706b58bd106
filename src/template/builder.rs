//! Incremental, typed template construction.
//!
//! ```
//! use typed_router::template::{Template, TemplateBuilder};
//!
//! let template: Template<(String, u32)> = TemplateBuilder::start()
//!     .path_segments(["product", "list"])
//!     .placeholder::<String>("category")
//!     .placeholder::<u32>("page")
//!     .template();
//!
//! assert_eq!(template.pattern(), "product/list/:category/:page");
//! assert_eq!(template.path(("hats".into(), 2)).as_str(), "product/list/hats/2");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::codec::Placeholder;
use super::compiler::{render_pattern, Segment, SEPARATOR};
use super::typed::{Append, Placeholders, Template};

/// Accumulates segments; `Args` is the tuple of placeholder types so far.
///
/// Each [`placeholder`](TemplateBuilder::placeholder) call produces a builder
/// with one more element in `Args`, so the finished template's types are
/// known at every step.
pub struct TemplateBuilder<Args = ()> {
    segments: Vec<Segment>,
    _args: PhantomData<fn() -> Args>,
}

impl TemplateBuilder<()> {
    /// An empty builder with no placeholders.
    pub fn start() -> Self {
        Self {
            segments: Vec::new(),
            _args: PhantomData,
        }
    }
}

impl Default for TemplateBuilder<()> {
    fn default() -> Self {
        Self::start()
    }
}

impl<Args: Placeholders> TemplateBuilder<Args> {
    /// Append literal segments.
    ///
    /// `"a/b"` appends two segments, `a` then `b`; use
    /// [`path_segments`](TemplateBuilder::path_segments) to pass them
    /// separately. Literals are never reinterpreted as placeholders, even if
    /// they start with `:`.
    pub fn path(mut self, segments: &str) -> Self {
        self.segments.extend(
            segments
                .split(SEPARATOR)
                .map(|segment| Segment::Literal(segment.to_string())),
        );
        self
    }

    /// Append several literal segments in order.
    ///
    /// `path_segments(["product", "list"])` is the same as `path("product/list")`.
    pub fn path_segments<I, S>(self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        segments
            .into_iter()
            .fold(self, |builder, segment| builder.path(segment.as_ref()))
    }

    /// Append one placeholder of type `T`.
    pub fn placeholder<T>(self, name: &str) -> TemplateBuilder<<Args as Append<T>>::Output>
    where
        T: Placeholder,
        Args: Append<T>,
        <Args as Append<T>>::Output: Placeholders,
    {
        let mut segments = self.segments;
        segments.push(Segment::Placeholder(name.to_string()));
        TemplateBuilder {
            segments,
            _args: PhantomData,
        }
    }

    /// Finish into an immutable template.
    pub fn template(self) -> Template<Args> {
        Template::from_segments(self.segments)
    }

    pub fn components(&self) -> &[Segment] {
        &self.segments
    }
}

impl<Args: Placeholders> fmt::Display for TemplateBuilder<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("TemplateBuilder()");
        }
        write!(
            f,
            "TemplateBuilder<{}>(path: \"{}\")",
            Args::ARITY,
            render_pattern(&self.segments)
        )
    }
}

impl<Args: Placeholders> fmt::Debug for TemplateBuilder<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateBuilder")
            .field("arity", &Args::ARITY)
            .field("segments", &self.segments)
            .finish()
    }
}
