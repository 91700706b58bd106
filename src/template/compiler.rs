//! Pattern-to-regex compilation.
//!
//! # Responsibilities
//! - Split a pattern into literal and placeholder segments
//! - Build an anchored, case-insensitive regex with one named group per placeholder
//! - Extract captures positionally and expand segments back into a path
//!
//! # Design Decisions
//! - Empty segments are kept: `a/b/` and `a/b` are different patterns
//! - Captures use named groups (`p0`, `p1`, ...) so a fragment with its own
//!   groups cannot shift positions
//! - A regex that fails to build degrades to a pattern that never matches

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::path::Path;

/// Marker that turns a pattern segment into a placeholder.
pub const PLACEHOLDER_MARKER: char = ':';

/// Segment separator.
pub const SEPARATOR: char = '/';

/// Upper bound on the compiled regex size.
const MAX_REGEX_SIZE: usize = 1 << 20;

/// Errors raised while building or expanding templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The pattern's placeholder count differs from the declared types.
    #[error("pattern '{pattern}' has {found} placeholders but {expected} types were declared")]
    ArityMismatch {
        pattern: String,
        expected: usize,
        found: usize,
    },

    /// Fewer values than placeholders were supplied for path generation.
    #[error("pattern '{pattern}' needs {expected} values to form a path, got {supplied}")]
    MissingValues {
        pattern: String,
        expected: usize,
        supplied: usize,
    },
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// One `/`-delimited piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matched verbatim (case-insensitively).
    Literal(String),
    /// Named capture slot. The name is documentation only.
    Placeholder(String),
}

impl Segment {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Segment::Placeholder(_))
    }
}

/// Split a pattern on `/`; segments starting with `:` become placeholders.
pub fn parse_segments(pattern: &str) -> Vec<Segment> {
    pattern
        .split(SEPARATOR)
        .map(|segment| match segment.strip_prefix(PLACEHOLDER_MARKER) {
            Some(name) => Segment::Placeholder(name.to_string()),
            None => Segment::Literal(segment.to_string()),
        })
        .collect()
}

/// Render segments back into pattern text.
pub fn render_pattern(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.clone(),
            Segment::Placeholder(name) => format!("{PLACEHOLDER_MARKER}{name}"),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// A pattern compiled into a matcher.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    segments: Vec<Segment>,
    arity: usize,
    regex: Option<Regex>,
}

impl CompiledPattern {
    /// Compile segments using one fragment per placeholder, in order.
    ///
    /// Placeholders without a matching fragment fall back to the default
    /// word-character fragment.
    pub fn compile(segments: Vec<Segment>, fragments: &[&str]) -> Self {
        let pattern = render_pattern(&segments);
        let arity = segments.iter().filter(|s| s.is_placeholder()).count();
        let source = Self::regex_source(&segments, fragments);

        let regex = match RegexBuilder::new(&source)
            .case_insensitive(true)
            .size_limit(MAX_REGEX_SIZE)
            .build()
        {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!(
                    pattern = %pattern,
                    error = %e,
                    "Could not create matcher expression; template will never match"
                );
                None
            }
        };

        Self {
            pattern,
            segments,
            arity,
            regex,
        }
    }

    fn regex_source(segments: &[Segment], fragments: &[&str]) -> String {
        let mut index = 0;
        let body = segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => regex::escape(text),
                Segment::Placeholder(_) => {
                    let fragment = fragments
                        .get(index)
                        .copied()
                        .unwrap_or(super::codec::DEFAULT_MATCH_PATTERN);
                    let group = format!("(?P<p{index}>{fragment})");
                    index += 1;
                    group
                }
            })
            .collect::<Vec<_>>()
            .join("/");
        format!("^{body}$")
    }

    /// The pattern text, placeholders rendered with their `:` marker.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of placeholder segments.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Whether regex compilation failed.
    pub fn is_degraded(&self) -> bool {
        self.regex.is_none()
    }

    /// Whole-string match check, no decoding.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(candidate))
    }

    /// Captured placeholder text in pattern order, or `None` if the
    /// candidate does not match.
    pub fn captures<'c>(&self, candidate: &'c str) -> Option<Vec<&'c str>> {
        let caps = self.regex.as_ref()?.captures(candidate)?;
        (0..self.arity)
            .map(|index| caps.name(&format!("p{index}")).map(|m| m.as_str()))
            .collect()
    }

    /// Substitute values into placeholders left to right.
    pub fn expand<S: AsRef<str>>(&self, values: &[S]) -> TemplateResult<Path> {
        if values.len() < self.arity {
            return Err(TemplateError::MissingValues {
                pattern: self.pattern.clone(),
                expected: self.arity,
                supplied: values.len(),
            });
        }

        let mut values = values.iter();
        let path = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Placeholder(_) => values.next().map(AsRef::as_ref).unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join("/");
        Ok(Path::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: &str) -> CompiledPattern {
        CompiledPattern::compile(parse_segments(pattern), &[])
    }

    #[test]
    fn test_parse_segments() {
        let segments = parse_segments("product/:id/details/");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("product".into()),
                Segment::Placeholder("id".into()),
                Segment::Literal("details".into()),
                Segment::Literal("".into()),
            ]
        );
        assert_eq!(render_pattern(&segments), "product/:id/details/");
    }

    #[test]
    fn test_literal_pattern_requires_whole_match() {
        let compiled = compile("hello/this/is/a/path");
        assert_eq!(compiled.arity(), 0);
        assert!(compiled.is_match("hello/this/is/a/path"));
        assert!(!compiled.is_match("hello/this/is/a/pat"));
        assert!(!compiled.is_match("hello/this/is/a/"));
        assert!(!compiled.is_match("ello/this/is/a/path"));
        assert!(!compiled.is_match("oh-hello/this/is/a/path"));
        assert!(!compiled.is_match("hello/this/is/a/path/"));
    }

    #[test]
    fn test_literals_match_case_insensitively() {
        let compiled = compile("Home/Page");
        assert!(compiled.is_match("home/page"));
        assert!(compiled.is_match("HOME/PAGE"));
    }

    #[test]
    fn test_literals_are_escaped() {
        let compiled = compile("api/v1.0/(x)");
        assert!(compiled.is_match("api/v1.0/(x)"));
        assert!(!compiled.is_match("api/v1X0/(x)"));
    }

    #[test]
    fn test_captures_in_order() {
        let compiled = compile("path/:p1/:p2");
        assert_eq!(compiled.arity(), 2);
        assert_eq!(compiled.captures("path/hats/boots"), Some(vec!["hats", "boots"]));
        assert_eq!(compiled.captures("path/hats"), None);
        assert_eq!(compiled.captures("path/hats/boots/socks"), None);
    }

    #[test]
    fn test_placeholder_rejects_empty_segment() {
        let compiled = compile("a/b/:c");
        assert!(compiled.is_match("a/b/hello"));
        assert!(!compiled.is_match("a/b/"));
        assert!(!compiled.is_match("a/b"));
        assert!(!compiled.is_match("a//c"));
    }

    #[test]
    fn test_fragment_groups_do_not_shift_captures() {
        let compiled = CompiledPattern::compile(
            parse_segments(":a/:b"),
            &[r"(x)(y)+", r"[\d]+"],
        );
        assert_eq!(compiled.captures("xyy/12"), Some(vec!["xyy", "12"]));
    }

    #[test]
    fn test_invalid_fragment_degrades_to_never_match() {
        let compiled = CompiledPattern::compile(parse_segments("a/:b"), &["(unclosed"]);
        assert!(compiled.is_degraded());
        assert!(!compiled.is_match("a/(unclosed"));
        assert_eq!(compiled.captures("a/b"), None);
    }

    #[test]
    fn test_expand_substitutes_left_to_right() {
        let compiled = compile("product/:category/list/:page");
        let path = compiled.expand(&["hats", "3"]).unwrap();
        assert_eq!(path.as_str(), "product/hats/list/3");
    }

    #[test]
    fn test_expand_with_too_few_values_fails() {
        let compiled = compile("product/:category/:page");
        let err = compiled.expand(&["hats"]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingValues {
                pattern: "product/:category/:page".into(),
                expected: 2,
                supplied: 1,
            }
        );
    }
}
