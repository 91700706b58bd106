//! Placeholder value codecs.
//!
//! # Responsibilities
//! - Convert typed placeholder values to and from path segment text
//! - Supply the regex fragment a placeholder compiles to
//!
//! # Design Decisions
//! - Encoding must round-trip through `decode` for every value the
//!   fragment can match
//! - A failed decode rejects the whole template match, never a partial one

/// Fragment used by placeholders that don't override [`Placeholder::match_pattern`].
pub const DEFAULT_MATCH_PATTERN: &str = r"[\w]+";

/// Optional minus sign followed by digits.
pub const SIGNED_INTEGER_PATTERN: &str = r"[-\d]+";

/// Digits only.
pub const UNSIGNED_INTEGER_PATTERN: &str = r"[\d]+";

/// Optional sign, digits, optional fraction, optional exponent.
pub const FLOAT_PATTERN: &str = r"[-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?";

/// A value type that can fill a template placeholder.
///
/// Implement this for your own types to use them in templates. The default
/// fragment accepts one or more word characters; override
/// [`match_pattern`](Placeholder::match_pattern) when the encoded form needs
/// anything else. Fragments may contain their own groups.
///
/// ```
/// use typed_router::template::Placeholder;
///
/// #[derive(Debug, PartialEq)]
/// struct Sku(String);
///
/// impl Placeholder for Sku {
///     fn encode(&self) -> String {
///         self.0.clone()
///     }
///
///     fn decode(raw: &str) -> Option<Self> {
///         raw.starts_with("sku").then(|| Sku(raw.to_string()))
///     }
///
///     fn match_pattern() -> &'static str {
///         r"sku-[0-9a-f]+"
///     }
/// }
/// ```
pub trait Placeholder: Sized + 'static {
    /// Render the value as a single path segment.
    fn encode(&self) -> String;

    /// Parse a captured segment. `None` fails the match.
    fn decode(raw: &str) -> Option<Self>;

    /// Regex fragment matching every encodable value.
    fn match_pattern() -> &'static str {
        DEFAULT_MATCH_PATTERN
    }
}

impl Placeholder for String {
    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl Placeholder for bool {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl Placeholder for char {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

macro_rules! impl_placeholder_via_from_str {
    ($pattern:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Placeholder for $ty {
                fn encode(&self) -> String {
                    self.to_string()
                }

                fn decode(raw: &str) -> Option<Self> {
                    raw.parse::<$ty>().ok()
                }

                fn match_pattern() -> &'static str {
                    $pattern
                }
            }
        )*
    };
}

impl_placeholder_via_from_str!(SIGNED_INTEGER_PATTERN => i8, i16, i32, i64, i128, isize);
impl_placeholder_via_from_str!(UNSIGNED_INTEGER_PATTERN => u8, u16, u32, u64, u128, usize);
impl_placeholder_via_from_str!(FLOAT_PATTERN => f32, f64);

/// Human-readable type name with module paths stripped.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn type_label<T: ?Sized>() -> String {
    short_type_name(std::any::type_name::<T>())
}

fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }
    out
}
