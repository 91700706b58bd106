//! Template subsystem.
//!
//! # Data Flow
//! ```text
//! pattern string ("product/:category/:page")  or  TemplateBuilder steps
//!     → compiler.rs (segments → anchored regex with named groups)
//!     → typed.rs (Template<Args>: captures → codec.rs decode → Args)
//!
//! Path generation:
//!     Args → codec.rs encode → compiler.rs expand → Path
//! ```
//!
//! # Design Decisions
//! - Placeholders are positional; their names only document the pattern
//! - Placeholder types are tuple elements, checked at compile time
//! - Compilation problems degrade to "never matches" instead of failing

pub mod builder;
pub mod codec;
pub mod compiler;
pub mod typed;

pub use builder::TemplateBuilder;
pub use codec::Placeholder;
pub use compiler::{CompiledPattern, Segment, TemplateError, TemplateResult};
pub use typed::{Append, Placeholders, Template};
