//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (limits > 0)
//! - Check the log directive parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::RouterConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `identifier` is set but blank.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// A limit that must be positive is zero.
    #[error("limits.{0} must be greater than zero")]
    ZeroLimit(&'static str),

    /// `observability.log_level` is not a valid filter directive.
    #[error("invalid log level '{directive}': {reason}")]
    InvalidLogLevel { directive: String, reason: String },
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config
        .identifier
        .as_deref()
        .is_some_and(|identifier| identifier.trim().is_empty())
    {
        errors.push(ValidationError::EmptyIdentifier);
    }

    if config.limits.max_pattern_length == 0 {
        errors.push(ValidationError::ZeroLimit("max_pattern_length"));
    }
    if config.limits.max_segments == 0 {
        errors.push(ValidationError::ZeroLimit("max_segments"));
    }

    if let Err(e) = EnvFilter::try_new(&config.observability.log_level) {
        errors.push(ValidationError::InvalidLogLevel {
            directive: config.observability.log_level.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&RouterConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig::default();
        config.identifier = Some("  ".into());
        config.limits.max_pattern_length = 0;
        config.limits.max_segments = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyIdentifier,
                ValidationError::ZeroLimit("max_pattern_length"),
                ValidationError::ZeroLimit("max_segments"),
            ]
        );
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let mut config = RouterConfig::default();
        config.observability.log_level = "typed_router=loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidLogLevel { .. }));
    }
}
