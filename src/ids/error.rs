// ============================================================================
// Identifier Errors
// Error types for identifier generation, parsing and storage decoding
// ============================================================================

use thiserror::Error;

/// Errors that can occur when generating, parsing or decoding identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// Wrong length, non-hex characters, or misplaced separators.
    #[error("invalid identifier format")]
    InvalidFormat,

    /// A format error raised through a typed identifier.
    #[error("invalid {entity}: invalid identifier format")]
    InvalidEntityId { entity: &'static str },

    /// The secure random source failed. Not retried.
    #[error("failed to generate identifier: {0}")]
    Entropy(String),

    /// The persisted value's host type is not text, bytes or null.
    #[error("cannot decode storage type {0} into an identifier")]
    UnsupportedSource(&'static str),
}

impl IdError {
    /// Returns true for malformed input, whether or not it was tagged with
    /// an entity name.
    pub fn is_format_error(&self) -> bool {
        matches!(self, IdError::InvalidFormat | IdError::InvalidEntityId { .. })
    }

    /// Tags a format error with the entity type it was parsed for.
    /// Other errors pass through unchanged.
    pub(crate) fn for_entity(self, entity: &'static str) -> Self {
        match self {
            IdError::InvalidFormat => IdError::InvalidEntityId { entity },
            other => other,
        }
    }
}

/// Result type alias for identifier operations
pub type IdResult<T> = Result<T, IdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(IdError::InvalidFormat.to_string(), "invalid identifier format");
        assert_eq!(
            IdError::InvalidEntityId { entity: "UserID" }.to_string(),
            "invalid UserID: invalid identifier format"
        );
        assert_eq!(
            IdError::UnsupportedSource("i64").to_string(),
            "cannot decode storage type i64 into an identifier"
        );
    }

    #[test]
    fn test_for_entity_only_tags_format_errors() {
        assert_eq!(
            IdError::InvalidFormat.for_entity("RideID"),
            IdError::InvalidEntityId { entity: "RideID" }
        );
        let entropy = IdError::Entropy("exhausted".to_string());
        assert_eq!(entropy.clone().for_entity("RideID"), entropy);
    }

    #[test]
    fn test_is_format_error() {
        assert!(IdError::InvalidFormat.is_format_error());
        assert!(IdError::InvalidEntityId { entity: "TicketID" }.is_format_error());
        assert!(!IdError::UnsupportedSource("bool").is_format_error());
    }
}
