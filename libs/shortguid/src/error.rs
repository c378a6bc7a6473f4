//! Error types for short GUID parsing and decoding.

use thiserror::Error;

/// Errors that can occur when building a [`ShortGuid`](crate::ShortGuid) from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input is not a canonical textual UUID.
    #[error("invalid canonical GUID '{input}': {reason}")]
    InvalidCanonical { input: String, reason: String },

    /// The input is not valid base64 once substitutions are reversed and padding restored.
    #[error("invalid short GUID '{input}': {reason}")]
    InvalidEncoding { input: String, reason: String },

    /// The input decoded cleanly but not to exactly 16 bytes.
    #[error("short GUID '{input}' decodes to {actual} bytes, expected 16")]
    InvalidLength { input: String, actual: usize },
}

impl FormatError {
    /// Returns true if this error came from parsing a canonical GUID string.
    pub fn is_canonical_error(&self) -> bool {
        matches!(self, FormatError::InvalidCanonical { .. })
    }

    /// Returns true if this error came from decoding a short GUID string.
    pub fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            FormatError::InvalidEncoding { .. } | FormatError::InvalidLength { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let canonical = FormatError::InvalidCanonical {
            input: "nope".to_string(),
            reason: "bad".to_string(),
        };
        assert!(canonical.is_canonical_error());
        assert!(!canonical.is_encoding_error());

        let length = FormatError::InvalidLength {
            input: "AA".to_string(),
            actual: 1,
        };
        assert!(length.is_encoding_error());
        assert!(!length.is_canonical_error());
    }

    #[test]
    fn test_error_display() {
        let err = FormatError::InvalidLength {
            input: "AA".to_string(),
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "short GUID 'AA' decodes to 1 bytes, expected 16"
        );
    }
}
