//! Codec settings: which characters stand in for `/` and `+`, and whether to trim padding.

/// Encoded length when the trailing `==` is kept.
pub const PADDED_LEN: usize = 24;

/// Encoded length when the trailing `==` is trimmed.
pub const TRIMMED_LEN: usize = 22;

/// Immutable codec configuration.
///
/// Substitute characters are stored as given. Nothing checks that they differ from each
/// other or from the 62 retained base64 characters; picking an ambiguous pair makes
/// decoding lossy, and that choice is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecSettings {
    slash_substitute: char,
    plus_substitute: char,
    trim_padding: bool,
}

impl CodecSettings {
    /// `/` becomes `_`, `+` becomes `-`, and the trailing `==` is dropped.
    pub const DEFAULT: Self = Self {
        slash_substitute: '_',
        plus_substitute: '-',
        trim_padding: true,
    };

    /// Creates settings from explicit values.
    #[must_use]
    pub const fn new(slash_substitute: char, plus_substitute: char, trim_padding: bool) -> Self {
        Self {
            slash_substitute,
            plus_substitute,
            trim_padding,
        }
    }

    /// Returns `settings` if present, otherwise the default instance.
    #[must_use]
    pub fn resolve(settings: Option<&Self>) -> &Self {
        settings.unwrap_or(&Self::DEFAULT)
    }

    /// Character written in place of `/`.
    #[must_use]
    pub const fn slash_substitute(&self) -> char {
        self.slash_substitute
    }

    /// Character written in place of `+`.
    #[must_use]
    pub const fn plus_substitute(&self) -> char {
        self.plus_substitute
    }

    /// Whether the trailing `==` is omitted from encoded output.
    #[must_use]
    pub const fn trim_padding(&self) -> bool {
        self.trim_padding
    }

    /// Returns a copy with a different trim flag.
    #[must_use]
    pub const fn with_trim_padding(self, trim_padding: bool) -> Self {
        Self {
            trim_padding,
            ..self
        }
    }

    /// Length of every string encoded under these settings.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        if self.trim_padding {
            TRIMMED_LEN
        } else {
            PADDED_LEN
        }
    }
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = CodecSettings::default();
        assert_eq!(settings.slash_substitute(), '_');
        assert_eq!(settings.plus_substitute(), '-');
        assert!(settings.trim_padding());
        assert_eq!(settings, CodecSettings::DEFAULT);
    }

    #[test]
    fn test_explicit_values_stored_verbatim() {
        // Colliding substitutes are accepted as-is.
        let settings = CodecSettings::new('A', 'A', false);
        assert_eq!(settings.slash_substitute(), 'A');
        assert_eq!(settings.plus_substitute(), 'A');
        assert!(!settings.trim_padding());
    }

    #[test]
    fn test_resolve_none_is_default() {
        assert_eq!(*CodecSettings::resolve(None), CodecSettings::DEFAULT);
    }

    #[test]
    fn test_resolve_some_is_passthrough() {
        let custom = CodecSettings::new('*', '.', false);
        assert_eq!(*CodecSettings::resolve(Some(&custom)), custom);
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(CodecSettings::DEFAULT.encoded_len(), TRIMMED_LEN);
        assert_eq!(
            CodecSettings::DEFAULT.with_trim_padding(false).encoded_len(),
            PADDED_LEN
        );
    }

    #[test]
    fn test_with_trim_padding_keeps_substitutes() {
        let settings = CodecSettings::new('~', '.', true).with_trim_padding(false);
        assert_eq!(settings, CodecSettings::new('~', '.', false));
    }
}
