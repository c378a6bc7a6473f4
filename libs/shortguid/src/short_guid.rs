//! [`ShortGuid`]: a GUID bound to its short encoding.

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use uuid::Uuid;

use crate::codec;
use crate::settings::CodecSettings;
use crate::FormatError;

/// A GUID together with its encoding under one set of [`CodecSettings`].
///
/// Built once and never mutated. Whatever entry point is used, the stored encoding is
/// the one [`codec::encode`] produces for the stored identifier, so with trimming on
/// `codec::decode(s.encoded(), Some(s.settings())) == Ok(s.identifier())`. An untrimmed
/// encoding carries its own `==` and has to lose it before it decodes again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortGuid {
    identifier: Uuid,
    encoded: String,
    settings: CodecSettings,
}

impl ShortGuid {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn from_identifier(identifier: Uuid, settings: Option<&CodecSettings>) -> Self {
        let settings = *CodecSettings::resolve(settings);
        let encoded = codec::encode(&identifier, Some(&settings));
        Self {
            identifier,
            encoded,
            settings,
        }
    }

    /// The all-zero identifier.
    #[must_use]
    pub fn nil(settings: Option<&CodecSettings>) -> Self {
        Self::from_identifier(Uuid::nil(), settings)
    }

    /// A freshly generated random (v4) identifier.
    #[must_use]
    pub fn generate(settings: Option<&CodecSettings>) -> Self {
        Self::from_identifier(Uuid::new_v4(), settings)
    }

    /// Parses a canonical GUID string, e.g. `e9ab78e3-3645-4605-a161-01709994c1bb`.
    pub fn from_canonical_string(
        canonical: &str,
        settings: Option<&CodecSettings>,
    ) -> Result<Self, FormatError> {
        let identifier = codec::parse_canonical(canonical)?;
        Ok(Self::from_identifier(identifier, settings))
    }

    /// Decodes a short GUID string, e.g. `43ir6UU2BUahYQFwmZTBuw`.
    pub fn from_encoded_string(
        encoded: &str,
        settings: Option<&CodecSettings>,
    ) -> Result<Self, FormatError> {
        let identifier = codec::decode(encoded, settings)?;
        Ok(Self::from_identifier(identifier, settings))
    }

    /// Like [`from_canonical_string`](Self::from_canonical_string), `None` on failure.
    #[must_use]
    pub fn try_parse_canonical_string(
        canonical: &str,
        settings: Option<&CodecSettings>,
    ) -> Option<Self> {
        Self::from_canonical_string(canonical, settings)
            .map_err(|error| debug!(%error, "canonical guid parse failed"))
            .ok()
    }

    /// Like [`from_encoded_string`](Self::from_encoded_string), `None` on failure.
    #[must_use]
    pub fn try_decode_encoded_string(
        encoded: &str,
        settings: Option<&CodecSettings>,
    ) -> Option<Self> {
        Self::from_encoded_string(encoded, settings)
            .map_err(|error| debug!(%error, "short guid decode failed"))
            .ok()
    }

    /// The raw identifier.
    #[must_use]
    pub const fn identifier(&self) -> Uuid {
        self.identifier
    }

    /// The short encoding.
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// The settings the encoding was produced with.
    #[must_use]
    pub const fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    /// Consumes the pair, returning the encoding.
    #[must_use]
    pub fn into_encoded(self) -> String {
        self.encoded
    }
}

impl Default for ShortGuid {
    fn default() -> Self {
        Self::nil(None)
    }
}

impl fmt::Display for ShortGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// Decodes with the default settings.
impl FromStr for ShortGuid {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_encoded_string(s, None)
    }
}

impl From<Uuid> for ShortGuid {
    fn from(identifier: Uuid) -> Self {
        Self::from_identifier(identifier, None)
    }
}

impl From<ShortGuid> for Uuid {
    fn from(short: ShortGuid) -> Self {
        short.identifier
    }
}

impl AsRef<Uuid> for ShortGuid {
    fn as_ref(&self) -> &Uuid {
        &self.identifier
    }
}

impl serde::Serialize for ShortGuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> serde::Deserialize<'de> for ShortGuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_encoded_string(&s, None).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "0058c2d5-806d-465c-8560-313db6c054c0";
    const SHORT: &str = "1cJYAG2AXEaFYDE9tsBUwA";

    #[test]
    fn test_default_is_nil() {
        let short = ShortGuid::default();
        assert_eq!(short.identifier(), Uuid::nil());
        assert_eq!(short.encoded(), "AAAAAAAAAAAAAAAAAAAAAA");
        assert_eq!(short.encoded().len(), 22);
    }

    #[test]
    fn test_nil_untrimmed() {
        let settings = CodecSettings::new('_', '-', false);
        let short = ShortGuid::nil(Some(&settings));
        assert_eq!(short.identifier(), Uuid::nil());
        assert_eq!(short.encoded(), "AAAAAAAAAAAAAAAAAAAAAA==");
        assert_eq!(short.encoded().len(), 24);
        assert_eq!(short.settings(), &settings);
    }

    #[test]
    fn test_from_identifier() {
        let id = Uuid::parse_str("e9ab78e3-3645-4605-a161-01709994c1bb").unwrap();
        let short = ShortGuid::from_identifier(id, None);
        assert_eq!(short.identifier(), id);
        assert_eq!(short.encoded(), "43ir6UU2BUahYQFwmZTBuw");
    }

    #[test]
    fn test_from_canonical_string() {
        let short = ShortGuid::from_canonical_string("cdaed56d-8712-414d-b346-01905d0026fe", None)
            .unwrap();
        assert_eq!(short.encoded(), "bdWuzRKHTUGzRgGQXQAm_g");
    }

    #[test]
    fn test_from_canonical_string_invalid() {
        let err = ShortGuid::from_canonical_string("how's the unibrow?", None).unwrap_err();
        assert!(err.is_canonical_error());
    }

    #[test]
    fn test_try_parse_canonical_string() {
        let short = ShortGuid::try_parse_canonical_string(CANONICAL, None).unwrap();
        assert_eq!(short.identifier(), Uuid::parse_str(CANONICAL).unwrap());
        assert_eq!(short.encoded(), SHORT);

        assert!(ShortGuid::try_parse_canonical_string("dogs >= cats", None).is_none());
    }

    #[test]
    fn test_from_encoded_string() {
        let short = ShortGuid::from_encoded_string(SHORT, None).unwrap();
        assert_eq!(short.identifier(), Uuid::parse_str(CANONICAL).unwrap());
        assert_eq!(short.encoded(), SHORT);
    }

    #[test]
    fn test_from_encoded_string_invalid() {
        let err = ShortGuid::from_encoded_string(
            "lupethefiasco.blogspot.com congratulations ladies",
            None,
        )
        .unwrap_err();
        assert!(err.is_encoding_error());
    }

    #[test]
    fn test_try_decode_encoded_string() {
        assert!(ShortGuid::try_decode_encoded_string(SHORT, None).is_some());
        assert!(ShortGuid::try_decode_encoded_string(":0 ~yawn", None).is_none());
    }

    #[test]
    fn test_decoded_encoding_is_canonical() {
        // Non-zero trailing bits decode, but the stored form is re-encoded.
        let short = ShortGuid::from_encoded_string("43ir6UU2BUahYQFwmZTBux", None).unwrap();
        assert_eq!(short.encoded(), "43ir6UU2BUahYQFwmZTBuw");
    }

    #[test]
    fn test_generate_roundtrip() {
        let short = ShortGuid::generate(None);
        let decoded: ShortGuid = short.to_string().parse().unwrap();
        assert_eq!(short, decoded);
    }

    #[test]
    fn test_conversions() {
        let id = Uuid::parse_str(CANONICAL).unwrap();
        let short = ShortGuid::from(id);
        assert_eq!(short.as_ref(), &id);
        assert_eq!(Uuid::from(short.clone()), id);
        assert_eq!(short.into_encoded(), SHORT);
    }

    #[test]
    fn test_json_roundtrip() {
        let short = ShortGuid::from_encoded_string(SHORT, None).unwrap();
        let json = serde_json::to_string(&short).unwrap();
        assert_eq!(json, format!("\"{SHORT}\""));
        let parsed: ShortGuid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, short);
    }

    #[test]
    fn test_json_invalid() {
        let result: Result<ShortGuid, _> = serde_json::from_str("\":0 ~yawn\"");
        assert!(result.is_err());
    }
}
