//! Encode and decode between a GUID and its short textual form.
//!
//! The encoded form is the standard base64 rendering of the GUID's 16 bytes with `/`
//! and `+` swapped for the configured substitutes and, optionally, the trailing `==`
//! dropped. Bytes are taken in GUID order: the first three fields little-endian, the
//! last eight bytes as-is (see [`Uuid::to_bytes_le`]).

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
        DecodePaddingMode,
    },
    Engine as _,
};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::settings::{CodecSettings, TRIMMED_LEN};
use crate::FormatError;

/// Padding restored before every decode.
const PADDING: &str = "==";

/// Standard alphabet, canonical padding, lenient about unused bits in the last symbol.
const DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Encodes `id` under `settings` (the default settings when `None`).
///
/// Always returns [`CodecSettings::encoded_len`] characters.
pub fn encode(id: &Uuid, settings: Option<&CodecSettings>) -> String {
    let settings = CodecSettings::resolve(settings);

    let mut standard = STANDARD.encode(id.to_bytes_le());
    if settings.trim_padding() {
        standard.truncate(TRIMMED_LEN);
    }

    standard
        .chars()
        .map(|c| match c {
            '/' => settings.slash_substitute(),
            '+' => settings.plus_substitute(),
            other => other,
        })
        .collect()
}

/// Decodes a short GUID produced by [`encode`] under the same settings.
///
/// `==` is appended unconditionally, so a padded (untrimmed) string must be trimmed
/// before it is passed here or it will fail as over-padded.
pub fn decode(encoded: &str, settings: Option<&CodecSettings>) -> Result<Uuid, FormatError> {
    let settings = CodecSettings::resolve(settings);

    let mut standard: String = encoded.chars().map(|c| restore(c, settings)).collect();
    standard.push_str(PADDING);

    let bytes = DECODER
        .decode(&standard)
        .map_err(|e| FormatError::InvalidEncoding {
            input: encoded.to_string(),
            reason: e.to_string(),
        })?;

    let bytes: [u8; 16] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| FormatError::InvalidLength {
            input: encoded.to_string(),
            actual: bytes.len(),
        })?;

    let id = Uuid::from_bytes_le(bytes);
    trace!(%encoded, %id, "decoded short guid");
    Ok(id)
}

/// Non-failing [`decode`]: `None` when the input does not decode to a GUID.
pub fn try_decode(encoded: &str, settings: Option<&CodecSettings>) -> Option<Uuid> {
    match decode(encoded, settings) {
        Ok(id) => Some(id),
        Err(error) => {
            debug!(%error, "short guid decode failed");
            None
        }
    }
}

/// Parses a canonical GUID string (hyphenated, simple, braced or URN form).
pub fn parse_canonical(input: &str) -> Result<Uuid, FormatError> {
    Uuid::parse_str(input).map_err(|e| FormatError::InvalidCanonical {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Reverses the substitutions one after the other, slash first.
fn restore(c: char, settings: &CodecSettings) -> char {
    let c = if c == settings.slash_substitute() {
        '/'
    } else {
        c
    };
    if c == settings.plus_substitute() {
        '+'
    } else {
        c
    }
}
