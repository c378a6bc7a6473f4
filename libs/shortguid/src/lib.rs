//! # shortguid
//!
//! Compact, URL-safe text form for GUIDs.
//!
//! A GUID's 16 bytes are base64 encoded, the two characters that are awkward in URLs
//! and file paths (`/` and `+`) are replaced, and the `==` padding that every 16-byte
//! input produces is dropped:
//!
//! ```text
//! e9ab78e3-3645-4605-a161-01709994c1bb   (36 characters)
//! 43ir6UU2BUahYQFwmZTBuw                 (22 characters)
//! ```
//!
//! The transform is a representation change only. It offers no protection against
//! tampering or guessing.
//!
//! ## Usage
//!
//! ```
//! use shortguid::{CodecSettings, ShortGuid};
//!
//! let short = ShortGuid::from_canonical_string("cdaed56d-8712-414d-b346-01905d0026fe", None)?;
//! assert_eq!(short.encoded(), "bdWuzRKHTUGzRgGQXQAm_g");
//!
//! let padded = CodecSettings::new('_', '-', false);
//! assert_eq!(shortguid::encode(&short.identifier(), Some(&padded)).len(), 24);
//! # Ok::<(), shortguid::FormatError>(())
//! ```

mod codec;
mod error;
mod settings;
mod short_guid;

pub use codec::{decode, encode, parse_canonical, try_decode};
pub use error::FormatError;
pub use settings::{CodecSettings, PADDED_LEN, TRIMMED_LEN};
pub use short_guid::ShortGuid;

/// Re-export uuid for consumers that need raw identifier operations
pub use uuid::Uuid;
