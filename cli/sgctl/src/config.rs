//! Codec configuration for the CLI.
//!
//! Settings are resolved from flags, falling back to environment variables and then to
//! the library defaults:
//! - `SHORTGUID_SLASH`: substitute for `/`
//! - `SHORTGUID_PLUS`: substitute for `+`
//! - `SHORTGUID_NO_TRIM`: keep the trailing `==`

use shortguid::CodecSettings;

use crate::output::OutputFormat;

/// Resolved CLI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Codec settings used for every conversion.
    pub settings: CodecSettings,

    /// Output format for results.
    pub format: OutputFormat,
}

impl Config {
    /// Build configuration from already-parsed global arguments.
    pub fn new(slash: char, plus: char, no_trim: bool, format: &str) -> Self {
        Self {
            settings: CodecSettings::new(slash, plus, !no_trim),
            format: OutputFormat::parse(format),
        }
    }

    /// Whether the settings differ from the library defaults.
    pub fn is_custom(&self) -> bool {
        self.settings != CodecSettings::DEFAULT
    }
}
