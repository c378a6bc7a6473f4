//! Output formatting for CLI commands.

use serde::Serialize;
use shortguid::{ShortGuid, Uuid};
use tabled::{Table, Tabled};

use crate::error::CliError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Parse a `--format` value; anything but `json` means table.
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// One converted identifier.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct GuidRecord {
    #[tabled(rename = "GUID")]
    pub guid: Uuid,

    #[tabled(rename = "Short")]
    pub short: ShortGuid,
}

impl From<ShortGuid> for GuidRecord {
    fn from(short: ShortGuid) -> Self {
        Self {
            guid: short.identifier(),
            short,
        }
    }
}

/// Render records in the specified format.
pub fn render_records(records: &[GuidRecord], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(Table::new(records).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

/// Print records in the specified format.
pub fn print_records(records: &[GuidRecord], format: OutputFormat) -> Result<(), CliError> {
    println!("{}", render_records(records, format)?);
    Ok(())
}
