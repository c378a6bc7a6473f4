//! Conversions between canonical and short forms.

use anyhow::{Context, Result};
use clap::Args;
use shortguid::ShortGuid;
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::output::{print_records, GuidRecord};

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Canonical GUIDs, e.g. e9ab78e3-3645-4605-a161-01709994c1bb.
    #[arg(required = true)]
    guids: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Short GUIDs, e.g. 43ir6UU2BUahYQFwmZTBuw.
    #[arg(required = true)]
    shorts: Vec<String>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// A GUID in either form.
    value: String,
}

pub fn encode(config: &Config, args: EncodeArgs) -> Result<()> {
    let records = args
        .guids
        .iter()
        .map(|guid| {
            ShortGuid::from_canonical_string(guid, Some(&config.settings))
                .map(GuidRecord::from)
                .with_context(|| format!("Could not encode '{}'", guid))
        })
        .collect::<Result<Vec<_>>>()?;

    print_records(&records, config.format)?;
    Ok(())
}

pub fn decode(config: &Config, args: DecodeArgs) -> Result<()> {
    let records = args
        .shorts
        .iter()
        .map(|short| decode_one(config, short))
        .collect::<Result<Vec<_>>>()?;

    print_records(&records, config.format)?;
    Ok(())
}

pub fn inspect(config: &Config, args: InspectArgs) -> Result<()> {
    let record = classify(config, &args.value)?;
    print_records(&[record], config.format)?;
    Ok(())
}

fn decode_one(config: &Config, short: &str) -> Result<GuidRecord> {
    ShortGuid::from_encoded_string(unpadded(config, short), Some(&config.settings))
        .map(GuidRecord::from)
        .with_context(|| format!("Could not decode '{}'", short))
}

/// Drops one trailing `==` under `--no-trim`; the codec restores it on decode.
fn unpadded<'a>(config: &Config, value: &'a str) -> &'a str {
    if config.settings.trim_padding() {
        value
    } else {
        value.strip_suffix("==").unwrap_or(value)
    }
}

/// Canonical form wins when a value parses both ways.
fn classify(config: &Config, value: &str) -> Result<GuidRecord, CliError> {
    if let Some(short) = ShortGuid::try_parse_canonical_string(value, Some(&config.settings)) {
        debug!(value, "recognised canonical GUID");
        return Ok(short.into());
    }
    if let Some(short) =
        ShortGuid::try_decode_encoded_string(unpadded(config, value), Some(&config.settings))
    {
        debug!(value, "recognised short GUID");
        return Ok(short.into());
    }
    Err(CliError::Unrecognized(value.to_string()))
}
