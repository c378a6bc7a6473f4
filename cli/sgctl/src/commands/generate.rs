//! Generate fresh identifiers.

use anyhow::Result;
use clap::Args;
use shortguid::ShortGuid;

use crate::config::Config;
use crate::output::{print_records, GuidRecord};

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Number of identifiers to generate.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
}

pub fn run(config: &Config, args: NewArgs) -> Result<()> {
    let records: Vec<GuidRecord> = (0..args.count)
        .map(|_| ShortGuid::generate(Some(&config.settings)).into())
        .collect();

    tracing::debug!(count = records.len(), "generated identifiers");
    print_records(&records, config.format)?;
    Ok(())
}
