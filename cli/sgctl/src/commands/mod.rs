//! CLI commands.

mod convert;
mod generate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shortguid::CodecSettings;

use crate::config::Config;

/// sg - short, URL-safe GUIDs.
#[derive(Debug, Parser)]
#[command(name = "sg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Character written in place of `/`.
    #[arg(
        long,
        global = true,
        env = "SHORTGUID_SLASH",
        default_value_t = CodecSettings::DEFAULT.slash_substitute()
    )]
    slash: char,

    /// Character written in place of `+`.
    #[arg(
        long,
        global = true,
        env = "SHORTGUID_PLUS",
        default_value_t = CodecSettings::DEFAULT.plus_substitute()
    )]
    plus: char,

    /// Keep the trailing `==` padding.
    #[arg(long, global = true, env = "SHORTGUID_NO_TRIM")]
    no_trim: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new random GUIDs.
    New(generate::NewArgs),

    /// Encode canonical GUIDs to short form.
    Encode(convert::EncodeArgs),

    /// Decode short GUIDs to canonical form.
    Decode(convert::DecodeArgs),

    /// Accept either form and show both.
    Inspect(convert::InspectArgs),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::new(self.slash, self.plus, self.no_trim, &self.format);
        if config.is_custom() {
            tracing::debug!(settings = ?config.settings, "using custom codec settings");
        }

        match self.command {
            Commands::New(args) => generate::run(&config, args),
            Commands::Encode(args) => convert::encode(&config, args),
            Commands::Decode(args) => convert::decode(&config, args),
            Commands::Inspect(args) => convert::inspect(&config, args),
            Commands::Version => {
                println!("sg {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}
