//! Error handling and display for the CLI.

use colored::Colorize;
use shortguid::FormatError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{0}' is neither a GUID nor a short GUID")]
    Unrecognized(String),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(format_err) = err.downcast_ref::<FormatError>() {
        if format_err.is_canonical_error() {
            eprintln!(
                "\n{}",
                "Hint: Expected a GUID such as e9ab78e3-3645-4605-a161-01709994c1bb.".yellow()
            );
        } else {
            eprintln!(
                "\n{}",
                "Hint: Check that --slash and --plus match the settings the value was encoded with, and pass --no-trim only for values ending in '=='."
                    .yellow()
            );
        }
    } else if let Some(CliError::Unrecognized(_)) = err.downcast_ref::<CliError>() {
        eprintln!(
            "\n{}",
            "Hint: Use `sg encode` or `sg decode` to see the specific parse error.".yellow()
        );
    }
}
