//! Command-line surface.
//!
//! Argument mistakes are runtime failures, not clap's usual stderr report:
//! they come back as [`TraderError::Usage`] so the binary can print them as a
//! JSON failure envelope like every other outcome. Only `--help` and
//! `--version` bypass the envelope.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use monagotchi_types::Action;
use tracing::debug;

use crate::error::TraderError;
use crate::trader::Request;

/// Usage line for a missing or unknown command.
pub const USAGE: &str = "Usage: monagotchi-trader <balance|burn|info>";

/// Usage line for `burn` without an action.
pub const BURN_USAGE: &str = "Usage: monagotchi-trader burn <feed|play|clean|heal>";

/// Check and spend the Monagotchi token balance on Monad.
#[derive(Debug, Parser)]
#[command(name = "monagotchi-trader", version)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Raw subcommands as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the wallet balance and which actions it can pay for.
    Balance,
    /// Burn tokens to pay for an action (feed, play, clean, heal).
    Burn {
        /// Action to pay for.
        action: Option<String>,
    },
    /// Show token metadata and the wallet balance.
    Info,
}

impl Command {
    /// Validate the subcommand into a runnable request.
    ///
    /// Pure: an unknown action is rejected here, before any configuration
    /// is read or any connection exists.
    pub fn into_request(self) -> Result<Request, TraderError> {
        match self {
            Self::Balance => Ok(Request::Balance),
            Self::Info => Ok(Request::Info),
            Self::Burn { action: None } => Err(TraderError::Usage(BURN_USAGE.to_owned())),
            Self::Burn {
                action: Some(action),
            } => Ok(Request::Burn(action.parse::<Action>()?)),
        }
    }
}

/// What the binary should do after parsing its arguments.
#[derive(Debug)]
pub enum Invocation {
    /// Run a validated request.
    Run(Request),
    /// Print help or version text and exit successfully.
    Print(clap::Error),
}

/// Parse process arguments (including the program name).
pub fn parse<I, T>(args: I) -> Result<Invocation, TraderError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli.command.into_request().map(Invocation::Run),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Print(e))
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "argument parsing failed");
            Err(TraderError::Usage(USAGE.to_owned()))
        }
    }
}
