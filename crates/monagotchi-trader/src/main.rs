//! Monagotchi trader entry point.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, to stderr)
//! 2. Parse the subcommand; usage mistakes and unknown actions are reported
//!    as JSON before anything else happens
//! 3. Load configuration from the environment; a missing variable is a
//!    plain-text diagnostic on stderr and exit status 1, with nothing on stdout
//! 4. Bind the token contract through alloy
//! 5. Run the operation and print its envelope

use std::process::ExitCode;

use monagotchi_trader::cli::{self, Invocation};
use monagotchi_trader::{AlloyToken, Outcome, TraderConfig, output, trader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Returns exit status 0 when the printed envelope reports success and 1
/// otherwise.
#[tokio::main]
async fn main() -> ExitCode {
    // Stdout is reserved for the result envelope.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let request = match cli::parse(std::env::args_os()) {
        Ok(Invocation::Run(request)) => request,
        Ok(Invocation::Print(text)) => text.exit(),
        Err(e) => return output::emit::<Outcome>(Err(e)),
    };
    debug!(?request, "command parsed");

    let config = match TraderConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        rpc_url = config.rpc_url,
        token_address = config.token_address,
        confirmations = config.confirmations,
        "configuration loaded"
    );

    let token = match AlloyToken::connect(&config) {
        Ok(token) => token,
        Err(e) => return output::emit::<Outcome>(Err(e.into())),
    };

    output::emit(trader::execute(&token, request, &config.token_address).await)
}
