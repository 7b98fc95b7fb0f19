//! Monagotchi token trader.
//!
//! Reads the wallet's balance of the Monagotchi ERC-20 token on Monad, shows
//! token metadata, and burns a fixed amount of tokens to pay for one of four
//! in-game actions. Each run prints exactly one JSON envelope on stdout.
//!
//! # Modules
//!
//! - [`config`] -- Environment configuration (token, key, RPC endpoint)
//! - [`cli`] -- Subcommand parsing into validated requests
//! - [`chain`] -- Token contract capability and the alloy implementation
//! - [`trader`] -- Balance, info and burn operations
//! - [`output`] -- JSON envelope rendering
//! - [`error`] -- Pre-flight and runtime error types

pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod trader;

pub use chain::{AlloyToken, BURN_ADDRESS, Confirmation, TokenContract};
pub use config::TraderConfig;
pub use error::{ChainError, ConfigError, TraderError};
pub use trader::{Outcome, Request};
