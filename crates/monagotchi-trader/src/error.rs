//! Error types for the trader.
//!
//! Errors fall into two tiers. [`ConfigError`] is the pre-flight tier: the
//! operator forgot to set something, and the binary reports it as plain text
//! on stderr. [`TraderError`] is the runtime tier: every variant ends up as
//! the `error` string of a JSON failure envelope on stdout.

use monagotchi_types::UnknownAction;

/// Pre-flight configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("{0} not set")]
    Missing(&'static str),

    /// An optional environment variable is set but cannot be used.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// Name of the offending variable.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Failures reported by the blockchain client.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// The signing key could not be parsed.
    #[error("invalid private key: {0}")]
    Signer(String),

    /// The RPC endpoint is not a usable URL.
    #[error("invalid RPC URL: {0}")]
    Endpoint(String),

    /// The token contract address could not be parsed.
    #[error("invalid token address: {0}")]
    TokenAddress(String),

    /// A contract read or transaction submission failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The network never produced a usable receipt for a submitted transfer.
    #[error("confirmation failed: {0}")]
    Confirmation(String),
}

/// Runtime errors, each rendered as a JSON failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum TraderError {
    /// Command-line arguments did not name a runnable command.
    #[error("{0}")]
    Usage(String),

    /// The burn argument is not one of the known actions.
    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),

    /// The wallet cannot pay for the requested action.
    #[error("Insufficient $MONA. Need {need}, have {have}")]
    InsufficientBalance {
        /// Cost of the action in whole tokens.
        need: u64,
        /// Current scaled balance.
        have: String,
    },

    /// The action cost does not fit in 256 bits at the token's precision.
    #[error("cost of {units} tokens overflows at {decimals} decimals")]
    AmountOverflow {
        /// Cost in whole tokens.
        units: u64,
        /// Token decimal precision.
        decimals: u8,
    },

    /// The burn transfer was mined but reverted.
    #[error("Transaction {tx_hash} reverted in block {block_number}")]
    Reverted {
        /// Hash of the reverted transaction.
        tx_hash: String,
        /// Block that included it.
        block_number: u64,
    },

    /// The blockchain client failed.
    #[error(transparent)]
    Chain(#[from] ChainError),
}
