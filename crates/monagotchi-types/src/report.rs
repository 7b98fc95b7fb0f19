//! Result envelopes: the trader's entire standard output.
//!
//! Every run that gets past configuration prints exactly one of these as a
//! single JSON line. Successful runs print an [`Envelope`] wrapping one of the
//! report payloads; failed runs print a [`Failure`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// A successful result: `{"success": true, ...payload}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Always `true`.
    pub success: bool,
    /// Operation-specific fields, flattened into the top-level object.
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    pub const fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

/// A failed result: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Always `false`.
    pub success: bool,
    /// Human-readable description of what went wrong.
    pub error: String,
}

impl Failure {
    /// Build a failure envelope from any displayable error.
    pub fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

/// Output of the `balance` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    /// Checksummed wallet address.
    pub address: String,
    /// Scaled balance, e.g. `"12500"`.
    pub balance: String,
    /// Whether the balance covers each action's cost, keyed by action name.
    pub affordable: BTreeMap<Action, bool>,
}

/// Output of a successful `burn` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnReport {
    /// The action that was paid for.
    pub action: Action,
    /// Whole tokens burned.
    pub burned: u64,
    /// Hash of the confirmed transfer transaction.
    pub tx_hash: String,
    /// Scaled balance re-read after confirmation.
    pub remaining_balance: String,
}

/// Output of the `info` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfoReport {
    /// Token name.
    pub name: String,
    /// Token ticker symbol.
    pub symbol: String,
    /// Decimal precision.
    pub decimals: u8,
    /// Scaled total supply.
    pub total_supply: String,
    /// Scaled balance of the configured wallet.
    pub owner_balance: String,
    /// Token contract address as configured.
    pub token_address: String,
    /// Checksummed wallet address.
    pub owner_address: String,
}
