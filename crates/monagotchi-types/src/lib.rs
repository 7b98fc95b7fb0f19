//! Shared type definitions for the Monagotchi token trader.
//!
//! Everything here is pure data: no network, no environment, no I/O. The
//! trader crate builds on these types to talk to the token contract and to
//! render its single-line JSON output.
//!
//! # Modules
//!
//! - [`action`] -- The four in-game actions and their fixed token costs
//! - [`amount`] -- Exact scaling of raw token units into display amounts
//! - [`report`] -- Result envelope payloads written to standard output

pub mod action;
pub mod amount;
pub mod report;

pub use action::{Action, UnknownAction};
pub use amount::TokenAmount;
pub use report::{BalanceReport, BurnReport, Envelope, Failure, TokenInfoReport};
