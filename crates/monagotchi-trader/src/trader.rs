//! The three trader operations: balance check, token info, and burn.
//!
//! Every operation takes the token contract by reference and returns a
//! report or a [`TraderError`]. Nothing here writes to stdout; rendering the
//! result envelope is the caller's job.
//!
//! A burn runs strictly in order:
//! 1. Read decimals and the wallet balance
//! 2. Refuse if the balance does not cover the action's cost
//! 3. Submit one transfer of `cost * 10^decimals` to the burn address
//! 4. Wait for the confirmation
//! 5. Re-read the balance and report
//!
//! Progress notes go through `tracing`, which the binary routes to stderr.

use alloy::primitives::Address;
use monagotchi_types::{Action, BalanceReport, BurnReport, TokenAmount, TokenInfoReport};
use serde::Serialize;
use tracing::{debug, info};

use crate::chain::{BURN_ADDRESS, TokenContract};
use crate::error::TraderError;

/// A fully validated command, ready to run against the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Report the wallet balance and which actions it can pay for.
    Balance,
    /// Burn the cost of an action.
    Burn(Action),
    /// Report token metadata and the wallet balance.
    Info,
}

/// The report produced by whichever operation ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Result of [`Request::Balance`].
    Balance(BalanceReport),
    /// Result of [`Request::Burn`].
    Burn(BurnReport),
    /// Result of [`Request::Info`].
    Info(TokenInfoReport),
}

/// Run one request against the token contract.
///
/// `token_address` is echoed verbatim in the info report.
pub async fn execute<C: TokenContract>(
    token: &C,
    request: Request,
    token_address: &str,
) -> Result<Outcome, TraderError> {
    match request {
        Request::Balance => check_balance(token).await.map(Outcome::Balance),
        Request::Burn(action) => burn(token, action).await.map(Outcome::Burn),
        Request::Info => token_info(token, token_address).await.map(Outcome::Info),
    }
}

/// Report the wallet's scaled balance and per-action affordability.
///
/// Two reads: decimals, then balance.
pub async fn check_balance<C: TokenContract>(token: &C) -> Result<BalanceReport, TraderError> {
    let owner = token.owner();
    let balance = read_balance(token, owner).await?;

    let affordable = Action::ALL
        .into_iter()
        .map(|action| (action, balance.covers(action.cost())))
        .collect();

    debug!(owner = %owner, balance = %balance, "balance checked");

    Ok(BalanceReport {
        address: owner.to_checksum(None),
        balance: balance.compact(),
        affordable,
    })
}

/// Report token metadata plus the wallet balance.
///
/// The five reads are independent and run concurrently; the first failure
/// fails the whole report.
pub async fn token_info<C: TokenContract>(
    token: &C,
    token_address: &str,
) -> Result<TokenInfoReport, TraderError> {
    let owner = token.owner();

    let (name, symbol, decimals, total_supply, raw_balance) = futures::try_join!(
        token.name(),
        token.symbol(),
        token.decimals(),
        token.total_supply(),
        token.balance_of(owner),
    )?;

    Ok(TokenInfoReport {
        name,
        symbol,
        decimals,
        total_supply: TokenAmount::new(total_supply, decimals).to_string(),
        owner_balance: TokenAmount::new(raw_balance, decimals).to_string(),
        token_address: token_address.to_owned(),
        owner_address: owner.to_checksum(None),
    })
}

/// Burn the cost of `action` by transferring it to [`BURN_ADDRESS`].
///
/// The transfer is submitted at most once, and only after the balance check
/// passes. The report is built only after the confirmation arrives.
pub async fn burn<C: TokenContract>(token: &C, action: Action) -> Result<BurnReport, TraderError> {
    let owner = token.owner();
    let cost = action.cost();

    let balance = read_balance(token, owner).await?;
    if !balance.covers(cost) {
        return Err(TraderError::InsufficientBalance {
            need: cost,
            have: balance.compact(),
        });
    }

    let decimals = balance.decimals();
    let amount = TokenAmount::from_whole(cost, decimals).ok_or(TraderError::AmountOverflow {
        units: cost,
        decimals,
    })?;

    info!(action = %action, cost, "burning {cost} $MONA for {action}");
    let tx_hash = token.submit_transfer(BURN_ADDRESS, amount.raw()).await?;
    info!(tx_hash = %tx_hash, "tx sent");

    let confirmation = token.await_confirmation(tx_hash).await?;
    if !confirmation.succeeded {
        return Err(TraderError::Reverted {
            tx_hash: tx_hash.to_string(),
            block_number: confirmation.block_number,
        });
    }
    let block_number = confirmation.block_number;
    info!(block_number, "confirmed in block {block_number}");

    let remaining = TokenAmount::new(token.balance_of(owner).await?, decimals);

    Ok(BurnReport {
        action,
        burned: cost,
        tx_hash: tx_hash.to_string(),
        remaining_balance: remaining.compact(),
    })
}

/// Read decimals, then the raw balance of `owner`.
async fn read_balance<C: TokenContract>(
    token: &C,
    owner: Address,
) -> Result<TokenAmount, TraderError> {
    let decimals = token.decimals().await?;
    let raw = token.balance_of(owner).await?;
    Ok(TokenAmount::new(raw, decimals))
}
