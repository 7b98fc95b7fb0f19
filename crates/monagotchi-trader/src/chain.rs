//! Token contract capability and its alloy implementation.
//!
//! [`TokenContract`] is the only seam between the trader's operations and the
//! blockchain. The operations are generic over it, so tests can substitute a
//! scripted contract that never touches the network. [`AlloyToken`] is the
//! production implementation: an HTTP provider with a local signer and an
//! ERC-20 binding generated by `sol!`.
//!
//! Trait methods return `Send` futures; implementations may still be written
//! as `async fn`.

use std::future::Future;
use std::time::Duration;

use alloy::network::{EthereumWallet, ReceiptResponse};
use alloy::primitives::{Address, TxHash, U256, address};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use tracing::debug;

use self::erc20::IERC20;
use crate::config::TraderConfig;
use crate::error::ChainError;

/// Sink for burned tokens. Nobody holds its private key.
pub const BURN_ADDRESS: Address = address!("0x000000000000000000000000000000000000dEaD");

mod erc20 {
    #![allow(missing_docs)]

    alloy::sol! {
        /// Minimal ERC-20 surface used by the trader.
        #[sol(rpc)]
        interface IERC20 {
            function balanceOf(address owner) external view returns (uint256);
            function transfer(address to, uint256 amount) external returns (bool);
            function decimals() external view returns (uint8);
            function name() external view returns (string);
            function symbol() external view returns (string);
            function totalSupply() external view returns (uint256);
        }
    }
}

/// Outcome of waiting for a submitted transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// Block that included the transaction.
    pub block_number: u64,
    /// Receipt status: `false` means the transfer reverted.
    pub succeeded: bool,
}

/// Read and transfer access to one fungible token contract, bound to a wallet.
pub trait TokenContract {
    /// Address of the signing wallet.
    fn owner(&self) -> Address;

    /// Decimal precision of the token.
    fn decimals(&self) -> impl Future<Output = Result<u8, ChainError>> + Send;

    /// Raw balance of `account`.
    fn balance_of(&self, account: Address)
    -> impl Future<Output = Result<U256, ChainError>> + Send;

    /// Token name.
    fn name(&self) -> impl Future<Output = Result<String, ChainError>> + Send;

    /// Token symbol.
    fn symbol(&self) -> impl Future<Output = Result<String, ChainError>> + Send;

    /// Raw total supply.
    fn total_supply(&self) -> impl Future<Output = Result<U256, ChainError>> + Send;

    /// Sign and submit `transfer(to, amount)` from the wallet.
    ///
    /// Returns once the node has accepted the transaction, before it is mined.
    fn submit_transfer(
        &self,
        to: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash, ChainError>> + Send;

    /// Block until the transaction is included in a block.
    fn await_confirmation(
        &self,
        tx_hash: TxHash,
    ) -> impl Future<Output = Result<Confirmation, ChainError>> + Send;
}

/// ERC-20 contract reached over JSON-RPC, signing with a local private key.
pub struct AlloyToken {
    provider: DynProvider,
    contract: IERC20::IERC20Instance<DynProvider>,
    owner: Address,
    confirmations: u64,
    confirmation_timeout: Option<Duration>,
}

impl AlloyToken {
    /// Build the provider, wallet and contract binding from configuration.
    ///
    /// No request is sent here; an unreachable endpoint surfaces on the first
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] if the key, URL or token address do not parse.
    pub fn connect(config: &TraderConfig) -> Result<Self, ChainError> {
        let signer: PrivateKeySigner = config
            .private_key
            .trim()
            .parse()
            .map_err(|e| ChainError::Signer(format!("{e}")))?;
        let owner = signer.address();

        let url: Url = config
            .rpc_url
            .parse()
            .map_err(|e| ChainError::Endpoint(format!("{}: {e}", config.rpc_url)))?;

        let token_address: Address = config
            .token_address
            .trim()
            .parse()
            .map_err(|e| ChainError::TokenAddress(format!("{}: {e}", config.token_address)))?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();
        let contract = IERC20::new(token_address, provider.clone());

        debug!(owner = %owner, token = %token_address, "token contract bound");

        Ok(Self {
            provider,
            contract,
            owner,
            confirmations: config.confirmations,
            confirmation_timeout: config.confirmation_timeout,
        })
    }
}

impl TokenContract for AlloyToken {
    fn owner(&self) -> Address {
        self.owner
    }

    async fn decimals(&self) -> Result<u8, ChainError> {
        self.contract
            .decimals()
            .call()
            .await
            .map_err(|e| ChainError::Rpc(format!("decimals() failed: {e}")))
    }

    async fn balance_of(&self, account: Address) -> Result<U256, ChainError> {
        self.contract
            .balanceOf(account)
            .call()
            .await
            .map_err(|e| ChainError::Rpc(format!("balanceOf({account}) failed: {e}")))
    }

    async fn name(&self) -> Result<String, ChainError> {
        self.contract
            .name()
            .call()
            .await
            .map_err(|e| ChainError::Rpc(format!("name() failed: {e}")))
    }

    async fn symbol(&self) -> Result<String, ChainError> {
        self.contract
            .symbol()
            .call()
            .await
            .map_err(|e| ChainError::Rpc(format!("symbol() failed: {e}")))
    }

    async fn total_supply(&self) -> Result<U256, ChainError> {
        self.contract
            .totalSupply()
            .call()
            .await
            .map_err(|e| ChainError::Rpc(format!("totalSupply() failed: {e}")))
    }

    async fn submit_transfer(&self, to: Address, amount: U256) -> Result<TxHash, ChainError> {
        let pending = self
            .contract
            .transfer(to, amount)
            .send()
            .await
            .map_err(|e| ChainError::Rpc(format!("transfer({to}, {amount}) rejected: {e}")))?;
        Ok(*pending.tx_hash())
    }

    async fn await_confirmation(&self, tx_hash: TxHash) -> Result<Confirmation, ChainError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .with_required_confirmations(self.confirmations)
            .with_timeout(self.confirmation_timeout)
            .get_receipt()
            .await
            .map_err(|e| ChainError::Confirmation(format!("{tx_hash}: {e}")))?;

        let block_number = ReceiptResponse::block_number(&receipt).ok_or_else(|| {
            ChainError::Confirmation(format!("{tx_hash}: receipt has no block number"))
        })?;

        Ok(Confirmation {
            block_number,
            succeeded: ReceiptResponse::status(&receipt),
        })
    }
}
