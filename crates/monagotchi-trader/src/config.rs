//! Configuration types for the trader.
//!
//! All configuration is loaded from environment variables once, at startup,
//! and handed to the rest of the program by reference. Required values are
//! only checked for presence; parsing them is the chain client's job.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Token contract address variable.
pub const TOKEN_ADDRESS_VAR: &str = "MONAGOTCHI_TOKEN_ADDRESS";
/// Signing key variable.
pub const PRIVATE_KEY_VAR: &str = "MONAD_PRIVATE_KEY";
/// RPC endpoint variable.
pub const RPC_URL_VAR: &str = "MONAD_RPC_URL";
/// Number of confirmations to wait for after a burn.
pub const CONFIRMATIONS_VAR: &str = "MONAGOTCHI_CONFIRMATIONS";
/// Upper bound on the confirmation wait, in seconds.
pub const CONFIRM_TIMEOUT_VAR: &str = "MONAGOTCHI_CONFIRM_TIMEOUT_SECS";

/// Complete trader configuration loaded from the environment.
#[derive(Clone)]
pub struct TraderConfig {
    /// Token contract address, exactly as configured.
    pub token_address: String,
    /// Hex-encoded private key of the wallet.
    pub private_key: String,
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Confirmations required before a burn is reported (at least 1).
    pub confirmations: u64,
    /// Give up waiting for confirmation after this long. `None` waits forever.
    pub confirmation_timeout: Option<Duration>,
}

impl TraderConfig {
    /// Load configuration from the process environment.
    ///
    /// Required variables, checked in this order:
    /// - `MONAGOTCHI_TOKEN_ADDRESS` -- token contract address
    /// - `MONAD_PRIVATE_KEY` -- wallet private key
    /// - `MONAD_RPC_URL` -- JSON-RPC endpoint
    ///
    /// Optional variables:
    /// - `MONAGOTCHI_CONFIRMATIONS` -- confirmations to wait for (default 1)
    /// - `MONAGOTCHI_CONFIRM_TIMEOUT_SECS` -- confirmation deadline (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token_address = required(&lookup, TOKEN_ADDRESS_VAR)?;
        let private_key = required(&lookup, PRIVATE_KEY_VAR)?;
        let rpc_url = required(&lookup, RPC_URL_VAR)?;

        let confirmations = match optional(&lookup, CONFIRMATIONS_VAR) {
            Some(raw) => parse_confirmations(&raw)?,
            None => 1,
        };

        let confirmation_timeout = optional(&lookup, CONFIRM_TIMEOUT_VAR)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        Ok(Self {
            token_address,
            private_key,
            rpc_url,
            confirmations,
            confirmation_timeout,
        })
    }
}

impl fmt::Debug for TraderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraderConfig")
            .field("token_address", &self.token_address)
            .field("private_key", &"<redacted>")
            .field("rpc_url", &self.rpc_url)
            .field("confirmations", &self.confirmations)
            .field("confirmation_timeout", &self.confirmation_timeout)
            .finish()
    }
}

/// Read a required variable. Empty counts as missing.
fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.is_empty())
}

fn parse_confirmations(raw: &str) -> Result<u64, ConfigError> {
    let confirmations: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
        name: CONFIRMATIONS_VAR,
        reason: format!("{e}"),
    })?;
    if confirmations == 0 {
        return Err(ConfigError::Invalid {
            name: CONFIRMATIONS_VAR,
            reason: "must be at least 1".to_owned(),
        });
    }
    Ok(confirmations)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::Invalid {
            name: CONFIRM_TIMEOUT_VAR,
            reason: format!("{e}"),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn load(vars: &BTreeMap<String, String>) -> Result<TraderConfig, ConfigError> {
        TraderConfig::from_lookup(|name| vars.get(name).cloned())
    }

    fn complete() -> BTreeMap<String, String> {
        env(&[
            (TOKEN_ADDRESS_VAR, "0x1111111111111111111111111111111111111111"),
            (PRIVATE_KEY_VAR, "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"),
            (RPC_URL_VAR, "https://testnet-rpc.monad.xyz"),
        ])
    }

    #[test]
    fn loads_required_values_unchanged() {
        let config = load(&complete()).unwrap();
        assert_eq!(config.token_address, "0x1111111111111111111111111111111111111111");
        assert_eq!(config.rpc_url, "https://testnet-rpc.monad.xyz");
        assert_eq!(config.confirmations, 1);
        assert!(config.confirmation_timeout.is_none());
    }

    #[test]
    fn does_not_validate_address_shape() {
        let mut vars = complete();
        vars.insert(TOKEN_ADDRESS_VAR.to_owned(), "not-an-address".to_owned());
        assert_eq!(load(&vars).unwrap().token_address, "not-an-address");
    }

    #[test]
    fn each_required_variable_is_reported_by_name() {
        for name in [TOKEN_ADDRESS_VAR, PRIVATE_KEY_VAR, RPC_URL_VAR] {
            let mut vars = complete();
            vars.remove(name);
            let err = load(&vars).unwrap_err();
            assert_eq!(err.to_string(), format!("{name} not set"));
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut vars = complete();
        vars.insert(RPC_URL_VAR.to_owned(), String::new());
        assert!(matches!(load(&vars), Err(ConfigError::Missing(RPC_URL_VAR))));
    }

    #[test]
    fn token_address_is_checked_first() {
        let err = load(&BTreeMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "MONAGOTCHI_TOKEN_ADDRESS not set");
    }

    #[test]
    fn optional_confirmation_settings() {
        let mut vars = complete();
        vars.insert(CONFIRMATIONS_VAR.to_owned(), "3".to_owned());
        vars.insert(CONFIRM_TIMEOUT_VAR.to_owned(), "90".to_owned());
        let config = load(&vars).unwrap();
        assert_eq!(config.confirmations, 3);
        assert_eq!(config.confirmation_timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn zero_confirmations_rejected() {
        let mut vars = complete();
        vars.insert(CONFIRMATIONS_VAR.to_owned(), "0".to_owned());
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { name: CONFIRMATIONS_VAR, .. })
        ));
    }

    #[test]
    fn garbage_timeout_rejected() {
        let mut vars = complete();
        vars.insert(CONFIRM_TIMEOUT_VAR.to_owned(), "soon".to_owned());
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { name: CONFIRM_TIMEOUT_VAR, .. })
        ));
    }

    #[test]
    fn debug_redacts_private_key() {
        let config = load(&complete()).unwrap();
        let rendered = format!("{config:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("ac0974bec39a17e3"));
    }
}
