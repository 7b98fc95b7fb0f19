//! Exact conversion between raw token units and display amounts.
//!
//! A token contract stores balances as 256-bit integers and publishes a
//! decimal precision. The display amount is `raw / 10^decimals`. All
//! arithmetic here stays in integer space: comparisons scale the other side
//! up instead of scaling the balance down, and formatting works on the
//! decimal digit string, so no precision is lost for any balance.

use std::fmt;

use alloy_primitives::U256;

/// A token quantity in raw on-chain units together with the token's precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    raw: U256,
    decimals: u8,
}

impl TokenAmount {
    /// Wrap a raw on-chain quantity.
    pub const fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// Build an amount from whole display units (`units * 10^decimals`).
    ///
    /// Returns `None` when the raw value does not fit in 256 bits.
    pub fn from_whole(units: u64, decimals: u8) -> Option<Self> {
        let raw = unit_scale(decimals)?.checked_mul(U256::from(units))?;
        Some(Self { raw, decimals })
    }

    /// The raw on-chain quantity.
    pub const fn raw(&self) -> U256 {
        self.raw
    }

    /// The token's decimal precision.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Whether this amount is at least `units` whole tokens.
    pub fn covers(&self, units: u64) -> bool {
        if units == 0 {
            return true;
        }
        // A required amount too large for U256 exceeds every balance.
        Self::from_whole(units, self.decimals).is_some_and(|needed| self.raw >= needed.raw)
    }

    /// Display form without a redundant `.0` tail: `500`, `12.5`, `0.001`.
    pub fn compact(&self) -> String {
        let (whole, fraction) = self.split();
        if fraction.is_empty() {
            whole
        } else {
            format!("{whole}.{fraction}")
        }
    }

    /// Split into the integer digits and the significant fractional digits.
    fn split(&self) -> (String, String) {
        let scale = usize::from(self.decimals);
        let digits = self.raw.to_string();

        // Left-pad so at least one integer digit precedes the fraction.
        let padding = scale.saturating_sub(digits.len()).saturating_add(1);
        let padded = if digits.len() > scale {
            digits
        } else {
            format!("{}{digits}", "0".repeat(padding))
        };

        let cut = padded.len().saturating_sub(scale);
        let (whole, fraction) = padded.split_at(cut);
        (whole.to_owned(), fraction.trim_end_matches('0').to_owned())
    }
}

/// Formats like a `formatUnits` call: always at least one fractional digit.
impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, fraction) = self.split();
        if fraction.is_empty() {
            write!(f, "{whole}.0")
        } else {
            write!(f, "{whole}.{fraction}")
        }
    }
}

/// `10^decimals`, or `None` when it overflows 256 bits (decimals > 77).
fn unit_scale(decimals: u8) -> Option<U256> {
    U256::from(10_u8).checked_pow(U256::from(decimals))
}
