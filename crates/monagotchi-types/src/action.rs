//! In-game actions paid for by burning tokens.
//!
//! The cost table is fixed at compile time. Costs are denominated in display
//! units of the token (whole tokens), not raw on-chain units; the trader
//! scales them with the contract's decimal precision before submitting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An action a Monagotchi owner can pay for.
///
/// Variant order is the canonical listing order used in error messages and
/// in the affordability map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Feed the pet.
    Feed,
    /// Play with the pet.
    Play,
    /// Clean up after the pet.
    Clean,
    /// Heal the pet.
    Heal,
}

impl Action {
    /// Every action, in canonical order.
    pub const ALL: [Self; 4] = [Self::Feed, Self::Play, Self::Clean, Self::Heal];

    /// Cost of the action in whole tokens. Always positive.
    pub const fn cost(self) -> u64 {
        match self {
            Self::Feed => 1000,
            Self::Play => 2500,
            Self::Clean => 1500,
            Self::Heal => 5000,
        }
    }

    /// Lower-case identifier accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Clean => "clean",
            Self::Heal => "heal",
        }
    }

    /// Comma-separated list of all action names, e.g. `feed, play, clean, heal`.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|action| action.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name one of the known actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action: {input}. Valid: {valid}", valid = Action::valid_names())]
pub struct UnknownAction {
    /// The rejected input, verbatim.
    pub input: String,
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownAction {
                input: s.to_owned(),
            })
    }
}
