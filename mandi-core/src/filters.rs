//! Filter enumerations for upstream price queries
//!
//! The upstream dataset is only ever queried with a fixed set of
//! commodity, state, and market values. Serde variant names equal the
//! upstream filter labels, so a deserialized value can be forwarded
//! without translation. Values outside these sets never reach the
//! lookup path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Commodities supported by the price endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Potato,
    Onion,
    Tomato,
    Banana,
    Mango,
}

impl Commodity {
    /// Upstream filter value for this commodity
    pub fn as_str(&self) -> &'static str {
        match self {
            Commodity::Potato => "Potato",
            Commodity::Onion => "Onion",
            Commodity::Tomato => "Tomato",
            Commodity::Banana => "Banana",
            Commodity::Mango => "Mango",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Commodity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "potato" => Ok(Commodity::Potato),
            "onion" => Ok(Commodity::Onion),
            "tomato" => Ok(Commodity::Tomato),
            "banana" => Ok(Commodity::Banana),
            "mango" => Ok(Commodity::Mango),
            _ => Err(format!("Unknown commodity: {}", s)),
        }
    }
}

/// States supported by the price endpoint
///
/// Maharashtra is currently the only covered state and doubles as the
/// default when the client omits the parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    #[default]
    Maharashtra,
}

impl State {
    /// Upstream filter value for this state
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Maharashtra => "Maharashtra",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for State {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maharashtra" => Ok(State::Maharashtra),
            _ => Err(format!("Unknown state: {}", s)),
        }
    }
}

/// Markets supported by the price endpoint
///
/// Nashik is the default when the client omits the parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    #[default]
    Nashik,
    Pune,
    Jalgaon,
}

impl Market {
    /// Upstream filter value for this market
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Nashik => "Nashik",
            Market::Pune => "Pune",
            Market::Jalgaon => "Jalgaon",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nashik" => Ok(Market::Nashik),
            "pune" => Ok(Market::Pune),
            "jalgaon" => Ok(Market::Jalgaon),
            _ => Err(format!("Unknown market: {}", s)),
        }
    }
}
