//! Price query and record types

use crate::error::MandiError;
use crate::filters::{Commodity, Market, State};
use serde::{Deserialize, Serialize};

/// A validated (commodity, state, market) selection for a single lookup
///
/// Deserializes directly from the HTTP query string. `commodity` is
/// required; `state` and `market` fall back to their documented defaults
/// when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceQuery {
    pub commodity: Commodity,
    #[serde(default)]
    pub state: State,
    #[serde(default)]
    pub market: Market,
}

impl PriceQuery {
    pub fn new(commodity: Commodity, state: State, market: Market) -> Self {
        Self {
            commodity,
            state,
            market,
        }
    }
}

/// The normalized first-match price record returned to the client
///
/// Every field is optional: a field the upstream record omits surfaces as
/// null in the response, never as an error. Upstream serializes prices
/// and dates as strings; they are passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub commodity: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub market: Option<String>,
    pub arrival_date: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub modal_price: Option<String>,
}

/// Terminal outcome of a single upstream lookup
///
/// Exactly one variant is produced per call. Failures are classified in
/// the carried [`MandiError`] rather than propagated as raw errors.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The first matching record, normalized
    Record(PriceRecord),
    /// Upstream answered but had no matching records; carries the query
    /// for a descriptive message
    NotFound(PriceQuery),
    /// The lookup failed before or during the upstream call
    Failed(MandiError),
}
