//! Agmarknet API response types
//!
//! These types mirror the data.gov.in resource API responses and are
//! converted to mandi-core types for use in the service.

use mandi_core::PriceRecord;
use serde::Deserialize;

/// Response from GET /resource/{resource_id}
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceResponse {
    /// Matching rows; a query that matched nothing may omit the key
    /// entirely, which reads as an empty collection
    #[serde(default)]
    pub records: Vec<AgmarknetRecord>,
}

/// A single mandi price row from the resource API
///
/// Upstream serializes every value as a string, and any field may be
/// missing on a given row.
#[derive(Debug, Clone, Deserialize)]
pub struct AgmarknetRecord {
    #[serde(default)]
    pub commodity: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub district: Option<String>,

    #[serde(default)]
    pub market: Option<String>,

    /// Arrival date as reported upstream (dd/mm/yyyy)
    #[serde(default)]
    pub arrival_date: Option<String>,

    /// Minimum transaction price, rupees per quintal
    #[serde(default)]
    pub min_price: Option<String>,

    /// Maximum transaction price, rupees per quintal
    #[serde(default)]
    pub max_price: Option<String>,

    /// Most frequently occurring transaction price
    #[serde(default)]
    pub modal_price: Option<String>,
}

impl AgmarknetRecord {
    /// Convert to mandi-core PriceRecord
    ///
    /// Present fields are copied verbatim; absent fields stay None.
    pub fn to_price_record(&self) -> PriceRecord {
        PriceRecord {
            commodity: self.commodity.clone(),
            state: self.state.clone(),
            district: self.district.clone(),
            market: self.market.clone(),
            arrival_date: self.arrival_date.clone(),
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            modal_price: self.modal_price.clone(),
        }
    }
}
