//! Core types for the Farmer Market Price API
//!
//! This crate defines the shared data structures used across the service,
//! including the filter enumerations, price query and record shapes, and
//! the service-wide error type.

pub mod error;
pub mod filters;
pub mod price;

pub use error::{MandiError, MandiResult};
pub use filters::{Commodity, Market, State};
pub use price::{LookupOutcome, PriceQuery, PriceRecord};
