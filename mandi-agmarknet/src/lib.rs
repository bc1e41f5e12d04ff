//! Agmarknet integration for the Farmer Market Price API
//!
//! This crate provides a client for the data.gov.in mandi price resource,
//! issuing single filtered lookups and normalizing their outcomes.

pub mod client;
pub mod types;

pub use client::AgmarknetClient;
