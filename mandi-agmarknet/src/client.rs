//! Agmarknet API client
//!
//! Provides the single filtered price lookup against the data.gov.in
//! resource API.

use crate::types::ResourceResponse;
use mandi_core::{LookupOutcome, MandiError, PriceQuery};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Base URL for the Agmarknet daily mandi price resource
const AGMARKNET_API_BASE: &str =
    "https://api.data.gov.in/resource/9ef84268-d588-465a-a308-a864a43d0070";

/// Bound on each upstream call; expiry classifies as a network failure
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Only the first matching record is ever considered
const RECORD_LIMIT: &str = "1";

/// Agmarknet API client
#[derive(Clone)]
pub struct AgmarknetClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AgmarknetClient {
    /// Create a new client holding the data.gov.in credential
    ///
    /// An empty credential is normalized to unset; lookups then
    /// short-circuit with a configuration error instead of calling out.
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: AGMARKNET_API_BASE.to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Override the upstream base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an upstream credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up the first matching price record for the query
    ///
    /// Produces exactly one outcome per call: the normalized record, a
    /// not-found indication carrying the query, or a classified failure.
    /// A failed attempt is terminal; no retry is issued.
    #[instrument(skip(self))]
    pub async fn lookup_price(&self, query: PriceQuery) -> LookupOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return LookupOutcome::Failed(MandiError::config("DATA_GOV_API_KEY not set"));
        };

        match self.fetch_records(api_key, query).await {
            Ok(response) => match response.records.into_iter().next() {
                Some(record) => LookupOutcome::Record(record.to_price_record()),
                None => LookupOutcome::NotFound(query),
            },
            Err(e) => LookupOutcome::Failed(e),
        }
    }

    /// Issue the single filtered GET against the resource endpoint
    async fn fetch_records(
        &self,
        api_key: &str,
        query: PriceQuery,
    ) -> Result<ResourceResponse, MandiError> {
        debug!(
            "Fetching {} price for {}, {}",
            query.commodity, query.market, query.state
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api-key", api_key),
                ("format", "json"),
                ("filters[commodity]", query.commodity.as_str()),
                ("filters[state]", query.state.as_str()),
                ("filters[market]", query.market.as_str()),
                ("limit", RECORD_LIMIT),
            ])
            .send()
            .await
            .map_err(|e| MandiError::network(format!("Failed to reach Agmarknet: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MandiError::api(format!(
                "Agmarknet API error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| MandiError::parse(format!("Failed to parse price response: {}", e)))
    }
}

impl std::fmt::Debug for AgmarknetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgmarknetClient")
            .field("base_url", &self.base_url)
            .field("has_credential", &self.api_key.is_some())
            .finish()
    }
}
