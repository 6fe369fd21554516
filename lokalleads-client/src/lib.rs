/*
 * Copyright 2025 Jordan GmbH
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Typed GraphQL client for the LokalLeads calculator API.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use lokalleads_client::LokalLeadsClient;
//!
//! # async fn example() -> Result<(), lokalleads_client::ApiError> {
//! let client = LokalLeadsClient::default();
//!
//! if let Some(integration) = client.get_calculator_integration("jordan-wartung", None).await? {
//!     println!("Flow {} ({})", integration.flow_id, integration.locale);
//! }
//! # Ok(())
//! # }
//! ```

pub mod appointments;
pub mod calculation;
pub mod error;
pub mod integration;
pub mod transactions;

pub use error::ApiError;
pub use lokalleads_types;

use lokalleads_types::{GraphQLRequest, GraphQLResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Production GraphQL endpoint of the LokalLeads API.
pub const DEFAULT_ENDPOINT: &str = "https://api.lokalleads.de/graphql-admin";

/// A typed client for the LokalLeads GraphQL API.
///
/// Every method performs exactly one `POST` round trip. There are no
/// retries, no caching and no batching; timeouts are the transport defaults.
#[derive(Debug, Clone)]
pub struct LokalLeadsClient {
    endpoint: String,
    http: Client,
}

impl Default for LokalLeadsClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl LokalLeadsClient {
    /// Create a new client posting to the given GraphQL endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one GraphQL document and decode the envelope.
    ///
    /// Non-2xx statuses, transport failures and undecodable bodies are
    /// errors. The envelope itself is returned untouched; use
    /// [`soft_data`] to apply the soft-failure rule for GraphQL `errors`.
    pub(crate) async fn execute<V, T>(
        &self,
        query: &str,
        variables: V,
    ) -> Result<GraphQLResponse<T>, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let result = self.send(&GraphQLRequest::new(query, variables)).await;
        if let Err(e) = &result {
            log::error!("LokalLeads API Error: {e}");
        }
        result
    }

    async fn send<V, T>(&self, request: &GraphQLRequest<'_, V>) -> Result<GraphQLResponse<T>, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Apply the soft-failure rule: a response carrying `errors` yields `None`.
pub(crate) fn soft_data<T>(operation: &str, response: GraphQLResponse<T>) -> Option<T> {
    match response.into_data() {
        Ok(data) => data,
        Err(errors) => {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            log::error!("GraphQL Errors in {operation}: {messages:?}");
            None
        }
    }
}
