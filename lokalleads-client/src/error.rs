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

//! Error types for the LokalLeads client.

use thiserror::Error;

/// Errors returned by [`LokalLeadsClient`](crate::LokalLeadsClient) methods.
///
/// GraphQL-level `errors` are not represented here: they are logged and
/// reported as an empty result (`Ok(None)` / `Ok(false)`).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a status outside `200..=299`.
    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not a GraphQL response of the expected shape.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}
