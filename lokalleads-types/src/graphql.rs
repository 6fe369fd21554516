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

//! GraphQL-over-HTTP envelope.
//!
//! Every operation is sent as `{ "query": ..., "variables": ... }` and answered
//! with `{ "data": ..., "errors": [...] }`. Either member may be absent.

use serde::{Deserialize, Serialize};

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Serialize, Clone)]
pub struct GraphQLRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

impl<'a, V: Serialize> GraphQLRequest<'a, V> {
    pub fn new(query: &'a str, variables: V) -> Self {
        Self { query, variables }
    }
}

/// A single entry of the `errors` array.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Top-level GraphQL response envelope.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLResponse<T> {
    /// Split the envelope into its payload or its errors.
    ///
    /// The presence of the `errors` member marks the whole response as failed,
    /// even when it is an empty array or `data` is populated as well. Callers
    /// never see partial data from a failed operation.
    pub fn into_data(self) -> Result<Option<T>, Vec<GraphQLError>> {
        match self.errors {
            Some(errors) => Err(errors),
            None => Ok(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn data_without_errors_is_success() {
        let resp: GraphQLResponse<Payload> =
            serde_json::from_str(r#"{"data":{"value":7}}"#).unwrap();
        assert_eq!(resp.into_data().unwrap(), Some(Payload { value: 7 }));
    }

    #[test]
    fn errors_discard_partial_data() {
        let resp: GraphQLResponse<Payload> = serde_json::from_str(
            r#"{"data":{"value":7},"errors":[{"message":"boom","path":["calculation"]}]}"#,
        )
        .unwrap();
        let errors = resp.into_data().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "boom");
    }

    #[test]
    fn empty_errors_array_still_fails() {
        let resp: GraphQLResponse<Payload> =
            serde_json::from_str(r#"{"data":null,"errors":[]}"#).unwrap();
        assert!(resp.into_data().is_err());
    }

    #[test]
    fn missing_data_is_none() {
        let resp: GraphQLResponse<Payload> = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.into_data().unwrap(), None);
    }

    #[test]
    fn request_serializes_query_and_variables() {
        let req = GraphQLRequest::new("query X { x }", serde_json::json!({ "a": 1 }));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["query"], "query X { x }");
        assert_eq!(body["variables"]["a"], 1);
    }
}
