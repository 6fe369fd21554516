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

//! Calculator configuration loaded from environment variables.

use std::env;

use lokalleads_client::{LokalLeadsClient, DEFAULT_ENDPOINT};

use crate::error::ConfigError;
use crate::form::CalculatorKind;
use crate::widget::CalculatorProps;

/// LokalLeads settings shared by every calculator on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// GraphQL endpoint (default: the LokalLeads production endpoint).
    pub endpoint: String,
    /// Integration identifier issued by LokalLeads. Empty disables remote mode.
    pub ident_name: String,
    /// Whether to use the remote API at all.
    pub use_api: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            ident_name: String::new(),
            use_api: false,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `LOKALLEADS_ENDPOINT` (default: the production endpoint)
    /// - `LOKALLEADS_IDENT_NAME` (default: empty)
    /// - `LOKALLEADS_USE_API` (`true`/`false`/`1`/`0`, default: `false`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup("LOKALLEADS_ENDPOINT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let ident_name = lookup("LOKALLEADS_IDENT_NAME")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let use_api = match lookup("LOKALLEADS_USE_API") {
            None => false,
            Some(value) => parse_bool("LOKALLEADS_USE_API", &value)?,
        };

        Ok(Self {
            endpoint,
            ident_name,
            use_api,
        })
    }

    pub fn client(&self) -> LokalLeadsClient {
        LokalLeadsClient::new(&self.endpoint)
    }

    pub fn props(&self, kind: CalculatorKind) -> CalculatorProps {
        CalculatorProps {
            kind,
            ident_name: self.ident_name.clone(),
            use_api: self.use_api,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" => Ok(false),
        "true" | "1" => Ok(true),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
