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

//! Payloads returned by the LokalLeads API.
//!
//! Field names follow the remote schema (camelCase on the wire). Collections
//! the server reports as `null` deserialize as empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Offers are display-only: entries that do not decode are dropped instead of
/// failing the whole calculation.
fn lenient_offers<'de, D>(deserializer: D) -> Result<Vec<OfferItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

// ---------------------------------------------------------------------------
// Calculator integration
// ---------------------------------------------------------------------------

/// Remote configuration bundle for one site identifier.
///
/// Fetched once per widget instance and read-only afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorIntegration {
    pub id: String,
    pub flow_id: String,
    pub ident_name: String,
    pub locale: String,
    pub is_calculation_enabled: bool,
    #[serde(default)]
    pub flow_config: Option<FlowConfig>,
    #[serde(default)]
    pub branding: Option<Branding>,
}

/// Form layout metadata. Not used for computation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FlowConfig {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<FlowGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub translations: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FlowGroup {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<FlowElement>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FlowElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

// ---------------------------------------------------------------------------
// Flow transactions
// ---------------------------------------------------------------------------

/// Server-side session tracking one visitor's progress through the flow.
///
/// `trx_token` is the opaque token every later update or calculation refers to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlowTransaction {
    pub id: String,
    pub trx_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Outcome of a remote calculation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CalculationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Opaque key/value pairs meant for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default, deserialize_with = "lenient_offers")]
    pub offers: Vec<OfferItem>,
}

impl CalculationResult {
    /// The price, if the server returned one a visitor can be shown.
    ///
    /// Zero and non-finite prices count as "no estimate".
    pub fn usable_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p != 0.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct OfferItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

/// Response payload of `appointmentCreate`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_from_wire() {
        let json = r##"{
            "id": "int-1",
            "flowId": "flow-9",
            "identName": "jordan-wartung",
            "locale": "de",
            "isCalculationEnabled": true,
            "flowConfig": {
                "id": "cfg-1",
                "name": "Wartung",
                "groups": [{ "id": "g1", "name": "Anlage" }],
                "translations": null
            },
            "branding": { "primaryColor": "#003366" }
        }"##;
        let integration: CalculatorIntegration = serde_json::from_str(json).unwrap();
        assert_eq!(integration.ident_name, "jordan-wartung");
        assert!(integration.is_calculation_enabled);
        let config = integration.flow_config.unwrap();
        assert_eq!(config.groups.len(), 1);
        assert!(config.groups[0].elements.is_empty());
        assert!(config.translations.is_empty());
        assert_eq!(
            integration.branding.unwrap().primary_color.as_deref(),
            Some("#003366")
        );
    }

    #[test]
    fn calculation_result_with_details_and_offers() {
        let json = r#"{
            "price": 249.5,
            "details": { "Anfahrt": 35, "Hinweis": "inkl. MwSt." },
            "offers": [{ "id": "o1", "name": "Basis", "price": 199.0 }]
        }"#;
        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.usable_price(), Some(249.5));
        let details = result.details.unwrap();
        assert_eq!(details["Anfahrt"], serde_json::json!(35));
        assert_eq!(result.offers[0].name, "Basis");
        assert_eq!(result.offers[0].description, None);
    }

    #[test]
    fn incomplete_offers_do_not_hide_the_price() {
        let json = r#"{
            "price": 27999.0,
            "offers": [
                { "name": "Basis", "price": 199.0 },
                "not an offer",
                { "id": "o2", "name": "Premium", "price": null }
            ]
        }"#;
        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.usable_price(), Some(27999.0));
        assert_eq!(result.offers.len(), 1);
        assert_eq!(result.offers[0].id, "");
        assert_eq!(result.offers[0].name, "Basis");
        assert_eq!(result.offers[0].price, 199.0);
    }

    #[test]
    fn zero_price_is_not_usable() {
        let result: CalculationResult =
            serde_json::from_str(r#"{"price":0,"offers":null}"#).unwrap();
        assert_eq!(result.usable_price(), None);
        assert!(result.offers.is_empty());
        assert_eq!(CalculationResult::default().usable_price(), None);
    }
}
