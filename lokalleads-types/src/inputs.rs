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

//! Input types sent as GraphQL variables.

use serde::{Deserialize, Serialize};

/// Value of a single [`FlowInput`].
///
/// The remote schema accepts a plain JSON string, number or boolean, so this
/// is serialized untagged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum FlowValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<&str> for FlowValue {
    fn from(value: &str) -> Self {
        FlowValue::Text(value.to_string())
    }
}

impl From<String> for FlowValue {
    fn from(value: String) -> Self {
        FlowValue::Text(value)
    }
}

impl From<f64> for FlowValue {
    fn from(value: f64) -> Self {
        FlowValue::Number(value)
    }
}

impl From<i64> for FlowValue {
    fn from(value: i64) -> Self {
        FlowValue::Integer(value)
    }
}

impl From<bool> for FlowValue {
    fn from(value: bool) -> Self {
        FlowValue::Bool(value)
    }
}

/// One user-entered field, keyed by the remote element name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FlowInput {
    pub key: String,
    pub value: FlowValue,
}

impl FlowInput {
    pub fn new(key: impl Into<String>, value: impl Into<FlowValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Kind of flow a transaction is opened for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    Calculator,
    Form,
}

/// `input` variable of `flowTransactionCreate`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlowTransactionInput {
    pub ident_name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// `input` variable of `flowTransactionUpdate`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlowTransactionInput {
    pub trx_token: String,
    pub inputs: Vec<FlowInput>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentChannel {
    Phone,
    Email,
    Video,
}

/// `appointment` variable of `appointmentCreate`.
///
/// Optional members are left out of the body entirely when unset.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<i64>,
    pub channel: AppointmentChannel,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
}
