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

//! GraphQL documents and the `data` shapes they produce.

use serde::{Deserialize, Serialize};

use crate::inputs::{
    CreateAppointmentInput, CreateFlowTransactionInput, FlowInput, UpdateFlowTransactionInput,
};
use crate::models::{Appointment, CalculationResult, CalculatorIntegration, FlowTransaction};

pub const GET_CALCULATOR_INTEGRATION: &str = r#"
query GetCalculatorIntegration($identName: String!, $cookieToken: String) {
  calculatorIntegration(identName: $identName, cookieToken: $cookieToken) {
    id
    flowId
    identName
    locale
    isCalculationEnabled
    flowConfig {
      id
      name
      groups {
        id
        name
      }
      translations
    }
    branding {
      primaryColor
      secondaryColor
      logo
    }
  }
}
"#;

pub const CREATE_FLOW_TRANSACTION: &str = r#"
mutation CreateFlowTransaction($input: CreateFlowTransaction!) {
  flowTransactionCreate(input: $input) {
    id
    trxToken
  }
}
"#;

pub const UPDATE_FLOW_TRANSACTION: &str = r#"
mutation UpdateFlowTransaction($input: UpdateFlowTransaction!) {
  flowTransactionUpdate(input: $input) {
    id
    trxToken
  }
}
"#;

pub const EXECUTE_CALCULATION: &str = r#"
query ExecuteCalculation($sessionToken: String!, $inputs: [FlowInput], $debug: Boolean) {
  calculation(sessionToken: $sessionToken, inputs: $inputs, debug: $debug)
}
"#;

pub const CREATE_APPOINTMENT: &str = r#"
mutation CreateAppointment($appointment: CreateAppointmentInput!) {
  appointmentCreate(appointment: $appointment) {
    id
  }
}
"#;

// ---------------------------------------------------------------------------
// Variables
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorIntegrationVars<'a> {
    pub ident_name: &'a str,
    pub cookie_token: Option<&'a str>,
}

#[derive(Debug, Serialize, Clone)]
pub struct CreateFlowTransactionVars {
    pub input: CreateFlowTransactionInput,
}

#[derive(Debug, Serialize, Clone)]
pub struct UpdateFlowTransactionVars {
    pub input: UpdateFlowTransactionInput,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCalculationVars<'a> {
    pub session_token: &'a str,
    pub inputs: &'a [FlowInput],
    pub debug: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct CreateAppointmentVars<'a> {
    pub appointment: &'a CreateAppointmentInput,
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorIntegrationData {
    pub calculator_integration: Option<CalculatorIntegration>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FlowTransactionCreateData {
    pub flow_transaction_create: Option<FlowTransaction>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FlowTransactionUpdateData {
    pub flow_transaction_update: Option<FlowTransaction>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CalculationData {
    pub calculation: Option<CalculationResult>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCreateData {
    pub appointment_create: Option<Appointment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integration_vars_keep_null_cookie_token() {
        let vars = CalculatorIntegrationVars {
            ident_name: "jordan",
            cookie_token: None,
        };
        assert_eq!(
            serde_json::to_value(vars).unwrap(),
            json!({ "identName": "jordan", "cookieToken": null })
        );
    }

    #[test]
    fn calculation_vars_use_session_token() {
        let inputs = [FlowInput::new("systemAge", 12.0)];
        let vars = ExecuteCalculationVars {
            session_token: "trx-1",
            inputs: &inputs,
            debug: false,
        };
        let value = serde_json::to_value(vars).unwrap();
        assert_eq!(value["sessionToken"], "trx-1");
        assert_eq!(value["inputs"][0]["key"], "systemAge");
        assert_eq!(value["debug"], false);
    }

    #[test]
    fn documents_name_their_operations() {
        assert!(GET_CALCULATOR_INTEGRATION.contains("query GetCalculatorIntegration"));
        assert!(CREATE_FLOW_TRANSACTION.contains("flowTransactionCreate"));
        assert!(UPDATE_FLOW_TRANSACTION.contains("flowTransactionUpdate"));
        assert!(EXECUTE_CALCULATION.contains("calculation(sessionToken"));
        assert!(CREATE_APPOINTMENT.contains("appointmentCreate"));
    }
}
