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

//! Integration tests for the LokalLeads client against a mock GraphQL endpoint.

use httpmock::prelude::*;
use lokalleads_client::{ApiError, LokalLeadsClient};
use lokalleads_types::{
    AppointmentChannel, CreateAppointmentInput, FlowInput, TransactionType,
};
use serde_json::json;

fn client_for(server: &MockServer) -> LokalLeadsClient {
    LokalLeadsClient::new(&server.url("/graphql"))
}

fn integration_json() -> serde_json::Value {
    json!({
        "id": "int-1",
        "flowId": "flow-1",
        "identName": "jordan-wartung",
        "locale": "de",
        "isCalculationEnabled": true,
        "flowConfig": null,
        "branding": null
    })
}

// ── Integration ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_integration_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("content-type", "application/json")
            .body_includes("GetCalculatorIntegration")
            .body_includes(r#""identName":"jordan-wartung""#);
        then.status(200)
            .json_body(json!({ "data": { "calculatorIntegration": integration_json() } }));
    });

    let integration = client_for(&server)
        .get_calculator_integration("jordan-wartung", None)
        .await
        .unwrap()
        .expect("integration should be returned");

    assert_eq!(integration.flow_id, "flow-1");
    assert!(integration.flow_config.is_none());
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_get_integration_passes_cookie_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_includes(r#""cookieToken":"cookie-42""#);
        then.status(200)
            .json_body(json!({ "data": { "calculatorIntegration": integration_json() } }));
    });

    let result = client_for(&server)
        .get_calculator_integration("jordan-wartung", Some("cookie-42"))
        .await
        .unwrap();

    assert!(result.is_some());
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_get_integration_unknown_ident_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .json_body(json!({ "data": { "calculatorIntegration": null } }));
    });

    let result = client_for(&server)
        .get_calculator_integration("unknown", None)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_graphql_errors_are_soft_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({
            "data": { "calculatorIntegration": integration_json() },
            "errors": [{ "message": "Integration disabled" }]
        }));
    });

    let result = client_for(&server)
        .get_calculator_integration("jordan-wartung", None)
        .await
        .unwrap();
    assert!(result.is_none(), "errors must discard the partial data");
}

// ── Transport errors ────────────────────────────────────────────────────

#[tokio::test]
async fn test_http_error_status_is_an_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(502).body("bad gateway");
    });

    let err = client_for(&server)
        .create_flow_transaction("jordan-wartung", TransactionType::Calculator)
        .await
        .unwrap_err();

    match &err {
        ApiError::Http { status, body } => {
            assert_eq!(*status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "HTTP error! status: 502");
    assert_eq!(mock.calls(), 1, "failed calls must not be retried");
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).body("<html>maintenance</html>");
    });

    let err = client_for(&server)
        .execute_calculation("trx-1", &[], false)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let client = LokalLeadsClient::new("http://127.0.0.1:9/graphql");
    let err = client
        .get_calculator_integration("jordan-wartung", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

// ── Transactions ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_transaction_sends_type() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_includes("flowTransactionCreate")
            .body_includes(r#""type":"CALCULATOR""#);
        then.status(200).json_body(json!({
            "data": { "flowTransactionCreate": { "id": "t1", "trxToken": "trx-1" } }
        }));
    });

    let trx = client_for(&server)
        .create_flow_transaction("jordan-wartung", TransactionType::Calculator)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(trx.trx_token, "trx-1");
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_update_transaction_reports_success_flag() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_includes("flowTransactionUpdate")
            .body_includes(r#""trxToken":"trx-1""#);
        then.status(200).json_body(json!({
            "data": { "flowTransactionUpdate": { "id": "t1", "trxToken": "trx-1" } }
        }));
    });

    let ok = client_for(&server)
        .update_flow_transaction("trx-1", &[FlowInput::new("systemAge", 12.0)])
        .await
        .unwrap();
    assert!(ok);
}

#[tokio::test]
async fn test_update_transaction_with_errors_is_false() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .json_body(json!({ "errors": [{ "message": "unknown token" }] }));
    });

    let ok = client_for(&server)
        .update_flow_transaction("trx-x", &[])
        .await
        .unwrap();
    assert!(!ok);
}

// ── Calculation ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_execute_calculation_returns_result() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_includes("ExecuteCalculation")
            .body_includes(r#""sessionToken":"trx-1""#)
            .body_includes(r#""debug":true"#);
        then.status(200).json_body(json!({
            "data": { "calculation": {
                "price": 240.0,
                "details": { "Grundpreis": 150 },
                "offers": []
            } }
        }));
    });

    let result = client_for(&server)
        .execute_calculation("trx-1", &[FlowInput::new("systemAge", 12.0)], true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.price, Some(240.0));
    assert_eq!(result.details.unwrap()["Grundpreis"], json!(150));
}

// ── Appointments ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_appointment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_includes("appointmentCreate")
            .body_includes(r#""channel":"PHONE""#)
            .body_includes(r#""customerEmail":"erika@example.de""#);
        then.status(200)
            .json_body(json!({ "data": { "appointmentCreate": { "id": "apt-7" } } }));
    });

    let input = CreateAppointmentInput {
        lead_id: None,
        channel: AppointmentChannel::Phone,
        reason: "Wartungsrechner Anfrage".into(),
        preferred_date: None,
        preferred_time: None,
        customer_name: "Erika Mustermann".into(),
        customer_email: "erika@example.de".into(),
        customer_phone: Some("0531 123456".into()),
    };
    let appointment = client_for(&server)
        .create_appointment(&input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(appointment.id, "apt-7");
    assert_eq!(mock.calls(), 1);
}

#[test]
fn test_default_client_targets_production() {
    assert_eq!(
        LokalLeadsClient::default().endpoint(),
        lokalleads_client::DEFAULT_ENDPOINT
    );
    assert_eq!(
        LokalLeadsClient::new("http://localhost:4000/graphql/").endpoint(),
        "http://localhost:4000/graphql"
    );
}
