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

//! Wire types for the LokalLeads calculator GraphQL API.
//!
//! This crate defines the contract between the calculator widget and the
//! remote lead-generation backend: the GraphQL envelope, the query
//! documents, and the typed payloads exchanged with each operation.
//! It carries no HTTP code; see `lokalleads-client` for the transport.

pub mod graphql;
pub mod inputs;
pub mod models;
pub mod queries;

pub use graphql::{GraphQLError, GraphQLRequest, GraphQLResponse};
pub use inputs::{
    AppointmentChannel, CreateAppointmentInput, CreateFlowTransactionInput, FlowInput, FlowValue,
    TransactionType, UpdateFlowTransactionInput,
};
pub use models::{
    Appointment, Branding, CalculationResult, CalculatorIntegration, FlowConfig, FlowElement,
    FlowGroup, FlowTransaction, OfferItem,
};
