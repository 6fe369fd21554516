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

//! Error types for the calculator.
//!
//! The `Display` texts are shown to visitors as-is and are therefore German.

use thiserror::Error;

use crate::form::FormField;

/// Failure recorded by a [`LeadSession`](crate::LeadSession) action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The integration lookup returned no configuration.
    #[error("Rechner-Konfiguration konnte nicht geladen werden")]
    ConfigurationNotFound,

    /// An action needing the integration ran before `initialize`.
    #[error("Bitte zuerst den Rechner initialisieren")]
    NotInitialized,

    /// `update_inputs` ran without a transaction.
    #[error("Keine aktive Transaktion")]
    NoActiveTransaction,

    #[error("Transaktion konnte nicht erstellt werden")]
    TransactionNotCreated,

    #[error("Berechnung fehlgeschlagen")]
    CalculationFailed,

    #[error("Terminanfrage konnte nicht gesendet werden")]
    AppointmentNotCreated,

    /// HTTP, network or decoding failure. Carries the client error text.
    #[error("Ein Fehler ist aufgetreten ({0})")]
    Transport(String),
}

impl SessionError {
    /// Whether the error was raised before any request was sent.
    pub fn is_sequencing(&self) -> bool {
        matches!(
            self,
            SessionError::NotInitialized | SessionError::NoActiveTransaction
        )
    }
}

impl From<lokalleads_client::ApiError> for SessionError {
    fn from(err: lokalleads_client::ApiError) -> Self {
        SessionError::Transport(err.to_string())
    }
}

/// Invalid form input for the local formulas.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Bitte geben Sie einen gültigen Wert für „{}“ ein", .field.label())]
    InvalidNumber { field: FormField },
}

/// Invalid environment configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be one of true, false, 1, 0 (got {value:?})")]
    InvalidBool { name: &'static str, value: String },
}
