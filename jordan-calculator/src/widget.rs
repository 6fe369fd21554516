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

//! The calculator widget: form collection, dual-path pricing and the
//! callback request form.
//!
//! The widget is framework-agnostic. A front-end feeds it field changes,
//! awaits [`Calculator::calculate`] and [`Calculator::submit_callback`], and
//! renders its state (see the `Display` impl for the plain-text rendering).

use std::collections::BTreeMap;
use std::fmt;

use lokalleads_client::LokalLeadsClient;
use lokalleads_types::{CalculationResult, OfferItem};

use crate::error::{FormError, SessionError};
use crate::form::{CalculatorKind, FormData, FormField};
use crate::format::format_eur;
use crate::pricing;
use crate::session::{CallbackRequest, LeadSession};

pub const DISCLAIMER: &str =
    "* Dies ist eine unverbindliche Schätzung. Für ein genaues Angebot kontaktieren Sie uns bitte.";
pub const CONSULTATION_PROMPT: &str = "Kostenlose Beratung anfragen";
pub const CALLBACK_TITLE: &str = "Rückruf anfordern";
pub const CALLBACK_THANKS: &str = "Vielen Dank! Wir melden uns bei Ihnen.";

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorProps {
    pub kind: CalculatorKind,
    /// LokalLeads integration identifier. Empty disables remote mode.
    pub ident_name: String,
    pub use_api: bool,
}

impl CalculatorProps {
    /// Props for a calculator that only uses the local formulas.
    pub fn local(kind: CalculatorKind) -> Self {
        Self {
            kind,
            ident_name: String::new(),
            use_api: false,
        }
    }

    pub fn remote(kind: CalculatorKind, ident_name: impl Into<String>) -> Self {
        Self {
            kind,
            ident_name: ident_name.into(),
            use_api: true,
        }
    }

    /// Remote pricing is attempted only with the API on and an identifier set.
    pub fn remote_enabled(&self) -> bool {
        self.use_api && !self.ident_name.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    Local,
    Remote,
}

/// A price shown to the visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub price: f64,
    pub source: PriceSource,
    /// Extra display rows, only for remote estimates that carried them.
    pub details: Option<BTreeMap<String, serde_json::Value>>,
    pub offers: Vec<OfferItem>,
}

impl Estimate {
    fn local(price: f64) -> Self {
        Self {
            price,
            source: PriceSource::Local,
            details: None,
            offers: Vec::new(),
        }
    }

    fn remote(price: f64, result: CalculationResult) -> Self {
        Self {
            price,
            source: PriceSource::Remote,
            details: result.details,
            offers: result.offers,
        }
    }
}

/// Visibility of the callback request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactState {
    #[default]
    Hidden,
    Open,
    /// Terminal: the request went out and the form is gone.
    Submitted,
}

/// Calculator widget state for one page instance.
#[derive(Debug)]
pub struct Calculator {
    props: CalculatorProps,
    form: FormData,
    session: LeadSession,
    estimate: Option<Estimate>,
    validation: Option<FormError>,
    contact: ContactState,
}

impl Calculator {
    pub fn new(props: CalculatorProps, client: LokalLeadsClient) -> Self {
        let session = LeadSession::new(client).with_error_observer(|err| {
            log::error!("LokalLeads API Error: {err}");
        });
        Self::with_session(props, session)
    }

    pub fn with_session(props: CalculatorProps, session: LeadSession) -> Self {
        Self {
            props,
            form: FormData::default(),
            session,
            estimate: None,
            validation: None,
            contact: ContactState::Hidden,
        }
    }

    /// Load the remote configuration when remote mode is on.
    ///
    /// Returns whether the integration is available. A failure leaves the
    /// widget fully usable with local pricing.
    pub async fn mount(&mut self) -> bool {
        if !self.props.remote_enabled() {
            return false;
        }
        let ident_name = self.props.ident_name.clone();
        self.session.initialize(&ident_name).await
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn props(&self) -> &CalculatorProps {
        &self.props
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn session(&self) -> &LeadSession {
        &self.session
    }

    pub fn estimate(&self) -> Option<&Estimate> {
        self.estimate.as_ref()
    }

    pub fn validation_error(&self) -> Option<&FormError> {
        self.validation.as_ref()
    }

    pub fn api_error(&self) -> Option<&SessionError> {
        self.session.error()
    }

    pub fn contact_state(&self) -> ContactState {
        self.contact
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    // ── Input ───────────────────────────────────────────────────────────

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn toggle_equipment(&mut self, item: &str, checked: bool) {
        self.form.toggle_equipment(item, checked);
    }

    // ── Pricing ─────────────────────────────────────────────────────────

    /// Price the current form.
    ///
    /// Tries the remote calculation first when remote mode is on; any
    /// failure or missing price falls through to the local formula for the
    /// same submission. Returns `None` only when the local formula rejects
    /// the input.
    pub async fn calculate(&mut self) -> Option<&Estimate> {
        self.validation = None;

        if self.remote_pricing_allowed() {
            let inputs = self.form.flow_inputs(self.props.kind);
            if let Some(result) = self.session.calculate(&inputs).await {
                if let Some(price) = result.usable_price() {
                    self.estimate = Some(Estimate::remote(price, result));
                    return self.estimate.as_ref();
                }
                log::info!("Remote calculation returned no price, using local formula");
            }
        }

        match pricing::local_estimate(self.props.kind, &self.form) {
            Ok(price) => self.estimate = Some(Estimate::local(price)),
            Err(e) => {
                self.estimate = None;
                self.validation = Some(e);
            }
        }
        self.estimate.as_ref()
    }

    fn remote_pricing_allowed(&self) -> bool {
        self.props.remote_enabled()
            && self
                .session
                .integration()
                .map_or(true, |integration| integration.is_calculation_enabled)
    }

    // ── Callback ────────────────────────────────────────────────────────

    /// Reveal the callback form. Only possible once an estimate is shown.
    pub fn open_contact_form(&mut self) -> bool {
        if self.estimate.is_none() || self.contact != ContactState::Hidden {
            return false;
        }
        self.contact = ContactState::Open;
        true
    }

    pub fn cancel_contact_form(&mut self) {
        if self.contact == ContactState::Open {
            self.contact = ContactState::Hidden;
        }
    }

    /// The submit button is enabled.
    pub fn can_submit_callback(&self) -> bool {
        self.contact == ContactState::Open && self.form.has_contact() && !self.is_loading()
    }

    /// Send the callback request. A no-op returning `false` unless
    /// [`can_submit_callback`](Self::can_submit_callback) holds.
    pub async fn submit_callback(&mut self) -> bool {
        if !self.can_submit_callback() {
            return false;
        }

        if self.props.use_api {
            let phone = self.form.phone.trim();
            let request = CallbackRequest {
                customer_name: self.form.name.trim().to_string(),
                customer_email: self.form.email.trim().to_string(),
                customer_phone: (!phone.is_empty()).then(|| phone.to_string()),
                reason: Some(format!("{} Anfrage", self.props.kind.title())),
                ..CallbackRequest::default()
            };
            if !self.session.request_callback(request).await {
                return false;
            }
        }

        self.contact = ContactState::Submitted;
        true
    }

    /// Plain-text rendering of the current widget state.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn detail_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.props.kind;
        writeln!(f, "{}", kind.title())?;
        writeln!(f, "{}", kind.description())?;

        if let Some(error) = self.session.error() {
            writeln!(f)?;
            writeln!(f, "! {error}")?;
        }
        if let Some(error) = &self.validation {
            writeln!(f)?;
            writeln!(f, "! {error}")?;
        }

        let Some(estimate) = &self.estimate else {
            return Ok(());
        };

        writeln!(f)?;
        writeln!(f, "Geschätzte Kosten:")?;
        writeln!(f, "{}", format_eur(estimate.price))?;

        if let Some(details) = &estimate.details {
            writeln!(f, "Details:")?;
            for (key, value) in details {
                writeln!(f, "  {key}: {}", detail_text(value))?;
            }
        }
        if !estimate.offers.is_empty() {
            writeln!(f, "Angebote:")?;
            for offer in &estimate.offers {
                writeln!(f, "  {}: {}", offer.name, format_eur(offer.price))?;
            }
        }

        writeln!(f, "{DISCLAIMER}")?;

        match self.contact {
            ContactState::Hidden => writeln!(f, "[{CONSULTATION_PROMPT}]"),
            ContactState::Open => {
                writeln!(f, "{CALLBACK_TITLE}")?;
                for field in [FormField::Name, FormField::Email, FormField::Phone] {
                    let marker = if field == FormField::Phone { "" } else { " *" };
                    writeln!(f, "  {}{marker}: {}", field.label(), self.form.get(field))?;
                }
                Ok(())
            }
            ContactState::Submitted => writeln!(f, "{CALLBACK_THANKS}"),
        }
    }
}
