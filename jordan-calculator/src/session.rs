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

//! Lead session: sequences the LokalLeads calls for one widget instance.
//!
//! The session is a small state machine over [`SessionStage`]:
//!
//! ```text
//! Idle ──initialize──▶ Ready ──start_transaction / calculate──▶ Transacting
//!                        ▲                                          │
//!                        └──────────────── reset ◀──────────────────┘
//! ```
//!
//! Errors are recorded next to the stage and never move it: a failed action
//! leaves the integration, the transaction and the last result as they were,
//! so a retry reuses the same transaction token.
//!
//! Every action takes `&mut self`, so two actions can never overlap on the
//! same session. [`LoadingIndicator`] lets a UI observe the action in flight
//! from elsewhere.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use lokalleads_client::{ApiError, LokalLeadsClient};
use lokalleads_types::{
    AppointmentChannel, CalculationResult, CalculatorIntegration, CreateAppointmentInput,
    FlowInput, FlowTransaction, TransactionType,
};

use crate::error::SessionError;

/// Reason attached to a callback request when the caller gives none.
pub const DEFAULT_CALLBACK_REASON: &str = "Rückrufanfrage vom Wartungsrechner";

/// Where the session is in the initialize → transact → calculate sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStage {
    /// No integration loaded yet.
    #[default]
    Idle,
    /// Integration loaded, no transaction open.
    Ready { integration: CalculatorIntegration },
    /// Integration loaded and a transaction open.
    Transacting {
        integration: CalculatorIntegration,
        transaction: FlowTransaction,
    },
}

impl SessionStage {
    pub fn integration(&self) -> Option<&CalculatorIntegration> {
        match self {
            SessionStage::Idle => None,
            SessionStage::Ready { integration } | SessionStage::Transacting { integration, .. } => {
                Some(integration)
            }
        }
    }

    pub fn transaction(&self) -> Option<&FlowTransaction> {
        match self {
            SessionStage::Transacting { transaction, .. } => Some(transaction),
            _ => None,
        }
    }

    fn with_transaction(self, transaction: FlowTransaction) -> Self {
        match self {
            SessionStage::Idle => SessionStage::Idle,
            SessionStage::Ready { integration } | SessionStage::Transacting { integration, .. } => {
                SessionStage::Transacting {
                    integration,
                    transaction,
                }
            }
        }
    }

    fn without_transaction(self) -> Self {
        match self {
            SessionStage::Idle => SessionStage::Idle,
            SessionStage::Ready { integration } | SessionStage::Transacting { integration, .. } => {
                SessionStage::Ready { integration }
            }
        }
    }
}

/// Coarse phase for display, combining the stage with the action in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Initializing,
    Ready,
    Transacting,
    Calculating,
    Done,
}

/// The session action currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Action {
    Initialize = 1,
    StartTransaction = 2,
    UpdateInputs = 3,
    Calculate = 4,
    RequestCallback = 5,
}

impl Action {
    fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Action::Initialize),
            2 => Some(Action::StartTransaction),
            3 => Some(Action::UpdateInputs),
            4 => Some(Action::Calculate),
            5 => Some(Action::RequestCallback),
            _ => None,
        }
    }
}

/// Read-only handle on the session's loading flag.
///
/// Cloning is cheap; all clones observe the same session.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    current: Arc<AtomicU8>,
}

impl LoadingIndicator {
    pub fn is_loading(&self) -> bool {
        self.current().is_some()
    }

    pub fn current(&self) -> Option<Action> {
        Action::from_u8(self.current.load(Ordering::Acquire))
    }

    fn begin(&self, action: Action) -> LoadingGuard {
        self.current.store(action as u8, Ordering::Release);
        LoadingGuard {
            indicator: self.clone(),
        }
    }
}

/// Lowers the loading flag when the action returns or its future is dropped.
struct LoadingGuard {
    indicator: LoadingIndicator,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.current.store(0, Ordering::Release);
    }
}

/// Contact data for a callback (appointment) request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallbackRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub reason: Option<String>,
}

impl CallbackRequest {
    fn into_appointment(self) -> CreateAppointmentInput {
        CreateAppointmentInput {
            lead_id: None,
            channel: AppointmentChannel::Phone,
            reason: self
                .reason
                .unwrap_or_else(|| DEFAULT_CALLBACK_REASON.to_string()),
            preferred_date: self.preferred_date,
            preferred_time: self.preferred_time,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
        }
    }
}

pub type ErrorObserver = Box<dyn Fn(&SessionError) + Send + Sync>;

/// One visitor's lead flow against the LokalLeads API.
pub struct LeadSession {
    client: LokalLeadsClient,
    stage: SessionStage,
    result: Option<CalculationResult>,
    error: Option<SessionError>,
    loading: LoadingIndicator,
    debug: bool,
    on_error: Option<ErrorObserver>,
}

impl fmt::Debug for LeadSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadSession")
            .field("endpoint", &self.client.endpoint())
            .field("stage", &self.stage)
            .field("result", &self.result)
            .field("error", &self.error)
            .field("loading", &self.loading.current())
            .finish_non_exhaustive()
    }
}

impl LeadSession {
    pub fn new(client: LokalLeadsClient) -> Self {
        Self {
            client,
            stage: SessionStage::Idle,
            result: None,
            error: None,
            loading: LoadingIndicator::default(),
            debug: false,
            on_error: None,
        }
    }

    /// Register an observer for transport failures.
    pub fn with_error_observer(
        mut self,
        observer: impl Fn(&SessionError) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Some(Box::new(observer));
        self
    }

    /// Ask the server for debug details with every calculation.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    // ── State ───────────────────────────────────────────────────────────

    pub fn stage(&self) -> &SessionStage {
        &self.stage
    }

    pub fn integration(&self) -> Option<&CalculatorIntegration> {
        self.stage.integration()
    }

    pub fn transaction(&self) -> Option<&FlowTransaction> {
        self.stage.transaction()
    }

    pub fn calculation_result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading_indicator(&self) -> LoadingIndicator {
        self.loading.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        match self.loading.current() {
            Some(Action::Initialize) => return SessionPhase::Initializing,
            Some(Action::Calculate) => return SessionPhase::Calculating,
            _ => {}
        }
        match (&self.stage, &self.result) {
            (SessionStage::Idle, _) => SessionPhase::Idle,
            (_, Some(_)) => SessionPhase::Done,
            (SessionStage::Ready { .. }, None) => SessionPhase::Ready,
            (SessionStage::Transacting { .. }, None) => SessionPhase::Transacting,
        }
    }

    // ── Actions ─────────────────────────────────────────────────────────

    /// Load the integration configuration for `ident_name`.
    ///
    /// An open transaction survives only if the ident name is unchanged.
    pub async fn initialize(&mut self, ident_name: &str) -> bool {
        self.error = None;
        let _guard = self.loading.begin(Action::Initialize);

        match self.client.get_calculator_integration(ident_name, None).await {
            Ok(Some(integration)) => {
                log::info!(
                    "Loaded calculator integration {} (flow {})",
                    integration.ident_name,
                    integration.flow_id
                );
                let same_ident = self
                    .integration()
                    .is_some_and(|current| current.ident_name == integration.ident_name);
                let stage = std::mem::take(&mut self.stage);
                self.stage = match stage {
                    SessionStage::Transacting { transaction, .. } if same_ident => {
                        SessionStage::Transacting {
                            integration,
                            transaction,
                        }
                    }
                    _ => {
                        if !same_ident {
                            self.result = None;
                        }
                        SessionStage::Ready { integration }
                    }
                };
                true
            }
            Ok(None) => {
                self.fail(SessionError::ConfigurationNotFound);
                false
            }
            Err(e) => {
                self.fail_transport(e);
                false
            }
        }
    }

    /// Open a new transaction for the loaded integration.
    ///
    /// Replaces any transaction already held.
    pub async fn start_transaction(&mut self) -> bool {
        self.error = None;
        let Some(ident_name) = self.initialized_ident() else {
            return false;
        };
        let _guard = self.loading.begin(Action::StartTransaction);
        self.open_transaction(&ident_name).await.is_some()
    }

    /// Push inputs to the open transaction without calculating.
    pub async fn update_inputs(&mut self, inputs: &[FlowInput]) -> bool {
        self.error = None;
        let Some(token) = self.transaction().map(|t| t.trx_token.clone()) else {
            self.fail(SessionError::NoActiveTransaction);
            return false;
        };
        let _guard = self.loading.begin(Action::UpdateInputs);

        match self.client.update_flow_transaction(&token, inputs).await {
            Ok(updated) => updated,
            Err(e) => {
                self.fail_transport(e);
                false
            }
        }
    }

    /// Calculate a price for `inputs`.
    ///
    /// Reuses the open transaction, or opens one first. On success the result
    /// is stored and returned; on failure the previous result is kept.
    pub async fn calculate(&mut self, inputs: &[FlowInput]) -> Option<CalculationResult> {
        self.error = None;
        let ident_name = self.initialized_ident()?;
        let _guard = self.loading.begin(Action::Calculate);

        let held = self.transaction().map(|t| t.trx_token.clone());
        let token = match held {
            Some(token) => token,
            None => self.open_transaction(&ident_name).await?.trx_token.clone(),
        };

        match self
            .client
            .execute_calculation(&token, inputs, self.debug)
            .await
        {
            Ok(Some(result)) => {
                log::debug!("Calculation for {token} returned price {:?}", result.price);
                self.result = Some(result.clone());
                Some(result)
            }
            Ok(None) => {
                self.fail(SessionError::CalculationFailed);
                None
            }
            Err(e) => {
                self.fail_transport(e);
                None
            }
        }
    }

    /// Ask for a phone callback. Independent of the calculation state.
    pub async fn request_callback(&mut self, request: CallbackRequest) -> bool {
        self.error = None;
        let _guard = self.loading.begin(Action::RequestCallback);

        let input = request.into_appointment();
        match self.client.create_appointment(&input).await {
            Ok(Some(appointment)) => {
                log::info!("Callback requested, appointment {}", appointment.id);
                true
            }
            Ok(None) => {
                self.fail(SessionError::AppointmentNotCreated);
                false
            }
            Err(e) => {
                self.fail_transport(e);
                false
            }
        }
    }

    /// Drop the error, the transaction and the result. Keeps the integration.
    pub fn reset(&mut self) {
        self.error = None;
        self.result = None;
        self.stage = std::mem::take(&mut self.stage).without_transaction();
    }

    // ── Internals ───────────────────────────────────────────────────────

    /// Ident name of the loaded integration, or a guidance error.
    fn initialized_ident(&mut self) -> Option<String> {
        let ident_name = self
            .integration()
            .map(|integration| integration.ident_name.clone())
            .filter(|name| !name.is_empty());
        if ident_name.is_none() {
            self.fail(SessionError::NotInitialized);
        }
        ident_name
    }

    async fn open_transaction(&mut self, ident_name: &str) -> Option<&FlowTransaction> {
        match self
            .client
            .create_flow_transaction(ident_name, TransactionType::Calculator)
            .await
        {
            Ok(Some(transaction)) => {
                log::info!("Opened flow transaction {}", transaction.id);
                self.stage = std::mem::take(&mut self.stage).with_transaction(transaction);
                self.transaction()
            }
            Ok(None) => {
                self.fail(SessionError::TransactionNotCreated);
                None
            }
            Err(e) => {
                self.fail_transport(e);
                None
            }
        }
    }

    fn fail(&mut self, error: SessionError) {
        log::warn!("Lead session: {error}");
        self.error = Some(error);
    }

    fn fail_transport(&mut self, err: ApiError) {
        let error = SessionError::from(err);
        if let Some(observer) = &self.on_error {
            observer(&error);
        }
        self.fail(error);
    }
}
