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

//! Cost calculator for the Jordan GmbH site.
//!
//! Three service calculators (heating, bathroom, maintenance) price a
//! visitor's input either through the LokalLeads API or, when that is off or
//! unavailable, with local formulas. A callback form turns an estimate into
//! a lead.
//!
//! # Example
//!
//! ```no_run
//! use jordan_calculator::{Calculator, CalculatorKind, CalculatorProps, FormField};
//! use lokalleads_client::LokalLeadsClient;
//!
//! # async fn example() {
//! let props = CalculatorProps::remote(CalculatorKind::Maintenance, "jordan-wartung");
//! let mut calculator = Calculator::new(props, LokalLeadsClient::default());
//! calculator.mount().await;
//!
//! calculator.set_field(FormField::SystemAge, "12");
//! calculator.calculate().await;
//! println!("{calculator}");
//! # }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod pricing;
pub mod session;
pub mod widget;

pub use config::CalculatorConfig;
pub use error::{ConfigError, FormError, SessionError};
pub use form::{CalculatorKind, FormData, FormField};
pub use format::format_eur;
pub use session::{CallbackRequest, LeadSession, LoadingIndicator, SessionPhase, SessionStage};
pub use widget::{Calculator, CalculatorProps, ContactState, Estimate, PriceSource};
