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

//! Local pricing formulas, used whenever remote pricing is off or fails.

use crate::error::FormError;
use crate::form::{parse_decimal, CalculatorKind, FormData, FormField};

pub const HEATING_BASE_PRICE: f64 = 15_000.0;
pub const HEATING_PRICE_PER_SQM: f64 = 150.0;

pub const BATHROOM_BASE_PRICE: f64 = 8_000.0;
pub const BATHROOM_PRICE_PER_SQM: f64 = 1_200.0;
pub const BATHROOM_PRICE_PER_ITEM: f64 = 500.0;

pub const MAINTENANCE_BASE_PRICE: f64 = 150.0;
/// Systems strictly older than this get the higher multiplier.
pub const MAINTENANCE_AGE_THRESHOLD: f64 = 10.0;
pub const MAINTENANCE_OLD_MULTIPLIER: f64 = 1.5;
pub const MAINTENANCE_STANDARD_MULTIPLIER: f64 = 1.2;

pub fn heating_price(area: f64) -> f64 {
    HEATING_BASE_PRICE + area * HEATING_PRICE_PER_SQM
}

pub fn bathroom_price(room_size: f64, equipment_count: usize) -> f64 {
    BATHROOM_BASE_PRICE
        + room_size * BATHROOM_PRICE_PER_SQM
        + equipment_count as f64 * BATHROOM_PRICE_PER_ITEM
}

pub fn maintenance_multiplier(system_age: f64) -> f64 {
    if system_age > MAINTENANCE_AGE_THRESHOLD {
        MAINTENANCE_OLD_MULTIPLIER
    } else {
        MAINTENANCE_STANDARD_MULTIPLIER
    }
}

pub fn maintenance_price(system_age: f64) -> f64 {
    MAINTENANCE_BASE_PRICE * maintenance_multiplier(system_age)
}

/// Price `form` with the local formula for `kind`.
///
/// The driving numeric field must hold a non-negative number.
pub fn local_estimate(kind: CalculatorKind, form: &FormData) -> Result<f64, FormError> {
    match kind {
        CalculatorKind::Heating => {
            let area = required_number(form, FormField::Area)?;
            Ok(heating_price(area))
        }
        CalculatorKind::Bathroom => {
            let size = required_number(form, FormField::RoomSize)?;
            Ok(bathroom_price(size, form.equipment.len()))
        }
        CalculatorKind::Maintenance => {
            let age = required_number(form, FormField::SystemAge)?;
            Ok(maintenance_price(age))
        }
    }
}

fn required_number(form: &FormData, field: FormField) -> Result<f64, FormError> {
    parse_decimal(form.get(field))
        .filter(|v| *v >= 0.0)
        .ok_or(FormError::InvalidNumber { field })
}
