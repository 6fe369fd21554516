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

//! Appointment (callback request) endpoint.

use lokalleads_types::queries::{AppointmentCreateData, CreateAppointmentVars, CREATE_APPOINTMENT};
use lokalleads_types::{Appointment, CreateAppointmentInput};

use crate::error::ApiError;
use crate::{soft_data, LokalLeadsClient};

impl LokalLeadsClient {
    pub async fn create_appointment(
        &self,
        input: &CreateAppointmentInput,
    ) -> Result<Option<Appointment>, ApiError> {
        let vars = CreateAppointmentVars { appointment: input };
        let response = self
            .execute::<_, AppointmentCreateData>(CREATE_APPOINTMENT, vars)
            .await?;
        Ok(soft_data("appointmentCreate", response).and_then(|d| d.appointment_create))
    }
}
