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

//! Remote price calculation.

use lokalleads_types::queries::{CalculationData, ExecuteCalculationVars, EXECUTE_CALCULATION};
use lokalleads_types::{CalculationResult, FlowInput};

use crate::error::ApiError;
use crate::{soft_data, LokalLeadsClient};

impl LokalLeadsClient {
    /// Run the integration's pricing for the transaction behind `session_token`.
    ///
    /// `debug` asks the server to include its intermediate values in `details`.
    pub async fn execute_calculation(
        &self,
        session_token: &str,
        inputs: &[FlowInput],
        debug: bool,
    ) -> Result<Option<CalculationResult>, ApiError> {
        let vars = ExecuteCalculationVars {
            session_token,
            inputs,
            debug,
        };
        let response = self
            .execute::<_, CalculationData>(EXECUTE_CALCULATION, vars)
            .await?;
        Ok(soft_data("calculation", response).and_then(|d| d.calculation))
    }
}
