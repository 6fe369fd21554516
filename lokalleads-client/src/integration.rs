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

//! Calculator integration lookup.

use lokalleads_types::queries::{
    CalculatorIntegrationData, CalculatorIntegrationVars, GET_CALCULATOR_INTEGRATION,
};
use lokalleads_types::CalculatorIntegration;

use crate::error::ApiError;
use crate::{soft_data, LokalLeadsClient};

impl LokalLeadsClient {
    /// Fetch the calculator configuration registered for `ident_name`.
    ///
    /// Returns `Ok(None)` when the server reports GraphQL errors or knows no
    /// integration under that name.
    pub async fn get_calculator_integration(
        &self,
        ident_name: &str,
        cookie_token: Option<&str>,
    ) -> Result<Option<CalculatorIntegration>, ApiError> {
        let vars = CalculatorIntegrationVars {
            ident_name,
            cookie_token,
        };
        let response = self
            .execute::<_, CalculatorIntegrationData>(GET_CALCULATOR_INTEGRATION, vars)
            .await?;
        Ok(soft_data("calculatorIntegration", response).and_then(|d| d.calculator_integration))
    }
}
