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

//! Flow transaction endpoints: create and update.

use lokalleads_types::queries::{
    CreateFlowTransactionVars, FlowTransactionCreateData, FlowTransactionUpdateData,
    UpdateFlowTransactionVars, CREATE_FLOW_TRANSACTION, UPDATE_FLOW_TRANSACTION,
};
use lokalleads_types::{
    CreateFlowTransactionInput, FlowInput, FlowTransaction, TransactionType,
    UpdateFlowTransactionInput,
};

use crate::error::ApiError;
use crate::{soft_data, LokalLeadsClient};

impl LokalLeadsClient {
    /// Open a new flow transaction (lead) for `ident_name`.
    pub async fn create_flow_transaction(
        &self,
        ident_name: &str,
        kind: TransactionType,
    ) -> Result<Option<FlowTransaction>, ApiError> {
        let vars = CreateFlowTransactionVars {
            input: CreateFlowTransactionInput {
                ident_name: ident_name.to_string(),
                kind,
            },
        };
        let response = self
            .execute::<_, FlowTransactionCreateData>(CREATE_FLOW_TRANSACTION, vars)
            .await?;
        Ok(soft_data("flowTransactionCreate", response).and_then(|d| d.flow_transaction_create))
    }

    /// Attach user inputs to an existing transaction.
    ///
    /// Returns `Ok(true)` only if the server echoed the updated transaction.
    pub async fn update_flow_transaction(
        &self,
        trx_token: &str,
        inputs: &[FlowInput],
    ) -> Result<bool, ApiError> {
        let vars = UpdateFlowTransactionVars {
            input: UpdateFlowTransactionInput {
                trx_token: trx_token.to_string(),
                inputs: inputs.to_vec(),
            },
        };
        let response = self
            .execute::<_, FlowTransactionUpdateData>(UPDATE_FLOW_TRANSACTION, vars)
            .await?;
        Ok(soft_data("flowTransactionUpdate", response)
            .and_then(|d| d.flow_transaction_update)
            .is_some())
    }
}
