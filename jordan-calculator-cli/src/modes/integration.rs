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

use anyhow::{bail, Context};
use jordan_calculator::CalculatorConfig;
use jordan_calculator_cli::cli_args::IntegrationArgs;

/// Print the integration registered under the configured identifier.
pub async fn get_integration(config: &CalculatorConfig, args: IntegrationArgs) -> anyhow::Result<()> {
    if config.ident_name.is_empty() {
        bail!("--ident-name or LOKALLEADS_IDENT_NAME is required");
    }

    let integration = config
        .client()
        .get_calculator_integration(&config.ident_name, args.cookie_token.as_deref())
        .await
        .with_context(|| format!("failed to reach {}", config.endpoint))?;

    let Some(integration) = integration else {
        bail!("Rechner-Konfiguration konnte nicht geladen werden");
    };
    println!("{}", serde_json::to_string_pretty(&integration)?);
    Ok(())
}
