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

use anyhow::bail;
use jordan_calculator::{Calculator, CalculatorConfig, LeadSession};
use jordan_calculator_cli::cli_args::Service;
use tracing::{debug, error, info, warn};

/// Price one job and optionally request a callback for it.
pub async fn estimate(config: &CalculatorConfig, debug: bool, service: Service) -> anyhow::Result<()> {
    let props = config.props(service.kind());
    let session = LeadSession::new(config.client())
        .with_debug(debug)
        .with_error_observer(|err| error!("LokalLeads API Error: {err}"));
    let mut calculator = Calculator::with_session(props, session);

    if calculator.props().remote_enabled() {
        if calculator.mount().await {
            info!("Loaded LokalLeads integration {}", config.ident_name);
        } else {
            warn!("LokalLeads integration unavailable, pricing locally");
        }
    }

    service.fill(&mut calculator);
    debug!("Form: {:?}", calculator.form());

    if calculator.calculate().await.is_none() {
        print!("{calculator}");
        match calculator.validation_error() {
            Some(err) => bail!("{err}"),
            None => bail!("no estimate could be computed"),
        }
    }

    let contact = service.contact();
    if contact.is_requested() {
        calculator.open_contact_form();
        contact.fill(&mut calculator);
        if !calculator.can_submit_callback() {
            bail!("Name und E-Mail sind für einen Rückruf erforderlich");
        }
        if !calculator.submit_callback().await {
            print!("{calculator}");
            match calculator.api_error() {
                Some(err) => bail!("{err}"),
                None => bail!("callback request was not sent"),
            }
        }
    }

    print!("{calculator}");
    Ok(())
}
