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

use clap::Parser;
mod modes;

use jordan_calculator::CalculatorConfig;
use jordan_calculator_cli::cli_args::{Mode, Opt};
use modes::estimate::estimate;
use modes::integration::get_integration;
use tracing::debug;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    let config = opt.apply(CalculatorConfig::from_env()?);
    debug!("Using endpoint {}", config.endpoint);

    match opt.mode {
        Mode::Estimate(service) => estimate(&config, opt.debug, service).await?,
        Mode::Integration(args) => get_integration(&config, args).await?,
    };

    Ok(())
}
