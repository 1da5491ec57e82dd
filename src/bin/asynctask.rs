// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use asynctask::{cmd::Cli, exit_status_from_error};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    let format = fmt::layer().pretty();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(filter).with(format).init();

    let cli = Cli::parse();
    if let Err(error) = cli.run().await {
        tracing::error!("{error:?}");
        std::process::exit(exit_status_from_error(&error));
    }

    std::process::exit(exitcode::OK);
}
