use clap::Parser;
use sitecarbon_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let sink = logging::init(cli.verbose);
    tracing::debug!("log sink: {}", sink);

    if let Err(err) = cli.run().await {
        eprintln!("sitecarbon error: {:#}", err);
        std::process::exit(1);
    }
}
