//! CLI for the SiteCarbon footprint estimator.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitecarbon_core::config;
use std::path::PathBuf;

use commands::{run_analyze, run_estimate, run_factors, run_profile};

/// Top-level CLI for SiteCarbon.
#[derive(Debug, Parser)]
#[command(name = "sitecarbon")]
#[command(about = "SiteCarbon: estimate a website's carbon footprint", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/sitecarbon/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More detailed logs (repeat for more); SITECARBON_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Estimate emissions from a known page size.
    Estimate {
        /// Average page weight in kilobytes.
        #[arg(long, allow_hyphen_values = true, value_name = "KB")]
        page_size_kb: String,
        /// Visitors per month.
        #[arg(long, allow_hyphen_values = true, value_name = "N")]
        monthly_visitors: String,
        /// Pages viewed per visit.
        #[arg(long, allow_hyphen_values = true, value_name = "N")]
        pages_per_visit: String,
        /// Hosting type: standard or green.
        #[arg(long)]
        hosting: String,
        /// Server region: north-america, europe, asia, oceania, south-america, africa.
        #[arg(long)]
        region: String,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Fetch a page and estimate its weight and hosting region.
    Profile {
        /// Page URL (a bare host is treated as https).
        url: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Profile a page, then estimate its emissions.
    Analyze {
        /// Page URL (a bare host is treated as https).
        url: String,
        /// Visitors per month.
        #[arg(long, allow_hyphen_values = true, value_name = "N")]
        monthly_visitors: String,
        /// Pages viewed per visit.
        #[arg(long, allow_hyphen_values = true, value_name = "N")]
        pages_per_visit: String,
        /// Hosting type: standard or green.
        #[arg(long)]
        hosting: String,
        /// Override the region guessed from the domain suffix.
        #[arg(long)]
        region: Option<String>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the energy and carbon-intensity tables in use.
    Factors,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Estimate {
                page_size_kb,
                monthly_visitors,
                pages_per_visit,
                hosting,
                region,
                json,
            } => {
                let raw = sitecarbon_core::RawEstimateInput {
                    page_size_kb,
                    monthly_visitors,
                    pages_per_visit,
                    hosting,
                    region,
                };
                run_estimate(&cfg, &raw, json)?;
            }
            CliCommand::Profile { url, json } => run_profile(&cfg, &url, json).await?,
            CliCommand::Analyze {
                url,
                monthly_visitors,
                pages_per_visit,
                hosting,
                region,
                json,
            } => {
                run_analyze(
                    &cfg,
                    &url,
                    &monthly_visitors,
                    &pages_per_visit,
                    &hosting,
                    region.as_deref(),
                    json,
                )
                .await?;
            }
            CliCommand::Factors => run_factors(&cfg),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
