//! `sitecarbon estimate` – emissions from a known page size.

use anyhow::Result;
use sitecarbon_core::config::SiteCarbonConfig;
use sitecarbon_core::{RawEstimateInput, Report};

use crate::cli::render;

pub fn run_estimate(cfg: &SiteCarbonConfig, raw: &RawEstimateInput, json: bool) -> Result<()> {
    let input = raw.parse()?;
    let report = Report::manual(&cfg.factors, input)?;
    tracing::info!(
        "estimate: {} KB, {} visitors -> {:.2} kg CO2/month, rating {}",
        input.page_size_kb,
        input.monthly_visitors,
        report.output.monthly_co2_kg,
        report.output.rating
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::report_text(&report));
    }
    Ok(())
}
