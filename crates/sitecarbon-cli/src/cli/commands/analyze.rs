//! `sitecarbon analyze <url>` – profile, estimate and recommend.

use anyhow::Result;
use sitecarbon_core::config::SiteCarbonConfig;
use sitecarbon_core::{analyze, Profiler, Usage};

use crate::cli::render;

pub async fn run_analyze(
    cfg: &SiteCarbonConfig,
    url: &str,
    monthly_visitors: &str,
    pages_per_visit: &str,
    hosting: &str,
    region: Option<&str>,
    json: bool,
) -> Result<()> {
    // Validate usage figures before touching the network.
    let usage = Usage::parse(monthly_visitors, pages_per_visit, hosting, region)?;
    let profiler = Profiler::from_config(cfg);
    let report = analyze(&profiler, &cfg.factors, url, &usage)
        .await
        .map_err(render::with_fallback_hint)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(profile) = &report.profile {
            print!("{}", render::profile_text(profile));
            println!();
        }
        print!("{}", render::report_text(&report));
    }
    Ok(())
}
