//! `sitecarbon profile <url>` – page weight and region guess only.

use anyhow::Result;
use sitecarbon_core::config::SiteCarbonConfig;
use sitecarbon_core::Profiler;

use crate::cli::render;

pub async fn run_profile(cfg: &SiteCarbonConfig, url: &str, json: bool) -> Result<()> {
    let profiler = Profiler::from_config(cfg);
    let result = profiler
        .profile(url)
        .await
        .map_err(render::with_fallback_hint)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::profile_text(&result));
    }
    Ok(())
}
