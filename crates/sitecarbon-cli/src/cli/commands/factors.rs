//! `sitecarbon factors` – print the active factor tables.

use sitecarbon_core::config::SiteCarbonConfig;

pub fn run_factors(cfg: &SiteCarbonConfig) {
    println!(
        "{:<14} {:>8} {:>10} {:>10}",
        "REGION", "KWH/GB", "STANDARD", "GREEN"
    );
    for (region, energy, standard, green) in cfg.factors.rows() {
        println!(
            "{:<14} {:>8.2} {:>10.2} {:>10.2}",
            region.as_str(),
            energy,
            standard,
            green
        );
    }
    println!();
    println!(
        "Resource weights: stylesheet {} KB, script {} KB, image {} KB",
        cfg.weights.stylesheet_kb, cfg.weights.script_kb, cfg.weights.image_kb
    );
}
