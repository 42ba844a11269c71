//! Plain-text rendering of reports.

use std::fmt::Write;

use sitecarbon_core::{CarbonError, ProfileResult, Report};

pub fn report_text(report: &Report) -> String {
    let input = &report.input;
    let out = &report.output;
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Page size:        {:.2} KB ({:.2} MB)",
        input.page_size_kb,
        input.page_size_mb()
    );
    let _ = writeln!(
        s,
        "Traffic:          {} visitors x {} pages/visit",
        input.monthly_visitors, input.pages_per_visit
    );
    let _ = writeln!(s, "Hosting:          {} ({})", input.hosting, input.region);
    let _ = writeln!(s, "Monthly transfer: {:.2} GB", out.transfer_gb);
    let _ = writeln!(s, "Monthly energy:   {:.2} kWh", out.energy_kwh);
    let _ = writeln!(s, "Monthly CO2:      {:.2} kg", out.monthly_co2_kg);
    let _ = writeln!(s, "Annual CO2:       {:.2} kg", out.annual_co2_kg);
    let _ = writeln!(s, "Equivalent:       {} trees needed to offset", out.trees_to_offset);
    let _ = writeln!(s, "Rating:           {}", out.rating.label());
    let _ = writeln!(s);
    let _ = writeln!(s, "Recommendations:");
    for (i, rec) in report.recommendations.iter().enumerate() {
        let _ = writeln!(s, "  {}. {}", i + 1, rec);
    }
    s
}

pub fn profile_text(profile: &ProfileResult) -> String {
    let r = &profile.resources;
    let mut s = String::new();
    let _ = writeln!(s, "URL:              {}", profile.url);
    let _ = writeln!(s, "Markup:           {:.2} KB", profile.markup_kb);
    let _ = writeln!(
        s,
        "Resources:        {} stylesheets, {} scripts, {} images",
        r.stylesheets, r.scripts, r.images
    );
    let _ = writeln!(s, "Estimated size:   {:.2} KB", profile.estimated_page_size_kb);
    let _ = writeln!(s, "Region (guess):   {}", profile.inferred_region);
    s
}

/// Attach a hint to recoverable failures: the user can still enter a page
/// size by hand.
pub fn with_fallback_hint(err: CarbonError) -> anyhow::Error {
    if err.is_recoverable() {
        anyhow::Error::new(err).context(
            "site could not be profiled; retry, or use `sitecarbon estimate --page-size-kb <KB> ...`",
        )
    } else {
        anyhow::Error::new(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecarbon_core::error::{FetchError, ValidationError};
    use sitecarbon_core::profiler::ResourceCounts;
    use sitecarbon_core::{EmissionFactors, RawEstimateInput, Region};

    fn worked_example() -> Report {
        let raw = RawEstimateInput {
            page_size_kb: "500".into(),
            monthly_visitors: "10000".into(),
            pages_per_visit: "3".into(),
            hosting: "standard".into(),
            region: "europe".into(),
        };
        Report::manual(&EmissionFactors::default(), raw.parse().unwrap()).unwrap()
    }

    #[test]
    fn report_text_formats_figures() {
        let text = report_text(&worked_example());
        assert!(text.contains("Monthly CO2:      2.73 kg"));
        assert!(text.contains("Annual CO2:       32.76 kg"));
        assert!(text.contains("2 trees needed to offset"));
        assert!(text.contains("Rating:           A (Very Good)"));
        assert!(text.contains("  1. Switch to a green hosting provider"));
        assert!(text.contains("  4. Consider implementing a Content Delivery Network"));
    }

    #[test]
    fn profile_text_lists_counts() {
        let p = ProfileResult {
            url: "https://example.de/".into(),
            estimated_page_size_kb: 470.0,
            inferred_region: Region::Europe,
            markup_kb: 20.0,
            resources: ResourceCounts {
                stylesheets: 1,
                scripts: 0,
                images: 2,
            },
        };
        let text = profile_text(&p);
        assert!(text.contains("1 stylesheets, 0 scripts, 2 images"));
        assert!(text.contains("Estimated size:   470.00 KB"));
        assert!(text.contains("Region (guess):   europe"));
    }

    #[test]
    fn fallback_hint_only_for_fetch_errors() {
        let fetch = with_fallback_hint(
            FetchError::Status {
                url: "https://example.com/".into(),
                code: 500,
            }
            .into(),
        );
        let msg = format!("{fetch:#}");
        assert!(msg.contains("sitecarbon estimate"));
        assert!(msg.contains("HTTP 500"));

        let invalid = with_fallback_hint(ValidationError::new("url", "value is required").into());
        assert!(!format!("{invalid:#}").contains("sitecarbon estimate"));
    }
}
