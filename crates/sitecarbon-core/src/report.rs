//! The full analysis pipeline: profile → estimate → recommend.

use serde::Serialize;

use crate::error::CarbonError;
use crate::estimator::{estimate, parse_count, parse_positive, EstimateInput, EstimateOutput};
use crate::factors::EmissionFactors;
use crate::profiler::{ProfileResult, Profiler};
use crate::recommend::recommend;
use crate::region::{HostingType, Region};

/// Traffic and hosting figures supplied alongside a URL. Page size (and,
/// unless overridden, region) come from profiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Usage {
    pub monthly_visitors: u64,
    pub pages_per_visit: f64,
    pub hosting: HostingType,
    /// Overrides the region guessed from the domain suffix.
    pub region: Option<Region>,
}

impl Usage {
    /// Parse free-form strings, reporting the same errors as
    /// [`crate::RawEstimateInput::parse`].
    pub fn parse(
        monthly_visitors: &str,
        pages_per_visit: &str,
        hosting: &str,
        region: Option<&str>,
    ) -> Result<Self, CarbonError> {
        Ok(Self {
            monthly_visitors: parse_count("monthly visitors", monthly_visitors)?,
            pages_per_visit: parse_positive("pages per visit", pages_per_visit)?,
            hosting: hosting.parse::<HostingType>()?,
            region: region.map(str::parse::<Region>).transpose()?,
        })
    }

    fn with_profile(&self, profile: &ProfileResult) -> EstimateInput {
        EstimateInput {
            page_size_kb: profile.estimated_page_size_kb,
            monthly_visitors: self.monthly_visitors,
            pages_per_visit: self.pages_per_visit,
            hosting: self.hosting,
            region: self.region.unwrap_or(profile.inferred_region),
        }
    }
}

/// Everything a presentation layer needs to render one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: EstimateInput,
    pub output: EstimateOutput,
    pub recommendations: Vec<String>,
    /// Present when the page size came from profiling a URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileResult>,
}

impl Report {
    /// Estimate and recommend for a fully specified input.
    pub fn manual(factors: &EmissionFactors, input: EstimateInput) -> Result<Self, CarbonError> {
        Self::build(factors, input, None)
    }

    fn build(
        factors: &EmissionFactors,
        input: EstimateInput,
        profile: Option<ProfileResult>,
    ) -> Result<Self, CarbonError> {
        let output = estimate(factors, &input)?;
        let recommendations = recommend(input.page_size_mb(), input.hosting, output.rating);
        Ok(Self {
            input,
            output,
            recommendations,
            profile,
        })
    }
}

/// Profile `url`, then estimate and recommend using the measured page size.
///
/// A fetch failure is returned as-is so the caller can fall back to
/// [`Report::manual`] with a hand-entered page size.
pub async fn analyze(
    profiler: &Profiler,
    factors: &EmissionFactors,
    url: &str,
    usage: &Usage,
) -> Result<Report, CarbonError> {
    let profile = profiler.profile(url).await?;
    let input = usage.with_profile(&profile);
    if usage.region.is_some() {
        tracing::debug!(
            "region override {} replaces inferred {}",
            input.region,
            profile.inferred_region
        );
    }
    Report::build(factors, input, Some(profile))
}
