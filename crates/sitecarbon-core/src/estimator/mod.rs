//! Emissions model: page weight and traffic to energy, CO2 and offsets.

mod input;
mod rating;

pub use input::{EstimateInput, RawEstimateInput};
pub(crate) use input::{parse_count, parse_positive};
pub use rating::Rating;

use serde::Serialize;

use crate::error::{CarbonError, ValidationError};
use crate::factors::EmissionFactors;

/// CO2 a single tree absorbs per year (kg).
pub const TREE_ABSORPTION_KG_PER_YEAR: f64 = 21.0;

/// Result of [`estimate`]; a pure function of the input and factor tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateOutput {
    /// Data moved per month (GB).
    pub transfer_gb: f64,
    /// Energy used per month (kWh).
    pub energy_kwh: f64,
    pub monthly_co2_kg: f64,
    pub annual_co2_kg: f64,
    pub trees_to_offset: u64,
    pub rating: Rating,
}

/// Estimate monthly/annual emissions for `input` using `factors`.
///
/// Fails with a validation error, before any arithmetic, if the page size or
/// pages-per-visit is non-finite or not positive. Inputs that are valid on
/// their own but whose product overflows are rejected the same way.
pub fn estimate(factors: &EmissionFactors, input: &EstimateInput) -> Result<EstimateOutput, CarbonError> {
    input.validate()?;

    let page_size_mb = input.page_size_mb();
    let transfer_gb = page_size_mb * input.monthly_visitors as f64 * input.pages_per_visit / 1000.0;
    let energy_kwh = transfer_gb * factors.energy_factor(input.region);
    let monthly_co2_kg = energy_kwh * factors.carbon_intensity(input.hosting, input.region);
    let annual_co2_kg = monthly_co2_kg * 12.0;

    let too_large = || ValidationError::new("inputs", "too large to estimate");
    if ![transfer_gb, energy_kwh, monthly_co2_kg, annual_co2_kg]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(too_large().into());
    }
    let trees = trees_to_offset(annual_co2_kg).ok_or_else(too_large)?;

    Ok(EstimateOutput {
        transfer_gb,
        energy_kwh,
        monthly_co2_kg,
        annual_co2_kg,
        trees_to_offset: trees,
        rating: Rating::for_page_size_mb(page_size_mb),
    })
}

/// Trees needed to absorb `annual_co2_kg` in a year, rounded up.
///
/// `None` if the amount is not finite or the count does not fit in a `u64`.
pub fn trees_to_offset(annual_co2_kg: f64) -> Option<u64> {
    let trees = (annual_co2_kg / TREE_ABSORPTION_KG_PER_YEAR).ceil();
    // u64::MAX as f64 rounds up to 2^64, which itself does not fit.
    (trees.is_finite() && trees < u64::MAX as f64).then(|| trees.max(0.0) as u64)
}
