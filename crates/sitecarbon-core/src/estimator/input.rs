//! Estimator input and its validation from free-form strings.

use serde::Serialize;

use crate::error::{CarbonError, ValidationError};
use crate::region::{HostingType, Region};

/// Validated input to [`super::estimate`]. Every field is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateInput {
    pub page_size_kb: f64,
    pub monthly_visitors: u64,
    pub pages_per_visit: f64,
    pub hosting: HostingType,
    pub region: Region,
}

impl EstimateInput {
    pub fn page_size_mb(&self) -> f64 {
        self.page_size_kb / 1000.0
    }

    /// Re-check numeric fields; the struct is public so callers may build it
    /// directly with values that never went through [`RawEstimateInput`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive_finite("page size", self.page_size_kb)?;
        positive_finite("pages per visit", self.pages_per_visit)?;
        Ok(())
    }
}

/// The five inputs as delivered by a form or command line, unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEstimateInput {
    pub page_size_kb: String,
    pub monthly_visitors: String,
    pub pages_per_visit: String,
    pub hosting: String,
    pub region: String,
}

impl RawEstimateInput {
    /// Parse and validate. Numeric problems are reported as validation
    /// errors, unknown hosting/region identifiers as lookup errors.
    pub fn parse(&self) -> Result<EstimateInput, CarbonError> {
        let page_size_kb = parse_number("page size", &self.page_size_kb)?;
        let monthly_visitors = parse_count("monthly visitors", &self.monthly_visitors)?;
        let pages_per_visit = parse_number("pages per visit", &self.pages_per_visit)?;
        let hosting = self.hosting.parse::<HostingType>()?;
        let region = self.region.parse::<Region>()?;

        let input = EstimateInput {
            page_size_kb,
            monthly_visitors,
            pages_per_visit,
            hosting,
            region,
        };
        input.validate()?;
        Ok(input)
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::new(field, "value is required"));
    }
    raw.parse::<f64>()
        .map_err(|_| ValidationError::new(field, format!("{raw:?} is not a number")))
}

pub(crate) fn parse_count(field: &'static str, raw: &str) -> Result<u64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::new(field, "value is required"));
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(n);
    }
    // Distinguish "-5" / "2.5" from garbage for a clearer message.
    match raw.parse::<f64>() {
        Ok(v) if v < 0.0 => Err(ValidationError::new(field, "must not be negative")),
        Ok(_) => Err(ValidationError::new(field, "must be a whole number")),
        Err(_) => Err(ValidationError::new(field, format!("{raw:?} is not a number"))),
    }
}

/// Parse a required number that must be finite and greater than zero.
pub(crate) fn parse_positive(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_number(field, raw)?;
    positive_finite(field, value)?;
    Ok(value)
}

fn positive_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ValidationError::new(field, "must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    fn raw(size: &str, visitors: &str, pages: &str, hosting: &str, region: &str) -> RawEstimateInput {
        RawEstimateInput {
            page_size_kb: size.into(),
            monthly_visitors: visitors.into(),
            pages_per_visit: pages.into(),
            hosting: hosting.into(),
            region: region.into(),
        }
    }

    #[test]
    fn parses_well_formed_input() {
        let input = raw(" 500 ", "10000", "3", "standard", "europe").parse().unwrap();
        assert_eq!(input.page_size_kb, 500.0);
        assert_eq!(input.monthly_visitors, 10_000);
        assert_eq!(input.pages_per_visit, 3.0);
        assert_eq!(input.hosting, HostingType::Standard);
        assert_eq!(input.region, Region::Europe);
        assert_eq!(input.page_size_mb(), 0.5);
    }

    #[test]
    fn zero_visitors_is_valid() {
        let input = raw("800", "0", "1.5", "green", "asia").parse().unwrap();
        assert_eq!(input.monthly_visitors, 0);
    }

    #[test]
    fn unknown_region_is_lookup_error() {
        let err = raw("500", "10", "1", "standard", "antarctica").parse().unwrap_err();
        match err {
            CarbonError::Lookup(LookupError::Region(r)) => assert_eq!(r, "antarctica"),
            other => panic!("expected region lookup error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_hosting_is_lookup_error() {
        let err = raw("500", "10", "1", "nuclear", "europe").parse().unwrap_err();
        assert!(matches!(err, CarbonError::Lookup(LookupError::Hosting(_))));
    }

    #[test]
    fn bad_numbers_are_validation_errors() {
        let cases = [
            raw("", "10", "1", "green", "europe"),
            raw("abc", "10", "1", "green", "europe"),
            raw("-1", "10", "1", "green", "europe"),
            raw("0", "10", "1", "green", "europe"),
            raw("NaN", "10", "1", "green", "europe"),
            raw("inf", "10", "1", "green", "europe"),
            raw("500", "-3", "1", "green", "europe"),
            raw("500", "2.5", "1", "green", "europe"),
            raw("500", "many", "1", "green", "europe"),
            raw("500", "10", "0", "green", "europe"),
        ];
        for case in cases {
            let err = case.parse().unwrap_err();
            assert!(
                matches!(err, CarbonError::Validation(_)),
                "expected validation error for {case:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn negative_visitor_message() {
        let err = parse_count("monthly visitors", "-3").unwrap_err();
        assert_eq!(err.reason, "must not be negative");
    }
}
