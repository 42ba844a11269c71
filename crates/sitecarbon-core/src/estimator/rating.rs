//! Letter grade for page weight. Independent of emissions.

use std::fmt;

use serde::{Serialize, Serializer};

/// Page-weight grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

/// Upper bounds (exclusive, in MB) of each band below F.
const BANDS: [(f64, Rating); 5] = [
    (0.5, Rating::APlus),
    (1.0, Rating::A),
    (2.0, Rating::B),
    (3.0, Rating::C),
    (5.0, Rating::D),
];

impl Rating {
    /// Grade a page of `page_size_mb` megabytes. A size sitting exactly on a
    /// band boundary belongs to the heavier band.
    pub fn for_page_size_mb(page_size_mb: f64) -> Rating {
        BANDS
            .iter()
            .find(|(upper, _)| page_size_mb < *upper)
            .map(|(_, rating)| *rating)
            .unwrap_or(Rating::F)
    }

    pub fn grade(self) -> &'static str {
        match self {
            Rating::APlus => "A+",
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
            Rating::D => "D",
            Rating::F => "F",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rating::APlus => "Excellent",
            Rating::A => "Very Good",
            Rating::B => "Good",
            Rating::C => "Average",
            Rating::D => "Below Average",
            Rating::F => "Poor",
        }
    }

    /// Grade with its description, e.g. `A+ (Excellent)`.
    pub fn label(self) -> String {
        format!("{} ({})", self.grade(), self.description())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.grade())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.grade())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_into_heavier_band() {
        assert_eq!(Rating::for_page_size_mb(0.4999), Rating::APlus);
        assert_eq!(Rating::for_page_size_mb(0.5), Rating::A);
        assert_eq!(Rating::for_page_size_mb(0.999), Rating::A);
        assert_eq!(Rating::for_page_size_mb(1.0), Rating::B);
        assert_eq!(Rating::for_page_size_mb(1.999), Rating::B);
        assert_eq!(Rating::for_page_size_mb(2.0), Rating::C);
        assert_eq!(Rating::for_page_size_mb(3.0), Rating::D);
        assert_eq!(Rating::for_page_size_mb(4.999), Rating::D);
        assert_eq!(Rating::for_page_size_mb(5.0), Rating::F);
        assert_eq!(Rating::for_page_size_mb(250.0), Rating::F);
    }

    #[test]
    fn ratings_are_ordered_best_first() {
        assert!(Rating::APlus < Rating::A);
        assert!(Rating::D < Rating::F);
        assert_eq!(Rating::APlus.max(Rating::C), Rating::C);
    }

    #[test]
    fn label_includes_description() {
        assert_eq!(Rating::APlus.label(), "A+ (Excellent)");
        assert_eq!(Rating::D.label(), "D (Below Average)");
        assert_eq!(Rating::F.to_string(), "F");
    }
}
