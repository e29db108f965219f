use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of championship seasons.
///
/// An inverted range (`from > to`) matches no season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Builds a range, rejecting inverted bounds.
    pub fn checked(from: i32, to: i32) -> Result<Self, CoreError> {
        if from > to {
            return Err(CoreError::InvertedYearRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// The range covering a single season.
    pub fn season(year: i32) -> Self {
        Self { from: year, to: year }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.from <= year && year <= self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// The caption shown above the dashboard, e.g. `Showing Data For: 2004 – 2024`.
    pub fn caption(&self) -> String {
        format!("Showing Data For: {} \u{2013} {}", self.from, self.to)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = YearRange::new(2000, 2005);
        assert!(range.contains(2000));
        assert!(range.contains(2005));
        assert!(!range.contains(1999));
        assert!(!range.contains(2006));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = YearRange::new(2010, 2000);
        assert!(range.is_empty());
        assert!(!range.contains(2005));
        assert_eq!(
            YearRange::checked(2010, 2000),
            Err(CoreError::InvertedYearRange { from: 2010, to: 2000 })
        );
    }

    #[test]
    fn test_caption_uses_en_dash() {
        assert_eq!(YearRange::new(2004, 2024).caption(), "Showing Data For: 2004 \u{2013} 2024");
        assert_eq!(YearRange::season(1950).to_string(), "1950..=1950");
    }
}
