use std::fmt;

use chrono::{Datelike as _, NaiveDate};

/// A calendar month, the atomic unit of the report's time axis. Ordered by
/// (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    /// 1-based (January = 1).
    pub month: u32,
}

/// Contiguous, strictly increasing sequence of months (inclusive on both
/// ends). May be empty if the ledger has no entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthRange(pub(crate) Vec<Month>);

// --

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
    }

    /// The following calendar month (December rolls over to January).
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Number of months since year 0, used for range length checks.
    pub(crate) fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }

    /// Axis label, ex. "03/2024".
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl MonthRange {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn months(&self) -> &[Month] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Month> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Month> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Month> {
        self.0.last().copied()
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(Month::label).collect()
    }
}

impl<'a> IntoIterator for &'a MonthRange {
    type Item = &'a Month;
    type IntoIter = std::slice::Iter<'a, Month>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_rolls_over_december() {
        assert_eq!(Month::new(2023, 12).next(), Month::new(2024, 1));
        assert_eq!(Month::new(2024, 5).next(), Month::new(2024, 6));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Month::new(2023, 12) < Month::new(2024, 1));
        assert!(Month::new(2024, 2) > Month::new(2024, 1));
    }

    #[test]
    fn test_label_and_display() {
        let m = Month::new(2024, 3);
        assert_eq!(m.label(), "03/2024");
        assert_eq!(m.to_string(), "2024-03");
    }

    #[test]
    fn test_from_date() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Month::from(d), Month::new(2024, 2));
    }
}
