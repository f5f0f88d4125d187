use chrono::NaiveDate;

use crate::{
    entities::{Month, MonthRange},
    errors::PnlError,
};

/// Returns every month from `start` to `end`, both included.
pub fn enumerate_months(start: Month, end: Month) -> Result<MonthRange, PnlError> {
    if start > end || !start.is_valid() || !end.is_valid() {
        return Err(PnlError::InvalidRange { start, end });
    }
    let len = (end.ordinal() - start.ordinal() + 1) as usize;
    let mut months = Vec::with_capacity(len);
    let mut current = start;
    months.push(current);
    while current != end {
        current = current.next();
        months.push(current);
    }
    Ok(MonthRange(months))
}

/// Months touched by the (inclusive) date span of a ledger. An empty ledger
/// yields an empty range.
pub(crate) fn months_covering(
    date_range: Option<(NaiveDate, NaiveDate)>,
) -> Result<MonthRange, PnlError> {
    match date_range {
        Some((first, last)) => enumerate_months(first.into(), last.into()),
        None => Ok(MonthRange::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(year: i32, month: u32) -> Month {
        Month::new(year, month)
    }

    #[test]
    fn test_single_month() {
        let range = enumerate_months(m(2024, 6), m(2024, 6)).unwrap();
        assert_eq!(range.months(), &[m(2024, 6)]);
    }

    #[test]
    fn test_year_rollover() {
        let range = enumerate_months(m(2023, 11), m(2024, 2)).unwrap();
        assert_eq!(
            range.months(),
            &[m(2023, 11), m(2023, 12), m(2024, 1), m(2024, 2)]
        );
    }

    #[test]
    fn test_length_and_monotonicity() {
        let pairs = [
            (m(2020, 1), m(2020, 12)),
            (m(2019, 7), m(2024, 3)),
            (m(1999, 12), m(2000, 1)),
            (m(2024, 2), m(2024, 2)),
        ];
        for (start, end) in pairs {
            let range = enumerate_months(start, end).unwrap();
            let expected = (end.year as i64 * 12 + end.month as i64)
                - (start.year as i64 * 12 + start.month as i64)
                + 1;
            assert_eq!(range.len() as i64, expected, "{} -> {}", start, end);
            assert_eq!(range.first(), Some(start));
            assert_eq!(range.last(), Some(end));
            assert!(range.months().windows(2).all(|w| w[0] < w[1]));
            assert!(range.months().windows(2).all(|w| w[0].next() == w[1]));
        }
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        match enumerate_months(m(2024, 3), m(2024, 1)) {
            Err(PnlError::InvalidRange { start, end }) => {
                assert_eq!(start, m(2024, 3));
                assert_eq!(end, m(2024, 1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(matches!(
            enumerate_months(m(2024, 13), m(2025, 1)),
            Err(PnlError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_months_covering() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = months_covering(Some((first, last))).unwrap();
        assert_eq!(range.labels(), vec!["01/2024", "02/2024", "03/2024"]);
        assert!(months_covering(None).unwrap().is_empty());
    }
}
