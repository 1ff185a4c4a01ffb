//! Daily spending series

use chrono::Datelike;

use crate::models::{EntryKind, Money, Month, Transaction};

/// Owner spending on one calendar day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPoint {
    /// Day of month, starting at 1
    pub day: u32,
    pub amount: Money,
}

/// One point per day of `month`, zero-filled, day 1 first
///
/// Each point sums plain expense amounts and shared-expense shares dated on
/// that day. Income does not count as spending.
pub fn daily_series(ledger: &[Transaction], month: Month) -> Vec<DailyPoint> {
    let mut points: Vec<DailyPoint> = (1..=month.days_in_month())
        .map(|day| DailyPoint {
            day,
            amount: Money::zero(),
        })
        .collect();

    for txn in ledger {
        let Some(date) = txn.date else { continue };
        if date.year() != month.year() || date.month() != month.month() {
            continue;
        }

        let spend = match &txn.entry {
            EntryKind::Income => continue,
            EntryKind::Expense => txn.amount,
            EntryKind::SharedExpense { user_share, .. } => *user_share,
        };

        if let Some(point) = points.get_mut(date.day0() as usize) {
            point.amount += spend;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_counts() {
        assert_eq!(daily_series(&[], Month::new(2024, 2).unwrap()).len(), 29);
        assert_eq!(daily_series(&[], Month::new(2023, 2).unwrap()).len(), 28);
        assert_eq!(daily_series(&[], Month::new(2024, 4).unwrap()).len(), 30);
        assert_eq!(daily_series(&[], Month::new(2024, 1).unwrap()).len(), 31);
    }

    #[test]
    fn test_days_are_zero_filled_and_ordered() {
        let ledger = vec![
            Transaction::expense("Coffee", Money::new(3.5), date(2024, 2, 29)),
            Transaction::shared(
                "Dinner",
                Money::new(90.0),
                date(2024, 2, 29),
                vec!["b@x.com".into(), "c@x.com".into()],
                Money::new(30.0),
            ),
            Transaction::income("Salary", Money::new(4200.0), date(2024, 2, 1)),
            Transaction::expense("Next month", Money::new(9.0), date(2024, 3, 1)),
        ];

        let series = daily_series(&ledger, Month::new(2024, 2).unwrap());
        assert_eq!(series.first().map(|p| p.day), Some(1));
        assert_eq!(series.last().map(|p| p.day), Some(29));
        assert!(series[28].amount.approx_eq(Money::new(33.5)));
        assert!(series[..28].iter().all(|p| p.amount.is_zero()));
    }

    #[test]
    fn test_other_years_are_ignored() {
        let ledger = vec![Transaction::expense("Old", Money::new(4.0), date(2023, 4, 10))];
        let series = daily_series(&ledger, Month::new(2024, 4).unwrap());
        assert!(series.iter().all(|p| p.amount.is_zero()));
    }
}
