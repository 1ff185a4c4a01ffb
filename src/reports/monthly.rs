//! Rolling monthly series
//!
//! Income, plain expenses and shared-expense shares per month for the last
//! N months, oldest first.

use chrono::NaiveDate;

use crate::models::{EntryKind, Money, Month, MonthMatching, Transaction};

/// Default number of months in the series
pub const DEFAULT_MONTHS_BACK: u32 = 6;

/// Longest series that will be built; larger requests are clamped to it
pub const MAX_MONTHS_BACK: u32 = 120;

/// One month of the series; the three figures are never pre-summed
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub month: Month,
    /// Short month name, e.g. "Jan"
    pub label: &'static str,
    pub income: Money,
    pub expenses: Money,
    /// Sum of the owner's shares, not the shared totals
    pub shared_expenses: Money,
}

impl MonthlyBucket {
    fn empty(month: Month) -> Self {
        Self {
            month,
            label: month.label(),
            income: Money::zero(),
            expenses: Money::zero(),
            shared_expenses: Money::zero(),
        }
    }

    fn add(&mut self, txn: &Transaction) {
        match &txn.entry {
            EntryKind::Income => self.income += txn.amount,
            EntryKind::Expense => self.expenses += txn.amount,
            EntryKind::SharedExpense { user_share, .. } => self.shared_expenses += *user_share,
        }
    }
}

/// Build `months_back` buckets ending with the month containing `now`
///
/// `months_back` is clamped to [`MAX_MONTHS_BACK`].
///
/// Months that fall before the representable calendar are skipped, which in
/// practice never happens.
pub fn monthly_series(
    ledger: &[Transaction],
    now: NaiveDate,
    months_back: u32,
    matching: MonthMatching,
) -> Vec<MonthlyBucket> {
    let current = Month::from_date(now);

    let mut buckets: Vec<MonthlyBucket> = (0..months_back.min(MAX_MONTHS_BACK))
        .rev()
        .filter_map(|offset| current.minus(offset))
        .map(MonthlyBucket::empty)
        .collect();

    for txn in ledger {
        let Some(date) = txn.date else { continue };
        // Under month-of-year matching two buckets can never share a month
        // number as long as months_back <= 12; the first match wins otherwise.
        if let Some(bucket) = buckets
            .iter_mut()
            .find(|b| b.month.matches(date, matching))
        {
            bucket.add(txn);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scenario_a() -> Vec<Transaction> {
        vec![
            Transaction::income("Salary", Money::new(4200.0), date(2024, 1, 15)),
            Transaction::expense("Groceries", Money::new(15.5), date(2024, 1, 12)),
            Transaction::shared(
                "Dinner",
                Money::new(90.0),
                date(2024, 1, 10),
                vec!["b@x.com".into()],
                Money::new(45.0),
            ),
        ]
    }

    #[test]
    fn test_six_buckets_oldest_first() {
        let series = monthly_series(
            &[],
            date(2024, 3, 20),
            DEFAULT_MONTHS_BACK,
            MonthMatching::CalendarMonth,
        );
        let labels: Vec<&str> = series.iter().map(|b| b.label).collect();

        assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
        assert_eq!(series[0].month, Month::new(2023, 10).unwrap());
        assert_eq!(series[5].month, Month::new(2024, 3).unwrap());
        assert!(series.iter().all(|b| b.income.is_zero()
            && b.expenses.is_zero()
            && b.shared_expenses.is_zero()));
    }

    #[test]
    fn test_figures_are_kept_apart() {
        let series = monthly_series(
            &scenario_a(),
            date(2024, 1, 31),
            DEFAULT_MONTHS_BACK,
            MonthMatching::CalendarMonth,
        );
        let jan = series.last().unwrap();

        assert_eq!(jan.label, "Jan");
        assert!(jan.income.approx_eq(Money::new(4200.0)));
        assert!(jan.expenses.approx_eq(Money::new(15.5)));
        assert!(jan.shared_expenses.approx_eq(Money::new(45.0)));
    }

    #[test]
    fn test_entries_outside_window_are_ignored() {
        let mut ledger = scenario_a();
        ledger.push(Transaction::expense("Ancient", Money::new(500.0), date(2023, 1, 3)));

        let series = monthly_series(&ledger, date(2024, 1, 1), 6, MonthMatching::CalendarMonth);
        let total: Money = series.iter().map(|b| b.expenses).sum();
        assert!(total.approx_eq(Money::new(15.5)));
    }

    #[test]
    fn test_month_of_year_matching_folds_years() {
        let ledger = vec![Transaction::income("Bonus", Money::new(100.0), date(2022, 12, 1))];

        let series = monthly_series(&ledger, date(2024, 1, 1), 6, MonthMatching::MonthOfYear);
        let dec = series.iter().find(|b| b.label == "Dec").unwrap();
        assert!(dec.income.approx_eq(Money::new(100.0)));

        let strict = monthly_series(&ledger, date(2024, 1, 1), 6, MonthMatching::CalendarMonth);
        assert!(strict.iter().all(|b| b.income.is_zero()));
    }

    #[test]
    fn test_zero_months() {
        assert!(monthly_series(&scenario_a(), date(2024, 1, 1), 0, MonthMatching::CalendarMonth)
            .is_empty());
    }

    #[test]
    fn test_huge_request_is_clamped() {
        let buckets = monthly_series(
            &scenario_a(),
            date(2024, 1, 20),
            u32::MAX,
            MonthMatching::CalendarMonth,
        );
        assert_eq!(buckets.len(), MAX_MONTHS_BACK as usize);
        assert_eq!(buckets.last().unwrap().month, Month::new(2024, 1).unwrap());
    }
}
