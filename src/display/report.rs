//! Report formatting for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Money, Month};
use crate::reports::{CategoryTotal, DailyPoint, KindSummary, MonthlyBucket};

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Spent")]
    value: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Category totals for a month, in first-appearance order
pub fn format_category_totals(month: Month, totals: &[CategoryTotal], symbol: &str) -> String {
    let mut output = format!("Spending by category, {}\n", month);
    if totals.is_empty() {
        output.push_str("No spending recorded.\n");
        return output;
    }

    let max = totals.iter().map(|t| t.value.value()).fold(0.0, f64::max);
    let lines: Vec<CategoryLine> = totals
        .iter()
        .map(|t| CategoryLine {
            name: t.name.clone(),
            value: t.value.format_with_symbol(symbol),
            bar: format_bar(t.value.value(), max, 20),
        })
        .collect();

    let total: Money = totals.iter().map(|t| t.value).sum();
    output.push_str(&Table::new(lines).with(Style::rounded()).to_string());
    output.push('\n');
    output.push_str(&format!("Total: {}\n", total.format_with_symbol(symbol)));
    output
}

#[derive(Tabled)]
struct MonthLine {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Shared (your share)")]
    shared: String,
}

/// Rolling monthly series, oldest first
pub fn format_monthly_series(buckets: &[MonthlyBucket], symbol: &str) -> String {
    let lines: Vec<MonthLine> = buckets
        .iter()
        .map(|b| MonthLine {
            month: format!("{} {}", b.label, b.month.year()),
            income: b.income.format_with_symbol(symbol),
            expenses: b.expenses.format_with_symbol(symbol),
            shared: b.shared_expenses.format_with_symbol(symbol),
        })
        .collect();

    let mut output = Table::new(lines).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Daily spending as one bar per day
pub fn format_daily_series(month: Month, points: &[DailyPoint], symbol: &str) -> String {
    let mut output = format!("Daily spending, {}\n", month);
    output.push_str(&separator(40));
    output.push('\n');

    let max = points.iter().map(|p| p.amount.value()).fold(0.0, f64::max);
    for point in points {
        output.push_str(&format!(
            "{:>2} {:>12} {}\n",
            point.day,
            point.amount.format_with_symbol(symbol),
            format_bar(point.amount.value(), max, 20).trim_end()
        ));
    }

    output
}

/// Overview of all kinds plus the balance
pub fn format_summary(
    summary: &KindSummary,
    month: Month,
    participants: usize,
    symbol: &str,
) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("Ledger summary (this month: {})\n", month));
    output.push_str(&separator(52));
    output.push('\n');
    output.push_str(&format!(
        "{:<22} {:>12} {:>12} {:>4}\n",
        "", "All time", "This month", "#"
    ));
    output.push_str(&format!(
        "{:<22} {:>12} {:>12} {:>4}\n",
        "Income",
        money(summary.income.all_time),
        money(summary.income.this_month),
        summary.income.count
    ));
    output.push_str(&format!(
        "{:<22} {:>12} {:>12} {:>4}\n",
        "Expenses",
        money(summary.expenses.all_time),
        money(summary.expenses.this_month),
        summary.expenses.count
    ));
    output.push_str(&format!(
        "{:<22} {:>12} {:>12} {:>4}\n",
        "Shared (total)",
        money(summary.shared.all_time),
        money(summary.shared.this_month),
        summary.shared.count
    ));
    output.push_str(&format!(
        "{:<22} {:>12} {:>12}\n",
        "Shared (your share)",
        money(summary.shared_share.all_time),
        money(summary.shared_share.this_month)
    ));
    output.push_str(&separator(52));
    output.push('\n');
    output.push_str(&format!("{:<22} {:>12}\n", "Balance", money(summary.balance())));
    output.push_str(&format!("{:<22} {:>12}\n", "Groups & People", participants));

    output
}
