//! Ledger entry display formatting
//!
//! Renders merged ledger entries as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Transaction, TransactionKind};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Your Share")]
    share: String,
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn entry_row(txn: &Transaction, symbol: &str) -> EntryRow {
    EntryRow {
        id: txn.id.to_string(),
        date: txn
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string()),
        kind: txn.kind().to_string(),
        description: truncate(&txn.description, 30),
        category: txn.category_name().to_string(),
        amount: txn.amount.format_with_symbol(symbol),
        share: txn
            .user_share()
            .map(|s| s.format_with_symbol(symbol))
            .unwrap_or_default(),
    }
}

/// Format ledger entries as a table, newest first as given
pub fn format_ledger_table<'a>(
    entries: impl IntoIterator<Item = &'a Transaction>,
    symbol: &str,
) -> String {
    let rows: Vec<EntryRow> = entries.into_iter().map(|t| entry_row(t, symbol)).collect();
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Format the details of one entry
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    match txn.date {
        Some(date) => output.push_str(&format!("Date:        {}\n", date.format("%Y-%m-%d"))),
        None => output.push_str("Date:        (none)\n"),
    }
    output.push_str(&format!("Kind:        {}\n", txn.kind()));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category_name()));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));

    if txn.kind() == TransactionKind::SharedExpense {
        if let Some(share) = txn.user_share() {
            output.push_str(&format!(
                "Your share:  {}\n",
                share.format_with_symbol(symbol)
            ));
        }
        output.push_str(&format!("Shared with: {}\n", txn.participants().join(", ")));
    }

    output
}
