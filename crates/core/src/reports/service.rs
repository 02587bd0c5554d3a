//! Report aggregation over journal entries.

use kontera_shared::types::round_cents;
use rust_decimal::Decimal;

use super::types::ReportRow;
use crate::accounts::{AccountDirectory, ReportCategory};
use crate::ledger::JournalEntry;

/// Sums debit minus credit over all entries posting to the given accounts.
///
/// An empty entry set sums to zero.
pub fn sum_by_accounts<'a>(
    entries: impl IntoIterator<Item = &'a JournalEntry>,
    account_numbers: &[u32],
) -> Decimal {
    let sum = entries
        .into_iter()
        .filter(|e| account_numbers.contains(&e.account))
        .map(JournalEntry::net)
        .sum();
    round_cents(sum)
}

/// Builds one report section: a row per directory account in `category`
/// with its net over the given entries, followed by a total row.
///
/// Accounts with no activity appear with a zero amount, so sections keep
/// a stable shape across reporting windows.
#[must_use]
pub fn report_section(
    entries: &[JournalEntry],
    directory: &AccountDirectory,
    category: ReportCategory,
) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    let mut total = Decimal::ZERO;

    for account in directory.by_category(category) {
        let amount = sum_by_accounts(entries, &[account.number]);
        total += amount;
        rows.push(ReportRow::account(account.number, account.label, amount));
    }

    rows.push(ReportRow::total(round_cents(total)));
    rows
}
