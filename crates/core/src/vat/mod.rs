//! Monthly VAT settlement.
//!
//! Sums a month's incoming and outgoing VAT, builds the settlement
//! verification (with a whole-unit rounding line against 3740), and
//! builds the follow-up payment verification that moves the settled
//! amount to the tax-authority clearing account.

use chrono::NaiveDate;
use kontera_shared::types::{round_cents, round_whole, YearMonth};
use rust_decimal::Decimal;

use crate::accounts;
use crate::ledger::{meta, JournalEntry, VerificationDraft};

/// A month's VAT position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatSummary {
    /// Outgoing VAT collected on sales: credit minus debit on 2611.
    pub outgoing: Decimal,
    /// Incoming VAT paid on purchases: debit minus credit on 2640.
    pub incoming: Decimal,
}

impl VatSummary {
    /// VAT owed to the tax authority; negative means a refund is due.
    #[must_use]
    pub fn vat_due(&self) -> Decimal {
        self.outgoing - self.incoming
    }
}

/// Sums the VAT accounts over a month's journal entries.
pub fn summarize<'a>(entries: impl IntoIterator<Item = &'a JournalEntry>) -> VatSummary {
    let mut outgoing = Decimal::ZERO;
    let mut incoming = Decimal::ZERO;
    for entry in entries {
        match entry.account {
            accounts::OUTGOING_VAT => outgoing += entry.credit - entry.debit,
            accounts::INCOMING_VAT => incoming += entry.debit - entry.credit,
            _ => {}
        }
    }
    VatSummary {
        outgoing: round_cents(outgoing),
        incoming: round_cents(incoming),
    }
}

/// Builds the settlement entries for a month's VAT position.
///
/// The VAT accounts are reversed in full (2640 debited by the incoming
/// total, 2611 credited by the outgoing total) and the amount due is
/// booked against 2650 rounded to the nearest whole unit. Whatever
/// fraction the rounding discards lands on 3740 so the verification
/// still balances.
#[must_use]
pub fn settlement_entries(summary: &VatSummary) -> Vec<JournalEntry> {
    let mut entries = vec![
        JournalEntry::debit(accounts::INCOMING_VAT, summary.incoming),
        JournalEntry::credit(accounts::OUTGOING_VAT, summary.outgoing),
    ];

    let due = round_whole(summary.vat_due());
    if due >= Decimal::ZERO {
        entries.push(JournalEntry::debit(accounts::VAT_SETTLEMENT, due));
    } else {
        entries.push(JournalEntry::credit(accounts::VAT_SETTLEMENT, -due));
    }

    // The rounding line absorbs whatever the whole-unit rounding dropped.
    let diff: Decimal = entries.iter().map(JournalEntry::net).sum();
    if !diff.is_zero() {
        if diff > Decimal::ZERO {
            entries.push(JournalEntry::credit(accounts::ROUNDING, diff));
        } else {
            entries.push(JournalEntry::debit(accounts::ROUNDING, -diff));
        }
    }
    entries
}

/// Builds the VAT settlement verification for a month, dated its last
/// day and tagged `vatReport = <year-month>`.
#[must_use]
pub fn settlement_draft(month: YearMonth, summary: &VatSummary) -> VerificationDraft {
    VerificationDraft::new(
        format!("VAT report {month}"),
        month.last_day(),
        settlement_entries(summary),
    )
    .with_metadata(meta::VAT_REPORT, month.to_string())
}

/// Builds the payment entries for a settled VAT amount.
///
/// The settled balance moves from 2650 to the tax-authority clearing
/// account (2050), and the cash movement is booked against the chosen
/// source account with 2050 as its counter-side. A negative amount
/// records a refund and flips every line.
#[must_use]
pub fn payment_entries(paid_amount: Decimal, source_account: u32) -> Vec<JournalEntry> {
    let amount = round_cents(paid_amount);
    if amount >= Decimal::ZERO {
        vec![
            JournalEntry::credit(accounts::VAT_SETTLEMENT, amount),
            JournalEntry::debit(accounts::TAX_CLEARING, amount),
            JournalEntry::credit(source_account, amount),
            JournalEntry::debit(accounts::TAX_CLEARING, amount),
        ]
    } else {
        vec![
            JournalEntry::debit(accounts::VAT_SETTLEMENT, -amount),
            JournalEntry::credit(accounts::TAX_CLEARING, -amount),
            JournalEntry::debit(source_account, -amount),
            JournalEntry::credit(accounts::TAX_CLEARING, -amount),
        ]
    }
}

/// Builds the VAT payment verification for an already-reported month.
#[must_use]
pub fn payment_draft(
    month: YearMonth,
    paid_amount: Decimal,
    paid_date: NaiveDate,
    source_account: u32,
) -> VerificationDraft {
    VerificationDraft::new(
        format!("VAT payment {month}"),
        paid_date,
        payment_entries(paid_amount, source_account),
    )
}
