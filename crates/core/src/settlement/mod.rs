//! Order settlement bookkeeping.
//!
//! When the payment processor confirms an order, the storefront hands the
//! ledger a gross amount and a processing fee. The ledger books the sale
//! ex-VAT, the VAT collected, the fee, and the net receivable from the
//! processor as one four-line verification tagged with the order id.

use chrono::NaiveDate;
use kontera_shared::types::round_cents;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::accounts;
use crate::ledger::{meta, JournalEntry, VerificationDraft};

/// Default VAT rate applied when the settlement does not carry one.
pub const DEFAULT_VAT_RATE: Decimal = dec!(0.25);

/// A confirmed order settlement as reported by the payment processor.
#[derive(Debug, Clone)]
pub struct OrderSettlement {
    /// Storefront order id; settlements are idempotent per order.
    pub order_id: String,
    /// Payment intent behind the charge.
    pub payment_intent_id: String,
    /// Amount charged to the customer, VAT inclusive.
    pub gross_amount: Decimal,
    /// Processor fee withheld from the payout.
    pub fee_amount: Decimal,
    /// VAT rate applied to the sale; [`DEFAULT_VAT_RATE`] when absent.
    pub vat_rate: Option<Decimal>,
    /// Date the settlement is booked on.
    pub settled_on: NaiveDate,
}

impl OrderSettlement {
    /// The VAT rate to book the sale at.
    #[must_use]
    pub fn vat_rate(&self) -> Decimal {
        self.vat_rate.unwrap_or(DEFAULT_VAT_RATE)
    }

    /// Sale amount excluding VAT, rounded to cents.
    #[must_use]
    pub fn ex_vat_amount(&self) -> Decimal {
        round_cents(self.gross_amount / (Decimal::ONE + self.vat_rate()))
    }

    /// VAT portion of the gross amount. Defined as gross minus ex-VAT so
    /// the two always recombine to the gross exactly.
    #[must_use]
    pub fn vat_amount(&self) -> Decimal {
        round_cents(self.gross_amount) - self.ex_vat_amount()
    }

    /// Payout receivable from the processor: gross minus fee.
    #[must_use]
    pub fn net_amount(&self) -> Decimal {
        round_cents(self.gross_amount) - round_cents(self.fee_amount)
    }
}

/// Builds the four settlement entries for a confirmed order.
///
/// Sales ex-VAT is credited to 3001, the VAT share to 2611, the processor
/// fee debited to 6570, and the net payout receivable debited to 1580.
/// Both sides total the gross amount, so the entries always balance.
#[must_use]
pub fn settlement_entries(order: &OrderSettlement) -> Vec<JournalEntry> {
    vec![
        JournalEntry::credit(accounts::SALES_GOODS, order.ex_vat_amount()),
        JournalEntry::credit(accounts::OUTGOING_VAT, order.vat_amount()),
        JournalEntry::debit(accounts::PROCESSING_FEES, round_cents(order.fee_amount)),
        JournalEntry::debit(accounts::PROCESSOR_RECEIVABLE, order.net_amount()),
    ]
}

/// Builds the settlement verification, tagged with the order and payment
/// intent ids that make it idempotent per order.
#[must_use]
pub fn settlement_draft(order: &OrderSettlement) -> VerificationDraft {
    VerificationDraft::new(
        format!("Order {}", order.order_id),
        order.settled_on,
        settlement_entries(order),
    )
    .with_metadata(meta::ORDER_ID, order.order_id.clone())
    .with_metadata(meta::PAYMENT_INTENT_ID, order.payment_intent_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryTotals;

    fn order(gross: Decimal, fee: Decimal) -> OrderSettlement {
        OrderSettlement {
            order_id: "ord_123".to_string(),
            payment_intent_id: "pi_456".to_string(),
            gross_amount: gross,
            fee_amount: fee,
            vat_rate: None,
            settled_on: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_standard_rate_split() {
        let order = order(dec!(125.00), dec!(3.55));
        assert_eq!(order.ex_vat_amount(), dec!(100.00));
        assert_eq!(order.vat_amount(), dec!(25.00));
        assert_eq!(order.net_amount(), dec!(121.45));

        let entries = settlement_entries(&order);
        assert_eq!(entries.len(), 4);
        assert!(entries.contains(&JournalEntry::credit(3001, dec!(100.00))));
        assert!(entries.contains(&JournalEntry::credit(2611, dec!(25.00))));
        assert!(entries.contains(&JournalEntry::debit(6570, dec!(3.55))));
        assert!(entries.contains(&JournalEntry::debit(1580, dec!(121.45))));
        assert!(EntryTotals::of(&entries).is_balanced());
    }

    #[test]
    fn test_awkward_gross_still_balances() {
        // 99.99 / 1.25 = 79.992, rounds to 79.99; VAT takes the rest.
        let order = order(dec!(99.99), dec!(3.20));
        assert_eq!(order.ex_vat_amount(), dec!(79.99));
        assert_eq!(order.vat_amount(), dec!(20.00));
        assert!(EntryTotals::of(&settlement_entries(&order)).is_balanced());
    }

    #[test]
    fn test_explicit_vat_rate() {
        let mut order = order(dec!(112.00), dec!(2.00));
        order.vat_rate = Some(dec!(0.12));
        assert_eq!(order.ex_vat_amount(), dec!(100.00));
        assert_eq!(order.vat_amount(), dec!(12.00));
    }

    #[test]
    fn test_zero_fee() {
        let order = order(dec!(50.00), Decimal::ZERO);
        let entries = settlement_entries(&order);
        assert!(entries.contains(&JournalEntry::debit(6570, dec!(0.00))));
        assert!(entries.contains(&JournalEntry::debit(1580, dec!(50.00))));
        assert!(EntryTotals::of(&entries).is_balanced());
    }

    #[test]
    fn test_draft_carries_idempotency_tags() {
        let draft = settlement_draft(&order(dec!(125.00), dec!(3.55)));
        assert_eq!(draft.metadata_value(meta::ORDER_ID), Some("ord_123"));
        assert_eq!(draft.metadata_value(meta::PAYMENT_INTENT_ID), Some("pi_456"));
        assert_eq!(draft.description, "Order ord_123");
    }
}
