//! Property-based tests for verification validation rules.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{EntryTotals, JournalEntry, VerificationDraft};
use super::validation::{check_balance, validate_submission};
use crate::accounts::AccountDirectory;

/// Strategy to generate a positive amount in cents (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a known account number.
fn account_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(1580u32),
        Just(1930u32),
        Just(2611u32),
        Just(2640u32),
        Just(3001u32),
        Just(4000u32),
        Just(6570u32),
    ]
}

/// Strategy to generate a balanced entry set: paired debits and credits
/// of the same amounts across random accounts.
fn balanced_entries() -> impl Strategy<Value = Vec<JournalEntry>> {
    prop::collection::vec((account_strategy(), account_strategy(), positive_amount()), 1..8)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .flat_map(|(debit_account, credit_account, amount)| {
                    [
                        JournalEntry::debit(debit_account, amount),
                        JournalEntry::credit(credit_account, amount),
                    ]
                })
                .collect()
        })
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any set of paired debit/credit entries passes both field
    /// validation and the balance check.
    #[test]
    fn prop_balanced_pairs_accepted(entries in balanced_entries()) {
        let draft = VerificationDraft::new("Generated", date(), entries.clone());
        prop_assert!(validate_submission(&draft, &AccountDirectory::new()).is_ok());
        prop_assert!(check_balance(&entries).is_ok());
    }

    /// Adding an unmatched debit to a balanced set always fails the
    /// balance check, and the reported totals differ by that amount.
    #[test]
    fn prop_extra_debit_rejected(
        entries in balanced_entries(),
        extra in positive_amount(),
        account in account_strategy(),
    ) {
        let mut entries = entries;
        entries.push(JournalEntry::debit(account, extra));

        match check_balance(&entries) {
            Err(LedgerError::Imbalance { debit, credit }) => {
                prop_assert_eq!(debit - credit, extra);
            }
            other => prop_assert!(false, "expected imbalance, got {:?}", other),
        }
    }

    /// Totals are symmetric: swapping every entry's sides swaps the totals.
    #[test]
    fn prop_totals_side_symmetry(entries in balanced_entries()) {
        let flipped: Vec<JournalEntry> = entries
            .iter()
            .map(|e| JournalEntry {
                account: e.account,
                debit: e.credit,
                credit: e.debit,
            })
            .collect();

        let totals = EntryTotals::of(&entries);
        let flipped_totals = EntryTotals::of(&flipped);
        prop_assert_eq!(totals.debit, flipped_totals.credit);
        prop_assert_eq!(totals.credit, flipped_totals.debit);
    }

    /// Validation never panics on arbitrary descriptions.
    #[test]
    fn prop_validation_total(description in ".*", entries in balanced_entries()) {
        let draft = VerificationDraft {
            description,
            verification_date: Some(date()),
            entries,
            ..VerificationDraft::default()
        };
        let _ = validate_submission(&draft, &AccountDirectory::new());
    }
}
