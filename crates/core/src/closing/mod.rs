//! Incoming-balance carry-forward between fiscal years.
//!
//! At the turn of a fiscal year, the net balance of every balance-sheet
//! account is carried into the next year as an "incoming balance" (IB)
//! verification dated January 1. The roll itself is pure; the caller
//! wraps the resulting entries in a verification and upserts it under the
//! `IB` metadata tag.

use kontera_shared::types::round_cents;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::accounts::{self, AccountDirectory};
use crate::ledger::JournalEntry;

/// Whether a roll includes the closing year's own IB verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomingBalancePolicy {
    /// Skip the closing year's IB verification when summing, so a prior
    /// year's opening balance is never rolled forward transitively.
    /// This matches the historical behavior.
    #[default]
    SkipPriorOpening,
    /// Include the closing year's IB verification, compounding opening
    /// balances across multi-year rolls.
    CompoundPriorOpening,
}

/// A closing-year verification as seen by the roller: its entries plus
/// whether it is itself the year's IB verification.
#[derive(Debug, Clone)]
pub struct YearVerification {
    /// True if this verification carries the `IB` tag for the closing year.
    pub is_opening_balance: bool,
    /// The verification's journal entries.
    pub entries: Vec<JournalEntry>,
}

/// Computes the incoming-balance entries for the year following `closing`
/// verifications.
///
/// For every account flagged as carrying forward, the net (debit minus
/// credit) over the closing year is computed; nonzero nets emit the
/// account line plus an offsetting carry-forward (2999) line, so the
/// result is self-balancing by construction. Zero nets emit nothing, and
/// a year that nets to zero everywhere yields an empty list.
#[must_use]
pub fn roll_incoming_balance(
    closing: &[YearVerification],
    directory: &AccountDirectory,
    policy: IncomingBalancePolicy,
) -> Vec<JournalEntry> {
    let mut nets: BTreeMap<u32, Decimal> = BTreeMap::new();

    for verification in closing {
        if verification.is_opening_balance && policy == IncomingBalancePolicy::SkipPriorOpening {
            continue;
        }
        for entry in &verification.entries {
            let carries_forward = directory
                .get(entry.account)
                .is_some_and(|a| a.is_incoming_balance);
            if carries_forward {
                *nets.entry(entry.account).or_default() += entry.net();
            }
        }
    }

    let mut entries = Vec::new();
    for (account, net) in nets {
        let net = round_cents(net);
        if net.is_zero() {
            continue;
        }
        if net > Decimal::ZERO {
            entries.push(JournalEntry::debit(account, net));
            entries.push(JournalEntry::credit(accounts::CARRY_FORWARD, net));
        } else {
            entries.push(JournalEntry::credit(account, -net));
            entries.push(JournalEntry::debit(accounts::CARRY_FORWARD, -net));
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryTotals;
    use rust_decimal_macros::dec;

    fn verification(entries: Vec<JournalEntry>) -> YearVerification {
        YearVerification {
            is_opening_balance: false,
            entries,
        }
    }

    fn opening_balance(entries: Vec<JournalEntry>) -> YearVerification {
        YearVerification {
            is_opening_balance: true,
            entries,
        }
    }

    #[test]
    fn test_roll_carries_balance_accounts_only() {
        let closing = vec![verification(vec![
            JournalEntry::credit(3001, dec!(100)),
            JournalEntry::credit(2611, dec!(25)),
            JournalEntry::debit(1930, dec!(125)),
        ])];

        let rolled = roll_incoming_balance(
            &closing,
            &AccountDirectory::new(),
            IncomingBalancePolicy::SkipPriorOpening,
        );

        // 3001 is an income account and does not carry forward.
        assert!(rolled.iter().all(|e| e.account != 3001));

        // 1930 netted +125: debit line plus carry-forward credit.
        assert!(rolled.contains(&JournalEntry::debit(1930, dec!(125.00))));
        assert!(rolled.contains(&JournalEntry::credit(2999, dec!(125.00))));

        // 2611 netted -25: credit line plus carry-forward debit.
        assert!(rolled.contains(&JournalEntry::credit(2611, dec!(25.00))));
        assert!(rolled.contains(&JournalEntry::debit(2999, dec!(25.00))));
    }

    #[test]
    fn test_roll_is_self_balancing() {
        let closing = vec![
            verification(vec![
                JournalEntry::credit(3001, dec!(400)),
                JournalEntry::credit(2611, dec!(100)),
                JournalEntry::debit(1580, dec!(500)),
            ]),
            verification(vec![
                JournalEntry::debit(1930, dec!(480)),
                JournalEntry::debit(6570, dec!(20)),
                JournalEntry::credit(1580, dec!(500)),
            ]),
        ];

        let rolled = roll_incoming_balance(
            &closing,
            &AccountDirectory::new(),
            IncomingBalancePolicy::SkipPriorOpening,
        );
        assert!(EntryTotals::of(&rolled).is_balanced());
    }

    #[test]
    fn test_zero_net_year_rolls_to_nothing() {
        // Money in and straight back out: every balance account nets zero.
        let closing = vec![
            verification(vec![
                JournalEntry::debit(1930, dec!(100)),
                JournalEntry::credit(2650, dec!(100)),
            ]),
            verification(vec![
                JournalEntry::credit(1930, dec!(100)),
                JournalEntry::debit(2650, dec!(100)),
            ]),
        ];

        let rolled = roll_incoming_balance(
            &closing,
            &AccountDirectory::new(),
            IncomingBalancePolicy::SkipPriorOpening,
        );
        assert!(rolled.is_empty());
    }

    #[test]
    fn test_empty_year_rolls_to_nothing() {
        let rolled = roll_incoming_balance(
            &[],
            &AccountDirectory::new(),
            IncomingBalancePolicy::SkipPriorOpening,
        );
        assert!(rolled.is_empty());
    }

    #[test]
    fn test_skip_policy_excludes_prior_opening() {
        let closing = vec![
            opening_balance(vec![
                JournalEntry::debit(1930, dec!(1000)),
                JournalEntry::credit(2999, dec!(1000)),
            ]),
            verification(vec![
                JournalEntry::debit(1930, dec!(50)),
                JournalEntry::credit(2611, dec!(50)),
            ]),
        ];

        let rolled = roll_incoming_balance(
            &closing,
            &AccountDirectory::new(),
            IncomingBalancePolicy::SkipPriorOpening,
        );

        // Only the year's own activity rolls: 1930 nets +50, not +1050.
        assert!(rolled.contains(&JournalEntry::debit(1930, dec!(50.00))));
        assert!(!rolled.contains(&JournalEntry::debit(1930, dec!(1050.00))));
    }

    #[test]
    fn test_compound_policy_includes_prior_opening() {
        let closing = vec![
            opening_balance(vec![
                JournalEntry::debit(1930, dec!(1000)),
                JournalEntry::credit(2999, dec!(1000)),
            ]),
            verification(vec![
                JournalEntry::debit(1930, dec!(50)),
                JournalEntry::credit(2611, dec!(50)),
            ]),
        ];

        let rolled = roll_incoming_balance(
            &closing,
            &AccountDirectory::new(),
            IncomingBalancePolicy::CompoundPriorOpening,
        );

        assert!(rolled.contains(&JournalEntry::debit(1930, dec!(1050.00))));
        assert!(EntryTotals::of(&rolled).is_balanced());
    }

    #[test]
    fn test_nets_rounded_to_cents() {
        let third = dec!(100) / dec!(3);
        let closing = vec![verification(vec![
            JournalEntry::debit(1930, third),
            JournalEntry::credit(2611, third),
        ])];

        let rolled = roll_incoming_balance(
            &closing,
            &AccountDirectory::new(),
            IncomingBalancePolicy::SkipPriorOpening,
        );

        assert!(rolled.contains(&JournalEntry::debit(1930, dec!(33.33))));
        assert!(EntryTotals::of(&rolled).is_balanced());
    }
}
