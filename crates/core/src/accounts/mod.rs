//! Static account directory.
//!
//! The chart of accounts is a fixed, read-only table shared by all tenants.
//! Each account carries a report category for financial statements, a flag
//! marking whether its balance is carried forward into the next fiscal
//! year, and an optional link to the VAT account that sales/purchase forms
//! append automatically.

use serde::{Deserialize, Serialize};

/// Payment-processor receivable (settled order payouts in transit).
pub const PROCESSOR_RECEIVABLE: u32 = 1580;
/// Company bank account.
pub const BANK: u32 = 1930;
/// Tax-authority clearing account.
pub const TAX_CLEARING: u32 = 2050;
/// Outgoing VAT, 25%.
pub const OUTGOING_VAT: u32 = 2611;
/// Incoming VAT on purchases.
pub const INCOMING_VAT: u32 = 2640;
/// VAT settlement account.
pub const VAT_SETTLEMENT: u32 = 2650;
/// Carry-forward counter account for incoming balances.
pub const CARRY_FORWARD: u32 = 2999;
/// Sales of goods, 25% VAT.
pub const SALES_GOODS: u32 = 3001;
/// Rounding differences.
pub const ROUNDING: u32 = 3740;
/// Purchases of goods.
pub const PURCHASES: u32 = 4000;
/// Payment processing fees.
pub const PROCESSING_FEES: u32 = 6570;

/// The accounts whose activity is locked once a month's VAT is reported.
pub const VAT_LOCKED_ACCOUNTS: [u32; 3] = [SALES_GOODS, OUTGOING_VAT, INCOMING_VAT];

/// Report category an account contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    /// Balance sheet, asset side.
    Asset,
    /// Balance sheet, liability/equity side.
    Liability,
    /// Income statement, income.
    Income,
    /// Income statement, expense.
    Expense,
    /// Excluded from financial statements.
    None,
}

/// A ledger account in the static directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Account number.
    pub number: u32,
    /// Human-readable label.
    pub label: &'static str,
    /// Report category for financial statements.
    pub category: ReportCategory,
    /// Whether this account's balance carries forward into the next
    /// fiscal year's incoming-balance verification.
    pub is_incoming_balance: bool,
    /// VAT account automatically booked alongside this one, if any.
    pub linked_vat_account: Option<u32>,
}

const DIRECTORY: &[Account] = &[
    Account {
        number: PROCESSOR_RECEIVABLE,
        label: "Payment processor receivable",
        category: ReportCategory::Asset,
        is_incoming_balance: true,
        linked_vat_account: None,
    },
    Account {
        number: BANK,
        label: "Bank account",
        category: ReportCategory::Asset,
        is_incoming_balance: true,
        linked_vat_account: None,
    },
    Account {
        number: TAX_CLEARING,
        label: "Tax authority clearing",
        category: ReportCategory::Asset,
        is_incoming_balance: true,
        linked_vat_account: None,
    },
    Account {
        number: OUTGOING_VAT,
        label: "Outgoing VAT 25%",
        category: ReportCategory::Liability,
        is_incoming_balance: true,
        linked_vat_account: None,
    },
    Account {
        number: INCOMING_VAT,
        label: "Incoming VAT",
        category: ReportCategory::Liability,
        is_incoming_balance: true,
        linked_vat_account: None,
    },
    Account {
        number: VAT_SETTLEMENT,
        label: "VAT settlement",
        category: ReportCategory::Liability,
        is_incoming_balance: true,
        linked_vat_account: None,
    },
    Account {
        number: CARRY_FORWARD,
        label: "Incoming balance carry-forward",
        category: ReportCategory::Liability,
        is_incoming_balance: true,
        linked_vat_account: None,
    },
    Account {
        number: SALES_GOODS,
        label: "Sales of goods 25% VAT",
        category: ReportCategory::Income,
        is_incoming_balance: false,
        linked_vat_account: Some(OUTGOING_VAT),
    },
    Account {
        number: ROUNDING,
        label: "Rounding differences",
        category: ReportCategory::Income,
        is_incoming_balance: false,
        linked_vat_account: None,
    },
    Account {
        number: PURCHASES,
        label: "Purchases of goods",
        category: ReportCategory::Expense,
        is_incoming_balance: false,
        linked_vat_account: Some(INCOMING_VAT),
    },
    Account {
        number: PROCESSING_FEES,
        label: "Payment processing fees",
        category: ReportCategory::Expense,
        is_incoming_balance: false,
        linked_vat_account: None,
    },
];

/// Read-only lookup over the static account directory.
///
/// The directory is shared process-wide; it holds no per-tenant state and
/// is safe to consult from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountDirectory;

impl AccountDirectory {
    /// Creates a directory handle.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns all accounts in number order.
    #[must_use]
    pub fn all(&self) -> &'static [Account] {
        DIRECTORY
    }

    /// Looks up an account by number.
    #[must_use]
    pub fn get(&self, number: u32) -> Option<&'static Account> {
        DIRECTORY.iter().find(|a| a.number == number)
    }

    /// Returns true if the number exists in the directory.
    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        self.get(number).is_some()
    }

    /// Returns the accounts whose balances carry forward between years.
    pub fn incoming_balance_accounts(&self) -> impl Iterator<Item = &'static Account> {
        DIRECTORY.iter().filter(|a| a.is_incoming_balance)
    }

    /// Returns the accounts in the given report category.
    pub fn by_category(&self, category: ReportCategory) -> impl Iterator<Item = &'static Account> {
        DIRECTORY.iter().filter(move |a| a.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_account_numbers_unique() {
        let numbers: HashSet<u32> = DIRECTORY.iter().map(|a| a.number).collect();
        assert_eq!(numbers.len(), DIRECTORY.len());
    }

    #[test]
    fn test_linked_vat_accounts_resolve() {
        let directory = AccountDirectory::new();
        for account in DIRECTORY {
            if let Some(linked) = account.linked_vat_account {
                assert!(
                    directory.contains(linked),
                    "account {} links to unknown VAT account {linked}",
                    account.number
                );
            }
        }
    }

    #[test]
    fn test_balance_sheet_accounts_carry_forward() {
        let directory = AccountDirectory::new();
        for account in directory.all() {
            let is_balance_sheet = matches!(
                account.category,
                ReportCategory::Asset | ReportCategory::Liability
            );
            assert_eq!(
                account.is_incoming_balance, is_balance_sheet,
                "account {} carry-forward flag disagrees with its category",
                account.number
            );
        }
    }

    #[test]
    fn test_lookup() {
        let directory = AccountDirectory::new();
        assert_eq!(directory.get(SALES_GOODS).unwrap().label, "Sales of goods 25% VAT");
        assert!(directory.get(9999).is_none());
        assert!(directory.contains(BANK));
    }

    #[test]
    fn test_incoming_balance_accounts() {
        let directory = AccountDirectory::new();
        let numbers: Vec<u32> = directory.incoming_balance_accounts().map(|a| a.number).collect();
        assert!(numbers.contains(&BANK));
        assert!(numbers.contains(&OUTGOING_VAT));
        assert!(!numbers.contains(&SALES_GOODS));
        assert!(!numbers.contains(&PROCESSING_FEES));
    }

    #[test]
    fn test_by_category() {
        let directory = AccountDirectory::new();
        let income: Vec<u32> = directory
            .by_category(ReportCategory::Income)
            .map(|a| a.number)
            .collect();
        assert_eq!(income, vec![SALES_GOODS, ROUNDING]);
    }

    #[test]
    fn test_sales_links_to_outgoing_vat() {
        let directory = AccountDirectory::new();
        assert_eq!(
            directory.get(SALES_GOODS).unwrap().linked_vat_account,
            Some(OUTGOING_VAT)
        );
        assert_eq!(
            directory.get(PURCHASES).unwrap().linked_vat_account,
            Some(INCOMING_VAT)
        );
    }
}
