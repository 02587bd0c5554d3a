//! Ledger domain types for verification creation and validation.
//!
//! A verification is the ledger's atomic unit: a dated, numbered set of
//! journal entries with string metadata tags and opaque file attachments.

use chrono::NaiveDate;
use kontera_shared::types::round_cents;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Well-known metadata keys carried on verifications.
pub mod meta {
    /// Storefront order that produced a settlement verification.
    pub const ORDER_ID: &str = "orderId";
    /// Payment intent behind an order settlement.
    pub const PAYMENT_INTENT_ID: &str = "paymentIntentId";
    /// Marks the incoming-balance verification for a fiscal year.
    pub const INCOMING_BALANCE: &str = "IB";
    /// Marks the VAT settlement verification for a year-month.
    pub const VAT_REPORT: &str = "vatReport";
    /// One-way flag set once a VAT report's payment has been registered.
    pub const VAT_REGISTERED_AT_ACCOUNT: &str = "vatRegisteredAtAccount";
    /// Value used for boolean metadata flags.
    pub const FLAG_TRUE: &str = "true";

    /// Keys only the ledger itself may write. A submission carrying one
    /// of these could forge an incoming-balance or VAT-report marker.
    pub const RESERVED: [&str; 3] = [INCOMING_BALANCE, VAT_REPORT, VAT_REGISTERED_AT_ACCOUNT];
}

/// A single journal entry line: one account, a debit and a credit amount.
///
/// Conventionally at most one side is non-zero per line; the aggregate of
/// all lines in a verification must balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The account posted to.
    pub account: u32,
    /// Debit amount (>= 0).
    pub debit: Decimal,
    /// Credit amount (>= 0).
    pub credit: Decimal,
}

impl JournalEntry {
    /// Creates a debit entry.
    #[must_use]
    pub fn debit(account: u32, amount: Decimal) -> Self {
        Self {
            account,
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// Creates a credit entry.
    #[must_use]
    pub fn credit(account: u32, amount: Decimal) -> Self {
        Self {
            account,
            debit: Decimal::ZERO,
            credit: amount,
        }
    }

    /// Returns debit minus credit for this line.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit - self.credit
    }

    /// Returns true if both sides are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }
}

/// A metadata tag on a verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

impl MetadataEntry {
    /// Creates a metadata tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A file attached to a verification. Opaque to ledger logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Display name.
    pub name: String,
    /// Storage path.
    pub path: String,
}

/// Input for creating a verification, before numbering and persistence.
#[derive(Debug, Clone, Default)]
pub struct VerificationDraft {
    /// Description of the business event. Must be non-empty.
    pub description: String,
    /// Date of the verification. `None` fails validation; it is optional
    /// here so form submissions without a date produce a field error
    /// instead of a parse failure.
    pub verification_date: Option<NaiveDate>,
    /// Journal entries. Must contain at least one non-zero line.
    pub entries: Vec<JournalEntry>,
    /// Metadata tags.
    pub metadata: Vec<MetadataEntry>,
    /// File attachments.
    pub files: Vec<FileRef>,
}

impl VerificationDraft {
    /// Creates a draft with the given description, date, and entries.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        verification_date: NaiveDate,
        entries: Vec<JournalEntry>,
    ) -> Self {
        Self {
            description: description.into(),
            verification_date: Some(verification_date),
            entries,
            metadata: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a metadata tag.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push(MetadataEntry::new(key, value));
        self
    }

    /// Adds file attachments.
    #[must_use]
    pub fn with_files(mut self, files: Vec<FileRef>) -> Self {
        self.files.extend(files);
        self
    }

    /// Returns the value of the given metadata key, if present.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }

    /// Returns true if any entry posts to one of the given accounts.
    #[must_use]
    pub fn touches_accounts(&self, accounts: &[u32]) -> bool {
        self.entries.iter().any(|e| accounts.contains(&e.account))
    }
}

/// Debit and credit totals over a set of entries.
///
/// Totals are compared at two-decimal precision so accumulated arithmetic
/// cannot produce false imbalances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryTotals {
    /// Total debit amount, rounded to cents.
    pub debit: Decimal,
    /// Total credit amount, rounded to cents.
    pub credit: Decimal,
}

impl EntryTotals {
    /// Computes totals over the given entries.
    #[must_use]
    pub fn of(entries: &[JournalEntry]) -> Self {
        let debit: Decimal = entries.iter().map(|e| e.debit).sum();
        let credit: Decimal = entries.iter().map(|e| e.credit).sum();
        Self {
            debit: round_cents(debit),
            credit: round_cents(credit),
        }
    }

    /// Returns true if debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.debit == self.credit
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}
