//! Business rule validation for verification submissions.
//!
//! Field validation and balance checking are deliberately separate: field
//! errors map back onto form fields, while an imbalance is surfaced as a
//! warning with both totals so the operator can correct the entries.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{EntryTotals, JournalEntry, VerificationDraft};
use crate::accounts::AccountDirectory;

/// A validation failure attached to a single field path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    /// Field path, e.g. `description` or `journal_entries[2].account`.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// A collection of field-level validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for the given field path.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Returns true if no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the recorded failures.
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for e in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validates the fields of a verification submission.
///
/// Checks, in form-field terms:
/// - description is non-empty
/// - verification date is present
/// - at least one journal entry exists
/// - at least one entry carries a non-zero amount
/// - no entry has a negative debit or credit
/// - every entry's account exists in the directory
///
/// Balance is NOT checked here; see [`check_balance`].
///
/// # Errors
///
/// Returns `LedgerError::Validation` carrying the field-keyed error map.
pub fn validate_submission(
    draft: &VerificationDraft,
    directory: &AccountDirectory,
) -> Result<(), LedgerError> {
    let mut errors = ValidationErrors::new();

    if draft.description.trim().is_empty() {
        errors.push("description", "Description must not be empty");
    }

    if draft.verification_date.is_none() {
        errors.push("verification_date", "Verification date is required");
    }

    if draft.entries.is_empty() {
        errors.push("journal_entries", "At least one journal entry is required");
    } else if draft.entries.iter().all(JournalEntry::is_zero) {
        errors.push(
            "journal_entries",
            "At least one entry must carry a non-zero amount",
        );
    }

    for (i, entry) in draft.entries.iter().enumerate() {
        if entry.debit < Decimal::ZERO || entry.credit < Decimal::ZERO {
            errors.push(
                format!("journal_entries[{i}]"),
                "Amounts must not be negative",
            );
        }
        if !directory.contains(entry.account) {
            errors.push(
                format!("journal_entries[{i}].account"),
                format!("Unknown account {}", entry.account),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(LedgerError::Validation(errors))
    }
}

/// Rejects metadata tags whose keys are reserved for the ledger's own
/// derived verifications (`IB`, `vatReport`, `vatRegisteredAtAccount`).
///
/// A forged `vatReport` tag would lock the month and shadow the real
/// report; a forged `IB` tag would create a second opening balance.
/// Submissions from outside the ledger must never carry these keys.
///
/// # Errors
///
/// Returns `LedgerError::Validation` with an error per offending tag.
pub fn check_reserved_metadata(draft: &VerificationDraft) -> Result<(), LedgerError> {
    let mut errors = ValidationErrors::new();

    for (i, tag) in draft.metadata.iter().enumerate() {
        if super::meta::RESERVED.contains(&tag.key.as_str()) {
            errors.push(
                format!("metadata[{i}].key"),
                format!("Metadata key '{}' is reserved", tag.key),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(LedgerError::Validation(errors))
    }
}

/// Checks that the entries balance at two-decimal precision.
///
/// # Errors
///
/// Returns `LedgerError::Imbalance` carrying both totals.
pub fn check_balance(entries: &[JournalEntry]) -> Result<EntryTotals, LedgerError> {
    let totals = EntryTotals::of(entries);
    if totals.is_balanced() {
        Ok(totals)
    } else {
        Err(LedgerError::Imbalance {
            debit: totals.debit,
            credit: totals.credit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn balanced_entries() -> Vec<JournalEntry> {
        vec![
            JournalEntry::credit(3001, dec!(100)),
            JournalEntry::credit(2611, dec!(25)),
            JournalEntry::debit(1930, dec!(125)),
        ]
    }

    fn field_paths(err: LedgerError) -> Vec<String> {
        match err {
            LedgerError::Validation(errors) => {
                errors.fields().iter().map(|e| e.field.clone()).collect()
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_submission() {
        let draft = VerificationDraft::new("Sale", date(), balanced_entries());
        assert!(validate_submission(&draft, &AccountDirectory::new()).is_ok());
    }

    #[test]
    fn test_empty_description() {
        let draft = VerificationDraft::new("  ", date(), balanced_entries());
        let fields = field_paths(validate_submission(&draft, &AccountDirectory::new()).unwrap_err());
        assert_eq!(fields, vec!["description"]);
    }

    #[test]
    fn test_missing_date() {
        let draft = VerificationDraft {
            description: "Sale".to_string(),
            verification_date: None,
            entries: balanced_entries(),
            ..VerificationDraft::default()
        };
        let fields = field_paths(validate_submission(&draft, &AccountDirectory::new()).unwrap_err());
        assert_eq!(fields, vec!["verification_date"]);
    }

    #[test]
    fn test_no_entries() {
        let draft = VerificationDraft::new("Sale", date(), vec![]);
        let fields = field_paths(validate_submission(&draft, &AccountDirectory::new()).unwrap_err());
        assert_eq!(fields, vec!["journal_entries"]);
    }

    #[test]
    fn test_all_zero_entries() {
        let draft = VerificationDraft::new(
            "Sale",
            date(),
            vec![
                JournalEntry::debit(1930, Decimal::ZERO),
                JournalEntry::credit(3001, Decimal::ZERO),
            ],
        );
        let fields = field_paths(validate_submission(&draft, &AccountDirectory::new()).unwrap_err());
        assert_eq!(fields, vec!["journal_entries"]);
    }

    #[test]
    fn test_unknown_account() {
        let draft = VerificationDraft::new(
            "Sale",
            date(),
            vec![
                JournalEntry::debit(9999, dec!(100)),
                JournalEntry::credit(3001, dec!(100)),
            ],
        );
        let fields = field_paths(validate_submission(&draft, &AccountDirectory::new()).unwrap_err());
        assert_eq!(fields, vec!["journal_entries[0].account"]);
    }

    #[test]
    fn test_negative_amount() {
        let draft = VerificationDraft::new(
            "Sale",
            date(),
            vec![
                JournalEntry::debit(1930, dec!(-100)),
                JournalEntry::credit(3001, dec!(100)),
            ],
        );
        let fields = field_paths(validate_submission(&draft, &AccountDirectory::new()).unwrap_err());
        assert_eq!(fields, vec!["journal_entries[0]"]);
    }

    #[test]
    fn test_multiple_failures_collected() {
        let draft = VerificationDraft {
            description: String::new(),
            verification_date: None,
            entries: vec![],
            ..VerificationDraft::default()
        };
        let fields = field_paths(validate_submission(&draft, &AccountDirectory::new()).unwrap_err());
        assert_eq!(
            fields,
            vec!["description", "verification_date", "journal_entries"]
        );
    }

    #[test]
    fn test_reserved_metadata_keys_rejected() {
        use super::super::meta;

        let draft = VerificationDraft::new("Sneaky report", date(), balanced_entries())
            .with_metadata(meta::VAT_REPORT, "2024-01")
            .with_metadata(meta::INCOMING_BALANCE, "2024");
        let fields = field_paths(check_reserved_metadata(&draft).unwrap_err());
        assert_eq!(fields, vec!["metadata[0].key", "metadata[1].key"]);

        let draft = VerificationDraft::new("Sneaky flag", date(), balanced_entries())
            .with_metadata(meta::VAT_REGISTERED_AT_ACCOUNT, meta::FLAG_TRUE);
        assert!(check_reserved_metadata(&draft).is_err());
    }

    #[test]
    fn test_ordinary_metadata_keys_pass() {
        use super::super::meta;

        let draft = VerificationDraft::new("Order", date(), balanced_entries())
            .with_metadata(meta::ORDER_ID, "ord_123")
            .with_metadata("note", "manual correction");
        assert!(check_reserved_metadata(&draft).is_ok());
    }

    #[test]
    fn test_check_balance_ok() {
        let totals = check_balance(&balanced_entries()).unwrap();
        assert_eq!(totals.debit, dec!(125.00));
        assert_eq!(totals.credit, dec!(125.00));
    }

    #[test]
    fn test_check_balance_single_unbalanced_line() {
        // A single debit line with no credit side: 100 vs 0.
        let entries = vec![JournalEntry::debit(1930, dec!(100))];
        let err = check_balance(&entries).unwrap_err();
        match err {
            LedgerError::Imbalance { debit, credit } => {
                assert_eq!(debit, dec!(100.00));
                assert_eq!(credit, dec!(0.00));
            }
            other => panic!("expected imbalance, got {other:?}"),
        }
    }

    #[test]
    fn test_check_balance_tolerates_sub_cent_drift() {
        let entries = vec![
            JournalEntry::debit(1930, dec!(100.001)),
            JournalEntry::credit(3001, dec!(100.0007)),
        ];
        assert!(check_balance(&entries).is_ok());
    }
}
