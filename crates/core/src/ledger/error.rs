//! Ledger error types for validation and state errors.

use kontera_shared::types::YearMonth;
use rust_decimal::Decimal;
use thiserror::Error;

use super::validation::ValidationErrors;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Submitted fields are malformed; carries a field-keyed error map.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Entries do not balance (sum of debits != sum of credits).
    #[error("Entries are not balanced. Debit: {debit}, Credit: {credit}")]
    Imbalance {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// Entry posts to an account missing from the directory.
    #[error("Unknown account: {0}")]
    UnknownAccount(u32),

    // ========== Period Errors ==========
    /// VAT for this month has been reported; its accounts are locked.
    #[error("VAT for {0} has already been reported; accounts 3001/2611/2640 are locked")]
    VatPeriodLocked(YearMonth),

    /// A VAT report already exists for this month.
    #[error("VAT report for {0} already exists")]
    AlreadyReported(YearMonth),

    /// No VAT report exists for this month.
    #[error("No VAT report found for {0}")]
    VatReportNotFound(YearMonth),

    // ========== Idempotency Errors ==========
    /// A settlement verification already exists for this order.
    #[error("Order {0} has already been settled")]
    DuplicateOrderSettlement(String),

    // ========== Concurrency Errors ==========
    /// Verification numbering raced with another writer and retries ran out.
    #[error("Verification numbering conflict, please retry")]
    SequenceConflict,

    // ========== Lookup Errors ==========
    /// Verification not found.
    #[error("Verification not found")]
    NotFound,

    // ========== Database Errors ==========
    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Imbalance { .. } => "UNBALANCED_ENTRIES",
            Self::UnknownAccount(_) => "UNKNOWN_ACCOUNT",
            Self::VatPeriodLocked(_) => "VAT_PERIOD_LOCKED",
            Self::AlreadyReported(_) => "VAT_ALREADY_REPORTED",
            Self::VatReportNotFound(_) => "VAT_REPORT_NOT_FOUND",
            Self::DuplicateOrderSettlement(_) => "DUPLICATE_ORDER_SETTLEMENT",
            Self::SequenceConflict => "SEQUENCE_CONFLICT",
            Self::NotFound => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::UnknownAccount(_) => 400,
            Self::Validation(_) | Self::Imbalance { .. } => 422,
            Self::VatPeriodLocked(_)
            | Self::AlreadyReported(_)
            | Self::DuplicateOrderSettlement(_)
            | Self::SequenceConflict => 409,
            Self::VatReportNotFound(_) | Self::NotFound => 404,
            Self::Database(_) => 500,
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SequenceConflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn month(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::Imbalance {
                debit: dec!(100),
                credit: dec!(0),
            }
            .error_code(),
            "UNBALANCED_ENTRIES"
        );
        assert_eq!(
            LedgerError::VatPeriodLocked(month("2024-03")).error_code(),
            "VAT_PERIOD_LOCKED"
        );
        assert_eq!(
            LedgerError::AlreadyReported(month("2024-03")).error_code(),
            "VAT_ALREADY_REPORTED"
        );
        assert_eq!(LedgerError::SequenceConflict.error_code(), "SEQUENCE_CONFLICT");
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::UnknownAccount(9999).http_status_code(), 400);
        assert_eq!(
            LedgerError::Imbalance {
                debit: dec!(100),
                credit: dec!(0),
            }
            .http_status_code(),
            422
        );
        assert_eq!(
            LedgerError::AlreadyReported(month("2024-03")).http_status_code(),
            409
        );
        assert_eq!(LedgerError::NotFound.http_status_code(), 404);
        assert_eq!(
            LedgerError::Database("boom".to_string()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_retryable_errors() {
        assert!(LedgerError::SequenceConflict.is_retryable());
        assert!(!LedgerError::NotFound.is_retryable());
        assert!(!LedgerError::VatPeriodLocked(month("2024-01")).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::Imbalance {
            debit: dec!(100.00),
            credit: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Entries are not balanced. Debit: 100.00, Credit: 50.00"
        );

        let err = LedgerError::DuplicateOrderSettlement("ord_42".to_string());
        assert_eq!(err.to_string(), "Order ord_42 has already been settled");
    }
}
