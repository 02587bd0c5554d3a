//! Double-entry bookkeeping logic.
//!
//! This module implements the core verification functionality:
//! - Journal entries and verification drafts
//! - Metadata tags and file references
//! - Business rule validation and balance checking
//! - Error types for ledger operations

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use types::{meta, EntryTotals, FileRef, JournalEntry, MetadataEntry, VerificationDraft};
pub use validation::{
    check_balance, check_reserved_metadata, validate_submission, FieldError, ValidationErrors,
};
