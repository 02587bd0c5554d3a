//! `SeaORM` entity definitions for the ledger schema.

pub mod journal_entries;
pub mod verification_counters;
pub mod verification_files;
pub mod verification_metadata;
pub mod verifications;
