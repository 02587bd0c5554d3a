//! Core bookkeeping logic for Kontera.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `accounts` - Static account directory with report categories
//! - `ledger` - Verification drafts, journal entries, and validation
//! - `closing` - Incoming-balance carry-forward between fiscal years
//! - `vat` - VAT period reports and payment registration
//! - `settlement` - Order settlement entry construction
//! - `reports` - Financial statement aggregation

pub mod accounts;
pub mod closing;
pub mod ledger;
pub mod reports;
pub mod settlement;
pub mod vat;
