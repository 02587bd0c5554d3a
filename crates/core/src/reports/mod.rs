//! Financial statement aggregation.
//!
//! Read-side summaries over persisted verifications: per-account nets
//! grouped by report category, with a grand-total row per section.

pub mod service;
pub mod types;

pub use service::{report_section, sum_by_accounts};
pub use types::ReportRow;
