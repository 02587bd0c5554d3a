//! Report output types.

use rust_decimal::Decimal;
use serde::Serialize;

/// One row of a report section: an account and its net amount over the
/// reporting window. The total row carries no account number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Account number; `None` for the total row.
    pub account: Option<u32>,
    /// Account label, or `"Total"` for the total row.
    pub label: String,
    /// Net amount, debit minus credit, rounded to cents.
    pub amount: Decimal,
}

impl ReportRow {
    /// Creates an account row.
    #[must_use]
    pub fn account(number: u32, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: Some(number),
            label: label.into(),
            amount,
        }
    }

    /// Creates the total row for a section.
    #[must_use]
    pub fn total(amount: Decimal) -> Self {
        Self {
            account: None,
            label: "Total".to_string(),
            amount,
        }
    }
}
