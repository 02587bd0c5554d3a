//! Common types used across the application.

pub mod amount;
pub mod period;

pub use amount::{round_cents, round_whole};
pub use period::YearMonth;
