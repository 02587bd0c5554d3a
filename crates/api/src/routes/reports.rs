//! Financial report routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::error::ledger_error_response;
use crate::extractors::TenantId;
use crate::AppState;
use kontera_core::accounts::{AccountDirectory, ReportCategory};
use kontera_core::ledger::JournalEntry;
use kontera_core::reports::report_section;
use kontera_db::VerificationWithEntries;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports", get(get_report))
}

/// Query parameters for the financial report.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Window start (YYYY-MM-DD), inclusive.
    pub from: NaiveDate,
    /// Window end (YYYY-MM-DD), inclusive.
    pub to: NaiveDate,
}

/// GET `/reports` - Per-category account tables over a date window.
///
/// Every section carries one row per directory account plus a total row,
/// so the report keeps its shape even over an empty window.
async fn get_report(
    State(state): State<AppState>,
    tenant: TenantId,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let verifications = match state
        .repository()
        .find_by_date_range(tenant.0, query.from, query.to)
        .await
    {
        Ok(verifications) => verifications,
        Err(e) => {
            error!(error = %e, "Failed to load verifications for report");
            return ledger_error_response(&e);
        }
    };

    let entries: Vec<JournalEntry> = verifications
        .iter()
        .flat_map(VerificationWithEntries::journal_entries)
        .collect();
    let directory = AccountDirectory::new();

    (
        StatusCode::OK,
        Json(json!({
            "from": query.from,
            "to": query.to,
            "assets": report_section(&entries, &directory, ReportCategory::Asset),
            "liabilities": report_section(&entries, &directory, ReportCategory::Liability),
            "income": report_section(&entries, &directory, ReportCategory::Income),
            "expenses": report_section(&entries, &directory, ReportCategory::Expense),
        })),
    )
        .into_response()
}
