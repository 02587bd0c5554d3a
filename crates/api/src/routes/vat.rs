//! VAT report routes: generation, lookup, and payment registration.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::error::{app_error_response, ledger_error_response};
use crate::extractors::TenantId;
use crate::routes::verifications::VerificationResponse;
use crate::AppState;
use kontera_core::ledger::{meta, LedgerError};
use kontera_shared::types::YearMonth;
use kontera_shared::AppError;

/// Creates the VAT report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/vat-reports/{year_month}", get(get_vat_report))
        .route("/vat-reports/{year_month}", post(generate_vat_report))
        .route("/vat-reports/{year_month}/payment", post(register_payment))
}

/// Request body for registering a VAT payment.
#[derive(Debug, Deserialize)]
pub struct RegisterPaymentRequest {
    /// Amount paid; negative for a received refund.
    pub paid_amount: Decimal,
    /// Date of the cash movement.
    pub paid_date: NaiveDate,
    /// Account the payment moved through, e.g. the bank account.
    pub source_account: u32,
}

fn parse_month(raw: &str) -> Result<YearMonth, Response> {
    raw.parse().map_err(|_| {
        app_error_response(&AppError::Validation(
            "Period must be formatted as YYYY-MM".to_string(),
        ))
    })
}

/// GET `/vat-reports/{year_month}` - Fetch the month's VAT report.
async fn get_vat_report(
    State(state): State<AppState>,
    tenant: TenantId,
    Path(year_month): Path<String>,
) -> impl IntoResponse {
    let month = match parse_month(&year_month) {
        Ok(month) => month,
        Err(response) => return response,
    };

    match state.repository().find_vat_report(tenant.0, month).await {
        Ok(Some(report)) => {
            let registered = report
                .metadata_value(meta::VAT_REGISTERED_AT_ACCOUNT)
                .is_some();
            (
                StatusCode::OK,
                Json(json!({
                    "report": VerificationResponse::from(&report),
                    "payment_registered": registered,
                })),
            )
                .into_response()
        }
        Ok(None) => ledger_error_response(&LedgerError::VatReportNotFound(month)),
        Err(e) => ledger_error_response(&e),
    }
}

/// POST `/vat-reports/{year_month}` - Generate the month's VAT report.
///
/// Settles the month's VAT position into a single verification and locks
/// the month's VAT accounts against further postings.
async fn generate_vat_report(
    State(state): State<AppState>,
    tenant: TenantId,
    Path(year_month): Path<String>,
) -> impl IntoResponse {
    let month = match parse_month(&year_month) {
        Ok(month) => month,
        Err(response) => return response,
    };

    match state.repository().generate_vat_report(tenant.0, month).await {
        Ok(report) => (
            StatusCode::CREATED,
            Json(VerificationResponse::from(&report)),
        )
            .into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// POST `/vat-reports/{year_month}/payment` - Register the month's VAT
/// payment.
async fn register_payment(
    State(state): State<AppState>,
    tenant: TenantId,
    Path(year_month): Path<String>,
    Json(request): Json<RegisterPaymentRequest>,
) -> impl IntoResponse {
    let month = match parse_month(&year_month) {
        Ok(month) => month,
        Err(response) => return response,
    };

    match state
        .repository()
        .mark_vat_paid(
            tenant.0,
            month,
            request.paid_amount,
            request.paid_date,
            request.source_account,
        )
        .await
    {
        Ok(payment) => (
            StatusCode::CREATED,
            Json(VerificationResponse::from(&payment)),
        )
            .into_response(),
        Err(e) => ledger_error_response(&e),
    }
}
