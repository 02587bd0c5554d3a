//! Order settlement routes.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ledger_error_response;
use crate::extractors::TenantId;
use crate::routes::verifications::VerificationResponse;
use crate::AppState;
use kontera_core::settlement::OrderSettlement;

/// Creates the settlement routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/settlements", post(create_settlement))
}

/// Request body for booking an order settlement.
#[derive(Debug, Deserialize)]
pub struct CreateSettlementRequest {
    /// Storefront order id.
    pub order_id: String,
    /// Payment intent behind the charge.
    pub payment_intent_id: String,
    /// Gross amount charged, VAT inclusive.
    pub gross_amount: Decimal,
    /// Processor fee withheld from the payout.
    pub fee_amount: Decimal,
    /// VAT rate; defaults to the standard rate.
    pub vat_rate: Option<Decimal>,
    /// Date the settlement is booked on.
    pub settled_on: NaiveDate,
}

/// POST `/settlements` - Book a confirmed order settlement.
///
/// Idempotent per order: a second request for an already-settled order
/// is rejected with a conflict.
async fn create_settlement(
    State(state): State<AppState>,
    tenant: TenantId,
    Json(request): Json<CreateSettlementRequest>,
) -> impl IntoResponse {
    let order = OrderSettlement {
        order_id: request.order_id,
        payment_intent_id: request.payment_intent_id,
        gross_amount: request.gross_amount,
        fee_amount: request.fee_amount,
        vat_rate: request.vat_rate,
        settled_on: request.settled_on,
    };

    match state
        .repository()
        .create_order_settlement(tenant.0, order)
        .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(VerificationResponse::from(&created)),
        )
            .into_response(),
        Err(e) => ledger_error_response(&e),
    }
}
