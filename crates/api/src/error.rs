//! Mapping from ledger errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use kontera_core::ledger::LedgerError;
use kontera_shared::AppError;

/// Converts an application error into the API's JSON error envelope.
pub fn app_error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

/// Converts a ledger error into the API's JSON error envelope.
///
/// Validation errors carry the field-level messages; imbalance errors
/// carry both totals so the client can show them. Database errors are
/// logged and returned as an opaque internal error.
pub fn ledger_error_response(err: &LedgerError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut body = json!({
        "error": err.error_code(),
        "message": err.to_string(),
    });

    match err {
        LedgerError::Validation(errors) => {
            body["fields"] = json!(errors.fields());
        }
        LedgerError::Imbalance { debit, credit } => {
            body["debit"] = json!(debit);
            body["credit"] = json!(credit);
        }
        LedgerError::Database(_) => {
            tracing::error!(error = %err, "ledger operation failed");
            body["message"] = json!("An error occurred");
        }
        _ => {}
    }

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_app_error_status_mapping() {
        let response = app_error_response(&AppError::Validation("bad header".to_string()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app_error_response(&AppError::NotFound("report".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_status_mapping() {
        let response = ledger_error_response(&LedgerError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ledger_error_response(&LedgerError::SequenceConflict);
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = ledger_error_response(&LedgerError::Imbalance {
            debit: dec!(100),
            credit: dec!(50),
        });
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = ledger_error_response(&LedgerError::Database("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
