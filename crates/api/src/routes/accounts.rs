//! Account directory routes.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::AppState;
use kontera_core::accounts::AccountDirectory;

/// GET `/accounts` - The static chart of accounts.
async fn list_accounts() -> impl IntoResponse {
    let directory = AccountDirectory::new();
    (StatusCode::OK, Json(json!({ "accounts": directory.all() })))
}

/// Creates the account directory routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/accounts", get(list_accounts))
}
