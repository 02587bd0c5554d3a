//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod health;
pub mod reports;
pub mod settlements;
pub mod vat;
pub mod verifications;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(verifications::routes())
        .merge(settlements::routes())
        .merge(vat::routes())
        .merge(reports::routes())
}
