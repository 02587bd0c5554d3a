//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes for the ledger
//! - The tenant header extractor
//! - Error response mapping

pub mod error;
pub mod extractors;
pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use kontera_core::closing::IncomingBalancePolicy;
use kontera_db::VerificationRepository;
use kontera_shared::config::LedgerConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Ledger behavior settings.
    pub ledger: LedgerConfig,
}

impl AppState {
    /// Builds a verification repository configured from the ledger
    /// settings.
    #[must_use]
    pub fn repository(&self) -> VerificationRepository {
        let policy = if self.ledger.compound_incoming_balance {
            IncomingBalancePolicy::CompoundPriorOpening
        } else {
            IncomingBalancePolicy::SkipPriorOpening
        };
        VerificationRepository::new((*self.db).clone())
            .with_ib_policy(policy)
            .with_sequence_retries(self.ledger.sequence_retries)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
