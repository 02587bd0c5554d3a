//! Verification routes: manual creation, listing, and lookup.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::error::ledger_error_response;
use crate::extractors::TenantId;
use crate::AppState;
use kontera_core::ledger::{FileRef, JournalEntry, MetadataEntry, VerificationDraft};
use kontera_db::VerificationWithEntries;

/// Creates the verification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/verifications", get(list_verifications))
        .route("/verifications", post(create_verification))
        .route("/verifications/{id}", get(get_verification))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing verifications.
#[derive(Debug, Deserialize)]
pub struct ListVerificationsQuery {
    /// Fiscal year; defaults to the current year.
    pub year: Option<i32>,
}

/// Request body for creating a verification.
#[derive(Debug, Deserialize)]
pub struct CreateVerificationRequest {
    /// Description of the business event.
    pub description: String,
    /// Verification date (YYYY-MM-DD).
    pub verification_date: Option<NaiveDate>,
    /// Journal entries.
    pub journal_entries: Vec<EntryRequest>,
    /// Metadata tags.
    #[serde(default)]
    pub metadata: Vec<MetadataRequest>,
    /// File attachments.
    #[serde(default)]
    pub files: Vec<FileRequest>,
}

/// Request body for a single journal entry.
#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    /// Account number.
    pub account: u32,
    /// Debit amount.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount.
    #[serde(default)]
    pub credit: Decimal,
}

/// Request body for a metadata tag.
#[derive(Debug, Deserialize)]
pub struct MetadataRequest {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

/// Request body for a file attachment.
#[derive(Debug, Deserialize)]
pub struct FileRequest {
    /// Display name.
    pub name: String,
    /// Storage path.
    pub path: String,
}

/// Response for a verification.
#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    /// Verification ID.
    pub id: Uuid,
    /// Gap-free number within the tenant.
    pub verification_number: i64,
    /// Verification date.
    pub verification_date: String,
    /// Description.
    pub description: String,
    /// Journal entries in position order.
    pub journal_entries: Vec<EntryResponse>,
    /// Metadata tags.
    pub metadata: Vec<MetadataResponse>,
    /// File attachments.
    pub files: Vec<FileResponse>,
    /// Created at timestamp.
    pub created_at: String,
}

/// Response for a journal entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    /// Account number.
    pub account: u32,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
}

/// Response for a metadata tag.
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

/// Response for a file attachment.
#[derive(Debug, Serialize)]
pub struct FileResponse {
    /// Display name.
    pub name: String,
    /// Storage path.
    pub path: String,
}

impl From<&VerificationWithEntries> for VerificationResponse {
    fn from(v: &VerificationWithEntries) -> Self {
        Self {
            id: v.verification.id,
            verification_number: v.verification.verification_number,
            verification_date: v.verification.verification_date.to_string(),
            description: v.verification.description.clone(),
            journal_entries: v
                .journal_entries()
                .into_iter()
                .map(|e| EntryResponse {
                    account: e.account,
                    debit: e.debit,
                    credit: e.credit,
                })
                .collect(),
            metadata: v
                .metadata
                .iter()
                .map(|m| MetadataResponse {
                    key: m.key.clone(),
                    value: m.value.clone(),
                })
                .collect(),
            files: v
                .files
                .iter()
                .map(|f| FileResponse {
                    name: f.name.clone(),
                    path: f.path.clone(),
                })
                .collect(),
            created_at: v.verification.created_at.to_rfc3339(),
        }
    }
}

impl CreateVerificationRequest {
    fn into_draft(self) -> VerificationDraft {
        VerificationDraft {
            description: self.description,
            verification_date: self.verification_date,
            entries: self
                .journal_entries
                .into_iter()
                .map(|e| JournalEntry {
                    account: e.account,
                    debit: e.debit,
                    credit: e.credit,
                })
                .collect(),
            metadata: self
                .metadata
                .into_iter()
                .map(|m| MetadataEntry::new(m.key, m.value))
                .collect(),
            files: self
                .files
                .into_iter()
                .map(|f| FileRef {
                    name: f.name,
                    path: f.path,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/verifications` - List a year's verifications, newest date first.
async fn list_verifications(
    State(state): State<AppState>,
    tenant: TenantId,
    Query(query): Query<ListVerificationsQuery>,
) -> impl IntoResponse {
    let year = query.year.unwrap_or_else(|| Utc::now().year());

    match state.repository().find_by_year(tenant.0, year).await {
        Ok(verifications) => {
            let items: Vec<VerificationResponse> =
                verifications.iter().map(VerificationResponse::from).collect();
            (StatusCode::OK, Json(json!({ "verifications": items }))).into_response()
        }
        Err(e) => {
            error!(error = %e, year, "Failed to list verifications");
            ledger_error_response(&e)
        }
    }
}

/// POST `/verifications` - Create a verification from a manual submission.
async fn create_verification(
    State(state): State<AppState>,
    tenant: TenantId,
    Json(request): Json<CreateVerificationRequest>,
) -> impl IntoResponse {
    match state.repository().create(tenant.0, request.into_draft()).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(VerificationResponse::from(&created)),
        )
            .into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// GET `/verifications/{id}` - Fetch a single verification.
async fn get_verification(
    State(state): State<AppState>,
    tenant: TenantId,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.repository().get(tenant.0, id).await {
        Ok(found) => (StatusCode::OK, Json(VerificationResponse::from(&found))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}
