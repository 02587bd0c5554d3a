//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Response;
use uuid::Uuid;

use crate::error::app_error_response;
use kontera_shared::AppError;

/// Header carrying the tenant a request acts on.
pub const TENANT_HEADER: &str = "x-tenant-id";

/// The tenant a request is scoped to, taken from the `X-Tenant-Id`
/// header. Every ledger route requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantId(pub Uuid);

impl<S> FromRequestParts<S> for TenantId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(TENANT_HEADER) else {
            return Err(app_error_response(&AppError::Validation(
                "X-Tenant-Id header is required".to_string(),
            )));
        };

        value
            .to_str()
            .ok()
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(TenantId)
            .ok_or_else(|| {
                app_error_response(&AppError::Validation(
                    "X-Tenant-Id must be a UUID".to_string(),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    async fn extract(request: Request<()>) -> Result<TenantId, Response> {
        let (mut parts, ()) = request.into_parts();
        TenantId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_header() {
        let tenant = Uuid::new_v4();
        let request = Request::builder()
            .header("X-Tenant-Id", tenant.to_string())
            .body(())
            .unwrap();

        let extracted = extract(request).await.unwrap();
        assert_eq!(extracted, TenantId(tenant));
    }

    #[tokio::test]
    async fn test_missing_header() {
        let request = Request::builder().body(()).unwrap();
        let rejection = extract(request).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_header() {
        let request = Request::builder()
            .header("X-Tenant-Id", "not-a-uuid")
            .body(())
            .unwrap();
        let rejection = extract(request).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }
}
