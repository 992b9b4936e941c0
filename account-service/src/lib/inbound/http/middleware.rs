use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated caller's claims.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub account_id: String,
    pub email: String,
}

/// Middleware validating bearer tokens on protected routes.
///
/// Every failure (missing header, bad format, invalid signature,
/// expired token) answers with the same 401 body.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized()
    })?;

    req.extensions_mut().insert(CurrentAccount {
        account_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Invalid or expired token"
        })),
    )
        .into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(unauthorized)?;

    let auth_str = auth_header.to_str().map_err(|_| unauthorized())?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(unauthorized)
}
