use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::EmailAddress;
use crate::account::models::SignInCommand;
use crate::account::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<ApiSuccess<SignInResponseData>, ApiError> {
    // A malformed email cannot belong to any account; answering with
    // the credentials error keeps unknown-address probes uniform.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::BadRequest("Invalid credentials".to_string()))?;

    state
        .auth_service
        .sign_in(SignInCommand::new(email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::CREATED,
                SignInResponseData {
                    access_token: token.access_token,
                },
            )
        })
}

/// HTTP request body for authentication (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub access_token: String,
}
