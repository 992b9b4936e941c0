use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::Account;
use crate::account::models::EmailAddress;
use crate::account::ports::AuthServicePort;
use crate::inbound::http::middleware::CurrentAccount;
use crate::inbound::http::router::AppState;

/// Return the authenticated caller's own account, resolved from the
/// token's email claim. Password is never part of the response.
pub async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAccount>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let email = EmailAddress::new(current.email)
        .map_err(|_| ApiError::Unauthorized("Invalid token claims".to_string()))?;

    state
        .auth_service
        .profile(&email)
        .await
        .map_err(ApiError::from)?
        // Token may outlive the account it was issued for.
        .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.as_str().to_string(),
            name: account.name.as_str().to_string(),
            created_at: account.created_at,
        }
    }
}
