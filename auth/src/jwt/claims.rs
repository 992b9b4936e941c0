use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token claims for an authenticated account.
///
/// `sub` carries the account identifier, `email` the account email.
/// `exp` is mandatory: every issued token expires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Account email address
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Build claims for an account with an expiry `lifetime_seconds`
    /// from now.
    pub fn for_account(
        account_id: impl ToString,
        email: impl ToString,
        lifetime_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(lifetime_seconds);

        Self {
            sub: account_id.to_string(),
            email: email.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }
}
