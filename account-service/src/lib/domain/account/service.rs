use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::AccessToken;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::EmailAddress;
use crate::account::models::SignInCommand;
use crate::account::models::SignUpCommand;
use crate::account::ports::AccountRepository;
use crate::account::ports::AuthServicePort;

/// Authentication service orchestrating signup and signin.
///
/// Stateless per request: composes the account repository and the
/// authenticator (hasher + token issuer), holding no mutable state of
/// its own.
pub struct AuthService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
    token_lifetime_seconds: i64,
}

impl<AR> AuthService<AR>
where
    AR: AccountRepository,
{
    /// Create a new service with injected collaborators.
    ///
    /// # Arguments
    /// * `repository` - account persistence implementation
    /// * `authenticator` - password hashing and token issuance
    /// * `token_lifetime_seconds` - expiry applied to every issued token
    pub fn new(
        repository: Arc<AR>,
        authenticator: Arc<Authenticator>,
        token_lifetime_seconds: i64,
    ) -> Self {
        Self {
            repository,
            authenticator,
            token_lifetime_seconds,
        }
    }

    fn claims_for(&self, account: &Account) -> Claims {
        Claims::for_account(account.id, account.email.as_str(), self.token_lifetime_seconds)
    }
}

#[async_trait]
impl<AR> AuthServicePort for AuthService<AR>
where
    AR: AccountRepository,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<AccessToken, AccountError> {
        // Advisory pre-check: gives the common case a clean conflict
        // without a failed insert. Not atomic with the insert below;
        // the store's unique constraint remains the authority.
        if self
            .repository
            .find_by_email(&command.email, false)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailAlreadyExists);
        }

        // Hashing is sequenced before the write: a hash failure leaves
        // no partial account record.
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AccountError::Hashing(e.to_string()))?;

        let account = Account {
            id: AccountId::new(),
            email: command.email,
            name: command.name,
            password_hash: Some(password_hash),
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await.map_err(|e| match e {
            // A concurrent signup lost to us at the constraint; the
            // store's error kind stays inside the service.
            AccountError::DuplicateEmail(_) => AccountError::EmailAlreadyExists,
            other => other,
        })?;

        let token = self
            .authenticator
            .issue_token(&self.claims_for(&created))
            .map_err(|e| AccountError::Signing(e.to_string()))?;

        Ok(AccessToken {
            access_token: token,
        })
    }

    async fn sign_in(&self, command: SignInCommand) -> Result<AccessToken, AccountError> {
        let account = self
            .repository
            .find_by_email(&command.email, true)
            .await?
            // Unknown email and wrong password must be the same error.
            .ok_or(AccountError::InvalidCredentials)?;

        let stored_hash = account
            .password_hash
            .as_deref()
            .ok_or_else(|| AccountError::Unknown("account record has no password hash".into()))?;

        let result = self
            .authenticator
            .authenticate(&command.password, stored_hash, &self.claims_for(&account))
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                auth::AuthenticationError::PasswordError(err) => {
                    AccountError::Hashing(err.to_string())
                }
                auth::AuthenticationError::JwtError(err) => AccountError::Signing(err.to_string()),
            })?;

        Ok(AccessToken {
            access_token: result.access_token,
        })
    }

    async fn profile(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError> {
        self.repository.find_by_email(email, false).await
    }
}
