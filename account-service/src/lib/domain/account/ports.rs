use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::AccessToken;
use crate::account::models::Account;
use crate::account::models::EmailAddress;
use crate::account::models::SignInCommand;
use crate::account::models::SignUpCommand;

/// Port for the authentication service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account and issue a bearer token for it.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - email is already registered (whether
    ///   caught by the pre-check or by the store's unique constraint)
    /// * `Hashing` / `Signing` / `Database` - internal failure
    async fn sign_up(&self, command: SignUpCommand) -> Result<AccessToken, AccountError>;

    /// Authenticate an existing account and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown email or wrong password, one
    ///   indistinguishable error for both
    /// * `Hashing` / `Signing` / `Database` - internal failure
    async fn sign_in(&self, command: SignInCommand) -> Result<AccessToken, AccountError>;

    /// Fetch an account by email, password excluded.
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn profile(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// The store owns the account records and the email uniqueness
/// guarantee; the service only orchestrates calls against it.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Retrieve an account by email.
    ///
    /// Lookup is lowercase-normalized at the store boundary. When
    /// `include_password` is false the returned account's
    /// `password_hash` is `None`, never a placeholder.
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn find_by_email(
        &self,
        email: &EmailAddress,
        include_password: bool,
    ) -> Result<Option<Account>, AccountError>;

    /// Persist a new account.
    ///
    /// The store's unique constraint on email is the source of truth
    /// for uniqueness: a concurrent insert of the same email fails here
    /// regardless of any earlier existence check.
    ///
    /// # Errors
    /// * `DuplicateEmail` - email is already registered
    /// * `Database` - store operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;
}
