use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AccountName;
use crate::account::models::EmailAddress;
use crate::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    name: String,
    password_hash: Option<String>,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, AccountError> {
        Ok(Account {
            id: AccountId(self.id),
            email: EmailAddress::new(self.email)?,
            name: AccountName::new(self.name)?,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
        include_password: bool,
    ) -> Result<Option<Account>, AccountError> {
        // lower() on both sides: the store boundary owns case
        // normalization even if a caller bypassed EmailAddress.
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM accounts
            WHERE lower(email) = lower($1)
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        match row {
            Some(mut r) => {
                if !include_password {
                    r.password_hash = None;
                }
                r.into_account().map(Some)
            }
            None => Ok(None),
        }
    }

    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let password_hash = account
            .password_hash
            .as_deref()
            .ok_or_else(|| AccountError::Unknown("cannot store account without a hash".into()))?;

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, name, password_hash, created_at)
            VALUES ($1, lower($2), $3, $4, $5)
            "#,
        )
        .bind(account.id.0)
        .bind(account.email.as_str())
        .bind(account.name.as_str())
        .bind(password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("accounts_email_key")
                {
                    return AccountError::DuplicateEmail(account.email.to_string());
                }
            }
            AccountError::Database(e.to_string())
        })?;

        Ok(account)
    }
}
