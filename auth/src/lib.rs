//! Authentication building blocks for the account service:
//! - Password hashing (Argon2id)
//! - JWT issuance and validation (HS256)
//! - An `Authenticator` coordinating both
//!
//! The domain service owns the signup/signin orchestration; this crate
//! only knows about passwords, hashes, and tokens.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash the password for storage.
//! let hash = auth.hash_password("hunter2hunter2").unwrap();
//!
//! // Signin: verify and issue a token in one step.
//! let claims = Claims::for_account("account-1", "a@example.com", 3600);
//! let result = auth.authenticate("hunter2hunter2", &hash, &claims).unwrap();
//!
//! // Request authorization: validate the bearer token.
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "account-1");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
