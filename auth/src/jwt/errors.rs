use thiserror::Error;

/// Error type for JWT operations.
///
/// Validation failures all collapse into `InvalidToken`: callers must
/// not be able to tell a bad signature from an expired or malformed
/// token.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid or expired")]
    InvalidToken,
}
