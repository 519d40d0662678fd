use thiserror::Error;

/// Error reported by credential store implementations.
///
/// Not-found and conflict outcomes are distinct variants so the service can
/// map them precisely; everything else is `Database`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("user already exists")]
    UserExists,

    #[error("user not found")]
    UserNotFound,

    #[error("app not found")]
    AppNotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Error for password hashing operations
#[derive(Debug, Clone, Error)]
pub enum HashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Error for session token issuance
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    #[error("Token lifetime out of range: {0}")]
    InvalidTtl(String),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TokenTtlError {
    #[error("token ttl must be greater than zero")]
    Zero,

    #[error("token ttl must not exceed {max_seconds} seconds")]
    TooLong { max_seconds: u64 },
}

/// Caller-facing outcome of an auth operation.
///
/// Deliberately coarse: `Internal` carries no detail about which step failed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid app id")]
    InvalidAppId,

    #[error("internal error")]
    Internal,
}
