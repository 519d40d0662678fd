use std::fmt;
use std::time::Duration;

use zeroize::Zeroizing;

use crate::domain::auth::errors::TokenTtlError;

/// Registered user as read from the credential store.
///
/// Request-scoped copy; the store owns the record.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: PasswordHash,
}

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Client application that sessions are issued for.
#[derive(Debug, Clone)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub secret: AppSecret,
}

/// Caller-supplied application identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password, zeroed on drop.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn new(password: String) -> Self {
        Self(Zeroizing::new(password))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Opaque password hash, zeroed on drop.
///
/// Only ever handed back to the hasher for verification.
#[derive(Clone)]
pub struct PasswordHash(Zeroizing<Vec<u8>>);

impl PasswordHash {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Application signing secret, zeroed on drop.
#[derive(Clone)]
pub struct AppSecret(Zeroizing<Vec<u8>>);

impl AppSecret {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(<redacted>)")
    }
}

/// Signed session token in compact serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Lifetime of issued session tokens. Never zero, never above [`TokenTtl::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTtl(Duration);

impl TokenTtl {
    /// Ten years.
    pub const MAX: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

    /// Create a token lifetime.
    ///
    /// # Errors
    /// * `Zero` - The duration is zero
    /// * `TooLong` - The duration exceeds [`TokenTtl::MAX`]
    pub fn new(ttl: Duration) -> Result<Self, TokenTtlError> {
        if ttl.is_zero() {
            return Err(TokenTtlError::Zero);
        }
        if ttl > Self::MAX {
            return Err(TokenTtlError::TooLong {
                max_seconds: Self::MAX.as_secs(),
            });
        }
        Ok(Self(ttl))
    }

    pub fn from_secs(seconds: u64) -> Result<Self, TokenTtlError> {
        Self::new(Duration::from_secs(seconds))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

/// Auth service operation, used to tag diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Login,
    IsAdmin,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Register => "auth.register",
            Operation::Login => "auth.login",
            Operation::IsAdmin => "auth.is_admin",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who an operation is about. Never carries secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject<'a> {
    Email(&'a str),
    User(UserId),
}

impl fmt::Display for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Email(email) => write!(f, "email:{}", email),
            Subject::User(user_id) => write!(f, "user_id:{}", user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ttl_rejects_zero() {
        assert_eq!(TokenTtl::from_secs(0), Err(TokenTtlError::Zero));
        assert_eq!(
            TokenTtl::from_secs(1).map(|ttl| ttl.as_duration()),
            Ok(Duration::from_secs(1))
        );
    }

    #[test]
    fn test_token_ttl_rejects_out_of_range() {
        assert_eq!(
            TokenTtl::new(TokenTtl::MAX).map(|ttl| ttl.as_duration()),
            Ok(TokenTtl::MAX)
        );
        assert_eq!(
            TokenTtl::new(TokenTtl::MAX + Duration::from_secs(1)),
            Err(TokenTtlError::TooLong {
                max_seconds: TokenTtl::MAX.as_secs()
            })
        );
        assert!(matches!(
            TokenTtl::from_secs(10_000_000_000_000),
            Err(TokenTtlError::TooLong { .. })
        ));
        assert!(matches!(
            TokenTtl::from_secs(u64::MAX),
            Err(TokenTtlError::TooLong { .. })
        ));
    }

    #[test]
    fn test_secrets_are_redacted_in_debug() {
        let password = Password::new("pw123".to_string());
        let hash = PasswordHash::from_bytes(b"$argon2id$v=19$secret".to_vec());
        let secret = AppSecret::from_bytes(b"app-secret".to_vec());

        assert!(!format!("{:?}", password).contains("pw123"));
        assert!(!format!("{:?}", hash).contains("argon2"));
        assert!(!format!("{:?}", secret).contains("app-secret"));
    }

    #[test]
    fn test_subject_display() {
        assert_eq!(Subject::Email("a@x.com").to_string(), "email:a@x.com");
        assert_eq!(Subject::User(UserId(1)).to_string(), "user_id:1");
    }
}
