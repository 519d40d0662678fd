use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claims carried by a session token.
///
/// Binds one user to one application until `exp`. The token is signed with the
/// application's secret, so the `app_id` claim is only meaningful together with
/// a successful signature check against that same secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// User identifier
    pub uid: i64,

    /// User email at issue time
    pub email: String,

    /// Application the token was minted for
    pub app_id: i32,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl SessionClaims {
    /// Create claims expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `user_id` - Store-assigned user identifier
    /// * `email` - User email
    /// * `app_id` - Target application identifier
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with `iat` set to now and `exp` to now + ttl
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - now + ttl is not a representable timestamp
    pub fn new(
        user_id: i64,
        email: impl Into<String>,
        app_id: i32,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        Self::issued_at(Utc::now(), user_id, email, app_id, ttl)
    }

    /// Create claims as if issued at `now`.
    pub fn issued_at(
        now: DateTime<Utc>,
        user_id: i64,
        email: impl Into<String>,
        app_id: i32,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let exp = now
            .checked_add_signed(ttl)
            .ok_or(JwtError::ExpiryOutOfRange)?;

        Ok(Self {
            uid: user_id,
            email: email.into(),
            app_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}
