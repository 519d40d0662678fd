use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SessionClaims;

/// Session token issuance and verification keyed by application secret.
///
/// Every token is signed with the secret of the application named in its
/// `app_id` claim. Knowing one application's secret gives no ability to forge
/// or verify tokens for another application.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionTokens;

impl SessionTokens {
    pub fn new() -> Self {
        Self
    }

    /// Sign session claims with an application secret.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    /// * `app_secret` - Signing secret of the application in `claims.app_id`
    ///
    /// # Returns
    /// Compact JWS string
    ///
    /// # Errors
    /// * `EmptySecret` - The application has no signing material
    /// * `EncodingFailed` - Token generation failed
    pub fn issue(&self, claims: &SessionClaims, app_secret: &[u8]) -> Result<String, JwtError> {
        if app_secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        JwtHandler::new(app_secret).encode(claims)
    }

    /// Verify signature and expiry of a session token.
    ///
    /// # Arguments
    /// * `token` - Compact JWS string
    /// * `app_secret` - Signing secret of the application the token claims to be for
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiry
    /// * `InvalidToken` - Token was signed with a different secret
    /// * `DecodingFailed` - Token is malformed
    pub fn verify(&self, token: &str, app_secret: &[u8]) -> Result<SessionClaims, JwtError> {
        if app_secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        JwtHandler::new(app_secret).decode(token)
    }
}
