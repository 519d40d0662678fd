use auth::SessionClaims;
use auth::SessionTokens;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::SessionToken;
use crate::domain::auth::models::TokenTtl;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::TokenIssuer;

/// HS256 session token issuer keyed by the target application's secret.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtTokenIssuer {
    tokens: SessionTokens,
}

impl JwtTokenIssuer {
    pub fn new() -> Self {
        Self {
            tokens: SessionTokens::new(),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User, app: &App, ttl: TokenTtl) -> Result<SessionToken, TokenError> {
        let ttl = chrono::Duration::from_std(ttl.as_duration())
            .map_err(|e| TokenError::InvalidTtl(e.to_string()))?;

        let claims = SessionClaims::new(user.id.0, user.email.as_str(), app.id.0, ttl)
            .map_err(|e| TokenError::InvalidTtl(e.to_string()))?;

        self.tokens
            .issue(&claims, app.secret.as_bytes())
            .map(SessionToken::new)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}
