//! Authentication utilities library
//!
//! Provides the credential primitives used by the SSO service:
//! - Password hashing (Argon2id, fixed cost parameters)
//! - Session token claims and HS256 JWT encoding/decoding
//! - Session issuance and verification keyed by application secret
//!
//! The service defines its own capability traits and adapts these
//! implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash(b"my_password").unwrap();
//! let is_valid = hasher.verify(b"my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{SessionClaims, SessionTokens};
//! use chrono::Duration;
//!
//! let app_secret = b"app_secret_key_at_least_32_bytes_long!";
//! let claims = SessionClaims::new(1, "a@x.com", 7, Duration::hours(1)).unwrap();
//!
//! let token = SessionTokens::new().issue(&claims, app_secret).unwrap();
//! let decoded = SessionTokens::new().verify(&token, app_secret).unwrap();
//! assert_eq!(decoded.uid, 1);
//! assert_eq!(decoded.app_id, 7);
//! ```

pub mod jwt;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::SessionTokens;
