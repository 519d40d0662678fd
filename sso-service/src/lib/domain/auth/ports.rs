use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::HashError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Operation;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::models::SessionToken;
use crate::domain::auth::models::Subject;
use crate::domain::auth::models::TokenTtl;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for auth domain service operations.
///
/// Inputs are assumed to be validated by the calling transport: non-empty
/// email and password, non-zero app id, positive user id.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `email` - Email to register (unique)
    /// * `password` - Plaintext password, hashed before anything is stored
    ///
    /// # Returns
    /// Store-assigned user ID
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, email: &str, password: Password) -> Result<UserId, AuthError>;

    /// Verify credentials and issue a session token for an application.
    ///
    /// # Arguments
    /// * `email` - Registered email
    /// * `password` - Plaintext password
    /// * `app_id` - Application the session is for
    ///
    /// # Returns
    /// Session token signed with the application's secret
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `InvalidAppId` - No application with this ID
    /// * `Internal` - Storage, verification or signing failed
    async fn login(
        &self,
        email: &str,
        password: Password,
        app_id: AppId,
    ) -> Result<SessionToken, AuthError>;

    /// Check whether a user holds the admin privilege.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this ID
    /// * `Internal` - Storage failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persistence capability for users and applications.
///
/// Each method is a single atomic store operation.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Database` - Storage operation failed
    async fn insert_user(
        &self,
        email: &str,
        password_hash: &PasswordHash,
    ) -> Result<UserId, StorageError>;

    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `Database` - Storage operation failed
    async fn find_user_by_email(&self, email: &str) -> Result<User, StorageError>;

    /// # Errors
    /// * `UserNotFound` - No user with this ID
    /// * `Database` - Storage operation failed
    async fn find_admin_flag(&self, user_id: UserId) -> Result<bool, StorageError>;

    /// # Errors
    /// * `AppNotFound` - No application with this ID
    /// * `Database` - Storage operation failed
    async fn find_app(&self, app_id: AppId) -> Result<App, StorageError>;
}

/// One-way salted password hashing with constant-time verification.
pub trait PasswordHasher: Send + Sync + 'static {
    fn hash(&self, password: &Password) -> Result<PasswordHash, HashError>;

    /// Returns `Ok(false)` on mismatch; `Err` only when verification cannot run.
    fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, HashError>;
}

/// Issues session tokens bound to one application's secret.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Build a token for `user` valid for `app` until now + `ttl`.
    fn issue(&self, user: &User, app: &App, ttl: TokenTtl) -> Result<SessionToken, TokenError>;
}

/// Observability collaborator for the auth service.
///
/// Invoked at operation start, when a failure is classified into a domain
/// error, and on success. Implementations must not block.
pub trait AuthObserver: Send + Sync + 'static {
    fn operation_started(&self, operation: Operation, subject: Subject<'_>);

    /// `cause` is the original failure tagged with the operation name, absent
    /// when the domain error has no underlying failure (password mismatch).
    fn error_classified(
        &self,
        operation: Operation,
        subject: Subject<'_>,
        error: AuthError,
        cause: Option<&anyhow::Error>,
    );

    fn operation_succeeded(&self, operation: Operation, subject: Subject<'_>);
}
