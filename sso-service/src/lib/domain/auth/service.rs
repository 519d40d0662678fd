use std::sync::Arc;
use std::sync::OnceLock;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Operation;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::models::SessionToken;
use crate::domain::auth::models::Subject;
use crate::domain::auth::models::TokenTtl;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthObserver;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::ports::TokenIssuer;

/// Domain service implementation for auth operations.
///
/// Holds only long-lived handles and the token lifetime, all read-only after
/// construction, so a single instance serves any number of concurrent requests.
/// The only lazily filled state is the decoy hash used for unknown emails.
pub struct AuthService<CS, PH, TI, AO>
where
    CS: CredentialStore,
    PH: PasswordHasher,
    TI: TokenIssuer,
    AO: AuthObserver,
{
    store: Arc<CS>,
    hasher: Arc<PH>,
    issuer: Arc<TI>,
    observer: Arc<AO>,
    token_ttl: TokenTtl,
    decoy_hash: OnceLock<PasswordHash>,
}

/// Hashed once, then verified against whenever Login sees an unknown email.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-users";

impl<CS, PH, TI, AO> AuthService<CS, PH, TI, AO>
where
    CS: CredentialStore,
    PH: PasswordHasher,
    TI: TokenIssuer,
    AO: AuthObserver,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `hasher` - Password hashing implementation
    /// * `issuer` - Session token issuing implementation
    /// * `observer` - Receives operation events
    /// * `token_ttl` - Lifetime of issued session tokens
    pub fn new(
        store: Arc<CS>,
        hasher: Arc<PH>,
        issuer: Arc<TI>,
        observer: Arc<AO>,
        token_ttl: TokenTtl,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
            observer,
            token_ttl,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Spend the same verification work on an unknown email as on a known one.
    ///
    /// The outcome is discarded; the caller always answers `InvalidCredentials`.
    fn verify_decoy(&self, password: &Password) {
        let decoy = match self.decoy_hash.get() {
            Some(hash) => hash,
            None => match self.hasher.hash(&Password::new(DECOY_PASSWORD.to_string())) {
                Ok(hash) => self.decoy_hash.get_or_init(|| hash),
                Err(_) => return,
            },
        };

        let _ = self.hasher.verify(password, decoy);
    }

    /// Tag `cause` with the operation, report it, and return `kind`.
    fn classify<E>(
        &self,
        operation: Operation,
        subject: Subject<'_>,
        kind: AuthError,
        cause: E,
    ) -> AuthError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let cause = anyhow::Error::new(cause).context(operation.as_str());
        self.observer
            .error_classified(operation, subject, kind, Some(&cause));
        kind
    }
}

#[async_trait]
impl<CS, PH, TI, AO> AuthServicePort for AuthService<CS, PH, TI, AO>
where
    CS: CredentialStore,
    PH: PasswordHasher,
    TI: TokenIssuer,
    AO: AuthObserver,
{
    async fn register(&self, email: &str, password: Password) -> Result<UserId, AuthError> {
        let operation = Operation::Register;
        let subject = Subject::Email(email);
        self.observer.operation_started(operation, subject);

        // A hashing failure must never reach the store.
        let password_hash = self
            .hasher
            .hash(&password)
            .map_err(|e| self.classify(operation, subject, AuthError::Internal, e))?;
        drop(password);

        let user_id = self
            .store
            .insert_user(email, &password_hash)
            .await
            .map_err(|e| {
                let kind = match e {
                    StorageError::UserExists => AuthError::UserAlreadyExists,
                    _ => AuthError::Internal,
                };
                self.classify(operation, subject, kind, e)
            })?;

        self.observer.operation_succeeded(operation, subject);
        Ok(user_id)
    }

    async fn login(
        &self,
        email: &str,
        password: Password,
        app_id: AppId,
    ) -> Result<SessionToken, AuthError> {
        let operation = Operation::Login;
        let subject = Subject::Email(email);
        self.observer.operation_started(operation, subject);

        let user = self.store.find_user_by_email(email).await.map_err(|e| {
            let kind = match e {
                StorageError::UserNotFound => {
                    self.verify_decoy(&password);
                    AuthError::InvalidCredentials
                }
                _ => AuthError::Internal,
            };
            self.classify(operation, subject, kind, e)
        })?;

        let matches = self
            .hasher
            .verify(&password, &user.password_hash)
            .map_err(|e| self.classify(operation, subject, AuthError::Internal, e))?;
        drop(password);

        if !matches {
            self.observer
                .error_classified(operation, subject, AuthError::InvalidCredentials, None);
            return Err(AuthError::InvalidCredentials);
        }

        let app = self.store.find_app(app_id).await.map_err(|e| {
            let kind = match e {
                StorageError::AppNotFound => AuthError::InvalidAppId,
                _ => AuthError::Internal,
            };
            self.classify(operation, subject, kind, e)
        })?;

        let token = self
            .issuer
            .issue(&user, &app, self.token_ttl)
            .map_err(|e| self.classify(operation, subject, AuthError::Internal, e))?;

        self.observer.operation_succeeded(operation, subject);
        Ok(token)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        let operation = Operation::IsAdmin;
        let subject = Subject::User(user_id);
        self.observer.operation_started(operation, subject);

        let is_admin = self.store.find_admin_flag(user_id).await.map_err(|e| {
            let kind = match e {
                StorageError::UserNotFound => AuthError::UserNotFound,
                _ => AuthError::Internal,
            };
            self.classify(operation, subject, kind, e)
        })?;

        self.observer.operation_succeeded(operation, subject);
        Ok(is_admin)
    }
}
