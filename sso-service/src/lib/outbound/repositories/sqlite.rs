use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::AppSecret;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::CredentialStore;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pass_hash: Vec<u8>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId(row.id),
            email: row.email,
            password_hash: PasswordHash::from_bytes(row.pass_hash),
        }
    }
}

#[derive(FromRow)]
struct AppRow {
    id: i32,
    name: String,
    secret: Vec<u8>,
}

impl From<AppRow> for App {
    fn from(row: AppRow) -> Self {
        App {
            id: AppId(row.id),
            name: row.name,
            secret: AppSecret::from_bytes(row.secret),
        }
    }
}

/// SQLite-backed credential store.
///
/// Uniqueness of `users.email` is enforced by the schema, so concurrent
/// registrations of the same email resolve to exactly one row.
#[derive(Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file at `url`.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(database_error)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(database_error)?;

        Ok(Self::new(pool))
    }

    /// Private in-memory database, migrated and ready to use.
    ///
    /// Pinned to a single connection that is never recycled, since every
    /// SQLite connection to `:memory:` opens its own empty database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(database_error)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(database_error)?;

        let store = Self::new(pool);
        store.migrate().await?;

        Ok(store)
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Database(e.to_string()))
    }

    /// Insert or replace a registered application.
    ///
    /// Names are unique, so an app renumbered under the same name replaces
    /// the row registered under its old id.
    pub async fn upsert_app(&self, app: &App) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query("DELETE FROM apps WHERE name = ?1 AND id <> ?2")
            .bind(&app.name)
            .bind(app.id.0)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        sqlx::query(
            r#"
            INSERT INTO apps (id, name, secret)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET name = excluded.name, secret = excluded.secret
            "#,
        )
        .bind(app.id.0)
        .bind(&app.name)
        .bind(app.secret.as_bytes())
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(())
    }

    /// Grant or revoke the admin privilege.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this ID
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE users SET is_admin = ?1 WHERE id = ?2")
            .bind(is_admin)
            .bind(user_id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::UserNotFound);
        }

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn insert_user(
        &self,
        email: &str,
        password_hash: &PasswordHash,
    ) -> Result<UserId, StorageError> {
        let result = sqlx::query("INSERT INTO users (email, pass_hash) VALUES (?1, ?2)")
            .bind(email)
            .bind(password_hash.as_bytes())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return StorageError::UserExists;
                }
                database_error(e)
            })?;

        Ok(UserId(result.last_insert_rowid()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<User, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, pass_hash
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(User::from).ok_or(StorageError::UserNotFound)
    }

    async fn find_admin_flag(&self, user_id: UserId) -> Result<bool, StorageError> {
        let is_admin: Option<bool> = sqlx::query_scalar("SELECT is_admin FROM users WHERE id = ?1")
            .bind(user_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        is_admin.ok_or(StorageError::UserNotFound)
    }

    async fn find_app(&self, app_id: AppId) -> Result<App, StorageError> {
        let row = sqlx::query_as::<_, AppRow>(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = ?1
            "#,
        )
        .bind(app_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(App::from).ok_or(StorageError::AppNotFound)
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

fn database_error(error: sqlx::Error) -> StorageError {
    StorageError::Database(error.to_string())
}
