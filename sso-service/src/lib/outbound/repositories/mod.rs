pub mod sqlite;

pub use sqlite::SqliteCredentialStore;
