use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Operation;
use crate::domain::auth::models::Subject;
use crate::domain::auth::ports::AuthObserver;

/// Reports auth service activity as `tracing` events.
///
/// Internal failures are logged at error level with the full cause chain;
/// caller-facing outcomes (bad credentials, conflicts, unknown ids) at warn.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl AuthObserver for TracingObserver {
    fn operation_started(&self, operation: Operation, subject: Subject<'_>) {
        tracing::info!(op = %operation, subject = %subject, "operation started");
    }

    fn error_classified(
        &self,
        operation: Operation,
        subject: Subject<'_>,
        error: AuthError,
        cause: Option<&anyhow::Error>,
    ) {
        let cause = cause.map(|c| format!("{:#}", c));

        match error {
            AuthError::Internal => tracing::error!(
                op = %operation,
                subject = %subject,
                error = %error,
                cause = cause.as_deref().unwrap_or("none"),
                "operation failed"
            ),
            _ => tracing::warn!(
                op = %operation,
                subject = %subject,
                error = %error,
                cause = cause.as_deref().unwrap_or("none"),
                "operation rejected"
            ),
        }
    }

    fn operation_succeeded(&self, operation: Operation, subject: Subject<'_>) {
        tracing::info!(op = %operation, subject = %subject, "operation succeeded");
    }
}
