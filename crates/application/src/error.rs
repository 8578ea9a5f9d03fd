use helpapp_core::error::CoreError;

/// Errors surfaced by services, handlers and the mediator.
///
/// Storage failures are carried unchanged so the transport layer can
/// classify them (constraint violations, connectivity) itself.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    /// A domain-level error from `helpapp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from a repository.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// `Mediator::send` was called for a request type with no handler.
    #[error("No handler registered for request {0}")]
    HandlerNotRegistered(&'static str),

    /// The caller's cancellation token fired before the handler completed.
    #[error("Request cancelled")]
    Cancelled,
}

/// Convenience type alias for application-layer results.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
