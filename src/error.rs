//! Error types for the calculator service.

/// Errors raised while validating or evaluating an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Operands are missing, non-numeric, or the wrong count for the operation.
    #[error("Invalid operands")]
    InvalidOperands,

    /// The divisor of a division is zero.
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

/// Database errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),
}

impl From<deadpool_postgres::PoolError> for DatabaseError {
    fn from(e: deadpool_postgres::PoolError) -> Self {
        DatabaseError::Pool(e.to_string())
    }
}

impl From<tokio_postgres::Error> for DatabaseError {
    fn from(e: tokio_postgres::Error) -> Self {
        DatabaseError::Query(e.to_string())
    }
}

impl From<refinery::Error> for DatabaseError {
    fn from(e: refinery::Error) -> Self {
        DatabaseError::Migration(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type for evaluator operations.
pub type Result<T> = std::result::Result<T, EvalError>;
