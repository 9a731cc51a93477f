use thiserror::Error;

/// Rejected input for a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown chai type {0:?} (expected one of: ml, gr, ki, pt, eh)")]
    UnknownChaiType(String),
    #[error("name must not be empty")]
    EmptyName,
    #[error("name is longer than {max} characters")]
    NameTooLong { max: usize },
    #[error("image path is longer than {max} characters")]
    ImagePathTooLong { max: usize },
    #[error("image path must not be empty")]
    EmptyImage,
    #[error("image path {0:?} must be relative and stay inside the upload directory")]
    InvalidImagePath(String),
}

/// Errors surfaced by startup and the command-line entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("failed to connect to SQLite: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("failed to load templates: {0}")]
    Template(#[from] tera::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
