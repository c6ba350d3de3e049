//! Shared error types for the services crate.

use thiserror::Error;

use plan_core::model::ContentError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ChecklistService`.
///
/// Reads never fail (missing or malformed records degrade to unchecked);
/// only a failed write is reported.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChecklistServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
