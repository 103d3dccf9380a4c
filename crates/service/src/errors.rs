use models::BuildingFilters;
use sea_orm::DbErr;
use thiserror::Error;

/// Storage failures raised by a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Db(String),
    #[error("failed to decode building row: {0}")]
    Decode(String),
    #[error("{column} value {value} exceeds the storable range")]
    OutOfRange { column: &'static str, value: u64 },
    #[error("operation cancelled")]
    Cancelled,
}

impl From<DbErr> for RepositoryError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}

/// Repository failures annotated with the operation that hit them.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to init repository: {source}")]
    Init { source: RepositoryError },
    #[error("failed to insert building to the repository: {source}")]
    Create { source: RepositoryError },
    #[error("failed to get all buildings with filters {filters:?}: {source}")]
    GetAll { filters: BuildingFilters, source: RepositoryError },
}

impl ServiceError {
    /// The underlying storage failure.
    pub fn repository_error(&self) -> &RepositoryError {
        match self {
            ServiceError::Init { source }
            | ServiceError::Create { source }
            | ServiceError::GetAll { source, .. } => source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.repository_error(), RepositoryError::Cancelled)
    }
}
