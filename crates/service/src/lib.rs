//! Service layer of the building catalog.
//! - `building::repository` is the storage abstraction, with a Postgres
//!   implementation in `building::repo::seaorm` and an in-memory mock.
//! - `building::query` composes the filtered listing statement.
//! - `building::service` is the only entry point used by the transport.

pub mod building;
pub mod errors;
#[cfg(test)]
pub mod test_support;

pub use building::{BuildingRepository, BuildingService};
pub use errors::{RepositoryError, ServiceError};
pub use tokio_util::sync::CancellationToken;
