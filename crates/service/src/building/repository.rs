use async_trait::async_trait;
use models::{Building, BuildingFilters, BuildingInfo};
use tokio_util::sync::CancellationToken;

use crate::errors::RepositoryError;

/// Storage abstraction for buildings.
///
/// Every call takes a cancellation token; a cancelled call returns
/// `RepositoryError::Cancelled` instead of waiting for storage.
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    /// Create the table and its indexes if they do not exist yet.
    async fn init(&self, ctx: &CancellationToken) -> Result<(), RepositoryError>;

    /// Store `info` as a new row and return it with the generated id.
    async fn insert(&self, ctx: &CancellationToken, info: &BuildingInfo) -> Result<Building, RepositoryError>;

    /// Rows matching every set predicate of `filters`, in storage order.
    async fn get_all(&self, ctx: &CancellationToken, filters: &BuildingFilters) -> Result<Vec<Building>, RepositoryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct State {
        rows: Vec<Building>,
        last_id: i64,
        initialized: bool,
        unavailable: bool,
    }

    #[derive(Default)]
    pub struct MockBuildingRepository {
        state: Mutex<State>,
    }

    impl MockBuildingRepository {
        pub fn new() -> Self { Self::default() }

        /// While set, every call fails as if the connection was lost.
        pub fn set_unavailable(&self, unavailable: bool) {
            self.state.lock().unwrap().unavailable = unavailable;
        }

        pub fn is_initialized(&self) -> bool {
            self.state.lock().unwrap().initialized
        }

        pub fn len(&self) -> usize {
            self.state.lock().unwrap().rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn check(&self, ctx: &CancellationToken) -> Result<std::sync::MutexGuard<'_, State>, RepositoryError> {
            if ctx.is_cancelled() {
                return Err(RepositoryError::Cancelled);
            }
            let state = self.state.lock().unwrap();
            if state.unavailable {
                return Err(RepositoryError::Db("connection closed".into()));
            }
            Ok(state)
        }
    }

    #[async_trait]
    impl BuildingRepository for MockBuildingRepository {
        async fn init(&self, ctx: &CancellationToken) -> Result<(), RepositoryError> {
            let mut state = self.check(ctx)?;
            state.initialized = true;
            Ok(())
        }

        async fn insert(&self, ctx: &CancellationToken, info: &BuildingInfo) -> Result<Building, RepositoryError> {
            crate::building::query::to_bigint("handover_year", info.handover_year())?;
            crate::building::query::to_bigint("floors_count", info.floors_count())?;
            let mut state = self.check(ctx)?;
            state.last_id += 1;
            let building = Building::new(state.last_id, info.clone());
            state.rows.push(building.clone());
            Ok(building)
        }

        async fn get_all(&self, ctx: &CancellationToken, filters: &BuildingFilters) -> Result<Vec<Building>, RepositoryError> {
            let state = self.check(ctx)?;
            Ok(state.rows.iter().filter(|b| filters.matches(b.info())).cloned().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockBuildingRepository;
    use super::*;

    #[tokio::test]
    async fn insert_assigns_fresh_positive_ids() {
        let repo = MockBuildingRepository::new();
        let ctx = CancellationToken::new();
        let a = repo.insert(&ctx, &BuildingInfo::new("A", "Berlin", 2025, 12)).await.unwrap();
        let b = repo.insert(&ctx, &BuildingInfo::new("A", "Berlin", 2025, 12)).await.unwrap();
        assert!(a.id() > 0);
        assert_ne!(a.id(), b.id());
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn get_all_returns_conjunction() {
        let repo = MockBuildingRepository::new();
        let ctx = CancellationToken::new();
        let tower = repo.insert(&ctx, &BuildingInfo::new("Tower A", "Berlin", 2025, 12)).await.unwrap();
        repo.insert(&ctx, &BuildingInfo::new("Loft", "Berlin", 2024, 12)).await.unwrap();
        repo.insert(&ctx, &BuildingInfo::new("Annex", "Paris", 2025, 12)).await.unwrap();

        let all = repo.get_all(&ctx, &BuildingFilters::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let f = BuildingFilters::new(Some("Berlin".into()), Some(2025), None);
        assert_eq!(repo.get_all(&ctx, &f).await.unwrap(), vec![tower]);

        let f = BuildingFilters::default().with_floors_count(12);
        assert_eq!(repo.get_all(&ctx, &f).await.unwrap().len(), 3);

        let f = BuildingFilters::default().with_city("Rome");
        assert!(repo.get_all(&ctx, &f).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancelled_context_fails_fast() {
        let repo = MockBuildingRepository::new();
        let ctx = CancellationToken::new();
        ctx.cancel();
        let err = repo.insert(&ctx, &BuildingInfo::new("A", "B", 1, 1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Cancelled));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn unavailable_store_keeps_no_partial_row() {
        let repo = MockBuildingRepository::new();
        let ctx = CancellationToken::new();
        repo.set_unavailable(true);
        let err = repo.insert(&ctx, &BuildingInfo::new("A", "B", 1, 1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Db(_)));
        repo.set_unavailable(false);
        assert!(repo.get_all(&ctx, &BuildingFilters::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_is_repeatable() {
        let repo = MockBuildingRepository::new();
        let ctx = CancellationToken::new();
        repo.init(&ctx).await.unwrap();
        repo.init(&ctx).await.unwrap();
        assert!(repo.is_initialized());
    }
}
