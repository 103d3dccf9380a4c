use std::sync::Arc;

use models::{Building, BuildingFilters, BuildingInfo};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

use crate::building::repository::BuildingRepository;
use crate::errors::ServiceError;

/// Building operations exposed to the transport layer.
///
/// Adds no rules of its own: repository results pass through unchanged and
/// failures are wrapped with the operation that produced them.
pub struct BuildingService<R: BuildingRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: BuildingRepository + ?Sized> BuildingService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Prepare storage before serving. Safe to call on every start.
    #[instrument(skip_all)]
    pub async fn init(&self, ctx: &CancellationToken) -> Result<(), ServiceError> {
        self.repo.init(ctx).await.map_err(|source| {
            error!(error = %source, "repository init failed");
            ServiceError::Init { source }
        })
    }

    /// Store a new building.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::BuildingInfo;
    /// use service::building::{repository::mock::MockBuildingRepository, BuildingService};
    /// use service::CancellationToken;
    ///
    /// let svc = BuildingService::new(Arc::new(MockBuildingRepository::new()));
    /// let ctx = CancellationToken::new();
    /// let info = BuildingInfo::new("Tower A", "Berlin", 2025, 12);
    /// let b = tokio_test::block_on(svc.create(&ctx, &info)).unwrap();
    /// assert!(b.id() > 0);
    /// assert_eq!(b.info(), &info);
    /// ```
    #[instrument(skip_all, fields(name = %info.name(), city = %info.city()))]
    pub async fn create(&self, ctx: &CancellationToken, info: &BuildingInfo) -> Result<Building, ServiceError> {
        let building = self
            .repo
            .insert(ctx, info)
            .await
            .map_err(|source| ServiceError::Create { source })?;
        info!(id = building.id(), "building_created");
        Ok(building)
    }

    /// Buildings matching every set filter.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::{BuildingFilters, BuildingInfo};
    /// use service::building::{repository::mock::MockBuildingRepository, BuildingService};
    /// use service::CancellationToken;
    ///
    /// let svc = BuildingService::new(Arc::new(MockBuildingRepository::new()));
    /// let ctx = CancellationToken::new();
    /// tokio_test::block_on(svc.create(&ctx, &BuildingInfo::new("Tower A", "Berlin", 2025, 12))).unwrap();
    /// let paris = BuildingFilters::default().with_city("Paris");
    /// assert!(tokio_test::block_on(svc.get_all(&ctx, &paris)).unwrap().is_empty());
    /// ```
    #[instrument(skip_all, fields(filters = ?filters))]
    pub async fn get_all(&self, ctx: &CancellationToken, filters: &BuildingFilters) -> Result<Vec<Building>, ServiceError> {
        self.repo
            .get_all(ctx, filters)
            .await
            .map_err(|source| ServiceError::GetAll { filters: filters.clone(), source })
    }
}

impl<R: BuildingRepository + ?Sized> Clone for BuildingService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}
