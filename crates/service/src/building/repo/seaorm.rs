use std::future::Future;

use async_trait::async_trait;
use migration::{CreateBuilding, MigrationTrait, SchemaManager};
use models::entity::building;
use models::{Building, BuildingFilters, BuildingInfo};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, QueryResult};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::building::query::{build_get_all_query, build_insert_query};
use crate::building::repository::BuildingRepository;
use crate::errors::RepositoryError;

/// Postgres repository over a shared sea-orm connection pool.
pub struct SeaOrmBuildingRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmBuildingRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Close the underlying pool.
    pub async fn close(self) -> Result<(), RepositoryError> {
        self.db.close().await.map_err(RepositoryError::from)
    }
}

/// Race a storage round-trip against cancellation; the losing query future is dropped.
async fn cancellable<T, F>(ctx: &CancellationToken, fut: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    tokio::select! {
        biased;
        _ = ctx.cancelled() => Err(RepositoryError::Cancelled),
        res = fut => res.map_err(RepositoryError::from),
    }
}

fn decode_row(row: &QueryResult) -> Result<Building, RepositoryError> {
    let model = building::Model::from_query_result(row, "")
        .map_err(|e| RepositoryError::Decode(e.to_string()))?;
    Building::try_from(model).map_err(RepositoryError::Decode)
}

#[async_trait]
impl BuildingRepository for SeaOrmBuildingRepository {
    #[instrument(skip_all)]
    async fn init(&self, ctx: &CancellationToken) -> Result<(), RepositoryError> {
        let manager = SchemaManager::new(&self.db);
        cancellable(ctx, CreateBuilding.up(&manager)).await?;
        info!("building table and indexes ready");
        Ok(())
    }

    #[instrument(skip_all, fields(city = %info.city()))]
    async fn insert(&self, ctx: &CancellationToken, info: &BuildingInfo) -> Result<Building, RepositoryError> {
        let stmt = build_insert_query(info)?.into_statement();
        let row = cancellable(ctx, self.db.query_one(stmt))
            .await?
            .ok_or_else(|| RepositoryError::Db("insert returned no id".into()))?;
        let id: i64 = row
            .try_get("", "id")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?;
        debug!(id, "building inserted");
        Ok(Building::new(id, info.clone()))
    }

    #[instrument(skip_all, fields(filters = ?filters))]
    async fn get_all(&self, ctx: &CancellationToken, filters: &BuildingFilters) -> Result<Vec<Building>, RepositoryError> {
        let query = build_get_all_query(filters)?;
        debug!(sql = %query.sql, args = query.args.len(), "get_all query built");
        let rows = cancellable(ctx, self.db.query_all(query.into_statement())).await?;
        rows.iter().map(decode_row).collect()
    }
}
