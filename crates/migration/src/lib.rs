//! Schema of the building catalog.
//!
//! Every statement is `IF NOT EXISTS`, so the migration can also be applied
//! directly through a `SchemaManager` on each start without the migrator's
//! bookkeeping table.
pub use sea_orm_migration::prelude::*;

pub mod m20240101_000001_create_building;

pub use m20240101_000001_create_building::Migration as CreateBuilding;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_building::Migration)]
    }
}
