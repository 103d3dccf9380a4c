//! Create `building` table and its lookup indexes.
use sea_orm_migration::prelude::*;

pub const CITY_INDEX: &str = "building_city_index";
pub const HANDOVER_YEAR_INDEX: &str = "building_handover_year_index";
pub const FLOORS_COUNT_INDEX: &str = "building_floors_count_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Building::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Building::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Building::Name).text().not_null())
                    .col(ColumnDef::new(Building::City).text().not_null())
                    .col(
                        ColumnDef::new(Building::HandoverYear)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Building::HandoverYear).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Building::FloorsCount)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Building::FloorsCount).gte(0)),
                    )
                    .to_owned(),
            )
            .await?;

        // City is only ever compared for equality
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(CITY_INDEX)
                    .table(Building::Table)
                    .col(Building::City)
                    .index_type(IndexType::Hash)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(HANDOVER_YEAR_INDEX)
                    .table(Building::Table)
                    .col(Building::HandoverYear)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(FLOORS_COUNT_INDEX)
                    .table(Building::Table)
                    .col(Building::FloorsCount)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [FLOORS_COUNT_INDEX, HANDOVER_YEAR_INDEX, CITY_INDEX] {
            manager
                .drop_index(Index::drop().if_exists().name(name).table(Building::Table).to_owned())
                .await?;
        }
        manager
            .drop_table(Table::drop().table(Building::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Building { Table, Id, Name, City, HandoverYear, FloorsCount }
