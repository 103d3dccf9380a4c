//! Row shape of the `building` table.
use sea_orm::entity::prelude::*;

use crate::{Building, BuildingInfo};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "building")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub city: String,
    pub handover_year: i64,
    pub floors_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Building {
    type Error = String;

    fn try_from(row: Model) -> Result<Self, Self::Error> {
        let handover_year = u64::try_from(row.handover_year)
            .map_err(|_| format!("negative handover_year {} in row {}", row.handover_year, row.id))?;
        let floors_count = u64::try_from(row.floors_count)
            .map_err(|_| format!("negative floors_count {} in row {}", row.floors_count, row.id))?;
        Ok(Building::new(row.id, BuildingInfo::new(row.name, row.city, handover_year, floors_count)))
    }
}
