use serde::{Deserialize, Serialize};

/// Attributes of a building, also used as the creation payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildingInfo {
    name: String,
    city: String,
    handover_year: u64,
    floors_count: u64,
}

impl BuildingInfo {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        handover_year: u64,
        floors_count: u64,
    ) -> Self {
        Self { name: name.into(), city: city.into(), handover_year, floors_count }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn city(&self) -> &str { &self.city }

    pub fn handover_year(&self) -> u64 { self.handover_year }

    pub fn floors_count(&self) -> u64 { self.floors_count }
}

/// A stored building. The id is assigned by storage on insert.
///
/// Serializes flat: `{"id", "name", "city", "handover_year", "floors_count"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Building {
    id: i64,
    #[serde(flatten)]
    info: BuildingInfo,
}

impl Building {
    pub fn new(id: i64, info: BuildingInfo) -> Self {
        Self { id, info }
    }

    pub fn id(&self) -> i64 { self.id }

    pub fn info(&self) -> &BuildingInfo { &self.info }
}
