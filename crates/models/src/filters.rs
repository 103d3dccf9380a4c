use serde::{Deserialize, Serialize};

use crate::BuildingInfo;

/// Optional exact-match predicates selecting a subset of buildings.
///
/// `None` places no constraint on the attribute; `Some(0)` is a real constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingFilters {
    pub city: Option<String>,
    pub handover_year: Option<u64>,
    pub floors_count: Option<u64>,
}

impl BuildingFilters {
    pub fn new(city: Option<String>, handover_year: Option<u64>, floors_count: Option<u64>) -> Self {
        Self { city, handover_year, floors_count }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_handover_year(mut self, year: u64) -> Self {
        self.handover_year = Some(year);
        self
    }

    pub fn with_floors_count(mut self, count: u64) -> Self {
        self.floors_count = Some(count);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.handover_year.is_none() && self.floors_count.is_none()
    }

    /// True when `info` satisfies every set predicate.
    pub fn matches(&self, info: &BuildingInfo) -> bool {
        self.city.as_deref().map_or(true, |c| c == info.city())
            && self.handover_year.map_or(true, |y| y == info.handover_year())
            && self.floors_count.map_or(true, |f| f == info.floors_count())
    }
}
