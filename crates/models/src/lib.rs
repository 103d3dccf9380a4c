//! Domain values of the building catalog, the filters used to
//! select them, and the storage entity rows are decoded into.

pub mod building;
pub mod db;
pub mod entity;
pub mod filters;

pub use building::{Building, BuildingInfo};
pub use filters::BuildingFilters;

#[cfg(test)]
mod tests;
