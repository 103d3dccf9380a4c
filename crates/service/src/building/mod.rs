//! Building catalog: domain values come from `models`, everything that talks
//! to storage lives here.

pub mod query;
pub mod repo;
pub mod repository;
pub mod service;

pub use repository::BuildingRepository;
pub use service::BuildingService;
