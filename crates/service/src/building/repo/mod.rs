pub mod seaorm;

pub use seaorm::SeaOrmBuildingRepository;
