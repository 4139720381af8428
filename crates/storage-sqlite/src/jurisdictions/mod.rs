pub mod model;
pub mod repository;

pub use model::AccountJurisdictionDB;
pub use repository::JurisdictionRepository;
