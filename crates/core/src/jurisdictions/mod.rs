pub mod jurisdiction_model;
pub mod jurisdiction_traits;

pub use jurisdiction_model::*;
pub use jurisdiction_traits::JurisdictionRepositoryTrait;
