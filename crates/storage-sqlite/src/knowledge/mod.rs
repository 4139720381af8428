pub mod model;
pub mod repository;

pub use model::KnowledgeEntryDB;
pub use repository::KnowledgeRepository;
