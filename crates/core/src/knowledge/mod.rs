pub mod knowledge_model;
pub mod knowledge_traits;

pub use knowledge_model::*;
pub use knowledge_traits::KnowledgeRepositoryTrait;
