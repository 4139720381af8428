//! Repository traits for the knowledge base.

use async_trait::async_trait;

use super::knowledge_model::{KnowledgeEntry, NewKnowledgeEntry};
use crate::errors::Result;

/// Trait defining the contract for knowledge-base repository operations.
#[async_trait]
pub trait KnowledgeRepositoryTrait: Send + Sync {
    /// Upsert an entry under its (account, source) natural key, so a
    /// retried finalization overwrites its previous seed instead of
    /// duplicating it.
    async fn upsert(&self, entry: NewKnowledgeEntry) -> Result<KnowledgeEntry>;

    fn list_for_account(&self, account_id: &str) -> Result<Vec<KnowledgeEntry>>;
}
