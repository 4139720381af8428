//! Repository implementation for the knowledge base.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::knowledge_entries;

use super::model::KnowledgeEntryDB;
use lexwatch_core::errors::Result;
use lexwatch_core::knowledge::{KnowledgeEntry, KnowledgeRepositoryTrait, NewKnowledgeEntry};

pub struct KnowledgeRepository {
    pool: Arc<DbPool>,
}

impl KnowledgeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        KnowledgeRepository { pool }
    }
}

#[async_trait]
impl KnowledgeRepositoryTrait for KnowledgeRepository {
    async fn upsert(&self, entry: NewKnowledgeEntry) -> Result<KnowledgeEntry> {
        let row = KnowledgeEntryDB {
            id: Uuid::new_v4().to_string(),
            account_id: entry.account_id,
            description: entry.description,
            ai_summary: entry.ai_summary,
            source: entry.source,
            confidence: entry.confidence,
            created_at: Utc::now().naive_utc(),
        };

        let mut conn = get_connection(&self.pool)?;

        // The (account_id, source) unique index makes a retried
        // finalization overwrite its previous seed rather than duplicate it.
        diesel::insert_into(knowledge_entries::table)
            .values(&row)
            .on_conflict((
                knowledge_entries::account_id,
                knowledge_entries::source,
            ))
            .do_update()
            .set((
                knowledge_entries::description.eq(row.description.clone()),
                knowledge_entries::ai_summary.eq(row.ai_summary.clone()),
                knowledge_entries::confidence.eq(row.confidence),
            ))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        let stored = knowledge_entries::table
            .filter(knowledge_entries::account_id.eq(&row.account_id))
            .filter(knowledge_entries::source.eq(&row.source))
            .first::<KnowledgeEntryDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(stored.into())
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<KnowledgeEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = knowledge_entries::table
            .filter(knowledge_entries::account_id.eq(account_id))
            .order(knowledge_entries::created_at.desc())
            .load::<KnowledgeEntryDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(KnowledgeEntry::from).collect())
    }
}
