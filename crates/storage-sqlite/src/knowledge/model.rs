//! Database models for knowledge-base entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lexwatch_core::knowledge::KnowledgeEntry;

/// Database model for a knowledge-base entry.
#[derive(
    Queryable, Identifiable, AsChangeset, Insertable, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::knowledge_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntryDB {
    pub id: String,
    pub account_id: String,
    pub description: String,
    pub ai_summary: String,
    pub source: String,
    pub confidence: f64,
    pub created_at: NaiveDateTime,
}

impl From<KnowledgeEntryDB> for KnowledgeEntry {
    fn from(db: KnowledgeEntryDB) -> Self {
        KnowledgeEntry {
            id: db.id,
            account_id: db.account_id,
            description: db.description,
            ai_summary: db.ai_summary,
            source: db.source,
            confidence: db.confidence,
            created_at: db.created_at,
        }
    }
}
