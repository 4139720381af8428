//! Persistence for the in-progress onboarding draft.
//!
//! The draft lives as one JSON value in the `app_settings` key-value table
//! under a fixed, versioned key. Reads shallow-merge over defaults (the
//! draft shape uses `#[serde(default)]`), so snapshots written by an older
//! release stay loadable; a snapshot that fails to parse heals to the
//! default draft instead of surfacing an error.

use async_trait::async_trait;
use diesel::prelude::*;
use log::warn;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::app_settings::dsl::*;
use lexwatch_core::constants::ONBOARDING_DRAFT_KEY;
use lexwatch_core::errors::Result;
use lexwatch_core::onboarding::{DraftStoreTrait, OnboardingDraft};

use super::model::AppSettingDB;

pub struct DraftRepository {
    pool: Arc<DbPool>,
}

impl DraftRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        DraftRepository { pool }
    }

    fn load_snapshot(&self) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(app_settings
            .filter(setting_key.eq(ONBOARDING_DRAFT_KEY))
            .select(setting_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?)
    }
}

#[async_trait]
impl DraftStoreTrait for DraftRepository {
    fn load(&self) -> OnboardingDraft {
        let snapshot = match self.load_snapshot() {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to read onboarding draft, starting fresh: {}", e);
                return OnboardingDraft::default();
            }
        };

        match snapshot {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("Persisted onboarding draft is malformed, starting fresh: {}", e);
                OnboardingDraft::default()
            }),
            None => OnboardingDraft::default(),
        }
    }

    async fn save(&self, draft: &OnboardingDraft) -> Result<()> {
        let json = serde_json::to_string(draft)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_settings)
            .values(AppSettingDB {
                setting_key: ONBOARDING_DRAFT_KEY.to_string(),
                setting_value: json,
            })
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(app_settings.filter(setting_key.eq(ONBOARDING_DRAFT_KEY)))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }
}
