//! Repository implementation for accounts.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::accounts;

use super::model::AccountDB;
use lexwatch_core::accounts::{Account, AccountRepositoryTrait, NewAccount};
use lexwatch_core::errors::Result;
use lexwatch_core::onboarding::FinalizationResult;

pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AccountRepository { pool }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        let now = Utc::now().naive_utc();
        let account_db = AccountDB {
            id: new_account.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_account.name,
            email: new_account.email,
            onboarding_completed: false,
            onboarding_completed_at: None,
            plan_tier: None,
            billing_cycle: None,
            customer_ref: None,
            subscription_ref: None,
            created_at: now,
            updated_at: now,
        };

        let mut conn = get_connection(&self.pool)?;
        let result = diesel::insert_into(accounts::table)
            .values(&account_db)
            .returning(AccountDB::as_returning())
            .get_result(&mut conn)
            .map_err(StorageError::from)?;

        Ok(Account::from(result))
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;
        let account = accounts::table
            .select(AccountDB::as_select())
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(account.into())
    }

    async fn mark_onboarding_complete(
        &self,
        account_id: &str,
        finalization: &FinalizationResult,
    ) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        // Idempotent: re-running with the same finalization rewrites the
        // same values (only the updated_at stamp moves).
        diesel::update(accounts::table.find(account_id))
            .set((
                accounts::onboarding_completed.eq(true),
                accounts::onboarding_completed_at.eq(Some(finalization.completed_at)),
                accounts::plan_tier.eq(Some(finalization.plan_tier.as_str().to_string())),
                accounts::billing_cycle.eq(Some(finalization.billing_cycle.as_str().to_string())),
                accounts::customer_ref.eq(Some(finalization.customer_ref.clone())),
                accounts::subscription_ref.eq(Some(finalization.subscription_ref.clone())),
                accounts::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        let account = accounts::table
            .select(AccountDB::as_select())
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(account.into())
    }
}
