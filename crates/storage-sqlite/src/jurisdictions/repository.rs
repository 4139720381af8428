//! Repository implementation for account jurisdictions.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::account_jurisdictions;

use super::model::AccountJurisdictionDB;
use lexwatch_core::errors::Result;
use lexwatch_core::jurisdictions::{
    AccountJurisdiction, JurisdictionRepositoryTrait, NewAccountJurisdiction,
};

pub struct JurisdictionRepository {
    pool: Arc<DbPool>,
}

impl JurisdictionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        JurisdictionRepository { pool }
    }
}

#[async_trait]
impl JurisdictionRepositoryTrait for JurisdictionRepository {
    async fn upsert(&self, jurisdiction: NewAccountJurisdiction) -> Result<AccountJurisdiction> {
        let row = AccountJurisdictionDB {
            account_id: jurisdiction.account_id,
            country_code: jurisdiction.country_code,
            waitlisted: jurisdiction.waitlisted,
            created_at: Utc::now().naive_utc(),
        };

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(account_jurisdictions::table)
            .values(&row)
            .on_conflict((
                account_jurisdictions::account_id,
                account_jurisdictions::country_code,
            ))
            .do_update()
            .set(account_jurisdictions::waitlisted.eq(row.waitlisted))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        let stored = account_jurisdictions::table
            .find((&row.account_id, &row.country_code))
            .first::<AccountJurisdictionDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(stored.into())
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<AccountJurisdiction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = account_jurisdictions::table
            .filter(account_jurisdictions::account_id.eq(account_id))
            .order(account_jurisdictions::country_code.asc())
            .load::<AccountJurisdictionDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(AccountJurisdiction::from).collect())
    }
}
