//! Database models for account jurisdictions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lexwatch_core::jurisdictions::AccountJurisdiction;

/// Database model for an account's monitored country.
#[derive(
    Queryable, Identifiable, AsChangeset, Insertable, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::account_jurisdictions)]
#[diesel(primary_key(account_id, country_code))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountJurisdictionDB {
    pub account_id: String,
    pub country_code: String,
    pub waitlisted: bool,
    pub created_at: NaiveDateTime,
}

impl From<AccountJurisdictionDB> for AccountJurisdiction {
    fn from(db: AccountJurisdictionDB) -> Self {
        AccountJurisdiction {
            account_id: db.account_id,
            country_code: db.country_code,
            waitlisted: db.waitlisted,
            created_at: db.created_at,
        }
    }
}
