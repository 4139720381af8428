//! Database models for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lexwatch_core::accounts::Account;
use lexwatch_core::onboarding::{BillingCycle, PlanTier};

/// Database model for accounts.
#[derive(
    Queryable, Identifiable, AsChangeset, Insertable, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub onboarding_completed: bool,
    pub onboarding_completed_at: Option<NaiveDateTime>,
    pub plan_tier: Option<String>,
    pub billing_cycle: Option<String>,
    pub customer_ref: Option<String>,
    pub subscription_ref: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Account {
            id: db.id,
            name: db.name,
            email: db.email,
            onboarding_completed: db.onboarding_completed,
            onboarding_completed_at: db.onboarding_completed_at,
            plan_tier: db.plan_tier.as_deref().and_then(PlanTier::parse),
            billing_cycle: db.billing_cycle.as_deref().and_then(BillingCycle::parse),
            customer_ref: db.customer_ref,
            subscription_ref: db.subscription_ref,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
