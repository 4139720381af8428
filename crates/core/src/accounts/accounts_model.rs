//! Account domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::onboarding::{BillingCycle, PlanTier};

/// A customer account.
///
/// `onboarding_completed` is the signal the rest of the application (route
/// guards in particular) uses to stop redirecting the user into the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub onboarding_completed: bool,
    pub onboarding_completed_at: Option<NaiveDateTime>,
    pub plan_tier: Option<PlanTier>,
    pub billing_cycle: Option<BillingCycle>,
    /// Customer reference issued by the payment provider.
    pub customer_ref: Option<String>,
    /// Subscription reference issued by the payment provider.
    pub subscription_ref: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Generated by the storage layer when absent.
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}
