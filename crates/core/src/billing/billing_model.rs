//! Billing domain models at the payment-provider boundary.

use serde::{Deserialize, Serialize};

use crate::onboarding::{BillingCycle, PlanTier};

/// Result of verifying a checkout session with the payment provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutVerification {
    /// Whether the session has actually been paid. A session can exist and
    /// still be open or expired; only a paid one finalizes onboarding.
    pub paid: bool,
    pub plan_tier: PlanTier,
    pub billing_cycle: BillingCycle,
    /// Customer reference issued by the payment provider.
    pub customer_ref: String,
    /// Subscription reference issued by the payment provider.
    pub subscription_ref: String,
}
