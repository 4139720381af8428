//! Traits at the payment-provider boundary.

use async_trait::async_trait;

use super::billing_model::CheckoutVerification;
use crate::errors::Result;

/// External payment verifier.
///
/// Implementations must be idempotent under repeated calls with the same
/// reference: verifying a checkout session reads its state, it never
/// re-charges.
#[async_trait]
pub trait PaymentVerifierTrait: Send + Sync {
    async fn verify_checkout(&self, checkout_ref: &str) -> Result<CheckoutVerification>;
}
