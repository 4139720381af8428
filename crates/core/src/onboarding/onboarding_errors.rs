//! Onboarding failure taxonomy.

use thiserror::Error;

/// User-visible failures of the onboarding completion workflow.
///
/// These are deliberately coarse: partial-failure recovery is handled by
/// retrying the whole finalization sequence, not by step-level rollback, so
/// callers only ever need to distinguish "route back to plan selection" from
/// "show a retryable setup error".
#[derive(Error, Debug)]
pub enum OnboardingError {
    /// Completion step reached without a checkout-session reference.
    /// The caller routes the user back to plan selection; the verifier is
    /// never contacted.
    #[error("No checkout session reference present")]
    MissingCheckoutReference,

    /// The payment verifier rejected or errored on the session reference.
    /// No account-setup writes have occurred.
    #[error("Payment verification failed: {0}")]
    PaymentVerificationFailed(String),

    /// One of the account-setup writes failed after verification. The draft
    /// is preserved so the full sequence can be retried.
    #[error("Account setup failed: {0}")]
    FinalizationFailed(String),
}
