//! Repository and service traits for accounts.

use async_trait::async_trait;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;
use crate::onboarding::FinalizationResult;

/// Trait defining the contract for Account repository operations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Mark the account's onboarding as completed, stamping the completion
    /// time and recording the verified tier, billing cycle, and
    /// customer/subscription references.
    ///
    /// Must be idempotent: re-running with the same finalization leaves the
    /// account in the same state.
    async fn mark_onboarding_complete(
        &self,
        account_id: &str,
        finalization: &FinalizationResult,
    ) -> Result<Account>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;
    fn get_account(&self, account_id: &str) -> Result<Account>;
    fn is_onboarding_completed(&self, account_id: &str) -> Result<bool>;
}
