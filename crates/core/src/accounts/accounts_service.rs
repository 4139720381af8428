//! Service for managing accounts.

use async_trait::async_trait;
use std::sync::Arc;

use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

pub struct AccountService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    pub fn new(account_repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        AccountService { account_repository }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        self.account_repository.create(new_account).await
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.account_repository.get_by_id(account_id)
    }

    /// Route-guard query: once true, the application stops redirecting this
    /// account into the wizard.
    fn is_onboarding_completed(&self, account_id: &str) -> Result<bool> {
        Ok(self.account_repository.get_by_id(account_id)?.onboarding_completed)
    }
}
