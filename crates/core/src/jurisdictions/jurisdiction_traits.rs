//! Repository traits for jurisdictions.

use async_trait::async_trait;

use super::jurisdiction_model::{AccountJurisdiction, NewAccountJurisdiction};
use crate::errors::Result;

/// Trait defining the contract for jurisdiction repository operations.
#[async_trait]
pub trait JurisdictionRepositoryTrait: Send + Sync {
    /// Upsert a country against an account. Safe to repeat under the same
    /// (account, country) key.
    async fn upsert(&self, jurisdiction: NewAccountJurisdiction) -> Result<AccountJurisdiction>;

    fn list_for_account(&self, account_id: &str) -> Result<Vec<AccountJurisdiction>>;
}
