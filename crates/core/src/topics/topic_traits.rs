//! Repository traits for topic subscriptions.

use async_trait::async_trait;

use super::topic_model::{NewTopicSubscription, TopicSubscription};
use crate::errors::Result;

/// Trait defining the contract for topic-subscription repository operations.
#[async_trait]
pub trait TopicSubscriptionRepositoryTrait: Send + Sync {
    /// Upsert a subscription. Safe to repeat under the same
    /// (account, topic) key; a re-run never produces a duplicate row.
    async fn upsert(&self, subscription: NewTopicSubscription) -> Result<TopicSubscription>;

    fn list_for_account(&self, account_id: &str) -> Result<Vec<TopicSubscription>>;
}
