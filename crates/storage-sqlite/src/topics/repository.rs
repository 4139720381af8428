//! Repository implementation for topic subscriptions.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::topic_subscriptions;

use super::model::TopicSubscriptionDB;
use lexwatch_core::errors::Result;
use lexwatch_core::topics::{
    NewTopicSubscription, TopicSubscription, TopicSubscriptionRepositoryTrait,
};

pub struct TopicSubscriptionRepository {
    pool: Arc<DbPool>,
}

impl TopicSubscriptionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        TopicSubscriptionRepository { pool }
    }
}

#[async_trait]
impl TopicSubscriptionRepositoryTrait for TopicSubscriptionRepository {
    async fn upsert(&self, subscription: NewTopicSubscription) -> Result<TopicSubscription> {
        let row = TopicSubscriptionDB {
            account_id: subscription.account_id,
            topic_id: subscription.topic_id,
            title: subscription.title,
            ambit: subscription.ambit,
            priority: subscription.priority,
            created_at: Utc::now().naive_utc(),
        };

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(topic_subscriptions::table)
            .values(&row)
            .on_conflict((
                topic_subscriptions::account_id,
                topic_subscriptions::topic_id,
            ))
            .do_update()
            .set((
                topic_subscriptions::title.eq(row.title.clone()),
                topic_subscriptions::ambit.eq(row.ambit.clone()),
                topic_subscriptions::priority.eq(row.priority),
            ))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        let stored = topic_subscriptions::table
            .find((&row.account_id, &row.topic_id))
            .first::<TopicSubscriptionDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(stored.into())
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<TopicSubscription>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = topic_subscriptions::table
            .filter(topic_subscriptions::account_id.eq(account_id))
            .order((
                topic_subscriptions::priority.asc(),
                topic_subscriptions::topic_id.asc(),
            ))
            .load::<TopicSubscriptionDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(TopicSubscription::from).collect())
    }
}
