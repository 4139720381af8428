//! Database models for topic subscriptions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lexwatch_core::topics::TopicSubscription;

/// Database model for an account's topic subscription.
#[derive(
    Queryable, Identifiable, AsChangeset, Insertable, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::topic_subscriptions)]
#[diesel(primary_key(account_id, topic_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TopicSubscriptionDB {
    pub account_id: String,
    pub topic_id: String,
    pub title: String,
    pub ambit: String,
    pub priority: i32,
    pub created_at: NaiveDateTime,
}

impl From<TopicSubscriptionDB> for TopicSubscription {
    fn from(db: TopicSubscriptionDB) -> Self {
        TopicSubscription {
            account_id: db.account_id,
            topic_id: db.topic_id,
            title: db.title,
            ambit: db.ambit,
            priority: db.priority,
            created_at: db.created_at,
        }
    }
}
