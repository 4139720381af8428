//! Topic subscription domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An account's subscription to a regulatory topic.
///
/// Keyed by (account, topic); the same pair upserted twice is one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSubscription {
    pub account_id: String,
    pub topic_id: String,
    pub title: String,
    /// Regulatory/subject-matter category of the topic.
    pub ambit: String,
    /// 1 for high-relevance topics, 2 otherwise.
    pub priority: i32,
    pub created_at: NaiveDateTime,
}

/// Data for subscribing an account to a topic.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTopicSubscription {
    pub account_id: String,
    pub topic_id: String,
    pub title: String,
    pub ambit: String,
    pub priority: i32,
}
