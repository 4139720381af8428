//! Knowledge base domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A knowledge-base entry describing an account's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub id: String,
    pub account_id: String,
    /// Free-text business description entered by the user.
    pub description: String,
    /// AI-produced company summary, stored verbatim.
    pub ai_summary: String,
    /// Where the entry came from, e.g. "onboarding".
    pub source: String,
    /// 0.0..=1.0; entries seeded from unverified AI output never carry 1.0.
    pub confidence: f64,
    pub created_at: NaiveDateTime,
}

/// Data for creating a knowledge-base entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewKnowledgeEntry {
    pub account_id: String,
    pub description: String,
    pub ai_summary: String,
    pub source: String,
    pub confidence: f64,
}
