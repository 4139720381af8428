//! Jurisdiction domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A country monitored for an account.
///
/// Keyed by (account, country); the same pair upserted twice is one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountJurisdiction {
    pub account_id: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// True for countries the user joined the waitlist for instead of
    /// selecting as their primary jurisdiction.
    pub waitlisted: bool,
    pub created_at: NaiveDateTime,
}

/// Data for recording a jurisdiction against an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountJurisdiction {
    pub account_id: String,
    pub country_code: String,
    pub waitlisted: bool,
}
