//! Onboarding domain models.
//!
//! The draft is the accumulated answer set of the signup wizard. It is a
//! total value: every field has a default, so a partially filled draft never
//! needs null-checks beyond the documented nullable `ai_analysis`. The
//! container carries `#[serde(default)]` so snapshots written by an older
//! release (missing newer fields) still deserialize - missing fields simply
//! take their defaults.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{TOPIC_PRIORITY_HIGH, TOPIC_PRIORITY_NORMAL};

/// Relevance classification of a recommended topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    High,
    #[default]
    Medium,
    Low,
}

impl RelevanceTier {
    /// Subscription priority derived from the tier: high-relevance topics
    /// are monitored at priority 1, everything else at priority 2.
    pub fn priority(&self) -> i32 {
        match self {
            RelevanceTier::High => TOPIC_PRIORITY_HIGH,
            _ => TOPIC_PRIORITY_NORMAL,
        }
    }
}

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Starter,
    Professional,
    Business,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Starter => "starter",
            PlanTier::Professional => "professional",
            PlanTier::Business => "business",
        }
    }

    pub fn parse(s: &str) -> Option<PlanTier> {
        match s {
            "starter" => Some(PlanTier::Starter),
            "professional" => Some(PlanTier::Professional),
            "business" => Some(PlanTier::Business),
            _ => None,
        }
    }
}

/// Billing cycle for the selected plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<BillingCycle> {
        match s {
            "monthly" => Some(BillingCycle::Monthly),
            "yearly" => Some(BillingCycle::Yearly),
            _ => None,
        }
    }
}

/// A regulatory topic recommended to the user during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicRecommendation {
    pub id: String,
    pub title: String,
    /// Regulatory/subject-matter category the topic belongs to.
    pub ambit: String,
    pub relevance: RelevanceTier,
    pub rationale: String,
    pub selected: bool,
}

/// AI-produced company analysis, stored verbatim on the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AiAnalysis {
    pub summary: String,
    pub suggested_sector: String,
    pub suggested_size: String,
    pub suggested_topics: Vec<String>,
}

/// The in-progress, not-yet-finalized onboarding answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingDraft {
    // Identity (step 1)
    pub full_name: String,
    pub email: String,
    pub interface_language: String,
    pub content_language: String,

    // Fast-track profile (step 2)
    pub website_url: String,
    pub description: String,

    // Company profile (step 3)
    pub company_name: String,
    pub company_size: String,
    pub sector: String,
    pub company_website: String,
    pub ai_summary: String,
    pub ai_analysis: Option<AiAnalysis>,

    // Jurisdiction (step 4)
    pub primary_country: String,
    pub waitlisted_countries: Vec<String>,

    // Topics (step 5)
    pub selected_topics: Vec<TopicRecommendation>,

    // Plan (step 7)
    pub plan_tier: PlanTier,
    pub billing_cycle: BillingCycle,
    pub addons: Vec<String>,

    // Deprecated draft-v2 fields. Old persisted snapshots still carry them,
    // so they stay on the shape to keep those snapshots loadable.
    pub method: String,
    pub business_description: String,
    pub domains: Vec<String>,
    pub countries: Vec<String>,
}

impl OnboardingDraft {
    /// Whether the draft carries anything worth seeding the knowledge base
    /// with after finalization.
    pub fn has_knowledge_seed(&self) -> bool {
        !self.description.is_empty() || !self.ai_summary.is_empty()
    }
}

/// Partial update for the onboarding draft.
///
/// Each wizard step submits only the fields it owns; `apply_to` overwrites
/// exactly the fields that are `Some`. No validation happens here - each
/// step's form validates before submitting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub interface_language: Option<String>,
    pub content_language: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub company_name: Option<String>,
    pub company_size: Option<String>,
    pub sector: Option<String>,
    pub company_website: Option<String>,
    pub ai_summary: Option<String>,
    pub ai_analysis: Option<Option<AiAnalysis>>,
    pub primary_country: Option<String>,
    pub waitlisted_countries: Option<Vec<String>>,
    pub selected_topics: Option<Vec<TopicRecommendation>>,
    pub plan_tier: Option<PlanTier>,
    pub billing_cycle: Option<BillingCycle>,
    pub addons: Option<Vec<String>>,
    pub method: Option<String>,
    pub business_description: Option<String>,
    pub domains: Option<Vec<String>>,
    pub countries: Option<Vec<String>>,
}

impl DraftUpdate {
    /// Shallow-merge this partial into `draft`.
    pub fn apply_to(self, draft: &mut OnboardingDraft) {
        if let Some(v) = self.full_name {
            draft.full_name = v;
        }
        if let Some(v) = self.email {
            draft.email = v;
        }
        if let Some(v) = self.interface_language {
            draft.interface_language = v;
        }
        if let Some(v) = self.content_language {
            draft.content_language = v;
        }
        if let Some(v) = self.website_url {
            draft.website_url = v;
        }
        if let Some(v) = self.description {
            draft.description = v;
        }
        if let Some(v) = self.company_name {
            draft.company_name = v;
        }
        if let Some(v) = self.company_size {
            draft.company_size = v;
        }
        if let Some(v) = self.sector {
            draft.sector = v;
        }
        if let Some(v) = self.company_website {
            draft.company_website = v;
        }
        if let Some(v) = self.ai_summary {
            draft.ai_summary = v;
        }
        if let Some(v) = self.ai_analysis {
            draft.ai_analysis = v;
        }
        if let Some(v) = self.primary_country {
            draft.primary_country = v;
        }
        if let Some(v) = self.waitlisted_countries {
            draft.waitlisted_countries = v;
        }
        if let Some(v) = self.selected_topics {
            draft.selected_topics = v;
        }
        if let Some(v) = self.plan_tier {
            draft.plan_tier = v;
        }
        if let Some(v) = self.billing_cycle {
            draft.billing_cycle = v;
        }
        if let Some(v) = self.addons {
            draft.addons = v;
        }
        if let Some(v) = self.method {
            draft.method = v;
        }
        if let Some(v) = self.business_description {
            draft.business_description = v;
        }
        if let Some(v) = self.domains {
            draft.domains = v;
        }
        if let Some(v) = self.countries {
            draft.countries = v;
        }
    }
}

/// Outcome of a successful finalization, used to update the account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizationResult {
    pub plan_tier: PlanTier,
    pub billing_cycle: BillingCycle,
    /// Customer reference issued by the payment provider.
    pub customer_ref: String,
    /// Subscription reference issued by the payment provider.
    pub subscription_ref: String,
    pub completed_at: NaiveDateTime,
}
