//! Application-wide constants.

/// Versioned storage key for the persisted onboarding draft.
///
/// The version suffix is bumped whenever the draft shape changes in a way
/// the forward-compatible merge cannot absorb. Snapshots written under an
/// older key are simply ignored.
pub const ONBOARDING_DRAFT_KEY: &str = "onboarding_draft_v3";

/// Source tag recorded on knowledge-base entries seeded from onboarding.
pub const KNOWLEDGE_SOURCE_ONBOARDING: &str = "onboarding";

/// Confidence score assigned to knowledge-base seeds.
///
/// Onboarding seeds carry unverified AI output, so they never enter the
/// knowledge base at full confidence.
pub const KNOWLEDGE_SEED_CONFIDENCE: f64 = 0.7;

/// Subscription priority for topics recommended with high relevance.
pub const TOPIC_PRIORITY_HIGH: i32 = 1;

/// Subscription priority for every other relevance tier.
pub const TOPIC_PRIORITY_NORMAL: i32 = 2;
