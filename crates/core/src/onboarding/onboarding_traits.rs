//! Traits for the onboarding flow.

use async_trait::async_trait;

use crate::errors::Result;
use crate::onboarding::{DraftUpdate, OnboardingDraft, WizardStep};

/// Durable store for the single in-progress onboarding draft.
///
/// Implementations persist one draft per installation under a fixed,
/// versioned key. Injected into the session service so tests can substitute
/// an in-memory store without touching step logic.
#[async_trait]
pub trait DraftStoreTrait: Send + Sync {
    /// Read the persisted snapshot.
    ///
    /// Infallible by contract: an absent or malformed snapshot yields the
    /// default draft. Corruption is self-healing and never surfaced.
    fn load(&self) -> OnboardingDraft;

    /// Serialize and write the full draft. Called on every draft mutation
    /// (write-through), so a crash never loses more than the most recent
    /// in-memory edit.
    async fn save(&self, draft: &OnboardingDraft) -> Result<()>;

    /// Remove the persisted snapshot entirely.
    async fn clear(&self) -> Result<()>;
}

/// The wizard session as seen by the completion workflow.
#[async_trait]
pub trait OnboardingSessionTrait: Send + Sync {
    /// Current wizard position, as last derived from the navigational path.
    fn current_step(&self) -> WizardStep;

    /// Snapshot of the current draft.
    fn draft(&self) -> OnboardingDraft;

    /// Recompute the step from a navigational path.
    fn navigate(&self, path: &str) -> WizardStep;

    /// Merge a partial update into the draft and persist it.
    async fn update_draft(&self, update: DraftUpdate) -> Result<OnboardingDraft>;

    /// Return to step 1 with a fresh default draft and clear storage.
    /// Callable from any state.
    async fn reset(&self) -> Result<()>;
}
