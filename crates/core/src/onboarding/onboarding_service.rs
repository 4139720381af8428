//! The onboarding session service.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::onboarding::steps::{resolve_step, WizardStep};
use crate::onboarding::{DraftStoreTrait, DraftUpdate, OnboardingDraft, OnboardingSessionTrait};

struct SessionState {
    current_step: WizardStep,
    draft: OnboardingDraft,
}

/// In-memory state machine for the onboarding wizard.
///
/// The session reacts to navigation; it never initiates it. The current step
/// is recomputed from the path on every `navigate` call rather than kept as
/// independent mutable state, which keeps wizard position and URL from ever
/// disagreeing after back/forward navigation. Every draft mutation is
/// persisted write-through via the injected store.
pub struct OnboardingService {
    draft_store: Arc<dyn DraftStoreTrait>,
    state: RwLock<SessionState>,
}

impl OnboardingService {
    /// Creates a session, loading any persisted draft (or defaults) and
    /// starting at step 1.
    pub fn new(draft_store: Arc<dyn DraftStoreTrait>) -> Self {
        let draft = draft_store.load();
        OnboardingService {
            draft_store,
            state: RwLock::new(SessionState {
                current_step: WizardStep::default(),
                draft,
            }),
        }
    }
}

#[async_trait]
impl OnboardingSessionTrait for OnboardingService {
    fn current_step(&self) -> WizardStep {
        self.state.read().expect("session state lock poisoned").current_step
    }

    fn draft(&self) -> OnboardingDraft {
        self.state.read().expect("session state lock poisoned").draft.clone()
    }

    fn navigate(&self, path: &str) -> WizardStep {
        let step = resolve_step(path);
        let mut state = self.state.write().expect("session state lock poisoned");
        if state.current_step != step {
            debug!(
                "Onboarding step {} -> {} ({})",
                state.current_step.step_number(),
                step.step_number(),
                path
            );
        }
        state.current_step = step;
        step
    }

    async fn update_draft(&self, update: DraftUpdate) -> Result<OnboardingDraft> {
        // Merge against a snapshot so the lock is not held across the save.
        // Concurrent writers are last-write-wins, same as the persisted key.
        let mut draft = self.draft();
        update.apply_to(&mut draft);

        self.draft_store.save(&draft).await?;

        let mut state = self.state.write().expect("session state lock poisoned");
        state.draft = draft.clone();
        Ok(draft)
    }

    async fn reset(&self) -> Result<()> {
        self.draft_store.clear().await?;

        let mut state = self.state.write().expect("session state lock poisoned");
        state.current_step = WizardStep::default();
        state.draft = OnboardingDraft::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory draft store; `None` models an absent snapshot.
    struct MemoryDraftStore {
        stored: Mutex<Option<String>>,
    }

    impl MemoryDraftStore {
        fn new() -> Self {
            MemoryDraftStore {
                stored: Mutex::new(None),
            }
        }

        fn with_snapshot(json: &str) -> Self {
            MemoryDraftStore {
                stored: Mutex::new(Some(json.to_string())),
            }
        }
    }

    #[async_trait]
    impl DraftStoreTrait for MemoryDraftStore {
        fn load(&self) -> OnboardingDraft {
            self.stored
                .lock()
                .unwrap()
                .as_deref()
                .and_then(|json| serde_json::from_str(json).ok())
                .unwrap_or_default()
        }

        async fn save(&self, draft: &OnboardingDraft) -> Result<()> {
            *self.stored.lock().unwrap() = Some(serde_json::to_string(draft).unwrap());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    #[test]
    fn fresh_session_starts_at_step_one_with_default_draft() {
        let session = OnboardingService::new(Arc::new(MemoryDraftStore::new()));
        assert_eq!(session.current_step(), WizardStep::Welcome);
        assert_eq!(session.draft(), OnboardingDraft::default());
    }

    #[test]
    fn session_restores_persisted_draft_on_mount() {
        let store = MemoryDraftStore::with_snapshot(r#"{"fullName":"Ada Lovelace","email":"ada@example.com"}"#);
        let session = OnboardingService::new(Arc::new(store));
        let draft = session.draft();
        assert_eq!(draft.full_name, "Ada Lovelace");
        assert_eq!(draft.email, "ada@example.com");
        // Untouched fields stay at their defaults.
        assert_eq!(draft.primary_country, "");
    }

    #[test]
    fn corrupted_snapshot_heals_to_defaults() {
        let store = MemoryDraftStore::with_snapshot("{not json");
        let session = OnboardingService::new(Arc::new(store));
        assert_eq!(session.draft(), OnboardingDraft::default());
    }

    #[test]
    fn navigation_drives_current_step() {
        let session = OnboardingService::new(Arc::new(MemoryDraftStore::new()));
        assert_eq!(session.navigate("/onboarding/step-4"), WizardStep::Country);
        assert_eq!(session.current_step(), WizardStep::Country);
        // Legacy alias
        assert_eq!(session.navigate("/onboarding/confirm"), WizardStep::Plan);
        // Unknown path falls back to step 1
        assert_eq!(session.navigate("/pricing"), WizardStep::Welcome);
    }

    #[tokio::test]
    async fn update_draft_merges_and_persists() {
        let store = Arc::new(MemoryDraftStore::new());
        let session = OnboardingService::new(store.clone());

        session
            .update_draft(DraftUpdate {
                full_name: Some("Grace Hopper".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let updated = session
            .update_draft(DraftUpdate {
                primary_country: Some("DE".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        // Earlier fields survive later partial updates.
        assert_eq!(updated.full_name, "Grace Hopper");
        assert_eq!(updated.primary_country, "DE");

        // Write-through: the store sees the merged draft, not just the delta.
        let persisted = store.load();
        assert_eq!(persisted, updated);
    }

    #[tokio::test]
    async fn reset_returns_to_step_one_and_clears_storage() {
        let store = Arc::new(MemoryDraftStore::new());
        let session = OnboardingService::new(store.clone());

        session.navigate("/onboarding/step-7");
        session
            .update_draft(DraftUpdate {
                email: Some("someone@example.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        session.reset().await.unwrap();

        assert_eq!(session.current_step(), WizardStep::Welcome);
        assert_eq!(session.draft(), OnboardingDraft::default());
        assert!(store.stored.lock().unwrap().is_none());
    }
}
