//! One-shot finalization of a completed onboarding.
//!
//! Runs when the user reaches the terminal wizard step with a checkout
//! reference in hand: verify the payment, then perform the ordered
//! account-setup writes, and only then clear the draft. There is no per-step
//! compensation; every write is a natural-key upsert, so the documented
//! recovery path for a partial failure is to retry the whole sequence.

use std::sync::Arc;

use chrono::Utc;
use log::{error, info, warn};

use crate::accounts::AccountRepositoryTrait;
use crate::billing::PaymentVerifierTrait;
use crate::constants::{KNOWLEDGE_SEED_CONFIDENCE, KNOWLEDGE_SOURCE_ONBOARDING};
use crate::errors::{Error, Result};
use crate::jurisdictions::{JurisdictionRepositoryTrait, NewAccountJurisdiction};
use crate::knowledge::{KnowledgeRepositoryTrait, NewKnowledgeEntry};
use crate::onboarding::{
    FinalizationResult, OnboardingDraft, OnboardingError, OnboardingSessionTrait,
};
use crate::topics::{NewTopicSubscription, TopicSubscriptionRepositoryTrait};

pub struct CompletionService {
    payment_verifier: Arc<dyn PaymentVerifierTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    jurisdiction_repository: Arc<dyn JurisdictionRepositoryTrait>,
    topic_repository: Arc<dyn TopicSubscriptionRepositoryTrait>,
    knowledge_repository: Arc<dyn KnowledgeRepositoryTrait>,
}

impl CompletionService {
    pub fn new(
        payment_verifier: Arc<dyn PaymentVerifierTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        jurisdiction_repository: Arc<dyn JurisdictionRepositoryTrait>,
        topic_repository: Arc<dyn TopicSubscriptionRepositoryTrait>,
        knowledge_repository: Arc<dyn KnowledgeRepositoryTrait>,
    ) -> Self {
        CompletionService {
            payment_verifier,
            account_repository,
            jurisdiction_repository,
            topic_repository,
            knowledge_repository,
        }
    }

    /// Finalize onboarding for `account_id`.
    ///
    /// Sequential, each step gated on the previous:
    /// 1. verify the checkout reference (absent reference short-circuits
    ///    without contacting the verifier),
    /// 2. mark the account complete with the verified tier/cycle/references,
    /// 3. upsert the selected jurisdiction (and waitlisted countries),
    /// 4. upsert one subscription per selected topic,
    /// 5. upsert the knowledge-base seed when the draft carries one,
    /// 6. reset the session, wiping the draft from storage.
    ///
    /// On a verification failure nothing has been written. On a finalization
    /// failure the draft is deliberately left in place so the whole sequence
    /// can be retried; every write tolerates re-running.
    pub async fn complete_onboarding(
        &self,
        session: &dyn OnboardingSessionTrait,
        account_id: &str,
        checkout_ref: Option<&str>,
    ) -> Result<FinalizationResult> {
        let checkout_ref = match checkout_ref {
            Some(r) if !r.is_empty() => r,
            _ => {
                warn!("Completion reached without a checkout reference");
                return Err(OnboardingError::MissingCheckoutReference.into());
            }
        };

        let verification = match self.payment_verifier.verify_checkout(checkout_ref).await {
            Ok(v) if v.paid => v,
            Ok(_) => {
                warn!("Checkout session {} is not paid", checkout_ref);
                return Err(OnboardingError::PaymentVerificationFailed(format!(
                    "checkout session {} is not paid",
                    checkout_ref
                ))
                .into());
            }
            Err(e) => {
                error!("Checkout verification failed for {}: {}", checkout_ref, e);
                return Err(OnboardingError::PaymentVerificationFailed(e.to_string()).into());
            }
        };

        let draft = session.draft();
        let finalization = FinalizationResult {
            plan_tier: verification.plan_tier,
            billing_cycle: verification.billing_cycle,
            customer_ref: verification.customer_ref,
            subscription_ref: verification.subscription_ref,
            completed_at: Utc::now().naive_utc(),
        };

        self.finalize_account(session, account_id, &draft, &finalization)
            .await
            .map_err(|e| {
                error!("Account setup failed for {}: {}", account_id, e);
                Error::from(OnboardingError::FinalizationFailed(e.to_string()))
            })
            .map(|_| {
                info!(
                    "Onboarding completed for {} on the {} plan",
                    account_id,
                    finalization.plan_tier.as_str()
                );
                finalization.clone()
            })
    }

    async fn finalize_account(
        &self,
        session: &dyn OnboardingSessionTrait,
        account_id: &str,
        draft: &OnboardingDraft,
        finalization: &FinalizationResult,
    ) -> Result<()> {
        self.account_repository
            .mark_onboarding_complete(account_id, finalization)
            .await?;

        if !draft.primary_country.is_empty() {
            self.jurisdiction_repository
                .upsert(NewAccountJurisdiction {
                    account_id: account_id.to_string(),
                    country_code: draft.primary_country.clone(),
                    waitlisted: false,
                })
                .await?;
        }
        for country in &draft.waitlisted_countries {
            self.jurisdiction_repository
                .upsert(NewAccountJurisdiction {
                    account_id: account_id.to_string(),
                    country_code: country.clone(),
                    waitlisted: true,
                })
                .await?;
        }

        for topic in draft.selected_topics.iter().filter(|t| t.selected) {
            self.topic_repository
                .upsert(NewTopicSubscription {
                    account_id: account_id.to_string(),
                    topic_id: topic.id.clone(),
                    title: topic.title.clone(),
                    ambit: topic.ambit.clone(),
                    priority: topic.relevance.priority(),
                })
                .await?;
        }

        if draft.has_knowledge_seed() {
            self.knowledge_repository
                .upsert(NewKnowledgeEntry {
                    account_id: account_id.to_string(),
                    description: draft.description.clone(),
                    ai_summary: draft.ai_summary.clone(),
                    source: KNOWLEDGE_SOURCE_ONBOARDING.to_string(),
                    confidence: KNOWLEDGE_SEED_CONFIDENCE,
                })
                .await?;
        }

        // Only after every write above succeeded: wipe the draft.
        session.reset().await
    }
}
