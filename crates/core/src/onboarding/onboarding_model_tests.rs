//! Tests for onboarding domain models, including draft forward-compatibility.

mod tests {
    use crate::onboarding::{
        AiAnalysis, BillingCycle, DraftUpdate, OnboardingDraft, PlanTier, RelevanceTier,
        TopicRecommendation,
    };

    // ==================== Serialization Tests ====================

    #[test]
    fn test_relevance_tier_serialization() {
        assert_eq!(serde_json::to_string(&RelevanceTier::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&RelevanceTier::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&RelevanceTier::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_plan_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&PlanTier::Professional).unwrap(), "\"professional\"");
        assert_eq!(serde_json::to_string(&BillingCycle::Yearly).unwrap(), "\"yearly\"");
    }

    #[test]
    fn test_relevance_priority_mapping() {
        assert_eq!(RelevanceTier::High.priority(), 1);
        assert_eq!(RelevanceTier::Medium.priority(), 2);
        assert_eq!(RelevanceTier::Low.priority(), 2);
    }

    // ==================== Draft Default Tests ====================

    #[test]
    fn test_default_draft_is_total() {
        let draft = OnboardingDraft::default();
        assert_eq!(draft.full_name, "");
        assert_eq!(draft.waitlisted_countries, Vec::<String>::new());
        assert_eq!(draft.selected_topics, Vec::<TopicRecommendation>::new());
        assert_eq!(draft.ai_analysis, None);
        assert_eq!(draft.plan_tier, PlanTier::Starter);
        assert_eq!(draft.billing_cycle, BillingCycle::Monthly);
        // Deprecated fields still default
        assert_eq!(draft.method, "");
        assert_eq!(draft.domains, Vec::<String>::new());
    }

    #[test]
    fn test_draft_round_trips_through_json() {
        let draft = OnboardingDraft {
            full_name: "Ada Lovelace".to_string(),
            primary_country: "FR".to_string(),
            ai_analysis: Some(AiAnalysis {
                summary: "Fintech startup".to_string(),
                suggested_sector: "finance".to_string(),
                suggested_size: "11-50".to_string(),
                suggested_topics: vec!["aml".to_string()],
            }),
            selected_topics: vec![TopicRecommendation {
                id: "t1".to_string(),
                title: "AML".to_string(),
                ambit: "finance".to_string(),
                relevance: RelevanceTier::High,
                rationale: "Handles payments".to_string(),
                selected: true,
            }],
            plan_tier: PlanTier::Business,
            billing_cycle: BillingCycle::Yearly,
            ..Default::default()
        };

        let json = serde_json::to_string(&draft).unwrap();
        let back: OnboardingDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }

    // ==================== Forward Compatibility Tests ====================

    #[test]
    fn test_old_snapshot_missing_new_fields_deserializes_with_defaults() {
        // A draft persisted before the plan step and waitlist fields existed.
        let old = r#"{
            "fullName": "Grace Hopper",
            "email": "grace@example.com",
            "method": "fast-track",
            "businessDescription": "Compiler consultancy",
            "domains": ["navy.example"],
            "countries": ["US"]
        }"#;

        let draft: OnboardingDraft = serde_json::from_str(old).unwrap();
        assert_eq!(draft.full_name, "Grace Hopper");
        assert_eq!(draft.method, "fast-track");
        assert_eq!(draft.business_description, "Compiler consultancy");
        assert_eq!(draft.countries, vec!["US".to_string()]);
        // Fields the old version never wrote come back at defaults.
        assert_eq!(draft.plan_tier, PlanTier::Starter);
        assert_eq!(draft.waitlisted_countries, Vec::<String>::new());
        assert_eq!(draft.selected_topics, Vec::<TopicRecommendation>::new());
    }

    #[test]
    fn test_topic_with_missing_fields_deserializes_with_defaults() {
        let topic: TopicRecommendation = serde_json::from_str(r#"{"id": "t9"}"#).unwrap();
        assert_eq!(topic.id, "t9");
        assert_eq!(topic.relevance, RelevanceTier::Medium);
        assert!(!topic.selected);
    }

    // ==================== DraftUpdate Tests ====================

    #[test]
    fn test_apply_to_overwrites_only_some_fields() {
        let mut draft = OnboardingDraft {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };

        DraftUpdate {
            email: Some("ada@lovelace.example".to_string()),
            primary_country: Some("GB".to_string()),
            ..Default::default()
        }
        .apply_to(&mut draft);

        assert_eq!(draft.full_name, "Ada");
        assert_eq!(draft.email, "ada@lovelace.example");
        assert_eq!(draft.primary_country, "GB");
    }

    #[test]
    fn test_apply_to_can_clear_nullable_analysis() {
        let mut draft = OnboardingDraft {
            ai_analysis: Some(AiAnalysis::default()),
            ..Default::default()
        };

        DraftUpdate {
            ai_analysis: Some(None),
            ..Default::default()
        }
        .apply_to(&mut draft);

        assert_eq!(draft.ai_analysis, None);
    }

    #[test]
    fn test_empty_update_is_a_no_op() {
        let mut draft = OnboardingDraft {
            company_name: "Acme".to_string(),
            ..Default::default()
        };
        let before = draft.clone();
        DraftUpdate::default().apply_to(&mut draft);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_has_knowledge_seed() {
        assert!(!OnboardingDraft::default().has_knowledge_seed());
        assert!(OnboardingDraft {
            description: "We ship widgets".to_string(),
            ..Default::default()
        }
        .has_knowledge_seed());
        assert!(OnboardingDraft {
            ai_summary: "Widget maker".to_string(),
            ..Default::default()
        }
        .has_knowledge_seed());
    }
}
