//! Wizard step derivation from the current navigational path.
//!
//! Step position is never stored on its own; it is always re-derived from
//! the path at mount and on every navigation event, so back/forward/refresh
//! can never disagree with the wizard's idea of where it is.

use serde::{Deserialize, Serialize};

/// A position in the fixed onboarding sequence.
///
/// Serializes as its step number (1..8); 8 is the terminal "complete" phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Welcome,
    Profile,
    Company,
    Country,
    Topics,
    Review,
    Plan,
    Complete,
}

impl WizardStep {
    /// The 1-based step number shown in the wizard chrome.
    pub fn step_number(&self) -> u8 {
        match self {
            WizardStep::Welcome => 1,
            WizardStep::Profile => 2,
            WizardStep::Company => 3,
            WizardStep::Country => 4,
            WizardStep::Topics => 5,
            WizardStep::Review => 6,
            WizardStep::Plan => 7,
            WizardStep::Complete => 8,
        }
    }

    pub fn from_step_number(n: u8) -> Option<WizardStep> {
        match n {
            1 => Some(WizardStep::Welcome),
            2 => Some(WizardStep::Profile),
            3 => Some(WizardStep::Company),
            4 => Some(WizardStep::Country),
            5 => Some(WizardStep::Topics),
            6 => Some(WizardStep::Review),
            7 => Some(WizardStep::Plan),
            8 => Some(WizardStep::Complete),
            _ => None,
        }
    }

    /// The canonical path for this step.
    pub fn canonical_path(&self) -> &'static str {
        match self {
            WizardStep::Welcome => "/onboarding/step-1",
            WizardStep::Profile => "/onboarding/step-2",
            WizardStep::Company => "/onboarding/step-3",
            WizardStep::Country => "/onboarding/step-4",
            WizardStep::Topics => "/onboarding/step-5",
            WizardStep::Review => "/onboarding/step-6",
            WizardStep::Plan => "/onboarding/step-7",
            WizardStep::Complete => "/onboarding/complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, WizardStep::Complete)
    }
}

impl Serialize for WizardStep {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.step_number())
    }
}

impl<'de> Deserialize<'de> for WizardStep {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        WizardStep::from_step_number(n)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid wizard step: {}", n)))
    }
}

/// Resolve a navigational path to its wizard step.
///
/// Pure and total: canonical `/onboarding/step-N` paths and the legacy alias
/// paths kept for links issued before the URL redesign map through the table
/// below; any unrecognized path falls back to step 1. Never errors.
pub fn resolve_step(path: &str) -> WizardStep {
    let path = path.trim_end_matches('/');
    match path {
        "/onboarding/step-1" => WizardStep::Welcome,
        "/onboarding/step-2" => WizardStep::Profile,
        "/onboarding/step-3" => WizardStep::Company,
        "/onboarding/step-4" => WizardStep::Country,
        "/onboarding/step-5" => WizardStep::Topics,
        "/onboarding/step-6" => WizardStep::Review,
        "/onboarding/step-7" => WizardStep::Plan,
        "/onboarding/complete" => WizardStep::Complete,
        // Legacy aliases, preserved for bookmarks from the pre-redesign URLs
        "/onboarding/profile" => WizardStep::Profile,
        "/onboarding/company" => WizardStep::Company,
        "/onboarding/country" => WizardStep::Country,
        "/onboarding/topics" => WizardStep::Topics,
        "/onboarding/plan" => WizardStep::Plan,
        "/onboarding/confirm" => WizardStep::Plan,
        "/onboarding/success" => WizardStep::Complete,
        _ => WizardStep::Welcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn canonical_paths_resolve_to_their_step_number() {
        for n in 1..=7u8 {
            let step = resolve_step(&format!("/onboarding/step-{}", n));
            assert_eq!(step.step_number(), n);
        }
        assert_eq!(resolve_step("/onboarding/complete").step_number(), 8);
    }

    #[test]
    fn legacy_aliases_resolve_per_table() {
        assert_eq!(resolve_step("/onboarding/profile"), WizardStep::Profile);
        assert_eq!(resolve_step("/onboarding/company"), WizardStep::Company);
        assert_eq!(resolve_step("/onboarding/country"), WizardStep::Country);
        assert_eq!(resolve_step("/onboarding/topics"), WizardStep::Topics);
        assert_eq!(resolve_step("/onboarding/plan"), WizardStep::Plan);
        assert_eq!(resolve_step("/onboarding/confirm"), WizardStep::Plan);
        assert_eq!(resolve_step("/onboarding/success"), WizardStep::Complete);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(resolve_step("/onboarding/step-5/"), WizardStep::Topics);
    }

    #[test]
    fn unknown_paths_fall_back_to_step_one() {
        assert_eq!(resolve_step(""), WizardStep::Welcome);
        assert_eq!(resolve_step("/"), WizardStep::Welcome);
        assert_eq!(resolve_step("/dashboard"), WizardStep::Welcome);
        assert_eq!(resolve_step("/onboarding/step-8"), WizardStep::Welcome);
        assert_eq!(resolve_step("/onboarding/step-99"), WizardStep::Welcome);
        assert_eq!(resolve_step("/onboarding/checkout"), WizardStep::Welcome);
    }

    #[test]
    fn step_numbers_round_trip() {
        for n in 1..=8u8 {
            assert_eq!(WizardStep::from_step_number(n).unwrap().step_number(), n);
        }
        assert_eq!(WizardStep::from_step_number(0), None);
        assert_eq!(WizardStep::from_step_number(9), None);
    }

    #[test]
    fn canonical_path_round_trips_through_resolver() {
        for n in 1..=8u8 {
            let step = WizardStep::from_step_number(n).unwrap();
            assert_eq!(resolve_step(step.canonical_path()), step);
        }
    }

    #[test]
    fn serializes_as_step_number() {
        assert_eq!(serde_json::to_string(&WizardStep::Plan).unwrap(), "7");
        assert_eq!(
            serde_json::from_str::<WizardStep>("8").unwrap(),
            WizardStep::Complete
        );
        assert!(serde_json::from_str::<WizardStep>("9").is_err());
    }

    proptest! {
        // Totality: any path not in the table resolves to step 1, never panics.
        #[test]
        fn arbitrary_paths_never_panic_and_default_to_step_one(path in "\\PC{0,64}") {
            let known = [
                "/onboarding/step-1", "/onboarding/step-2", "/onboarding/step-3",
                "/onboarding/step-4", "/onboarding/step-5", "/onboarding/step-6",
                "/onboarding/step-7", "/onboarding/complete",
                "/onboarding/profile", "/onboarding/company", "/onboarding/country",
                "/onboarding/topics", "/onboarding/plan", "/onboarding/confirm",
                "/onboarding/success",
            ];
            let step = resolve_step(&path);
            if !known.contains(&path.trim_end_matches('/')) {
                prop_assert_eq!(step, WizardStep::Welcome);
            }
        }
    }
}
