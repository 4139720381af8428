pub mod completion_service;
pub mod onboarding_errors;
pub mod onboarding_model;
#[cfg(test)]
mod onboarding_model_tests;
pub mod onboarding_service;
pub mod onboarding_traits;
pub mod steps;

pub use completion_service::CompletionService;
pub use onboarding_errors::OnboardingError;
pub use onboarding_model::*;
pub use onboarding_service::OnboardingService;
pub use onboarding_traits::{DraftStoreTrait, OnboardingSessionTrait};
pub use steps::{resolve_step, WizardStep};
