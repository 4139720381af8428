pub mod billing_model;
pub mod billing_traits;

pub use billing_model::CheckoutVerification;
pub use billing_traits::PaymentVerifierTrait;
