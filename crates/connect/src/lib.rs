//! HTTP client for the lexwatch cloud API.
//!
//! The cloud service fronts the payment provider: checkout sessions are
//! created there, and this crate verifies them. The client implements the
//! `PaymentVerifierTrait` defined in `lexwatch-core`, so the completion
//! workflow never knows it is talking HTTP.

pub mod client;

pub use client::{CheckoutApiClient, DEFAULT_CLOUD_API_URL};
