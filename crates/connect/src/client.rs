//! HTTP client for the lexwatch cloud API.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use lexwatch_core::billing::{CheckoutVerification, PaymentVerifierTrait};
use lexwatch_core::errors::{Error, Result};
use lexwatch_core::onboarding::{BillingCycle, PlanTier};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for the lexwatch cloud service.
pub const DEFAULT_CLOUD_API_URL: &str = "https://api.lexwatch.app";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing cloud API responses)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCheckoutSession {
    /// "paid", "open", or "expired".
    status: String,
    #[serde(default)]
    plan_tier: Option<String>,
    #[serde(default)]
    billing_cycle: Option<String>,
    #[serde(default)]
    customer_ref: Option<String>,
    #[serde(default)]
    subscription_ref: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Checkout API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the lexwatch cloud API.
///
/// Verification is a GET against the checkout session, so repeating it with
/// the same reference returns the same result; it never re-charges.
///
/// # Example
///
/// ```ignore
/// let client = CheckoutApiClient::new("https://api.lexwatch.app", "your-token")?;
/// let verification = client.verify_checkout("cs_123").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CheckoutApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl CheckoutApiClient {
    /// Create a new checkout API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token format is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[CheckoutApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Unexpected(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Unexpected(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // Try to parse error response for a better message
            if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                let msg = err
                    .message
                    .or(err.error)
                    .unwrap_or_else(|| format!("HTTP {}", status));
                return Err(Error::Unexpected(format!("API error: {}", msg)));
            }
            return Err(Error::Unexpected(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Unexpected(format!("Failed to parse response: {} - {}", e, body)))
    }
}

#[async_trait]
impl PaymentVerifierTrait for CheckoutApiClient {
    async fn verify_checkout(&self, checkout_ref: &str) -> Result<CheckoutVerification> {
        let session: ApiCheckoutSession = self
            .get(&format!("/api/v1/billing/checkout/{}", checkout_ref))
            .await?;

        let paid = session.status == "paid";
        debug!(
            "[CheckoutApi] Session {} status: {}",
            checkout_ref, session.status
        );

        Ok(CheckoutVerification {
            paid,
            plan_tier: session
                .plan_tier
                .as_deref()
                .and_then(PlanTier::parse)
                .unwrap_or_default(),
            billing_cycle: session
                .billing_cycle
                .as_deref()
                .and_then(BillingCycle::parse)
                .unwrap_or_default(),
            customer_ref: session.customer_ref.unwrap_or_default(),
            subscription_ref: session.subscription_ref.unwrap_or_default(),
        })
    }
}
