//! Advisory client - builds requests, enforces single flight, degrades to
//! the fallback on every failure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use thiserror::Error;

use sentinel_core::snapshot::TeamSnapshot;

use crate::assessment::RiskAssessment;
use crate::gemini::{GenerateContentRequest, GenerateContentResponse};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Default API endpoint base.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for the advisory service.
#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    pub api_key: String,
    pub model: String,
    /// Endpoint base, overridable so tests can target a local stub.
    pub endpoint: String,
    pub timeout: Duration,
}

impl AdvisoryConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Why a raw advisory call failed. Only [`AdvisoryError::ScanInFlight`]
/// ever escapes [`AdvisoryClient::assess`]; everything else is absorbed
/// into the fallback.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("an advisory scan is already in flight")]
    ScanInFlight,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("empty reply from the model")]
    EmptyReply,
    #[error("reply failed schema validation: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Client for the Gemini generateContent endpoint.
pub struct AdvisoryClient {
    http: Client,
    config: AdvisoryConfig,
    in_flight: AtomicBool,
}

impl AdvisoryClient {
    pub fn new(config: AdvisoryConfig) -> Self {
        Self {
            http: Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &AdvisoryConfig {
        &self.config
    }

    /// Run one advisory scan. Returns the parsed assessment, or the fixed
    /// fallback if anything goes wrong along the way. The only error is the
    /// busy rejection while another scan is still pending.
    pub async fn assess(&self, snapshot: &TeamSnapshot) -> Result<RiskAssessment, AdvisoryError> {
        let _guard = FlightGuard::acquire(&self.in_flight).ok_or(AdvisoryError::ScanInFlight)?;

        match self.fetch_assessment(snapshot).await {
            Ok(assessment) => Ok(assessment),
            Err(err) => {
                warn!("advisory scan failed, using fallback: {err}");
                Ok(RiskAssessment::fallback())
            }
        }
    }

    async fn fetch_assessment(
        &self,
        snapshot: &TeamSnapshot,
    ) -> Result<RiskAssessment, AdvisoryError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );
        let request = GenerateContentRequest::tactical(snapshot)?;

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let reply: GenerateContentResponse = response.json().await?;

        let text = reply.first_text().ok_or(AdvisoryError::EmptyReply)?;
        debug!("advisory reply: {} bytes", text.len());
        let assessment: RiskAssessment = serde_json::from_str(text)?;
        Ok(assessment)
    }
}

/// Holds the in-flight flag for the duration of one scan and releases it
/// on drop, early returns included.
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
