//! Upstream job providers, each translated into the common [`JobRecord`]
//! shape behind the [`JobSource`] trait.
//!
//! Adapters return an explicit `Result`; deciding that a failure is
//! non-fatal is the aggregator's job, not theirs.

use async_trait::async_trait;
use thiserror::Error;

use crate::jobs::model::JobRecord;

pub mod adzuna;
pub mod fallback;
pub mod remoteok;

/// Descriptive User-Agent sent on every outbound provider request.
pub const USER_AGENT: &str = "CareerHub/0.1 (job aggregation)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// One upstream provider of job listings.
///
/// Carried by the aggregator as `Box<dyn JobSource>` so tests can inject
/// stub providers.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetches and normalizes this provider's listings. One blocking HTTP
    /// round-trip at most; no retries.
    async fn fetch(&self) -> Result<Vec<JobRecord>, FetchError>;
}
