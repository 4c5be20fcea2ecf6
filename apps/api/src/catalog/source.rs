//! Live occupation data sources.
//!
//! The catalog holds at most one `Arc<dyn OccupationSource>` as its primary tier.
//! Implementations report every failure as a `SourceError`; the catalog decides
//! what to do with it.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{OccupationRecord, OccupationSummary};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("timed out after {0}s")]
    Timeout(u64),

    #[error("no occupations listed for field '{0}'")]
    EmptyListing(String),
}

#[async_trait]
pub trait OccupationSource: Send + Sync {
    /// Short name used in logs ("worknet").
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the source answered and has no such occupation.
    async fn fetch_occupation(&self, code: &str) -> Result<Option<OccupationRecord>, SourceError>;

    /// `label` is the source's own name for the field. Entries come back
    /// tagged with that label.
    async fn fetch_field_listing(&self, label: &str)
        -> Result<Vec<OccupationSummary>, SourceError>;
}
