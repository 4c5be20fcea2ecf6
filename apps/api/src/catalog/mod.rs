//! Occupation Catalog: code lookups, field listings and major lookups.
//!
//! Two tiers: an optional live `OccupationSource` and the embedded `SampleData`.
//! Which tiers exist is decided once, at construction. Every live call goes
//! through `recover`, which turns any failure into the sample-data answer, so
//! no catalog operation ever returns an error.

pub mod handlers;
pub mod sample;
pub mod source;
pub mod worknet;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{MajorRecord, OccupationRecord, OccupationSummary};

pub use sample::SampleData;
pub use source::{OccupationSource, SourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogMode {
    Sample,
    Live,
}

struct LiveTier {
    source: Arc<dyn OccupationSource>,
    timeout: Duration,
}

pub struct Catalog {
    live: Option<LiveTier>,
    sample: SampleData,
    /// Per-field memo of `list_by_field`. Never invalidated.
    field_cache: RwLock<HashMap<String, Arc<[OccupationSummary]>>>,
}

impl Catalog {
    pub fn sample_only(sample: SampleData) -> Self {
        info!("Occupation catalog running on sample data");
        Self {
            live: None,
            sample,
            field_cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_live_source(
        sample: SampleData,
        source: Arc<dyn OccupationSource>,
        timeout: Duration,
    ) -> Self {
        info!(
            "Occupation catalog running on live source '{}' (timeout {}s) with sample fallback",
            source.name(),
            timeout.as_secs()
        );
        Self {
            live: Some(LiveTier { source, timeout }),
            sample,
            field_cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn mode(&self) -> CatalogMode {
        if self.live.is_some() {
            CatalogMode::Live
        } else {
            CatalogMode::Sample
        }
    }

    /// Unknown codes are `None`, never an error.
    pub async fn get_by_code(&self, code: &str) -> Option<OccupationRecord> {
        let code = code.trim();
        let fallback = || self.sample.occupation(code).cloned();

        let Some(live) = &self.live else {
            return fallback();
        };

        let result = call_live(live, live.source.fetch_occupation(code)).await;
        recover(live, "get_by_code", code, result, fallback).map(|mut record| {
            if let Some(field) = self.sample.field_for_label(&record.field) {
                record.field = field.to_string();
            }
            record
        })
    }

    /// Unrecognized fields yield an empty listing without consulting any source.
    pub async fn list_by_field(&self, field: &str) -> Vec<OccupationSummary> {
        if let Some(cached) = self.cached_listing(field) {
            return cached.to_vec();
        }

        let Some(sample_listing) = self.sample.listing(field) else {
            return Vec::new();
        };

        let Some(live) = &self.live else {
            return self.memoize(field, sample_listing.to_vec());
        };

        let label = self.sample.source_label(field).unwrap_or(field);
        let result = call_live(live, live.source.fetch_field_listing(label))
            .await
            .and_then(|listing| {
                if listing.is_empty() {
                    Err(SourceError::EmptyListing(label.to_string()))
                } else {
                    Ok(listing)
                }
            });

        match result {
            Ok(mut listing) => {
                debug!(
                    "Live source '{}' listed {} occupations for '{field}'",
                    live.source.name(),
                    listing.len()
                );
                for summary in &mut listing {
                    summary.field = field.to_string();
                }
                self.memoize(field, listing)
            }
            // Fallback answers are not memoized so a later live call can still fill the entry.
            failed => recover(live, "list_by_field", field, failed, || sample_listing.to_vec()),
        }
    }

    /// Field display names in catalog order.
    pub fn list_all_fields(&self) -> Vec<String> {
        self.sample.field_names().map(str::to_string).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.sample.listing(field).is_some()
    }

    pub fn get_major(&self, code: &str) -> Option<MajorRecord> {
        self.sample.major(code.trim()).cloned()
    }

    fn cached_listing(&self, field: &str) -> Option<Arc<[OccupationSummary]>> {
        let cache = self.field_cache.read().unwrap_or_else(|e| e.into_inner());
        cache.get(field).cloned()
    }

    /// Concurrent callers may both populate the same key; the values are identical.
    fn memoize(&self, field: &str, listing: Vec<OccupationSummary>) -> Vec<OccupationSummary> {
        let shared: Arc<[OccupationSummary]> = listing.into();
        let mut cache = self.field_cache.write().unwrap_or_else(|e| e.into_inner());
        cache.insert(field.to_string(), Arc::clone(&shared));
        shared.to_vec()
    }
}

async fn call_live<T>(
    live: &LiveTier,
    call: impl Future<Output = Result<T, SourceError>>,
) -> Result<T, SourceError> {
    match tokio::time::timeout(live.timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(live.timeout.as_secs())),
    }
}

/// The single fallback policy: a failed live call is logged and answered from sample data.
fn recover<T>(
    live: &LiveTier,
    operation: &str,
    key: &str,
    result: Result<T, SourceError>,
    fallback: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Live source '{}' failed during {operation}('{key}'): {e}; using sample data",
                live.source.name()
            );
            fallback()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::models::Outlook;

    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::sample_only(SampleData::load().unwrap())
    }

    /// Always fails, counting how often it was asked.
    #[derive(Default)]
    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl OccupationSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn fetch_occupation(
            &self,
            _code: &str,
        ) -> Result<Option<OccupationRecord>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SourceError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }

        async fn fetch_field_listing(
            &self,
            _field: &str,
        ) -> Result<Vec<OccupationSummary>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SourceError::Parse(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))
        }
    }

    /// Answers every listing with a single fixed entry and knows no codes.
    #[derive(Default)]
    struct FixedSource {
        calls: AtomicUsize,
        labels: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl OccupationSource for FixedSource {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch_occupation(
            &self,
            _code: &str,
        ) -> Result<Option<OccupationRecord>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn fetch_field_listing(
            &self,
            label: &str,
        ) -> Result<Vec<OccupationSummary>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.labels.lock().unwrap().push(label.to_string());
            Ok(vec![OccupationSummary {
                code: "LIVE001".to_string(),
                name: "Live Occupation".to_string(),
                growth: Some(Outlook::High),
                field: label.to_string(),
            }])
        }
    }

    /// Answers every listing with nothing.
    #[derive(Default)]
    struct EmptySource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl OccupationSource for EmptySource {
        fn name(&self) -> &'static str {
            "empty"
        }

        async fn fetch_occupation(
            &self,
            _code: &str,
        ) -> Result<Option<OccupationRecord>, SourceError> {
            let mut record = SampleData::load().unwrap().occupation("AI001").cloned();
            if let Some(record) = record.as_mut() {
                record.field = "AI/빅데이터".to_string();
            }
            Ok(record)
        }

        async fn fetch_field_listing(
            &self,
            _label: &str,
        ) -> Result<Vec<OccupationSummary>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }
    }

    /// Never answers.
    struct HangingSource;

    #[async_trait]
    impl OccupationSource for HangingSource {
        fn name(&self) -> &'static str {
            "hanging"
        }

        async fn fetch_occupation(
            &self,
            _code: &str,
        ) -> Result<Option<OccupationRecord>, SourceError> {
            std::future::pending().await
        }

        async fn fetch_field_listing(
            &self,
            _field: &str,
        ) -> Result<Vec<OccupationSummary>, SourceError> {
            std::future::pending().await
        }
    }

    fn live_catalog(source: Arc<dyn OccupationSource>) -> Catalog {
        Catalog::with_live_source(SampleData::load().unwrap(), source, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_known_codes_resolve_to_their_record() {
        let catalog = sample_catalog();
        let codes = [
            "AI001", "BIZ001", "PSY001", "ART001", "SPT002", "EDU003", "MDA001", "BIO001", "ECO001",
        ];
        for code in codes {
            let record = catalog.get_by_code(code).await.expect(code);
            assert_eq!(record.code, code);
        }
    }

    #[tokio::test]
    async fn test_unknown_code_is_absent() {
        let catalog = sample_catalog();
        assert!(catalog.get_by_code("NOPE999").await.is_none());
        assert!(catalog.get_by_code("").await.is_none());
    }

    #[tokio::test]
    async fn test_list_by_field_returns_field_listing_in_order() {
        let catalog = sample_catalog();
        let listing = catalog.list_by_field("AI/Big Data").await;
        assert_eq!(listing.len(), 8);
        assert_eq!(listing[0].code, "AI001");
        assert_eq!(listing[7].code, "AI008");
        assert!(listing.iter().all(|s| s.field == "AI/Big Data"));
    }

    #[tokio::test]
    async fn test_unrecognized_field_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.list_by_field("Alchemy").await.is_empty());
        assert!(catalog.list_by_field(" AI/Big Data").await.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_field_is_memoized() {
        let catalog = sample_catalog();
        assert!(catalog.cached_listing("Robotics").is_none());
        let first = catalog.list_by_field("Robotics").await;
        assert!(catalog.cached_listing("Robotics").is_some());
        assert_eq!(first, catalog.list_by_field("Robotics").await);
    }

    #[test]
    fn test_list_all_fields_in_catalog_order() {
        let fields = sample_catalog().list_all_fields();
        assert_eq!(fields.len(), 16);
        assert_eq!(fields[0], "AI/Big Data");
        assert_eq!(fields[1], "Bio-Health");
        assert_eq!(fields[15], "Media/Content");
    }

    #[test]
    fn test_mode_reflects_construction() {
        assert_eq!(sample_catalog().mode(), CatalogMode::Sample);
        assert_eq!(
            live_catalog(Arc::new(FixedSource::default())).mode(),
            CatalogMode::Live
        );
    }

    #[test]
    fn test_major_lookup() {
        let catalog = sample_catalog();
        let major = catalog.get_major("CS001").unwrap();
        assert_eq!(major.name, "Computer Science");
        assert!(catalog.get_major("XX000").is_none());
    }

    #[tokio::test]
    async fn test_live_failure_falls_back_to_sample_record() {
        let source = Arc::new(FailingSource::default());
        let catalog = live_catalog(source.clone());

        let record = catalog.get_by_code("AI001").await.unwrap();
        assert_eq!(record.name, "AI Engineer");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_live_failure_falls_back_to_sample_listing_without_memoizing() {
        let source = Arc::new(FailingSource::default());
        let catalog = live_catalog(source.clone());

        let listing = catalog.list_by_field("Robotics").await;
        assert_eq!(listing.len(), 4);
        assert!(catalog.cached_listing("Robotics").is_none());

        catalog.list_by_field("Robotics").await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_live_listing_is_used_and_memoized() {
        let source = Arc::new(FixedSource::default());
        let catalog = live_catalog(source.clone());

        let listing = catalog.list_by_field("Robotics").await;
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].code, "LIVE001");
        assert_eq!(listing[0].field, "Robotics");
        assert_eq!(*source.labels.lock().unwrap(), vec!["로봇공학".to_string()]);

        let again = catalog.list_by_field("Robotics").await;
        assert_eq!(again, listing);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_live_listing_falls_back_without_memoizing() {
        let source = Arc::new(EmptySource::default());
        let catalog = live_catalog(source.clone());

        let listing = catalog.list_by_field("AI/Big Data").await;
        assert_eq!(listing.len(), 8);
        assert_eq!(listing[0].code, "AI001");
        assert!(catalog.cached_listing("AI/Big Data").is_none());

        assert_eq!(catalog.list_by_field("AI/Big Data").await.len(), 8);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_live_record_field_is_mapped_to_catalog_field() {
        let catalog = live_catalog(Arc::new(EmptySource::default()));
        let record = catalog.get_by_code("AI001").await.unwrap();
        assert_eq!(record.field, "AI/Big Data");
    }

    #[tokio::test]
    async fn test_live_absent_answer_is_authoritative() {
        let catalog = live_catalog(Arc::new(FixedSource::default()));
        assert!(catalog.get_by_code("AI001").await.is_none());
    }

    #[tokio::test]
    async fn test_live_source_not_consulted_for_unknown_field() {
        let source = Arc::new(FixedSource::default());
        let catalog = live_catalog(source.clone());
        assert!(catalog.list_by_field("Alchemy").await.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_timeout_falls_back() {
        let catalog = Catalog::with_live_source(
            SampleData::load().unwrap(),
            Arc::new(HangingSource),
            Duration::from_secs(10),
        );

        let record = catalog.get_by_code("ECO001").await.unwrap();
        assert_eq!(record.name, "Renewable Energy Engineer");
        assert_eq!(catalog.list_by_field("Aerospace").await.len(), 3);
    }
}
