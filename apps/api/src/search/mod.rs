//! Search & Filter Engine: keyword and field filtering over catalog listings.

pub mod handlers;

use crate::catalog::Catalog;
use crate::models::OccupationSummary;

/// Codes surfaced as quick picks on the landing view.
pub const FEATURED_CODES: &[&str] = &["AI001", "BIZ001", "PSY001", "ART001", "MDA001"];

/// Filters catalog summaries by occupation name.
///
/// A recognized `field` restricts candidates to that field's listing; otherwise
/// every field's listing is scanned in catalog order. A blank keyword keeps every
/// candidate. Matching is a case-insensitive substring test on the name and keeps
/// candidate order.
pub async fn search(
    catalog: &Catalog,
    keyword: &str,
    field: Option<&str>,
) -> Vec<OccupationSummary> {
    let candidates = match field.filter(|f| catalog.has_field(f)) {
        Some(field) => catalog.list_by_field(field).await,
        None => all_summaries(catalog).await,
    };

    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|summary| summary.name.to_lowercase().contains(&keyword))
        .collect()
}

/// Summaries of `FEATURED_CODES`, in that order. Codes no listing carries are skipped.
pub async fn featured(catalog: &Catalog) -> Vec<OccupationSummary> {
    let all = all_summaries(catalog).await;
    FEATURED_CODES
        .iter()
        .filter_map(|code| all.iter().find(|s| s.code == *code).cloned())
        .collect()
}

async fn all_summaries(catalog: &Catalog) -> Vec<OccupationSummary> {
    let mut all = Vec::new();
    for field in catalog.list_all_fields() {
        all.extend(catalog.list_by_field(&field).await);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    fn codes(results: &[OccupationSummary]) -> Vec<&str> {
        results.iter().map(|s| s.code.as_str()).collect()
    }

    #[tokio::test]
    async fn test_blank_keyword_returns_full_listing_in_field_order() {
        let catalog = sample_catalog();
        let results = search(&catalog, "", None).await;
        assert_eq!(results.len(), 86);
        assert_eq!(results[0].code, "AI001");
        assert_eq!(results[8].code, "BIO001");
        assert_eq!(results.last().unwrap().code, "MDA005");

        assert_eq!(search(&catalog, "   ", None).await, results);
    }

    #[tokio::test]
    async fn test_no_match_is_empty() {
        let catalog = sample_catalog();
        assert!(search(&catalog, "zzz-no-match", None).await.is_empty());
    }

    #[tokio::test]
    async fn test_keyword_matching_is_case_insensitive() {
        let catalog = sample_catalog();
        let lower = search(&catalog, "ai", None).await;
        let upper = search(&catalog, "AI", None).await;
        assert_eq!(lower, upper);
        assert!(codes(&lower).contains(&"AI001"));
        assert!(codes(&lower).contains(&"BIO005"));
    }

    #[tokio::test]
    async fn test_keyword_is_trimmed() {
        let catalog = sample_catalog();
        let results = search(&catalog, "  data scientist ", None).await;
        assert_eq!(codes(&results), vec!["AI002"]);
    }

    #[tokio::test]
    async fn test_matches_keep_candidate_order() {
        let catalog = sample_catalog();
        let results = search(&catalog, "analyst", None).await;
        assert_eq!(
            codes(&results),
            vec![
                "BIO002", "BIO004", "AUTO002", "SPACE003", "CITY003", "BIZ006", "SPT002"
            ]
        );
    }

    #[tokio::test]
    async fn test_field_restricts_candidates() {
        let catalog = sample_catalog();
        let results = search(&catalog, "analyst", Some("Bio-Health")).await;
        assert_eq!(codes(&results), vec!["BIO002", "BIO004"]);

        let whole_field = search(&catalog, "", Some("Aerospace")).await;
        assert_eq!(codes(&whole_field), vec!["SPACE001", "SPACE002", "SPACE003"]);
    }

    #[tokio::test]
    async fn test_unrecognized_field_searches_everything() {
        let catalog = sample_catalog();
        let scoped = search(&catalog, "engineer", Some("No Such Field")).await;
        let unscoped = search(&catalog, "engineer", None).await;
        assert_eq!(scoped, unscoped);
        assert!(!scoped.is_empty());
    }

    #[tokio::test]
    async fn test_search_is_idempotent() {
        let catalog = sample_catalog();
        let first = search(&catalog, "designer", None).await;
        let second = search(&catalog, "designer", None).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_featured_in_declared_order() {
        let catalog = sample_catalog();
        let picks = featured(&catalog).await;
        assert_eq!(codes(&picks), FEATURED_CODES.to_vec());
    }
}
