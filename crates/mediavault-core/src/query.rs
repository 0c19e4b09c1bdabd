//! Asset query engine
//!
//! Pure filter/search/sort pipeline over an in-memory asset collection.
//! The pipeline order is fixed: search filter, then category filter, then a
//! stable sort. The input slice is never mutated.

use chrono::DateTime;
use mediavault_common::types::{Asset, FilterState, SortKey, SortOrder};
use std::cmp::Ordering;

/// Apply a query spec to an asset collection.
///
/// Returns matching assets in sorted order. This function never fails:
/// an empty input yields an empty output, and malformed upload dates or an
/// unspecified sort key degrade to "compares equal" rather than erroring.
///
/// The sort is stable, so assets with equal sort keys keep their relative
/// order from the filtered sequence regardless of direction.
pub fn query(assets: &[Asset], filters: &FilterState) -> Vec<Asset> {
    let search = filters.search_query.trim().to_lowercase();

    let mut result: Vec<Asset> = assets
        .iter()
        .filter(|asset| search.is_empty() || matches_search(asset, &search))
        .filter(|asset| filters.category.is_empty() || asset.category == filters.category)
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, filters.sort_by);
        match filters.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    result
}

/// Distinct categories present in a collection, sorted for display.
pub fn categories(assets: &[Asset]) -> Vec<String> {
    let mut categories: Vec<String> = assets.iter().map(|a| a.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Case-insensitive substring match on name, description, or any tag.
fn matches_search(asset: &Asset, lowered_query: &str) -> bool {
    asset.name.to_lowercase().contains(lowered_query)
        || asset.description.to_lowercase().contains(lowered_query)
        || asset
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(lowered_query))
}

fn compare_by_key(a: &Asset, b: &Asset, key: SortKey) -> Ordering {
    match key {
        // Lowercased comparison approximates locale-aware ordering; names
        // differing only in case compare equal and keep input order.
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Date => parse_timestamp(&a.upload_date).cmp(&parse_timestamp(&b.upload_date)),
        SortKey::Size => a.file_size.cmp(&b.file_size),
        SortKey::Unspecified => Ordering::Equal,
    }
}

/// Parse an upload date to epoch milliseconds.
///
/// Unparseable dates yield `None`, which orders before every parseable
/// date under `Option`'s ordering. Deterministic, but callers should treat
/// the position of such records as unspecified.
fn parse_timestamp(timestamp: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|d| d.timestamp_millis())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn asset(id: &str, name: &str, category: &str, size: u64, date: &str) -> Asset {
        Asset {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            file_type: "glb".to_string(),
            file_size: size,
            upload_date: date.to_string(),
            thumbnail_url: "https://example.com/t.png".to_string(),
            model_url: None,
            tags: vec![],
            description: "A test asset description".to_string(),
        }
    }

    fn sample() -> Vec<Asset> {
        vec![
            asset("1", "Alpha", "3D Model", 300, "2026-01-03T00:00:00Z"),
            asset("2", "beta", "Image", 100, "2026-01-01T00:00:00Z"),
            asset("3", "Gamma", "3D Model", 200, "2026-01-02T00:00:00Z"),
        ]
    }

    fn ids(assets: &[Asset]) -> Vec<&str> {
        assets.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(query(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn test_no_filters_keeps_all() {
        let assets = sample();
        let filters = FilterState {
            sort_by: SortKey::Unspecified,
            ..FilterState::default()
        };
        assert_eq!(ids(&query(&assets, &filters)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let assets = sample();
        let filters = FilterState {
            sort_by: SortKey::Size,
            sort_order: SortOrder::Asc,
            ..FilterState::default()
        };
        let _ = query(&assets, &filters);
        assert_eq!(ids(&assets), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let assets = sample();
        let filters = FilterState {
            search_query: "ALP".to_string(),
            sort_by: SortKey::Unspecified,
            ..FilterState::default()
        };
        assert_eq!(ids(&query(&assets, &filters)), vec!["1"]);
    }

    #[test]
    fn test_search_no_match_yields_empty() {
        let assets = sample();
        let filters = FilterState {
            search_query: "zzz".to_string(),
            ..FilterState::default()
        };
        assert!(query(&assets, &filters).is_empty());
    }

    #[test]
    fn test_search_matches_description_and_tags() {
        let mut assets = sample();
        assets[1].description = "Concept art for the hero".to_string();
        assets[2].tags = vec!["Hero".to_string(), "villain".to_string()];

        let filters = FilterState {
            search_query: "hero".to_string(),
            sort_by: SortKey::Unspecified,
            ..FilterState::default()
        };
        assert_eq!(ids(&query(&assets, &filters)), vec!["2", "3"]);
    }

    #[test]
    fn test_whitespace_search_is_skipped() {
        let assets = sample();
        let filters = FilterState {
            search_query: "   ".to_string(),
            sort_by: SortKey::Unspecified,
            ..FilterState::default()
        };
        assert_eq!(query(&assets, &filters).len(), 3);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let assets = sample();
        let filters = FilterState {
            category: "3D Model".to_string(),
            sort_by: SortKey::Unspecified,
            ..FilterState::default()
        };
        assert_eq!(ids(&query(&assets, &filters)), vec!["1", "3"]);

        let filters = FilterState {
            category: "3d model".to_string(),
            ..FilterState::default()
        };
        assert!(query(&assets, &filters).is_empty());
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let assets = sample();
        let filters = FilterState {
            sort_by: SortKey::Name,
            sort_order: SortOrder::Asc,
            ..FilterState::default()
        };
        assert_eq!(ids(&query(&assets, &filters)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_by_date() {
        let assets = sample();
        let filters = FilterState {
            sort_by: SortKey::Date,
            sort_order: SortOrder::Asc,
            ..FilterState::default()
        };
        assert_eq!(ids(&query(&assets, &filters)), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_desc_reverses_distinct_keys() {
        let assets = sample();
        let asc = FilterState {
            sort_by: SortKey::Size,
            sort_order: SortOrder::Asc,
            ..FilterState::default()
        };
        let desc = FilterState {
            sort_order: SortOrder::Desc,
            ..asc.clone()
        };

        let mut reversed = query(&assets, &asc);
        reversed.reverse();
        assert_eq!(reversed, query(&assets, &desc));
    }

    #[test]
    fn test_sort_by_size_is_stable_for_equal_keys() {
        let assets = vec![
            asset("1", "First", "Image", 100, "2026-01-01T00:00:00Z"),
            asset("2", "Second", "Image", 100, "2026-01-02T00:00:00Z"),
            asset("3", "Third", "Image", 50, "2026-01-03T00:00:00Z"),
        ];

        let asc = FilterState {
            sort_by: SortKey::Size,
            sort_order: SortOrder::Asc,
            ..FilterState::default()
        };
        assert_eq!(ids(&query(&assets, &asc)), vec!["3", "1", "2"]);

        let desc = FilterState {
            sort_order: SortOrder::Desc,
            ..asc
        };
        // Equal keys keep input order even when the comparison is reversed.
        assert_eq!(ids(&query(&assets, &desc)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_query_is_idempotent() {
        let assets = sample();
        let filters = FilterState {
            search_query: "a".to_string(),
            sort_by: SortKey::Name,
            sort_order: SortOrder::Desc,
            ..FilterState::default()
        };

        let once = query(&assets, &filters);
        let twice = query(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unparseable_date_does_not_panic() {
        let assets = vec![
            asset("1", "Good", "Image", 100, "2026-01-01T00:00:00Z"),
            asset("2", "Bad", "Image", 100, "yesterday-ish"),
        ];
        let filters = FilterState {
            sort_by: SortKey::Date,
            sort_order: SortOrder::Asc,
            ..FilterState::default()
        };
        // Unparseable dates order before parseable ones.
        assert_eq!(ids(&query(&assets, &filters)), vec!["2", "1"]);
    }

    #[test]
    fn test_categories_unique_sorted() {
        let assets = sample();
        assert_eq!(categories(&assets), vec!["3D Model", "Image"]);
        assert!(categories(&[]).is_empty());
    }
}
