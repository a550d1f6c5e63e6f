//! Client-side filter engine and tag vocabulary.
//!
//! Filtering is a pure, order-preserving scan over the in-memory snippet
//! list; nothing here touches storage or allocates beyond the result.

use crate::models::snippet::Snippet;
use std::collections::BTreeSet;

/// Active filter criteria for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively over title, code, and
    /// the raw tags string.
    pub search_query: String,
    /// Exact-match language constraint; empty means any language.
    pub language_filter: String,
    /// Raw comma-separated required tags; every parsed token must appear
    /// in a snippet's own tag set.
    pub tag_filter: String,
    /// Keep only favorited snippets.
    pub show_favorites_only: bool,
}

impl FilterCriteria {
    /// Whether every criterion is at its empty/default value.
    pub fn is_empty(&self) -> bool {
        !self.show_favorites_only
            && self.search_query.is_empty()
            && self.language_filter.is_empty()
            && parse_tag_tokens(&self.tag_filter).is_empty()
    }

    /// Evaluate one snippet against the criteria.
    ///
    /// Gates run in a fixed short-circuit order: favorites, language, tags,
    /// then text search. The search gate returns its verdict directly, so an
    /// empty query performs no text exclusion and the snippet passes. That
    /// pass-through is intentional; keep it.
    pub fn matches(&self, snippet: &Snippet) -> bool {
        if self.show_favorites_only && !snippet.is_favorite {
            return false;
        }
        if !self.language_filter.is_empty() && snippet.language != self.language_filter {
            return false;
        }
        let required = parse_tag_tokens(&self.tag_filter);
        if !required.is_empty() {
            let tag_set = parse_tag_tokens(&snippet.tags);
            if !required.iter().all(|tag| tag_set.contains(tag)) {
                return false;
            }
        }
        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            return snippet.title.to_lowercase().contains(&query)
                || snippet.code.to_lowercase().contains(&query)
                || snippet.tags.to_lowercase().contains(&query);
        }
        true
    }
}

/// Parse a raw comma-separated tags string into its deduplicated token set.
///
/// Tokens are trimmed and empty tokens are dropped. Matching elsewhere is
/// case-sensitive, so no case normalization happens here.
pub fn parse_tag_tokens(tags: &str) -> BTreeSet<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Select the snippets matching `criteria`, preserving input order.
///
/// # Returns
/// References into `snippets`, an order-preserving subset of the input.
pub fn filter<'a>(snippets: &'a [Snippet], criteria: &FilterCriteria) -> Vec<&'a Snippet> {
    snippets
        .iter()
        .filter(|snippet| criteria.matches(snippet))
        .collect()
}

/// Union of every snippet's parsed tag tokens.
///
/// Drives tag autocomplete suggestions; malformed tag strings degrade to
/// fewer (or no) tokens rather than failing.
pub fn collect_tag_vocabulary(snippets: &[Snippet]) -> BTreeSet<String> {
    let mut vocabulary = BTreeSet::new();
    for snippet in snippets {
        vocabulary.extend(parse_tag_tokens(&snippet.tags));
    }
    vocabulary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: i64, title: &str, language: &str, tags: &str, is_favorite: bool) -> Snippet {
        Snippet {
            id,
            title: title.to_string(),
            code: format!("// code for {}", title),
            language: language.to_string(),
            tags: tags.to_string(),
            is_favorite,
            created_at: "2024-05-01T12:00:00+00:00".to_string(),
            updated_at: "2024-05-01T12:00:00+00:00".to_string(),
        }
    }

    fn sample() -> Vec<Snippet> {
        vec![
            snippet(1, "goroutine pool", "go", "go, rust", false),
            snippet(2, "list comprehension", "python", "python", true),
            snippet(3, "trait object", "rust", "rust, patterns", true),
        ]
    }

    fn ids(result: &[&Snippet]) -> Vec<i64> {
        result.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_criteria_return_all_snippets_in_order() {
        let snippets = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(ids(&filter(&snippets, &criteria)), vec![1, 2, 3]);
    }

    #[test]
    fn result_is_an_order_preserving_subset() {
        let snippets = sample();
        let criteria = FilterCriteria {
            search_query: "o".to_string(),
            ..FilterCriteria::default()
        };
        let result = filter(&snippets, &criteria);
        let mut last_seen = 0;
        for found in &result {
            assert!(snippets.iter().any(|s| s.id == found.id));
            assert!(found.id > last_seen, "input order not preserved");
            last_seen = found.id;
        }
    }

    #[test]
    fn favorites_gate_excludes_non_favorites_regardless_of_other_criteria() {
        let snippets = sample();
        let criteria = FilterCriteria {
            show_favorites_only: true,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&snippets, &criteria)), vec![2, 3]);

        // Snippet 1 matches language and tags but is not a favorite.
        let criteria = FilterCriteria {
            show_favorites_only: true,
            language_filter: "go".to_string(),
            tag_filter: "go".to_string(),
            ..FilterCriteria::default()
        };
        assert!(filter(&snippets, &criteria).is_empty());
    }

    #[test]
    fn language_filter_requires_exact_match() {
        let snippets = sample();
        let criteria = FilterCriteria {
            language_filter: "rust".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&snippets, &criteria)), vec![3]);

        let criteria = FilterCriteria {
            language_filter: "Rust".to_string(),
            ..FilterCriteria::default()
        };
        assert!(filter(&snippets, &criteria).is_empty());
    }

    #[test]
    fn tag_filter_requires_every_token() {
        let snippets = sample();
        let criteria = FilterCriteria {
            tag_filter: "go, rust".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&snippets, &criteria)), vec![1]);

        let criteria = FilterCriteria {
            tag_filter: "rust, missing".to_string(),
            ..FilterCriteria::default()
        };
        assert!(filter(&snippets, &criteria).is_empty());
    }

    #[test]
    fn tag_matching_is_case_sensitive_per_token() {
        let snippets = vec![snippet(1, "upper", "go", "A", false)];
        let criteria = FilterCriteria {
            tag_filter: "a".to_string(),
            ..FilterCriteria::default()
        };
        assert!(filter(&snippets, &criteria).is_empty());
    }

    #[test]
    fn search_matches_title_code_and_raw_tags_case_insensitively() {
        let snippets = sample();
        let by_title = FilterCriteria {
            search_query: "GOROUTINE".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&snippets, &by_title)), vec![1]);

        let by_code = FilterCriteria {
            search_query: "code for trait".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&snippets, &by_code)), vec![3]);

        let by_tags = FilterCriteria {
            search_query: "patterns".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&snippets, &by_tags)), vec![3]);
    }

    #[test]
    fn empty_search_query_passes_survivors_through() {
        // Only the earlier gates apply when the query is empty.
        let snippets = sample();
        let criteria = FilterCriteria {
            language_filter: "go".to_string(),
            search_query: String::new(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&snippets, &criteria)), vec![1]);
    }

    #[test]
    fn messy_tag_string_parses_to_trimmed_non_empty_tokens() {
        let tokens = parse_tag_tokens(" go ,  , rust,");
        let expected: BTreeSet<String> = ["go", "rust"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn vocabulary_is_the_union_of_all_tag_sets() {
        let snippets = vec![
            snippet(1, "one", "go", "a,b", false),
            snippet(2, "two", "go", "b,c", false),
        ];
        let expected: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(collect_tag_vocabulary(&snippets), expected);
    }

    #[test]
    fn whitespace_only_tag_filter_counts_as_empty() {
        let snippets = sample();
        let criteria = FilterCriteria {
            tag_filter: " ,  , ".to_string(),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(ids(&filter(&snippets, &criteria)), vec![1, 2, 3]);
    }
}
