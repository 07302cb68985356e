//! Overlap scoring and ranking of career fields against a user tag set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::normalize::fold_tags;
use crate::models::field::CareerFieldRow;

/// Maximum number of matches returned to the caller.
const MAX_MATCHES: usize = 3;

/// A ranked match. `score` counts the tags shared between the user's
/// normalized set and the field's normalized keyword set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "fieldId")]
    pub field_id: Uuid,
    pub name: String,
    pub score: u32,
}

/// Scores every catalog field against `user_tags` and returns the top
/// matches, best first.
///
/// An empty tag set short-circuits to no matches without scanning the
/// catalog. Fields sharing no tag are excluded. Ties are broken by
/// ascending `field_id`, so equal-scoring fields rank the same way on
/// every request regardless of catalog scan order.
pub fn rank_fields(user_tags: &HashSet<String>, catalog: &[CareerFieldRow]) -> Vec<MatchResult> {
    if user_tags.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<MatchResult> = catalog
        .iter()
        .filter_map(|field| {
            let field_tags = fold_tags(field.keywords.iter());
            let score = field_tags.intersection(user_tags).count() as u32;
            (score > 0).then(|| MatchResult {
                field_id: field.field_id,
                name: field.name.clone(),
                score,
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.field_id.cmp(&b.field_id)));
    candidates.truncate(MAX_MATCHES);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::normalized_tag_set;

    fn make_field(id: u128, name: &str, keywords: &[&str]) -> CareerFieldRow {
        CareerFieldRow {
            field_id: Uuid::from_u128(id),
            name: name.to_string(),
            description: None,
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            typical_roles: None,
        }
    }

    fn user_tags(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_lowercase()).collect()
    }

    #[test]
    fn test_empty_tag_set_matches_nothing() {
        let catalog = vec![make_field(1, "Technology", &["coding", "computers"])];
        assert!(rank_fields(&HashSet::new(), &catalog).is_empty());
    }

    #[test]
    fn test_all_empty_profile_lists_match_nothing() {
        let tags = normalized_tag_set(&[], &[], &[]);
        let catalog = vec![make_field(1, "Technology", &["coding"])];
        assert!(rank_fields(&tags, &catalog).is_empty());
    }

    #[test]
    fn test_empty_catalog_matches_nothing() {
        assert!(rank_fields(&user_tags(&["art"]), &[]).is_empty());
    }

    #[test]
    fn test_score_is_exact_overlap_count() {
        let catalog = vec![make_field(1, "Creative Arts", &["Art", "Nature"])];
        let matches = rank_fields(&user_tags(&["art", "music"]), &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1);
        assert_eq!(matches[0].name, "Creative Arts");
    }

    #[test]
    fn test_case_folded_keyword_matches_user_tag() {
        let catalog = vec![make_field(1, "Technology", &["coding"])];
        let tags = normalized_tag_set(&["Coding".to_string()], &[], &[]);
        let matches = rank_fields(&tags, &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1);
    }

    #[test]
    fn test_duplicate_keywords_count_once() {
        let catalog = vec![make_field(1, "Creative Arts", &["ART", "art", " Art "])];
        let matches = rank_fields(&user_tags(&["art"]), &catalog);
        assert_eq!(matches[0].score, 1);
    }

    #[test]
    fn test_tag_in_two_source_lists_contributes_once() {
        let catalog = vec![make_field(1, "Technology", &["coding", "computers"])];
        let tags = normalized_tag_set(
            &["coding".to_string()],
            &[],
            &["Coding".to_string()],
        );
        let matches = rank_fields(&tags, &catalog);
        assert_eq!(matches[0].score, 1);
    }

    #[test]
    fn test_zero_scoring_fields_are_excluded() {
        let catalog = vec![
            make_field(1, "Technology", &["coding"]),
            make_field(2, "Healthcare", &["medicine", "helping people"]),
        ];
        let matches = rank_fields(&user_tags(&["coding"]), &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].field_id, Uuid::from_u128(1));
    }

    #[test]
    fn test_top_three_of_five_by_descending_score() {
        let tags = user_tags(&["a", "b", "c", "d"]);
        let catalog = vec![
            make_field(1, "Four", &["a", "b", "c", "d"]),
            make_field(2, "One", &["d", "x", "y"]),
            make_field(3, "Three", &["a", "b", "c"]),
            make_field(4, "Zero", &["x", "y", "z"]),
            make_field(5, "Two", &["a", "b"]),
        ];
        let matches = rank_fields(&tags, &catalog);
        assert_eq!(matches.len(), 3);
        assert_eq!(
            matches.iter().map(|m| m.score).collect::<Vec<_>>(),
            vec![4, 3, 2]
        );
        assert_eq!(
            matches.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            vec!["Four", "Three", "Two"]
        );
    }

    #[test]
    fn test_ties_break_by_ascending_field_id() {
        let tags = user_tags(&["art"]);
        // Catalog deliberately iterated high-id first.
        let catalog = vec![
            make_field(9, "Later", &["art"]),
            make_field(2, "Earlier", &["art"]),
        ];
        let matches = rank_fields(&tags, &catalog);
        assert_eq!(matches[0].field_id, Uuid::from_u128(2));
        assert_eq!(matches[1].field_id, Uuid::from_u128(9));
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let tags = user_tags(&["art", "coding", "music"]);
        let catalog = vec![
            make_field(1, "Technology", &["coding", "computers"]),
            make_field(2, "Creative Arts", &["art", "music"]),
            make_field(3, "Education", &["teaching", "music"]),
        ];
        let first = rank_fields(&tags, &catalog);
        let second = rank_fields(&tags, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_result_serializes_field_id_as_camel_case() {
        let result = MatchResult {
            field_id: Uuid::from_u128(7),
            name: "Technology".to_string(),
            score: 2,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("fieldId").is_some());
        assert!(json.get("field_id").is_none());
    }
}
