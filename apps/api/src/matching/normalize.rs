//! Tag normalization: free-text preference lists folded into a comparable
//! set.

use std::collections::HashSet;

/// Builds the user's tag set from the three preference lists.
///
/// The result is the lowercased, deduplicated union of `likes`, `hobbies`
/// and `skills`; empty and whitespace-only entries are dropped. A tag
/// appearing in several source lists counts once. The set carries no
/// ordering; it exists for membership tests.
pub fn normalized_tag_set(
    likes: &[String],
    hobbies: &[String],
    skills: &[String],
) -> HashSet<String> {
    fold_tags(likes.iter().chain(hobbies).chain(skills))
}

/// Lowercases, trims and deduplicates a stream of free-text tags. Shared
/// by the user side and the per-field keyword side so both sets fold the
/// same way.
pub(crate) fn fold_tags<'a>(tags: impl Iterator<Item = &'a String>) -> HashSet<String> {
    tags.map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_empty_lists_yield_empty_set() {
        let set = normalized_tag_set(&[], &[], &[]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_blank_entries_are_dropped() {
        let set = normalized_tag_set(&tags(&["", "  ", "art"]), &tags(&["\t"]), &[]);
        assert_eq!(set, HashSet::from(["art".to_string()]));
    }

    #[test]
    fn test_entries_are_lowercased() {
        let set = normalized_tag_set(&tags(&["Coding", "ART"]), &[], &[]);
        assert!(set.contains("coding"));
        assert!(set.contains("art"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_tag_in_multiple_lists_counts_once() {
        let set = normalized_tag_set(
            &tags(&["coding"]),
            &tags(&["Coding"]),
            &tags(&["coding", "music"]),
        );
        assert_eq!(set.len(), 2);
        assert!(set.contains("coding"));
        assert!(set.contains("music"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let set = normalized_tag_set(&tags(&["  Nature "]), &[], &[]);
        assert_eq!(set, HashSet::from(["nature".to_string()]));
    }
}
