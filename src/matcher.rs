/// Best suffix completion for `text` out of `candidates`.
///
/// A candidate completes the text when it starts with it as a literal,
/// case-sensitive prefix and is not the text itself. Ties break to the
/// lexicographically smallest candidate, so the result is deterministic
/// regardless of candidate order and duplicates collapse to the same answer.
///
/// Empty input never hints, and an empty candidate list simply yields `None`.
#[must_use]
pub fn best_completion<S: AsRef<str>>(text: &str, candidates: &[S]) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| *c != text && c.starts_with(text))
        .min()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_never_hints() {
        assert_eq!(best_completion("", &["anything", "at all"]), None);
        assert_eq!(best_completion::<&str>("", &[]), None);
    }

    #[test]
    fn picks_smallest_and_skips_exact_match() {
        assert_eq!(
            best_completion("ab", &["ab", "abc", "abd"]),
            Some("abc".to_string())
        );
    }

    #[test]
    fn no_prefix_match_yields_none() {
        assert_eq!(best_completion("z", &["ab", "abc"]), None);
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(
            best_completion("a", &["abc", "abc"]),
            Some("abc".to_string())
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(best_completion("Ab", &["abc"]), None);
        assert_eq!(best_completion("ab", &["Abc"]), None);
    }

    #[test]
    fn candidate_order_is_irrelevant() {
        let shuffled = ["abd", "abc", "abe"];
        let sorted = ["abc", "abd", "abe"];
        assert_eq!(
            best_completion("ab", &shuffled),
            best_completion("ab", &sorted)
        );
    }
}
