//! Prefix matching and longest-common-prefix completion.
//!
//! The autocompleter holds a flat, insertion-ordered list of known command
//! names, mirrored from the registry after every registration cycle. All
//! comparisons are case-insensitive; returned text keeps the casing of the
//! stored words.

use std::sync::RwLock;

/// Prefix-based lookup over a mutable set of words.
///
/// Reads (`candidates`, `complete`) may run concurrently; `update_word_list`
/// swaps the whole list in one store so readers never observe a partial
/// update.
#[derive(Debug, Default)]
pub struct AutoCompleter {
    words: RwLock<Vec<String>>,
}

impl AutoCompleter {
    /// Create an autocompleter with an empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire word list, discarding prior contents.
    ///
    /// Duplicates are harmless; insertion order determines candidate order.
    pub fn update_word_list<I>(&self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        let next: Vec<String> = words.into_iter().collect();
        let mut guard = self.words.write().expect("word list lock poisoned");
        *guard = next;
    }

    /// Every known word starting with `prefix`, case-insensitively, in
    /// word-list order. An empty prefix matches every word.
    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        let guard = self.words.read().expect("word list lock poisoned");
        guard
            .iter()
            .filter(|w| starts_with_ignore_case(w, prefix))
            .cloned()
            .collect()
    }

    /// The longest string that extends `input` and is itself a
    /// case-insensitive prefix of every candidate for `input`.
    ///
    /// Casing is taken from the first candidate in `candidates` order, not
    /// normalized. Returns an empty string when there are no candidates.
    pub fn complete(&self, input: &str) -> String {
        let candidates = self.candidates(input);
        let Some(reference) = candidates.first() else {
            return String::new();
        };

        let others: Vec<Vec<char>> = candidates[1..]
            .iter()
            .map(|c| c.chars().collect())
            .collect();

        // Extend one character at a time while every candidate agrees with
        // the reference at that position, ignoring case.
        let mut prefix = String::new();
        for (i, ch) in reference.chars().enumerate() {
            let all_agree = others
                .iter()
                .all(|cand| cand.get(i).is_some_and(|&c| chars_eq_ignore_case(c, ch)));
            if !all_agree {
                break;
            }
            prefix.push(ch);
        }
        prefix
    }
}

/// Case-insensitive `str::starts_with` over chars.
fn starts_with_ignore_case(word: &str, prefix: &str) -> bool {
    let mut word_chars = word.chars();
    for p in prefix.chars() {
        match word_chars.next() {
            Some(w) if chars_eq_ignore_case(w, p) => {},
            _ => return false,
        }
    }
    true
}

/// Case-insensitive char comparison (full Unicode lowercase expansion).
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn completer(words: &[&str]) -> AutoCompleter {
        let ac = AutoCompleter::new();
        ac.update_word_list(words.iter().map(|w| w.to_string()));
        ac
    }

    #[test]
    fn candidates_empty_set_is_empty() {
        let ac = AutoCompleter::new();
        assert!(ac.candidates("g").is_empty());
        assert!(ac.candidates("").is_empty());
    }

    #[test]
    fn candidates_filter_by_prefix_in_insertion_order() {
        let ac = completer(&["google", "github", "gmail", "docs"]);
        assert_eq!(ac.candidates("g"), ["google", "github", "gmail"]);
        assert_eq!(ac.candidates("go"), ["google"]);
        assert!(ac.candidates("x").is_empty());
    }

    #[test]
    fn empty_prefix_matches_every_word() {
        let ac = completer(&["google", "docs"]);
        assert_eq!(ac.candidates(""), ["google", "docs"]);
    }

    #[test]
    fn candidates_are_case_insensitive() {
        let ac = completer(&["Google", "GitHub"]);
        assert_eq!(ac.candidates("gO"), ["Google"]);
        assert_eq!(ac.candidates("GIT"), ["GitHub"]);
    }

    #[test]
    fn update_replaces_prior_words() {
        let ac = completer(&["google"]);
        ac.update_word_list(["docs".to_string()]);
        assert!(ac.candidates("g").is_empty());
        assert_eq!(ac.candidates("d"), ["docs"]);
    }

    #[test]
    fn complete_diverging_candidates_returns_shared_prefix() {
        // google/github/gmail share only the leading g.
        let ac = completer(&["google", "github", "gmail"]);
        assert_eq!(ac.complete("g"), "g");
    }

    #[test]
    fn complete_extends_to_longest_common_prefix() {
        let ac = completer(&["github", "gitlab", "gitbucket"]);
        assert_eq!(ac.complete("gi"), "git");
    }

    #[test]
    fn complete_single_candidate_returns_it_verbatim() {
        let ac = completer(&["google", "docs"]);
        assert_eq!(ac.complete("go"), "google");
    }

    #[test]
    fn complete_no_candidates_returns_empty() {
        let ac = completer(&["google"]);
        assert_eq!(ac.complete("z"), "");
    }

    #[test]
    fn complete_empty_input_spans_whole_word_set() {
        let ac = completer(&["github", "gitlab"]);
        assert_eq!(ac.complete(""), "git");
        let ac = completer(&["alpha", "beta"]);
        assert_eq!(ac.complete(""), "");
    }

    #[test]
    fn complete_keeps_reference_casing() {
        let ac = completer(&["GitHub", "gitlab"]);
        // Reference is the first candidate; casing comes from it.
        assert_eq!(ac.complete("g"), "Git");
    }

    #[test]
    fn complete_is_idempotent_on_its_own_output() {
        let ac = completer(&["github", "gitlab", "gitbucket"]);
        let once = ac.complete("gi");
        assert_eq!(ac.complete(&once), once);
    }

    proptest! {
        #[test]
        fn candidates_are_subset_with_prefix_property(
            words in proptest::collection::vec("[a-zA-Z]{1,8}", 0..12),
            prefix in "[a-zA-Z]{0,4}",
        ) {
            let ac = AutoCompleter::new();
            ac.update_word_list(words.clone());
            for cand in ac.candidates(&prefix) {
                prop_assert!(words.contains(&cand));
                prop_assert!(
                    cand.to_lowercase().starts_with(&prefix.to_lowercase())
                );
            }
        }

        #[test]
        fn completion_is_prefix_of_every_candidate(
            words in proptest::collection::vec("[a-z]{1,8}", 1..12),
            input in "[a-z]{0,3}",
        ) {
            let ac = AutoCompleter::new();
            ac.update_word_list(words);
            let completed = ac.complete(&input);
            for cand in ac.candidates(&input) {
                prop_assert!(cand.to_lowercase().starts_with(&completed.to_lowercase()));
            }
        }
    }
}
