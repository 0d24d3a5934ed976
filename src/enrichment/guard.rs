//! Vocabulary guard for rewritten bullets
//!
//! A rewrite may rephrase and reorder, but must not introduce technologies
//! that appear neither in the profile's skills nor in the original text.

use regex::Regex;
use std::collections::HashSet;

const STOP_WORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "to", "of", "in", "for", "with", "on", "by", "de", "y", "o",
    "la", "el", "los", "las", "para", "con", "en", "por", "un", "una",
];

/// Words every profile summary may use on top of `STOP_WORDS`.
const SUMMARY_STOP_WORDS: &[&str] = &[
    "cv", "resume", "summary", "experience", "frontend", "backend", "software",
];

/// Lowercase and collapse internal whitespace.
pub fn normalize_term(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Strip list markers (`-`, `•`) and surrounding whitespace from a bullet.
pub fn clean_bullet(line: &str) -> String {
    let line = line.trim();
    let line = match line.strip_prefix('-') {
        Some(rest) => rest,
        None => line.trim_start_matches('•'),
    };
    line.trim().to_string()
}

/// Terms a rewritten bullet is allowed to use.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: HashSet<String>,
    term_pattern: Regex,
    extra_stop_words: &'static [&'static str],
}

impl Vocabulary {
    pub fn new<I, S>(skills: I, originals: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let term_pattern = Regex::new(r"[A-Za-z][A-Za-z0-9.+\-/]{1,30}").expect("Invalid term regex");

        let mut terms: HashSet<String> = skills
            .into_iter()
            .map(|s| normalize_term(s.as_ref()))
            .collect();
        for original in originals {
            terms.extend(
                term_pattern
                    .find_iter(original)
                    .map(|m| normalize_term(m.as_str())),
            );
        }

        Self {
            terms,
            term_pattern,
            extra_stop_words: &[],
        }
    }

    /// Also accept the generic words of a profile summary.
    pub fn for_summary(mut self) -> Self {
        self.extra_stop_words = SUMMARY_STOP_WORDS;
        self
    }

    fn is_stop_word(&self, term: &str) -> bool {
        STOP_WORDS.contains(&term) || self.extra_stop_words.contains(&term)
    }

    pub fn allows(&self, term: &str) -> bool {
        self.terms.contains(&normalize_term(term))
    }

    /// First term of `text` that is neither allowed nor a stop word.
    pub fn first_disallowed<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.term_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|term| {
                let normalized = normalize_term(term);
                !self.is_stop_word(&normalized) && !self.terms.contains(&normalized)
            })
    }
}

/// Outcome of merging rewrites with the selected originals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub bullets: Vec<String>,
    /// Rewrites replaced by their original because of a disallowed term.
    pub rejected: usize,
}

/// Align cleaned rewrites with `originals` one to one (padding with the
/// remaining originals, dropping extras) and keep each rewrite only when
/// every term it uses is allowed.
pub fn reconcile(originals: &[String], rewrites: &[String], allowed: &Vocabulary) -> Reconciled {
    let mut cleaned: Vec<String> = rewrites
        .iter()
        .map(|line| clean_bullet(line))
        .filter(|line| !line.is_empty())
        .collect();

    if cleaned.len() < originals.len() {
        cleaned.extend_from_slice(&originals[cleaned.len()..]);
    }
    cleaned.truncate(originals.len());

    let mut rejected = 0;
    let bullets = originals
        .iter()
        .zip(cleaned)
        .map(|(original, candidate)| match allowed.first_disallowed(&candidate) {
            Some(_) => {
                rejected += 1;
                original.clone()
            }
            None => candidate,
        })
        .collect();

    Reconciled { bullets, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_bullet_markers() {
        assert_eq!(clean_bullet("- Built UI"), "Built UI");
        assert_eq!(clean_bullet("  • Built UI "), "Built UI");
        assert_eq!(clean_bullet("Built UI"), "Built UI");
        assert_eq!(clean_bullet(" - "), "");
    }

    #[test]
    fn test_vocabulary_from_skills_and_originals() {
        let originals = owned(&["Migrated views to React with TypeScript"]);
        let vocabulary = Vocabulary::new(["Jest", "REST  API"], &originals);

        assert!(vocabulary.allows("jest"));
        assert!(vocabulary.allows("rest api"));
        assert!(vocabulary.allows("TypeScript"));
        assert_eq!(vocabulary.first_disallowed("Migrated views to React"), None);
        assert_eq!(vocabulary.first_disallowed("Migrated views to Vue"), Some("Vue"));
    }

    #[test]
    fn test_summary_stop_words() {
        let vocabulary = Vocabulary::new(["React"], &[]);
        let text = "Software engineer with React experience";

        assert_eq!(vocabulary.first_disallowed(text), Some("Software"));
        assert_eq!(vocabulary.clone().for_summary().first_disallowed(text), Some("engineer"));
        assert_eq!(vocabulary.for_summary().first_disallowed("Frontend CV summary with React"), None);
    }

    #[test]
    fn test_reconcile_rejects_invented_terms() {
        let originals = owned(&["Migrated views to React", "Wrote tests with Jest"]);
        let vocabulary = Vocabulary::new(["Jest"], &originals);
        let rewrites = owned(&["- Migrated views to React", "- Wrote Cypress tests"]);

        let result = reconcile(&originals, &rewrites, &vocabulary);
        assert_eq!(result.bullets, owned(&["Migrated views to React", "Wrote tests with Jest"]));
        assert_eq!(result.rejected, 1);
    }

    #[test]
    fn test_reconcile_pads_and_truncates() {
        let originals = owned(&["Wrote docs", "Fixed bugs"]);
        let vocabulary = Vocabulary::new(Vec::<String>::new(), &originals);

        let short = reconcile(&originals, &owned(&["- Fixed docs", ""]), &vocabulary);
        assert_eq!(short.bullets, owned(&["Fixed docs", "Fixed bugs"]));
        assert_eq!(short.rejected, 0);

        let long = reconcile(&originals, &owned(&["Wrote docs", "Fixed bugs", "Fixed docs"]), &vocabulary);
        assert_eq!(long.bullets, originals);
    }
}
