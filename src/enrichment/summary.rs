//! Profile summary rewrites and learning interests
//!
//! Job keywords the profile does not support are never claimed as
//! experience. They only show up in a closing learning-interest line.

use super::guard::{clean_bullet, Vocabulary};
use crate::matching::normalizer::normalize;
use crate::matching::signals::JobSignals;
use crate::profile::models::{CvMaster, Lang};

/// Most keywords listed in the learning-interest line.
pub const LEARNING_LIMIT: usize = 5;

pub fn learning_label(lang: Lang) -> &'static str {
    match lang {
        Lang::Es => "Interesada en aprender / profundizar",
        Lang::En => "Interested in learning / growing in",
    }
}

/// `"{label}: a, b"` for up to `LEARNING_LIMIT` keywords, or `None`.
pub fn learning_line(missing: &[String], lang: Lang) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    let items: Vec<&str> = missing
        .iter()
        .take(LEARNING_LIMIT)
        .map(String::as_str)
        .collect();
    Some(format!("{}: {}", learning_label(lang), items.join(", ")))
}

fn is_learning_line(line: &str, lang: Lang) -> bool {
    line.to_lowercase()
        .starts_with(&learning_label(lang).to_lowercase())
}

/// Skills, experience tags and bullets in both languages, normalized.
fn profile_terms(cv: &CvMaster) -> Vec<String> {
    let mut terms: Vec<String> = cv.skills.inventory().iter().map(|s| normalize(s)).collect();
    for exp in &cv.experience {
        terms.extend(exp.tags.iter().map(|t| normalize(t)));
        for lang in Lang::ALL {
            terms.extend(exp.bullets(lang).iter().map(|b| normalize(b)));
        }
    }
    terms.retain(|t| !t.is_empty());
    terms
}

/// Must-have then nice-to-have keywords with no profile term containing
/// them or contained in them.
pub fn missing_keywords(cv: &CvMaster, signals: &JobSignals) -> Vec<String> {
    let terms = profile_terms(cv);

    signals
        .must()
        .into_iter()
        .chain(signals.nice())
        .filter(|keyword| {
            !terms
                .iter()
                .any(|term| term.contains(keyword) || keyword.contains(term.as_str()))
        })
        .map(str::to_string)
        .collect()
}

/// Terms a rewritten summary in `lang` may use.
pub fn summary_vocabulary(cv: &CvMaster, lang: Lang) -> Vocabulary {
    let inventory = cv.skills.inventory();
    let tags = cv.experience.iter().flat_map(|exp| exp.tags.iter());

    let mut originals: Vec<String> = cv.summary.get(lang).clone();
    for exp in &cv.experience {
        for lang in Lang::ALL {
            originals.extend(exp.bullets(lang).iter().cloned());
        }
    }

    Vocabulary::new(inventory.iter().chain(tags), &originals).for_summary()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryRewrite {
    /// No usable rewrite lines.
    Absent,
    Accepted(Vec<String>),
    /// First term outside the vocabulary.
    Rejected(String),
}

/// Clean rewrite lines and check them against `vocabulary`.
/// Learning-interest lines are dropped; they are rebuilt from the profile.
pub fn check_rewrite(rewrite: &[String], lang: Lang, vocabulary: &Vocabulary) -> SummaryRewrite {
    let lines: Vec<String> = rewrite
        .iter()
        .map(|line| clean_bullet(line))
        .filter(|line| !line.is_empty() && !is_learning_line(line, lang))
        .collect();

    if lines.is_empty() {
        return SummaryRewrite::Absent;
    }
    match lines.iter().find_map(|line| vocabulary.first_disallowed(line)) {
        Some(term) => SummaryRewrite::Rejected(term.to_string()),
        None => SummaryRewrite::Accepted(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::loader::fixtures::sample_cv;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_learning_line_caps_items() {
        let missing = owned(&["docker", "graphql", "kubernetes", "rust", "vue", "webpack"]);

        assert_eq!(
            learning_line(&missing, Lang::En).unwrap(),
            "Interested in learning / growing in: docker, graphql, kubernetes, rust, vue"
        );
        assert_eq!(
            learning_line(&owned(&["vue"]), Lang::Es).unwrap(),
            "Interesada en aprender / profundizar: vue"
        );
        assert_eq!(learning_line(&[], Lang::En), None);
    }

    #[test]
    fn test_missing_keywords_against_profile() {
        let cv = sample_cv();
        let signals = JobSignals::from_sets(
            ["react", "vue", "typescript"],
            ["graphql", "jest"],
            ["performance", "kubernetes"],
        );

        // responsibilities never count as missing
        assert_eq!(missing_keywords(&cv, &signals), vec!["vue", "graphql"]);
    }

    #[test]
    fn test_missing_keywords_match_inside_longer_terms() {
        let cv = sample_cv();
        let signals = JobSignals::from_sets(["rest api integration", "unit testing"], Vec::<&str>::new(), Vec::<&str>::new());

        // "rest api" is contained in the first keyword, the second sits in a bullet
        assert!(missing_keywords(&cv, &signals).is_empty());
    }

    #[test]
    fn test_summary_vocabulary_uses_profile_text() {
        let vocabulary = summary_vocabulary(&sample_cv(), Lang::En);

        assert_eq!(vocabulary.first_disallowed("Frontend developer focused on React"), None);
        assert_eq!(vocabulary.first_disallowed("Migrated views with Jest"), None);
        assert_eq!(vocabulary.first_disallowed("Senior Vue developer"), Some("Senior"));
    }

    #[test]
    fn test_check_rewrite() {
        let vocabulary = summary_vocabulary(&sample_cv(), Lang::En);

        let accepted = check_rewrite(
            &owned(&["- Frontend developer focused on React", "- Interested in learning / growing in: Vue", " "]),
            Lang::En,
            &vocabulary,
        );
        assert_eq!(accepted, SummaryRewrite::Accepted(owned(&["Frontend developer focused on React"])));

        let rejected = check_rewrite(&owned(&["- Expert in Angular"]), Lang::En, &vocabulary);
        assert_eq!(rejected, SummaryRewrite::Rejected("Expert".to_string()));

        assert_eq!(check_rewrite(&[], Lang::En, &vocabulary), SummaryRewrite::Absent);
    }
}
