//! Keyword lexicon and synonym canonicalization

use crate::error::{JobTailorError, Result};
use crate::matching::normalizer::normalize;
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Canonical keyword -> ordered surface variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordLexicon {
    entries: BTreeMap<String, Vec<String>>,
}

impl KeywordLexicon {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn variants(&self, canonical: &str) -> Option<&[String]> {
        self.entries.get(canonical).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        for (canonical, variants) in &self.entries {
            if normalize(canonical).is_empty() {
                return Err(JobTailorError::Configuration(format!(
                    "Lexicon keyword '{}' is empty after normalization",
                    canonical
                )));
            }
            if variants.is_empty() {
                return Err(JobTailorError::Configuration(format!(
                    "Lexicon keyword '{}' has no variants",
                    canonical
                )));
            }
            if let Some(blank) = variants.iter().find(|v| normalize(v).is_empty()) {
                return Err(JobTailorError::Configuration(format!(
                    "Lexicon keyword '{}' has a blank variant {:?}",
                    canonical, blank
                )));
            }
        }
        Ok(())
    }
}

impl Default for KeywordLexicon {
    fn default() -> Self {
        let table: &[(&str, &[&str])] = &[
            ("react", &["react", "react.js", "reactjs"]),
            ("typescript", &["typescript", "ts"]),
            ("javascript", &["javascript", "js", "ecmascript"]),
            ("html", &["html", "html5"]),
            ("css", &["css", "css3", "scss", "sass"]),
            (
                "api",
                &["api", "apis", "api integration", "integración con api", "integración de api"],
            ),
            ("rest", &["rest", "rest api", "restful"]),
            ("jwt", &["jwt", "json web token"]),
            ("git", &["git", "gitflow"]),
            ("github", &["github", "git hub"]),
            (
                "testing",
                &[
                    "testing",
                    "tests",
                    "unit tests",
                    "integration tests",
                    "e2e",
                    "qa",
                    "jest",
                    "cypress",
                    "playwright",
                ],
            ),
            (
                "performance",
                &["performance", "web performance", "optimización", "optimization", "lighthouse"],
            ),
            ("accessibility", &["accessibility", "a11y", "wcag", "accesibilidad"]),
            (
                "state_management",
                &["redux", "rtk", "rtk query", "state management", "manejo de estado"],
            ),
            ("hooks", &["hooks", "react hooks"]),
            ("frontend", &["frontend", "front end", "front-end"]),
            (
                "backend_collab",
                &[
                    "backend",
                    "back-end",
                    "api teams",
                    "collaborate with backend",
                    "colaboración con backend",
                ],
            ),
            ("ux_ui", &["ui", "ux", "design", "figma", "diseño"]),
        ];

        Self::new(
            table
                .iter()
                .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
                .collect(),
        )
    }
}

/// Compiled lexicon: finds every canonical keyword whose variants occur in a
/// normalized span.
///
/// Matching is plain substring search over the normalized text, so a variant
/// embedded in a longer word still counts.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    automaton: Option<AhoCorasick>,
    /// Pattern id -> canonical keyword.
    owners: Vec<String>,
    implied: BTreeMap<String, Vec<String>>,
}

impl Canonicalizer {
    pub fn new(lexicon: &KeywordLexicon, implied: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut owners = Vec::new();

        for (canonical, variants) in lexicon.iter() {
            for variant in variants {
                let variant = normalize(variant);
                if variant.is_empty() {
                    continue;
                }
                patterns.push(variant);
                owners.push(canonical.to_string());
            }
        }

        // Overlapping search needs standard semantics so that every variant
        // occurrence is reported, including ones nested in longer variants.
        let automaton = if patterns.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::Standard)
                    .build(&patterns)
                    .map_err(|e| {
                        JobTailorError::Configuration(format!(
                            "Failed to build keyword matcher: {}",
                            e
                        ))
                    })?,
            )
        };

        Ok(Self {
            automaton,
            owners,
            implied: implied.clone(),
        })
    }

    /// Canonical keywords found in an already-normalized span, with implied
    /// keywords (e.g. `rest` -> `api`) added.
    pub fn find_keywords(&self, normalized_span: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();

        if let Some(automaton) = &self.automaton {
            for mat in automaton.find_overlapping_iter(normalized_span) {
                found.insert(self.owners[mat.pattern().as_usize()].clone());
            }
        }

        let implied: Vec<String> = self
            .implied
            .iter()
            .filter(|(trigger, _)| found.contains(trigger.as_str()))
            .flat_map(|(_, targets)| targets.iter().cloned())
            .collect();
        found.extend(implied);

        found
    }

    pub fn pattern_count(&self) -> usize {
        self.owners.len()
    }
}

/// Default implication table: a REST requirement implies API work.
pub fn default_implied() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([("rest".to_string(), vec!["api".to_string()])])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonicalizer() -> Canonicalizer {
        Canonicalizer::new(&KeywordLexicon::default(), &default_implied()).unwrap()
    }

    fn found(text: &str) -> Vec<String> {
        canonicalizer()
            .find_keywords(&normalize(text))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_default_lexicon_is_valid() {
        let lexicon = KeywordLexicon::default();
        assert_eq!(lexicon.len(), 18);
        assert!(lexicon.validate().is_ok());
        assert_eq!(lexicon.variants("rest").unwrap()[2], "restful");
    }

    #[test]
    fn test_variants_map_to_canonical() {
        // "reactjs" also carries the "js" variant of javascript.
        assert_eq!(
            found("Experience with ReactJS and Redux"),
            vec!["javascript", "react", "state_management"]
        );
        assert_eq!(found("Diseño en Figma"), vec!["ux_ui"]);
    }

    #[test]
    fn test_rest_implies_api() {
        let keywords = found("Consume RESTful services");
        assert!(keywords.contains(&"rest".to_string()));
        assert!(keywords.contains(&"api".to_string()));
    }

    #[test]
    fn test_substring_match_inside_longer_word() {
        // "ts" inside "tests" triggers typescript; the quirk is kept on purpose.
        let keywords = found("write tests");
        assert!(keywords.contains(&"testing".to_string()));
        assert!(keywords.contains(&"typescript".to_string()));
    }

    #[test]
    fn test_nested_variants_are_all_reported() {
        // "github" contains "git": both canonicals are found.
        assert_eq!(found("github"), vec!["git", "github"]);
    }

    #[test]
    fn test_empty_span_finds_nothing() {
        assert!(canonicalizer().find_keywords("").is_empty());
    }

    #[test]
    fn test_validate_rejects_blank_variant() {
        let lexicon = KeywordLexicon::new(BTreeMap::from([(
            "rust".to_string(),
            vec!["rust".to_string(), " ! ".to_string()],
        )]));
        assert!(matches!(
            lexicon.validate(),
            Err(JobTailorError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_lexicon_matches_nothing() {
        let empty = Canonicalizer::new(&KeywordLexicon::new(BTreeMap::new()), &BTreeMap::new()).unwrap();
        assert_eq!(empty.pattern_count(), 0);
        assert!(empty.find_keywords("react rest api").is_empty());
    }
}
