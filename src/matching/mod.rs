//! Keyword-signal extraction and relevance ranking

pub mod lexicon;
pub mod normalizer;
pub mod ranker;
pub mod scorer;
pub mod segmenter;
pub mod signals;

use crate::error::{JobTailorError, Result};
use lexicon::{Canonicalizer, KeywordLexicon};
use log::debug;
use ranker::BulletCap;
use scorer::{CategoryBonus, RelevanceScorer, WeightTable};
use segmenter::{SectionMarkers, Segmenter};
use serde::{Deserialize, Serialize};
use signals::{JobSignals, SignalExtractor};
use std::collections::BTreeMap;

/// Static matching tables. Loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub default_weight: u32,
    pub bonus: CategoryBonus,
    pub lexicon: KeywordLexicon,
    pub markers: SectionMarkers,
    pub weights: WeightTable,
    /// Keywords implied by another keyword found in the same span.
    #[serde(default = "lexicon::default_implied")]
    pub implied: BTreeMap<String, Vec<String>>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_weight: 1,
            bonus: CategoryBonus::default(),
            lexicon: KeywordLexicon::default(),
            markers: SectionMarkers::default(),
            weights: WeightTable::default(),
            implied: lexicon::default_implied(),
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<()> {
        self.lexicon.validate()?;
        self.markers.validate()?;
        self.weights.validate()?;
        if self.default_weight == 0 {
            return Err(JobTailorError::Configuration(
                "default_weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Matching tables compiled into automata, ready for repeated use.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    config: MatchingConfig,
    extractor: SignalExtractor,
}

impl MatchingEngine {
    pub fn new(config: &MatchingConfig) -> Result<Self> {
        config.validate()?;

        let canonicalizer = Canonicalizer::new(&config.lexicon, &config.implied)?;
        let segmenter = Segmenter::new(&config.markers)?;
        debug!(
            "Matching engine ready: {} keywords, {} variants",
            config.lexicon.len(),
            canonicalizer.pattern_count()
        );

        Ok(Self {
            config: config.clone(),
            extractor: SignalExtractor::new(canonicalizer, segmenter),
        })
    }

    pub fn scorer(&self) -> RelevanceScorer<'_> {
        RelevanceScorer::new(
            &self.config.weights,
            self.config.bonus,
            self.config.default_weight,
        )
    }

    pub fn extract(&self, job_text: &str) -> JobSignals {
        self.extractor.extract(job_text)
    }

    pub fn score(&self, text: &str, signals: &JobSignals) -> u32 {
        self.scorer().score(text, signals)
    }

    pub fn rank_skills<S: AsRef<str>>(&self, skills: &[S], signals: &JobSignals) -> Vec<String> {
        ranker::rank_skills(skills, signals, &self.scorer())
    }

    pub fn select_bullets<S: AsRef<str>>(
        &self,
        bullets: &[S],
        signals: &JobSignals,
        cap: BulletCap,
    ) -> Vec<String> {
        ranker::select_bullets(bullets, signals, cap, &self.scorer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_ranking() {
        let engine = MatchingEngine::new(&MatchingConfig::default()).unwrap();
        let signals = engine.extract(
            "Must have: React and TypeScript.\nNice to have: performance tuning.\nYou will: write docs",
        );

        let skills = engine.rank_skills(&["Git", "CSS", "TypeScript", "React"], &signals);
        assert_eq!(skills[..2], ["TypeScript", "React"]);

        let bullets = engine.select_bullets(
            &["Wrote docs", "Improved performance by 30%", "Migrated to React"],
            &signals,
            BulletCap::Limit(2),
        );
        assert_eq!(bullets, vec!["Migrated to React", "Improved performance by 30%"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = MatchingConfig::default();
        config.default_weight = 0;
        assert!(MatchingEngine::new(&config).is_err());

        let mut config = MatchingConfig::default();
        config.markers.nice.push("  ".to_string());
        assert!(MatchingEngine::new(&config).is_err());
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = MatchingConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: MatchingConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
