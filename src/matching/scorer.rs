//! Weighted relevance scoring of text against job signals

use crate::error::{JobTailorError, Result};
use crate::matching::normalizer::normalize;
use crate::matching::signals::{Category, JobSignals};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-keyword weights. Keywords missing from the table use the default
/// weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    weights: BTreeMap<String, u32>,
}

impl WeightTable {
    pub fn new(weights: BTreeMap<String, u32>) -> Self {
        Self { weights }
    }

    pub fn get(&self, keyword: &str) -> Option<u32> {
        self.weights.get(keyword).copied()
    }

    pub fn validate(&self) -> Result<()> {
        match self.weights.iter().find(|(_, &w)| w == 0) {
            Some((keyword, _)) => Err(JobTailorError::Configuration(format!(
                "Weight for '{}' must be positive",
                keyword
            ))),
            None => Ok(()),
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        let table = [
            ("react", 6),
            ("typescript", 6),
            ("javascript", 4),
            ("state_management", 4),
            ("api", 4),
            ("rest", 4),
            ("testing", 3),
            ("performance", 3),
            ("accessibility", 2),
            ("html", 2),
            ("css", 2),
            ("git", 1),
            ("github", 1),
            ("hooks", 2),
            ("frontend", 1),
            ("backend_collab", 1),
            ("ux_ui", 1),
            ("jwt", 1),
        ];
        Self::new(table.iter().map(|&(k, w)| (k.to_string(), w)).collect())
    }
}

/// Bonus added once per matched keyword according to its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBonus {
    pub must: u32,
    pub resp: u32,
    pub nice: u32,
}

impl CategoryBonus {
    pub fn for_category(&self, category: Category) -> u32 {
        match category {
            Category::Must => self.must,
            Category::Resp => self.resp,
            Category::Nice => self.nice,
            Category::Mentioned => 0,
        }
    }
}

impl Default for CategoryBonus {
    fn default() -> Self {
        Self {
            must: 4,
            resp: 2,
            nice: 1,
        }
    }
}

/// Scores skill names and bullet lines against [`JobSignals`].
///
/// The scored text is matched against canonical keyword strings only, not
/// against lexicon variants: profile text is expected to use canonical
/// terminology already.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceScorer<'a> {
    weights: &'a WeightTable,
    bonus: CategoryBonus,
    default_weight: u32,
}

impl<'a> RelevanceScorer<'a> {
    pub fn new(weights: &'a WeightTable, bonus: CategoryBonus, default_weight: u32) -> Self {
        Self {
            weights,
            bonus,
            default_weight,
        }
    }

    pub fn weight(&self, keyword: &str) -> u32 {
        self.weights.get(keyword).unwrap_or(self.default_weight)
    }

    pub fn score(&self, text: &str, signals: &JobSignals) -> u32 {
        let normalized = normalize(text);

        signals
            .iter()
            .filter(|(keyword, _)| normalized.contains(keyword))
            .map(|(keyword, category)| self.weight(keyword).saturating_add(self.bonus.for_category(category)))
            .fold(0u32, u32::saturating_add)
    }
}
