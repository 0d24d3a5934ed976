//! Externally produced job-offer parse and bullet rewrites
//!
//! An offline parser (typically LLM-backed) can describe a posting as JSON.
//! Its output replaces keyword extraction and may carry rewritten bullets
//! and summaries, which are only accepted when they stay within the
//! profile's vocabulary.

pub mod guard;
pub mod summary;

use crate::error::{JobTailorError, Result};
use crate::matching::normalizer::normalize;
use crate::matching::signals::{Category, JobSignals};
use crate::profile::models::{CvMaster, Lang};
use summary::SummaryRewrite;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobEnrichment {
    #[serde(default)]
    pub role_title: String,
    #[serde(default = "default_seniority")]
    pub seniority: String,
    #[serde(default)]
    pub must_have: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Company -> rewritten bullets per language.
    #[serde(default)]
    pub bullets: BTreeMap<String, Rewrites>,
    /// Rewritten profile summary per language.
    #[serde(default)]
    pub summary: Rewrites,
}

/// Replacement lines per language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rewrites {
    #[serde(default)]
    pub es: Vec<String>,
    #[serde(default)]
    pub en: Vec<String>,
}

impl Rewrites {
    pub fn get(&self, lang: Lang) -> &[String] {
        match lang {
            Lang::Es => &self.es,
            Lang::En => &self.en,
        }
    }
}

fn default_seniority() -> String {
    "unknown".to_string()
}

impl JobEnrichment {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JobTailorError::InvalidInput(format!(
                "Enrichment file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let enrichment: JobEnrichment = serde_json::from_str(&content)
            .map_err(|e| JobTailorError::Enrichment(format!("{}: {}", path.display(), e)))?;

        info!(
            "Loaded enrichment for '{}' ({}): {} must, {} nice, {} responsibilities",
            enrichment.role_title,
            enrichment.seniority,
            enrichment.must_have.len(),
            enrichment.nice_to_have.len(),
            enrichment.responsibilities.len()
        );
        Ok(enrichment)
    }

    /// Signals equivalent to keyword extraction, with the same priority
    /// tagging. Terms are normalized; blank terms are dropped. General
    /// keywords that fall in no category are kept as mentioned.
    pub fn signals(&self) -> JobSignals {
        let terms = |items: &[String]| -> Vec<String> {
            items
                .iter()
                .map(|item| normalize(item))
                .filter(|term| !term.is_empty())
                .collect()
        };

        let mut builder = JobSignals::builder();
        builder
            .extend(Category::Must, terms(&self.must_have))
            .extend(Category::Resp, terms(&self.responsibilities))
            .extend(Category::Nice, terms(&self.nice_to_have))
            .extend(Category::Mentioned, terms(&self.keywords));
        builder.build()
    }

    /// Apply rewritten bullets for one experience on top of the selected
    /// originals. Without rewrites the selection is returned untouched.
    pub fn rewrite_bullets(
        &self,
        company: &str,
        lang: Lang,
        selected: &[String],
        allowed: &guard::Vocabulary,
    ) -> Vec<String> {
        let Some(rewrites) = self.bullets.get(company) else {
            return selected.to_vec();
        };

        let candidates = rewrites.get(lang);
        if candidates.is_empty() {
            return selected.to_vec();
        }

        let merged = guard::reconcile(selected, candidates, allowed);
        if merged.rejected > 0 {
            warn!(
                "{} rewritten bullet(s) for {} ({}) fell back to the original",
                merged.rejected, company, lang
            );
        }
        merged.bullets
    }

    /// Summary lines for `lang`: the guarded rewrite (or the profile's own
    /// summary) followed by a learning-interest line for job keywords the
    /// profile does not support.
    pub fn tailor_summary(&self, cv: &CvMaster, lang: Lang, signals: &JobSignals) -> Vec<String> {
        let vocabulary = summary::summary_vocabulary(cv, lang);

        let mut lines = match summary::check_rewrite(self.summary.get(lang), lang, &vocabulary) {
            SummaryRewrite::Accepted(lines) => lines,
            SummaryRewrite::Absent => cv.summary.get(lang).clone(),
            SummaryRewrite::Rejected(term) => {
                warn!("Rewritten {} summary uses '{}', keeping the original", lang, term);
                cv.summary.get(lang).clone()
            }
        };

        let missing = summary::missing_keywords(cv, signals);
        if let Some(line) = summary::learning_line(&missing, lang) {
            debug!("{} keyword(s) listed as learning interests", missing.len().min(summary::LEARNING_LIMIT));
            lines.push(line);
        }
        lines
    }
}
