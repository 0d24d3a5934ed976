//! Job signal extraction: categorized keyword sets derived from a posting

use crate::matching::lexicon::Canonicalizer;
use crate::matching::normalizer::normalize;
use crate::matching::segmenter::{Section, Segmenter};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Category a keyword is tagged with. Variant order is priority order:
/// a keyword seen in several categories keeps the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Must,
    Resp,
    Nice,
    /// Mentioned by an external parser without a category. Scored by weight
    /// only; never produced by [`SignalExtractor`].
    Mentioned,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Must => write!(f, "must"),
            Category::Resp => write!(f, "resp"),
            Category::Nice => write!(f, "nice"),
            Category::Mentioned => write!(f, "mentioned"),
        }
    }
}

impl From<Section> for Category {
    fn from(section: Section) -> Self {
        match section {
            Section::Must => Category::Must,
            Section::Nice => Category::Nice,
            Section::Resp => Category::Resp,
        }
    }
}

/// Categorized keywords of one job posting.
///
/// Each keyword carries exactly one category, so `must`, `nice` and `resp`
/// are pairwise disjoint and `all` is their union (plus any mentioned
/// keywords supplied by an external parser).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSignals {
    tags: BTreeMap<String, Category>,
}

impl JobSignals {
    pub fn builder() -> JobSignalsBuilder {
        JobSignalsBuilder::default()
    }

    /// Build from explicit must / nice / resp lists, resolving overlaps by
    /// priority (must, then resp, then nice).
    pub fn from_sets<M, N, R, S>(must: M, nice: N, resp: R) -> Self
    where
        M: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = Self::builder();
        builder.extend(Category::Must, must);
        builder.extend(Category::Nice, nice);
        builder.extend(Category::Resp, resp);
        builder.build()
    }

    pub fn category(&self, keyword: &str) -> Option<Category> {
        self.tags.get(keyword).copied()
    }

    /// Every keyword with its category, in keyword order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.tags.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Keywords tagged with `category`, sorted.
    pub fn keywords(&self, category: Category) -> Vec<&str> {
        self.iter()
            .filter(|&(_, c)| c == category)
            .map(|(k, _)| k)
            .collect()
    }

    pub fn must(&self) -> Vec<&str> {
        self.keywords(Category::Must)
    }

    pub fn nice(&self) -> Vec<&str> {
        self.keywords(Category::Nice)
    }

    pub fn resp(&self) -> Vec<&str> {
        self.keywords(Category::Resp)
    }

    /// Union of all categories, sorted.
    pub fn all(&self) -> Vec<&str> {
        self.tags.keys().map(|k| k.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn summary(&self) -> SignalsSummary {
        let owned = |category: Category| -> Vec<String> {
            self.keywords(category)
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        SignalsSummary {
            must: owned(Category::Must),
            nice: owned(Category::Nice),
            resp: owned(Category::Resp),
            mentioned: owned(Category::Mentioned),
        }
    }
}

/// Accumulates keyword tags, keeping the highest-priority category per
/// keyword.
#[derive(Debug, Default)]
pub struct JobSignalsBuilder {
    tags: BTreeMap<String, Category>,
}

impl JobSignalsBuilder {
    pub fn tag(&mut self, keyword: impl Into<String>, category: Category) -> &mut Self {
        self.tags
            .entry(keyword.into())
            .and_modify(|current| *current = (*current).min(category))
            .or_insert(category);
        self
    }

    pub fn extend<I, S>(&mut self, category: Category, keywords: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            self.tag(keyword, category);
        }
        self
    }

    pub fn build(self) -> JobSignals {
        JobSignals { tags: self.tags }
    }
}

/// Plain sorted lists, for display and the application log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalsSummary {
    pub must: Vec<String>,
    pub nice: Vec<String>,
    pub resp: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned: Vec<String>,
}

/// Derives [`JobSignals`] from raw posting text.
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    canonicalizer: Canonicalizer,
    segmenter: Segmenter,
}

impl SignalExtractor {
    pub fn new(canonicalizer: Canonicalizer, segmenter: Segmenter) -> Self {
        Self {
            canonicalizer,
            segmenter,
        }
    }

    pub fn extract(&self, job_text: &str) -> JobSignals {
        let normalized = normalize(job_text);
        let segments = self.segmenter.segment(&normalized);

        let mut builder = JobSignals::builder();
        for section in Section::ALL {
            let found = self.canonicalizer.find_keywords(segments.span(section));
            debug!("{} span: {} keyword(s)", section, found.len());
            builder.extend(Category::from(section), found);
        }

        builder.build()
    }
}
