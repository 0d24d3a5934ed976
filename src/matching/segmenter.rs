//! Section segmentation of job-posting text by heading markers

use crate::error::{JobTailorError, Result};
use crate::matching::normalizer::normalize;
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job-posting section a span is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Must,
    Nice,
    Resp,
}

impl Section {
    /// Declaration order, also the tie-break order for markers found at the
    /// same index.
    pub const ALL: [Section; 3] = [Section::Must, Section::Nice, Section::Resp];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Must => write!(f, "must"),
            Section::Nice => write!(f, "nice"),
            Section::Resp => write!(f, "resp"),
        }
    }
}

/// Heading phrases that open each section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMarkers {
    pub must: Vec<String>,
    pub nice: Vec<String>,
    pub resp: Vec<String>,
}

impl SectionMarkers {
    pub fn for_section(&self, section: Section) -> &[String] {
        match section {
            Section::Must => &self.must,
            Section::Nice => &self.nice,
            Section::Resp => &self.resp,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for section in Section::ALL {
            if let Some(blank) = self
                .for_section(section)
                .iter()
                .find(|m| normalize(m).is_empty())
            {
                return Err(JobTailorError::Configuration(format!(
                    "Blank {} section marker {:?}",
                    section, blank
                )));
            }
        }
        Ok(())
    }
}

impl Default for SectionMarkers {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            must: owned(&[
                "requisitos",
                "requirements",
                "must have",
                "must-have",
                "obligatorio",
                "mandatory",
                "you must",
                "we require",
                "mínimo",
                "minimum",
            ]),
            nice: owned(&[
                "deseable",
                "nice to have",
                "nice-to-have",
                "plus",
                "bonus",
                "preferred",
                "optional",
            ]),
            resp: owned(&[
                "responsabilidades",
                "responsibilities",
                "what you will do",
                "you will",
                "tareas",
                "role includes",
            ]),
        }
    }
}

/// The three spans of a segmented posting. All borrow from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    pub must: &'a str,
    pub nice: &'a str,
    pub resp: &'a str,
}

impl<'a> Segments<'a> {
    pub fn span(&self, section: Section) -> &'a str {
        match section {
            Section::Must => self.must,
            Section::Nice => self.nice,
            Section::Resp => self.resp,
        }
    }
}

/// Compiled section markers.
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// One automaton per section, in `Section::ALL` order.
    locators: Vec<Option<AhoCorasick>>,
}

impl Segmenter {
    pub fn new(markers: &SectionMarkers) -> Result<Self> {
        let mut locators = Vec::with_capacity(Section::ALL.len());

        for section in Section::ALL {
            let patterns: Vec<String> = markers
                .for_section(section)
                .iter()
                .map(|m| normalize(m))
                .filter(|m| !m.is_empty())
                .collect();

            if patterns.is_empty() {
                locators.push(None);
                continue;
            }

            // Leftmost semantics: the reported match is the one starting first.
            let automaton = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostFirst)
                .build(&patterns)
                .map_err(|e| {
                    JobTailorError::Configuration(format!(
                        "Failed to build {} section matcher: {}",
                        section, e
                    ))
                })?;
            locators.push(Some(automaton));
        }

        Ok(Self { locators })
    }

    /// Byte index of the earliest marker of `section` in `text`.
    pub fn locate(&self, section: Section, text: &str) -> Option<usize> {
        self.locators[section as usize]
            .as_ref()
            .and_then(|automaton| automaton.find(text))
            .map(|mat| mat.start())
    }

    /// Split normalized posting text into must / nice / resp spans.
    ///
    /// Without any marker the whole text is a requirement. A section without
    /// a marker gets an empty span, except `must`, which falls back to the
    /// whole text so required skills are never starved.
    pub fn segment<'a>(&self, text: &'a str) -> Segments<'a> {
        let mut cuts: Vec<(Section, usize)> = Section::ALL
            .iter()
            .filter_map(|&section| self.locate(section, text).map(|idx| (section, idx)))
            .collect();

        if cuts.is_empty() {
            return Segments {
                must: text,
                nice: "",
                resp: "",
            };
        }

        // Stable: equal indices keep declaration order.
        cuts.sort_by_key(|&(_, idx)| idx);

        let mut spans = ["", "", ""];
        for (i, &(section, start)) in cuts.iter().enumerate() {
            let end = cuts.get(i + 1).map_or(text.len(), |&(_, next)| next);
            spans[section as usize] = text[start..end].trim();
        }

        let [must, nice, resp] = spans;
        Segments {
            must: if must.is_empty() { text } else { must },
            nice,
            resp,
        }
    }
}
