//! Personal profile record (`cv_master.json`)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Output language of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Es, Lang::En];

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Lang::Es => "ES",
            Lang::En => "EN",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which languages a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LangMode {
    Es,
    En,
    Both,
}

impl LangMode {
    pub fn languages(&self) -> Vec<Lang> {
        match self {
            LangMode::Es => vec![Lang::Es],
            LangMode::En => vec![Lang::En],
            LangMode::Both => Lang::ALL.to_vec(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LangMode::Es => "es",
            LangMode::En => "en",
            LangMode::Both => "both",
        }
    }
}

impl fmt::Display for LangMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A value given in both languages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct I18n<T> {
    pub es: T,
    pub en: T,
}

impl<T> I18n<T> {
    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::Es => &self.es,
            Lang::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub linkedin: I18n<String>,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub links: Links,
    pub location: I18n<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: I18n<String>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub location: I18n<String>,
    pub role: I18n<String>,
    pub start_year: i32,
    pub end_year: i32,
    pub bullets: I18n<Vec<String>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Experience {
    pub fn bullets(&self, lang: Lang) -> &[String] {
        self.bullets.get(lang)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: I18n<String>,
    pub institution: String,
    pub year: i32,
    pub location: I18n<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub apis: Vec<String>,
    #[serde(default)]
    pub tooling: Vec<String>,
}

impl Skills {
    /// The full inventory: core, then APIs, then tooling.
    pub fn inventory(&self) -> Vec<String> {
        self.core
            .iter()
            .chain(&self.apis)
            .chain(&self.tooling)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: I18n<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvMaster {
    #[serde(default)]
    pub meta: BTreeMap<String, serde_json::Value>,
    pub profile: Profile,
    pub summary: I18n<Vec<String>>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub languages: Vec<Language>,
}

impl CvMaster {
    pub fn title(&self, lang: Lang) -> &str {
        self.profile.title.get(lang)
    }

    /// Profile name as used in output file names.
    pub fn file_stem(&self) -> String {
        self.profile.name.split_whitespace().collect::<Vec<_>>().join("_")
    }
}
