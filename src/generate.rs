//! End-to-end generation of a tailored application

use crate::config::Config;
use crate::enrichment::guard::Vocabulary;
use crate::enrichment::JobEnrichment;
use crate::error::Result;
use crate::input::InputManager;
use crate::matching::ranker::{score_all, BulletCap};
use crate::matching::signals::{JobSignals, SignalsSummary};
use crate::matching::MatchingEngine;
use crate::output::render::{cover_letter_file_name, cv_file_name};
use crate::output::summary::{build_summary, summary_file_name};
use crate::output::{
    append_to_index_csv, append_to_index_jsonl, ApplicationRecord, CoverLetter, CvDocument,
    DocumentRenderer,
};
use crate::profile::{load_cv_master, CvMaster, Lang, LangMode};
use chrono::{Local, NaiveDateTime};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub job_text: PathBuf,
    pub job_url: String,
    pub company: String,
    pub role: String,
    pub cv_master: PathBuf,
    pub lang: LangMode,
    pub out_dir: PathBuf,
    /// Enrichment JSON replacing keyword extraction.
    pub signals: Option<PathBuf>,
    pub max_bullets: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub output_dir: PathBuf,
    pub files: Vec<String>,
    pub signals: SignalsSummary,
    pub record: ApplicationRecord,
}

/// Content for one language, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePlan {
    pub lang: Lang,
    /// Summary lines used in the CV.
    pub summary_lines: Vec<String>,
    /// Plain-text summary file content.
    pub summary: String,
    /// Selected bullets, aligned with the profile's experience list.
    pub bullets: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub signals: JobSignals,
    pub skills: Vec<String>,
    pub languages: Vec<LanguagePlan>,
}

/// Rank skills once, then select (and optionally rewrite) bullets for every
/// experience in every requested language. With enrichment the summary is
/// tailored too.
pub fn plan(
    engine: &MatchingEngine,
    cv: &CvMaster,
    signals: JobSignals,
    languages: &[Lang],
    cap: BulletCap,
    enrichment: Option<&JobEnrichment>,
) -> GenerationPlan {
    let inventory = cv.skills.inventory();
    let skills = engine.rank_skills(&inventory, &signals);

    let languages = languages
        .iter()
        .map(|&lang| {
            let bullets = cv
                .experience
                .iter()
                .map(|exp| {
                    let selected = engine.select_bullets(exp.bullets(lang), &signals, cap);
                    match enrichment {
                        Some(enrichment) => {
                            let vocabulary = Vocabulary::new(&inventory, &selected);
                            enrichment.rewrite_bullets(&exp.company, lang, &selected, &vocabulary)
                        }
                        None => selected,
                    }
                })
                .collect();

            let summary_lines = match enrichment {
                Some(enrichment) => enrichment.tailor_summary(cv, lang, &signals),
                None => cv.summary.get(lang).clone(),
            };

            LanguagePlan {
                lang,
                summary: build_summary(cv, lang, &summary_lines),
                summary_lines,
                bullets,
            }
        })
        .collect();

    GenerationPlan {
        signals,
        skills,
        languages,
    }
}

/// Scored view of a profile against one posting, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub signals: SignalsSummary,
    pub skills: Vec<ScoredLine>,
    pub experience: Vec<ExperienceRanking>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLine {
    pub text: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceRanking {
    pub company: String,
    pub es: Vec<ScoredLine>,
    pub en: Vec<ScoredLine>,
}

pub fn rank_profile(engine: &MatchingEngine, cv: &CvMaster, signals: &JobSignals) -> RankingReport {
    let scorer = engine.scorer();
    let scored = |items: &[String]| -> Vec<ScoredLine> {
        score_all(items, signals, &scorer)
            .into_iter()
            .map(|item| ScoredLine {
                text: item.text.to_string(),
                score: item.score,
            })
            .collect()
    };

    RankingReport {
        signals: signals.summary(),
        skills: scored(&cv.skills.inventory()),
        experience: cv
            .experience
            .iter()
            .map(|exp| ExperienceRanking {
                company: exp.company.clone(),
                es: scored(exp.bullets(Lang::Es)),
                en: scored(exp.bullets(Lang::En)),
            })
            .collect(),
    }
}

/// Directory name for one run: `{YYYY-MM-DD_HHMM}_{company}_{role}`.
pub fn output_dir_name(at: NaiveDateTime, company: &str, role: &str) -> String {
    format!(
        "{}_{}_{}",
        at.format("%Y-%m-%d_%H%M"),
        company.replace(' ', "_"),
        role.replace(' ', "_")
    )
}

pub struct Generator {
    engine: MatchingEngine,
    renderer: Box<dyn DocumentRenderer>,
}

impl Generator {
    pub fn new(config: &Config, renderer: Box<dyn DocumentRenderer>) -> Result<Self> {
        Ok(Self {
            engine: MatchingEngine::new(&config.matching)?,
            renderer,
        })
    }

    pub async fn run(&self, request: &GenerateRequest) -> Result<GenerationOutcome> {
        let cap = match request.max_bullets {
            Some(count) => BulletCap::new(count)?,
            None => BulletCap::All,
        };

        let job_text = InputManager::read_job_text(&request.job_text).await?;
        let cv = load_cv_master(&request.cv_master)?;
        let enrichment = request
            .signals
            .as_deref()
            .map(JobEnrichment::load)
            .transpose()?;

        let signals = match &enrichment {
            Some(enrichment) => enrichment.signals(),
            None => self.engine.extract(&job_text),
        };
        info!(
            "Signals: {} must, {} nice, {} responsibilities",
            signals.must().len(),
            signals.nice().len(),
            signals.resp().len()
        );

        let plan = plan(
            &self.engine,
            &cv,
            signals,
            &request.lang.languages(),
            cap,
            enrichment.as_ref(),
        );

        let started = Local::now().naive_local();
        let output_dir = request
            .out_dir
            .join(output_dir_name(started, &request.company, &request.role));
        fs::create_dir_all(&output_dir)?;

        self.write_documents(&output_dir, &cv, &plan, request)?;

        let files = list_files(&output_dir)?;
        let summary = plan.signals.summary();
        let record = ApplicationRecord {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            company: request.company.clone(),
            role: request.role.clone(),
            lang: request.lang.to_string(),
            job_text_path: absolute(&request.job_text),
            job_url: request.job_url.clone(),
            output_dir: absolute(&output_dir),
            files_generated: files.clone(),
            must_keywords: summary.must.clone(),
            nice_keywords: summary.nice.clone(),
            resp_keywords: summary.resp.clone(),
            status: "draft".to_string(),
            notes: String::new(),
        };

        append_to_index_csv(&request.out_dir.join("index.csv"), &record)?;
        append_to_index_jsonl(&request.out_dir.join("index.jsonl"), &record)?;
        info!("Generated {} file(s) in {}", files.len(), output_dir.display());

        Ok(GenerationOutcome {
            output_dir,
            files,
            signals: summary,
            record,
        })
    }

    fn write_documents(
        &self,
        dir: &Path,
        cv: &CvMaster,
        plan: &GenerationPlan,
        request: &GenerateRequest,
    ) -> Result<()> {
        let extension = self.renderer.extension();

        for language in &plan.languages {
            let lang = language.lang;

            fs::write(dir.join(summary_file_name(lang)), &language.summary)?;

            let document = CvDocument {
                cv,
                lang,
                summary: &language.summary_lines,
                skills: &plan.skills,
                bullets: &language.bullets,
            };
            let cv_path = dir.join(cv_file_name(cv, lang, extension));
            fs::write(&cv_path, self.renderer.render_cv(&document)?)?;
            debug!("Wrote {}", cv_path.display());

            let letter = CoverLetter {
                cv,
                lang,
                company: &request.company,
                role: &request.role,
            };
            let letter_path = dir.join(cover_letter_file_name(cv, lang, extension));
            fs::write(&letter_path, self.renderer.render_cover_letter(&letter)?)?;
            debug!("Wrote {}", letter_path.display());
        }

        Ok(())
    }
}

/// Names of the regular files in `dir`, sorted.
fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort();
    Ok(files)
}

fn absolute(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
