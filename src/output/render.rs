//! Document rendering of the tailored CV and cover letter

use crate::enrichment::guard::clean_bullet;
use crate::error::{JobTailorError, Result};
use crate::profile::models::{CvMaster, Lang};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Markdown,
    Json,
}

/// Everything a renderer needs for one CV in one language.
#[derive(Debug, Clone, Copy)]
pub struct CvDocument<'a> {
    pub cv: &'a CvMaster,
    pub lang: Lang,
    /// Summary lines, tailored or the profile's own.
    pub summary: &'a [String],
    /// Skill inventory in ranked order.
    pub skills: &'a [String],
    /// Selected bullets, aligned with `cv.experience`.
    pub bullets: &'a [Vec<String>],
}

#[derive(Debug, Clone, Copy)]
pub struct CoverLetter<'a> {
    pub cv: &'a CvMaster,
    pub lang: Lang,
    pub company: &'a str,
    pub role: &'a str,
}

/// Turns tailored content into document bytes.
pub trait DocumentRenderer {
    fn render_cv(&self, doc: &CvDocument<'_>) -> Result<Vec<u8>>;
    fn render_cover_letter(&self, letter: &CoverLetter<'_>) -> Result<Vec<u8>>;
    fn extension(&self) -> &'static str;
}

pub fn renderer_for(format: DocumentFormat) -> Box<dyn DocumentRenderer> {
    match format {
        DocumentFormat::Markdown => Box::new(MarkdownRenderer),
        DocumentFormat::Json => Box::new(JsonRenderer::new(true)),
    }
}

/// CV file name, e.g. `Ana_Perez_CV_EN.md`.
pub fn cv_file_name(cv: &CvMaster, lang: Lang, extension: &str) -> String {
    format!("{}_CV_{}.{}", cv.file_stem(), lang.suffix(), extension)
}

pub fn cover_letter_file_name(cv: &CvMaster, lang: Lang, extension: &str) -> String {
    match lang {
        Lang::Es => format!("{}_Carta_de_Presentacion_ES.{}", cv.file_stem(), extension),
        Lang::En => format!("{}_CoverLetter_EN.{}", cv.file_stem(), extension),
    }
}

struct Headings {
    summary: &'static str,
    experience: &'static str,
    skills: &'static str,
    education: &'static str,
    languages: &'static str,
}

fn headings(lang: Lang) -> Headings {
    match lang {
        Lang::Es => Headings {
            summary: "Resumen",
            experience: "Experiencia",
            skills: "Habilidades",
            education: "Educación",
            languages: "Idiomas",
        },
        Lang::En => Headings {
            summary: "Summary",
            experience: "Experience",
            skills: "Skills",
            education: "Education",
            languages: "Languages",
        },
    }
}

/// Summary lines joined into one paragraph, list markers removed.
fn summary_paragraph(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| clean_bullet(line))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn experience_heading(cv: &CvMaster, lang: Lang, index: usize) -> String {
    let exp = &cv.experience[index];
    format!(
        "{}, {}. {} - {}-{}",
        exp.role.get(lang),
        exp.company,
        exp.location.get(lang),
        exp.start_year,
        exp.end_year
    )
}

/// Selected bullets for experience `index`, or all of its bullets when the
/// selection does not cover it.
fn experience_bullets(doc: &CvDocument<'_>, index: usize) -> Vec<String> {
    let bullets: &[String] = match doc.bullets.get(index) {
        Some(selected) => selected,
        None => doc.cv.experience[index].bullets(doc.lang),
    };
    bullets
        .iter()
        .map(|b| clean_bullet(b))
        .filter(|b| !b.is_empty())
        .collect()
}

fn education_lines(cv: &CvMaster, lang: Lang) -> Vec<String> {
    cv.education
        .iter()
        .map(|ed| {
            format!(
                "{} — {}, {}. {}",
                ed.degree.get(lang),
                ed.institution,
                ed.year,
                ed.location.get(lang)
            )
        })
        .collect()
}

fn language_lines(cv: &CvMaster, lang: Lang) -> Vec<String> {
    cv.languages
        .iter()
        .map(|l| format!("{} — {}", l.name, l.level.get(lang)))
        .collect()
}

fn cover_letter_paragraphs(letter: &CoverLetter<'_>) -> Vec<String> {
    let title = letter.cv.title(letter.lang);
    match letter.lang {
        Lang::Es => vec![
            format!("Estimado equipo de {},", letter.company),
            format!(
                "Me gustaría postular al cargo de {}. Me desempeño como {} y tengo experiencia trabajando en aplicaciones web complejas, priorizando mantenibilidad, performance y calidad.",
                letter.role, title
            ),
            "He participado en el desarrollo y mantención de software, implementación de nuevas funcionalidades, integración con APIs, refactorización y optimización, colaborando de forma cercana con equipos multidisciplinarios.".to_string(),
            "Quedo atento/a a coordinar una entrevista. Muchas gracias por su tiempo.".to_string(),
            "Saludos,".to_string(),
        ],
        Lang::En => vec![
            format!("Dear {} team,", letter.company),
            format!(
                "I'm interested in applying for the {} position. I work as a {}, experienced in complex web applications, with an emphasis on maintainability, performance, and quality.",
                letter.role, title
            ),
            "I have worked on software development and maintenance, implemented new features, integrated APIs and business logic, and improved code through refactoring and optimization, collaborating closely with cross-functional teams.".to_string(),
            "I'd be happy to connect and share more. Thank you for your time and consideration.".to_string(),
            "Sincerely,".to_string(),
        ],
    }
}

/// Markdown documents.
pub struct MarkdownRenderer;

impl DocumentRenderer for MarkdownRenderer {
    fn render_cv(&self, doc: &CvDocument<'_>) -> Result<Vec<u8>> {
        let cv = doc.cv;
        let lang = doc.lang;
        let contact = &cv.profile.contact;
        let h = headings(lang);
        let mut out = String::new();

        writeln!(out, "# {}", cv.profile.name).map_err(render_error)?;
        writeln!(out, "**{}**", cv.title(lang)).map_err(render_error)?;
        writeln!(out).map_err(render_error)?;
        writeln!(
            out,
            "{} | {} | {}  ",
            contact.email,
            contact.phone,
            contact.location.get(lang)
        )
        .map_err(render_error)?;
        writeln!(
            out,
            "[LinkedIn]({}) | [GitHub]({})",
            contact.links.linkedin.get(lang),
            contact.links.github
        )
        .map_err(render_error)?;

        writeln!(out, "\n## {}\n", h.summary).map_err(render_error)?;
        writeln!(out, "{}", summary_paragraph(doc.summary)).map_err(render_error)?;

        writeln!(out, "\n## {}", h.experience).map_err(render_error)?;
        for index in 0..cv.experience.len() {
            writeln!(out, "\n### {}\n", experience_heading(cv, lang, index)).map_err(render_error)?;
            for bullet in experience_bullets(doc, index) {
                writeln!(out, "- {}", bullet).map_err(render_error)?;
            }
        }

        writeln!(out, "\n## {}\n", h.skills).map_err(render_error)?;
        writeln!(out, "{}", doc.skills.join(", ")).map_err(render_error)?;

        writeln!(out, "\n## {}\n", h.education).map_err(render_error)?;
        for line in education_lines(cv, lang) {
            writeln!(out, "- {}", line).map_err(render_error)?;
        }

        writeln!(out, "\n## {}\n", h.languages).map_err(render_error)?;
        for line in language_lines(cv, lang) {
            writeln!(out, "- {}", line).map_err(render_error)?;
        }

        Ok(out.into_bytes())
    }

    fn render_cover_letter(&self, letter: &CoverLetter<'_>) -> Result<Vec<u8>> {
        let cv = letter.cv;
        let contact = &cv.profile.contact;
        let mut out = String::new();

        writeln!(out, "{}  ", cv.profile.name).map_err(render_error)?;
        writeln!(out, "{}  ", cv.title(letter.lang)).map_err(render_error)?;
        writeln!(out, "{} • {}", contact.email, contact.phone).map_err(render_error)?;
        for paragraph in cover_letter_paragraphs(letter) {
            writeln!(out, "\n{}", paragraph).map_err(render_error)?;
        }
        writeln!(out, "{}", cv.profile.name).map_err(render_error)?;

        Ok(out.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

fn render_error(e: std::fmt::Error) -> JobTailorError {
    JobTailorError::Render(e.to_string())
}

/// Structured output for external document tooling (e.g. a DOCX template
/// filler).
pub struct JsonRenderer {
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct TailoredCv<'a> {
    lang: Lang,
    name: &'a str,
    title: &'a str,
    email: &'a str,
    phone: &'a str,
    location: &'a str,
    linkedin: &'a str,
    github: &'a str,
    summary: String,
    experience: Vec<TailoredExperience>,
    skills: &'a [String],
    education: Vec<String>,
    languages: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TailoredExperience {
    heading: String,
    bullets: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TailoredLetter<'a> {
    lang: Lang,
    company: &'a str,
    role: &'a str,
    header: Vec<String>,
    paragraphs: Vec<String>,
    signature: &'a str,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_bytes<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(bytes)
    }
}

impl DocumentRenderer for JsonRenderer {
    fn render_cv(&self, doc: &CvDocument<'_>) -> Result<Vec<u8>> {
        let cv = doc.cv;
        let lang = doc.lang;
        let contact = &cv.profile.contact;

        let tailored = TailoredCv {
            lang,
            name: &cv.profile.name,
            title: cv.title(lang),
            email: &contact.email,
            phone: &contact.phone,
            location: contact.location.get(lang),
            linkedin: contact.links.linkedin.get(lang),
            github: &contact.links.github,
            summary: summary_paragraph(doc.summary),
            experience: (0..cv.experience.len())
                .map(|index| TailoredExperience {
                    heading: experience_heading(cv, lang, index),
                    bullets: experience_bullets(doc, index),
                })
                .collect(),
            skills: doc.skills,
            education: education_lines(cv, lang),
            languages: language_lines(cv, lang),
        };
        self.to_bytes(&tailored)
    }

    fn render_cover_letter(&self, letter: &CoverLetter<'_>) -> Result<Vec<u8>> {
        let cv = letter.cv;
        let contact = &cv.profile.contact;

        let tailored = TailoredLetter {
            lang: letter.lang,
            company: letter.company,
            role: letter.role,
            header: vec![
                cv.profile.name.clone(),
                cv.title(letter.lang).to_string(),
                format!("{} • {}", contact.email, contact.phone),
            ],
            paragraphs: cover_letter_paragraphs(letter),
            signature: &cv.profile.name,
        };
        self.to_bytes(&tailored)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
