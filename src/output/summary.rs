//! Plain-text profile summary per language

use crate::profile::models::{CvMaster, Lang};

/// Header, `summary` lines and skill inventory as plain text.
pub fn build_summary(cv: &CvMaster, lang: Lang, summary: &[String]) -> String {
    let contact = &cv.profile.contact;

    let mut lines = vec![
        format!("{} — {}", cv.profile.name, cv.title(lang)),
        format!("{} | {}", contact.email, contact.phone),
        String::new(),
    ];
    lines.extend(summary.iter().cloned());
    lines.push(String::new());
    lines.push("Skills:".to_string());
    lines.push(cv.skills.inventory().join(", "));

    lines.join("\n")
}

/// File name of the summary for `lang`.
pub fn summary_file_name(lang: Lang) -> &'static str {
    match lang {
        Lang::Es => "Resumen_ES.txt",
        Lang::En => "Summary_EN.txt",
    }
}
