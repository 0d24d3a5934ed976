//! Text normalization shared by every matching component

use regex::Regex;
use std::sync::OnceLock;

static OUTSIDE_ALPHABET: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();

/// Lowercase `text`, fold Unicode dashes into `-`, blank out everything
/// outside the matching alphabet and collapse whitespace.
///
/// The alphabet is `a-z`, `0-9`, the Spanish accented vowels, `ñ`,
/// whitespace, `-`, `+` and `.`. The function is total and idempotent.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            '\u{2010}'..='\u{2015}' => '-',
            c => c,
        })
        .collect();

    let outside = OUTSIDE_ALPHABET
        .get_or_init(|| Regex::new(r"[^a-z0-9áéíóúñ\s\-+.]").expect("Invalid alphabet regex"));
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

    let kept = outside.replace_all(&folded, " ");
    whitespace.replace_all(&kept, " ").trim().to_string()
}
