//! Colored console presentation of signals, rankings and generation results

use crate::generate::{GenerationOutcome, RankingReport, ScoredLine};
use crate::matching::signals::SignalsSummary;
use colored::{Color, Colorize};

pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_keywords(&self, label: &str, keywords: &[String], color: Color) -> String {
        let list = if keywords.is_empty() {
            "-".to_string()
        } else {
            keywords.join(", ")
        };
        let label = format!("{:<18}", label);
        format!("  {} {}\n", self.colorize(&label, color), list)
    }

    fn format_scored(&self, lines: &[ScoredLine]) -> String {
        let mut output = String::new();
        for line in lines {
            let score = format!("{:>3}", line.score);
            let score = if line.score > 0 {
                self.colorize(&score, Color::Green)
            } else {
                self.colorize(&score, Color::BrightBlack)
            };
            output.push_str(&format!("  {}  {}\n", score, line.text));
        }
        output
    }

    pub fn format_signals(&self, signals: &SignalsSummary) -> String {
        let mut output = self.format_header("🎯 JOB SIGNALS", 1);
        output.push_str(&self.format_keywords("Must have", &signals.must, Color::Red));
        output.push_str(&self.format_keywords("Responsibilities", &signals.resp, Color::Yellow));
        output.push_str(&self.format_keywords("Nice to have", &signals.nice, Color::Cyan));
        if !signals.mentioned.is_empty() {
            output.push_str(&self.format_keywords("Mentioned", &signals.mentioned, Color::White));
        }
        output
    }

    pub fn format_ranking(&self, report: &RankingReport) -> String {
        let mut output = self.format_signals(&report.signals);

        output.push_str(&self.format_header("Skills", 2));
        output.push_str(&self.format_scored(&report.skills));

        for experience in &report.experience {
            output.push_str(&self.format_header(&experience.company, 2));
            output.push_str(&self.format_header("es", 3));
            output.push_str(&self.format_scored(&experience.es));
            output.push_str(&self.format_header("en", 3));
            output.push_str(&self.format_scored(&experience.en));
        }
        output
    }

    pub fn format_outcome(&self, outcome: &GenerationOutcome) -> String {
        let mut output = self.format_signals(&outcome.signals);

        output.push_str(&self.format_header("📁 GENERATED FILES", 1));
        for file in &outcome.files {
            output.push_str(&format!("  • {}\n", file));
        }
        output.push_str(&format!(
            "\n{} {}\n",
            self.colorize("✅ Output written to", Color::Green),
            outcome.output_dir.display()
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SignalsSummary {
        SignalsSummary {
            must: vec!["react".to_string(), "typescript".to_string()],
            nice: vec![],
            resp: vec!["performance".to_string()],
            mentioned: vec![],
        }
    }

    #[test]
    fn test_plain_signals() {
        let text = ConsoleFormatter::new(false).format_signals(&summary());

        assert!(text.contains("▓") || text.contains("█"));
        assert!(text.contains("react, typescript"));
        assert!(text.contains("Nice to have"));
        assert!(!text.contains("Mentioned"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_keyword_columns_align_with_colors() {
        let ansi = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        let plain = ConsoleFormatter::new(false).format_signals(&summary());
        let colored = ConsoleFormatter::new(true).format_keywords("Must have", &summary().must, Color::Red);

        assert_eq!(ansi.replace_all(&colored, ""), "  Must have          react, typescript\n");
        assert!(plain.contains("  Must have          react, typescript\n"));
        assert!(plain.contains("  Responsibilities   performance\n"));
    }

    #[test]
    fn test_scored_lines_keep_order() {
        let formatter = ConsoleFormatter::new(false);
        let lines = vec![
            ScoredLine { text: "React".to_string(), score: 10 },
            ScoredLine { text: "Git".to_string(), score: 0 },
        ];
        let text = formatter.format_scored(&lines);

        assert_eq!(text, "   10  React\n    0  Git\n");
    }
}
