//! Skill ranking and bullet selection

use crate::error::{JobTailorError, Result};
use crate::matching::scorer::RelevanceScorer;
use crate::matching::signals::JobSignals;

/// A scored piece of profile text, alive only while ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    pub score: u32,
    pub text: &'a str,
}

/// Maximum number of bullets kept per experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletCap {
    /// Keep every bullet, only reordered.
    All,
    Limit(usize),
}

impl BulletCap {
    /// Build a cap from a caller-supplied count. Negative counts are a
    /// contract violation and fail immediately instead of being clamped.
    pub fn new(count: i64) -> Result<Self> {
        usize::try_from(count).map(BulletCap::Limit).map_err(|_| {
            JobTailorError::InvalidArgument(format!(
                "bullet count must be zero or positive, got {}",
                count
            ))
        })
    }

    pub fn resolve(&self, available: usize) -> usize {
        match self {
            BulletCap::All => available,
            BulletCap::Limit(n) => *n,
        }
    }
}

/// Score every item and sort by descending score. The sort is stable, so
/// equal scores keep their input order.
pub fn score_all<'a, S: AsRef<str>>(
    items: &'a [S],
    signals: &JobSignals,
    scorer: &RelevanceScorer<'_>,
) -> Vec<ScoredItem<'a>> {
    let mut scored: Vec<ScoredItem<'a>> = items
        .iter()
        .map(|item| ScoredItem {
            score: scorer.score(item.as_ref(), signals),
            text: item.as_ref(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Reorder the whole skill inventory by relevance. Always a permutation of
/// the input.
pub fn rank_skills<S: AsRef<str>>(
    skills: &[S],
    signals: &JobSignals,
    scorer: &RelevanceScorer<'_>,
) -> Vec<String> {
    score_all(skills, signals, scorer)
        .into_iter()
        .map(|item| item.text.to_string())
        .collect()
}

/// Pick the most relevant bullets of one experience, at most `cap` of them.
pub fn select_bullets<S: AsRef<str>>(
    bullets: &[S],
    signals: &JobSignals,
    cap: BulletCap,
    scorer: &RelevanceScorer<'_>,
) -> Vec<String> {
    let limit = cap.resolve(bullets.len());

    let top: Vec<String> = score_all(bullets, signals, scorer)
        .into_iter()
        .take(limit)
        .map(|item| item.text.to_string())
        .collect();

    if top.is_empty() {
        bullets
            .iter()
            .take(limit)
            .map(|b| b.as_ref().to_string())
            .collect()
    } else {
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::{CategoryBonus, WeightTable};

    fn none() -> Vec<&'static str> {
        Vec::new()
    }

    fn with_scorer<T>(f: impl FnOnce(&RelevanceScorer<'_>) -> T) -> T {
        let weights = WeightTable::default();
        let scorer = RelevanceScorer::new(&weights, CategoryBonus::default(), 1);
        f(&scorer)
    }

    #[test]
    fn test_rank_skills_ties_keep_input_order() {
        let signals = JobSignals::from_sets(["react"], none(), none());
        let ranked = with_scorer(|s| rank_skills(&["React", "CSS", "Git"], &signals, s));
        assert_eq!(ranked, vec!["React", "CSS", "Git"]);
    }

    #[test]
    fn test_rank_skills_moves_relevant_skills_up() {
        let signals = JobSignals::from_sets(["typescript"], ["git"], ["css"]);
        let ranked = with_scorer(|s| {
            rank_skills(&["HTML", "Git", "CSS", "TypeScript", "Figma"], &signals, s)
        });
        assert_eq!(ranked, vec!["TypeScript", "CSS", "Git", "HTML", "Figma"]);
    }

    #[test]
    fn test_rank_is_permutation() {
        let skills = vec!["React", "React", "Jest", "", "Git"];
        let signals = JobSignals::from_sets(["git", "react"], ["testing"], none());
        let mut ranked = with_scorer(|s| rank_skills(&skills, &signals, s));
        let mut expected: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
        ranked.sort();
        expected.sort();
        assert_eq!(ranked, expected);
    }

    #[test]
    fn test_empty_signals_preserve_order() {
        let signals = JobSignals::default();
        let items = ["b", "a", "c"];
        assert_eq!(with_scorer(|s| rank_skills(&items, &signals, s)), vec!["b", "a", "c"]);
        assert_eq!(
            with_scorer(|s| select_bullets(&items, &signals, BulletCap::All, s)),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_select_bullets_scenario() {
        let bullets = ["Built APIs", "Wrote docs", "Improved performance"];
        let signals = JobSignals::from_sets(none(), ["performance"], none());
        let cap = BulletCap::new(2).unwrap();
        let selected = with_scorer(|s| select_bullets(&bullets, &signals, cap, s));
        assert_eq!(selected, vec!["Improved performance", "Built APIs"]);
    }

    #[test]
    fn test_select_bound() {
        let bullets = ["a react", "b", "c typescript", "d"];
        let signals = JobSignals::from_sets(["react", "typescript"], none(), none());
        for k in 0..7 {
            let cap = BulletCap::new(k).unwrap();
            let selected = with_scorer(|s| select_bullets(&bullets, &signals, cap, s));
            assert_eq!(selected.len(), (k as usize).min(bullets.len()));
        }
    }

    #[test]
    fn test_select_empty_bullets() {
        let signals = JobSignals::from_sets(["react"], none(), none());
        let selected = with_scorer(|s| select_bullets(&none(), &signals, BulletCap::Limit(3), s));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_negative_cap_rejected() {
        assert!(matches!(
            BulletCap::new(-1),
            Err(JobTailorError::InvalidArgument(_))
        ));
        assert_eq!(BulletCap::new(0).unwrap(), BulletCap::Limit(0));
    }

    #[test]
    fn test_all_cap_resolves_to_available() {
        assert_eq!(BulletCap::All.resolve(5), 5);
        assert_eq!(BulletCap::Limit(2).resolve(5), 2);
    }
}
