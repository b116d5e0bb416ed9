//! Organic vs. AI overview domain overlap.

use std::collections::HashSet;

use crate::domain::normalize_domain;

/// Organic results considered for scoring.
pub const TOP_ORGANIC: usize = 3;

/// Percentage of top organic domains that the AI overview also cites.
///
/// Empty normalized domains are discarded on both sides. Each organic entry
/// counts on its own, so two top results on the same domain both count when
/// that domain is cited. Returns 0 when no organic domain survives
/// normalization.
pub fn similarity_score<O, A>(organic: &[O], ai_hrefs: &[A]) -> u8
where
    O: AsRef<str>,
    A: AsRef<str>,
{
    let organic: Vec<String> = organic
        .iter()
        .map(|u| normalize_domain(u.as_ref()))
        .filter(|d| !d.is_empty())
        .take(TOP_ORGANIC)
        .collect();

    if organic.is_empty() {
        return 0;
    }

    let cited: HashSet<String> = ai_hrefs
        .iter()
        .map(|u| normalize_domain(u.as_ref()))
        .filter(|d| !d.is_empty())
        .collect();

    let matched = organic.iter().filter(|d| cited.contains(*d)).count();
    let score = (matched as f64 / organic.len() as f64 * 100.0).round();

    score.clamp(0.0, 100.0) as u8
}
