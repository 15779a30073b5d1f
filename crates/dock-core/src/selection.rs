//! Exhaustive dock selection over a candidate set.

use crate::models::Point;
use crate::routing::build_flights;
use crate::rules::SurveyConstraints;
use serde::{Deserialize, Serialize};

/// How well a candidate dock covers the fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub center: Point,
    pub reached: usize,
    pub total_minutes: f64,
}

/// Simulate a full survey from `center` and score it.
pub fn score_candidate(
    center: &Point,
    fields: &[Point],
    rules: &SurveyConstraints,
) -> CandidateScore {
    let plan = build_flights(center, fields, rules);
    CandidateScore {
        center: *center,
        reached: plan.surveyed_count(),
        total_minutes: plan.total_minutes,
    }
}

/// Pick the dock among `candidates` under the configured selection policy.
///
/// Returns `None` when there is nothing to survey or nothing to choose from.
/// Candidates are scanned in order, so the first one always becomes the
/// initial best. Under [`SelectionPolicy::EitherImproves`] a candidate that
/// reaches no field scores zero minutes and displaces any earlier best.
///
/// [`SelectionPolicy::EitherImproves`]: crate::rules::SelectionPolicy::EitherImproves
pub fn select_center(
    fields: &[Point],
    candidates: &[Point],
    rules: &SurveyConstraints,
) -> Option<CandidateScore> {
    if fields.is_empty() || candidates.is_empty() {
        return None;
    }

    let policy = rules.selection_policy;
    let mut best: Option<CandidateScore> = None;
    let mut best_reached = 0usize;
    let mut best_minutes = f64::INFINITY;

    for candidate in candidates {
        let score = score_candidate(candidate, fields, rules);
        tracing::debug!(
            lat = candidate.lat,
            lon = candidate.lon,
            reached = score.reached,
            minutes = score.total_minutes,
            "Scored dock candidate"
        );

        if policy.replaces(score.reached, score.total_minutes, best_reached, best_minutes) {
            best_reached = score.reached;
            best_minutes = score.total_minutes;
            best = Some(score);
        }
    }

    best
}
