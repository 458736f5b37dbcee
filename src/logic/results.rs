//! Results: score parsing, ordering, season summary and the status shown on match cards.

use crate::models::{Match, MatchCollection, Outcome, SeasonSummary};
use std::cmp::Ordering;

/// Parse `"goalsFor-goalsAgainst"` (hyphen or en dash, optional spaces).
///
/// The right-hand side may be `"?"` when the opponent's tally was not recorded.
pub fn parse_score(result: &str) -> Option<(u32, Option<u32>)> {
    let (left, right) = result.trim().split_once(['-', '–'])?;
    let goals_for = left.trim().parse().ok()?;
    let right = right.trim();
    if right == "?" {
        return Some((goals_for, None));
    }
    let goals_against = right.parse().ok()?;
    Some((goals_for, Some(goals_against)))
}

/// Declared outcome, or one derived from a fully numeric result when none was declared.
pub fn effective_outcome(game: &Match) -> Outcome {
    if game.outcome != Outcome::Unknown {
        return game.outcome;
    }
    match game.result().and_then(parse_score) {
        Some((gf, Some(ga))) => match gf.cmp(&ga) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        },
        _ => Outcome::Unknown,
    }
}

/// Matches ordered newest first (stable). Matches with an unparseable date go last.
pub fn newest_first(matches: &[Match]) -> Vec<&Match> {
    let mut sorted: Vec<&Match> = matches.iter().collect();
    sorted.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// The `count` most recent matches.
pub fn recent_results(matches: &[Match], count: usize) -> Vec<&Match> {
    let mut recent = newest_first(matches);
    recent.truncate(count);
    recent
}

/// Long US-style date (`"January 5, 2025"`), or the raw string when it does not parse.
pub fn format_match_date(game: &Match) -> String {
    match game.parsed_date() {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => game.date.clone(),
    }
}

/// Score badge on a results accordion header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScoreLine {
    pub status_class: &'static str,
    pub text: String,
}

/// `"3 - 1"` with won/lost/draw styling, or just the outcome letter when there is no result.
pub fn score_line(game: &Match) -> ScoreLine {
    let outcome = effective_outcome(game);
    let status_class = match outcome {
        Outcome::Win => "status-won",
        Outcome::Loss => "status-lost",
        Outcome::Draw | Outcome::Unknown => "status-draw",
    };
    let text = match game.result() {
        Some(result) => match result.split_once(['-', '–']) {
            Some((gf, ga)) => format!("{} - {}", gf.trim(), ga.trim()),
            None => result.to_string(),
        },
        None => match outcome {
            Outcome::Win => "W",
            Outcome::Loss => "L",
            Outcome::Draw | Outcome::Unknown => "D",
        }
        .to_string(),
    };
    ScoreLine { status_class, text }
}

/// Status class and label for the compact home-page match card.
pub fn card_status(game: &Match) -> (&'static str, &'static str) {
    match effective_outcome(game) {
        Outcome::Win => ("status-won", "Win"),
        Outcome::Loss => ("status-lost", "Lost"),
        Outcome::Draw | Outcome::Unknown => ("status-upcoming", "Upcoming"),
    }
}

/// Season totals computed from the individual matches.
///
/// Points come from each match's `points` field when present, else from the outcome.
/// Unknown or unparseable tallies count as zero goals. Totals saturate instead of overflowing.
pub fn summarize(matches: &[Match]) -> SeasonSummary {
    let mut summary = SeasonSummary {
        played: u32::try_from(matches.len()).unwrap_or(u32::MAX),
        ..SeasonSummary::default()
    };
    for game in matches {
        let outcome = effective_outcome(game);
        match outcome {
            Outcome::Win => summary.wins = summary.wins.saturating_add(1),
            Outcome::Draw => summary.draws = summary.draws.saturating_add(1),
            Outcome::Loss => summary.losses = summary.losses.saturating_add(1),
            Outcome::Unknown => {}
        }
        summary.points = summary
            .points
            .saturating_add(game.points.unwrap_or_else(|| outcome.points()));
        if let Some((gf, ga)) = game.result().and_then(parse_score) {
            summary.goals_for = summary.goals_for.saturating_add(gf);
            summary.goals_against = summary.goals_against.saturating_add(ga.unwrap_or(0));
        }
    }
    let difference = i64::from(summary.goals_for) - i64::from(summary.goals_against);
    summary.goal_difference =
        i32::try_from(difference).unwrap_or(if difference < 0 { i32::MIN } else { i32::MAX });
    if summary.played > 0 {
        let pct = f64::from(summary.wins) / f64::from(summary.played) * 100.0;
        summary.win_percentage = (pct * 10.0).round() / 10.0;
    }
    summary
}

/// The document's own summary when it has one, otherwise one computed from its matches.
pub fn season_summary(collection: &MatchCollection) -> SeasonSummary {
    collection
        .summary
        .clone()
        .unwrap_or_else(|| summarize(&collection.matches))
}

/// Matches in which the opponent is known to have scored nothing.
pub fn clean_sheets(matches: &[Match]) -> u32 {
    matches
        .iter()
        .filter(|m| matches!(m.result().and_then(parse_score), Some((_, Some(0)))))
        .count() as u32
}
