//! Team stat cards and ordinal formatting for the league position.

use crate::models::{SeasonSummary, TeamStanding};

/// Figures on the team statistics cards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TeamStats {
    pub matches_won: u32,
    pub goals_scored: u32,
    pub clean_sheets: u32,
    /// e.g. `"3rd"`; only known when the league table is available.
    pub league_position: Option<String>,
}

impl TeamStats {
    pub fn from_summary(summary: &SeasonSummary, clean_sheets: u32) -> Self {
        Self {
            matches_won: summary.wins,
            goals_scored: summary.goals_for,
            clean_sheets,
            league_position: None,
        }
    }

    pub fn from_standing(standing: &TeamStanding, clean_sheets: u32) -> Self {
        Self {
            matches_won: standing.won,
            goals_scored: standing.goals_for,
            clean_sheets,
            league_position: Some(ordinal(standing.position)),
        }
    }
}

/// `1` → `"1st"`, `12` → `"12th"`, `22` → `"22nd"`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
