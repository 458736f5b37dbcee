//! League table page.

use crate::config::ClubInfo;
use crate::logic::TeamStats;
use crate::models::{LeagueStandings, TeamStanding};
use crate::render::escape;
use crate::render::home::stats_section;

pub const LOAD_ERROR: &str = "Error loading league table data. Please try again later.";

const COLUMNS: [&str; 10] = ["Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"];

/// League table body. `standings` is `None` when the document could not be fetched.
pub fn table_body(club: &ClubInfo, standings: Option<&LeagueStandings>, clean_sheets: u32) -> String {
    let Some(standings) = standings else {
        return table_section(&error_row(), "");
    };

    let mut body = String::new();
    if let Some(ours) = standings.our_team(&club.match_fragment) {
        body.push_str(&stats_section(&TeamStats::from_standing(ours, clean_sheets)));
    }
    let rows: String = standings
        .teams
        .iter()
        .map(|team| team_row(team, team.is_ours(&club.match_fragment)))
        .collect();
    body.push_str(&table_section(
        &rows,
        standings.last_updated.as_deref().unwrap_or(""),
    ));
    body
}

fn table_section(rows: &str, last_updated: &str) -> String {
    let headings: String = COLUMNS.iter().map(|c| format!("<th>{c}</th>")).collect();
    format!(
        r#"<section id="table"><h2>League Table</h2><table class="league-table"><thead><tr>{headings}</tr></thead><tbody id="league-table">{rows}</tbody></table><p class="last-updated">Last updated: <span id="last-updated">{}</span></p></section>"#,
        escape(last_updated)
    )
}

fn team_row(team: &TeamStanding, ours: bool) -> String {
    let class = if ours { "our-team" } else { "other-team" };
    format!(
        r#"<tr class="{class}"><td><strong>{}</strong></td><td class="team-cell">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><strong>{}</strong></td></tr>"#,
        team.position,
        escape(&team.team),
        team.played,
        team.won,
        team.drawn,
        team.lost,
        team.goals_for,
        team.goals_against,
        team.goal_difference,
        team.points,
    )
}

/// Single full-width row carrying the load error.
pub fn error_row() -> String {
    format!(
        r#"<tr class="other-team"><td colspan="{}" class="error-cell">{LOAD_ERROR}</td></tr>"#,
        COLUMNS.len()
    )
}
