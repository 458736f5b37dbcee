//! Home page: recent results, team statistics and key players.

use crate::config::ClubInfo;
use crate::logic::{
    card_status, clean_sheets, format_match_date, recent_results, season_summary, TeamStats,
};
use crate::models::{Match, MatchCollection, PlayerRoster, RosterEntry, SeasonSummary};
use crate::render::{escape, notice};

/// Matches shown in the recent results strip.
pub const RECENT_RESULTS: usize = 3;

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Home page body. Either document may be missing; each section degrades on its own.
pub fn home_body(
    club: &ClubInfo,
    matches: Option<&MatchCollection>,
    roster: Option<&PlayerRoster>,
) -> String {
    let (summary, recent, stats) = match matches {
        Some(collection) => {
            let summary = season_summary(collection);
            let stats = TeamStats::from_summary(&summary, clean_sheets(&collection.matches));
            (
                summary,
                recent_section(club, &recent_results(&collection.matches, RECENT_RESULTS)),
                stats,
            )
        }
        None => {
            let summary = SeasonSummary::fallback();
            let stats = TeamStats::from_summary(&summary, 0);
            (
                summary,
                section("results", "Recent Results", &notice("Recent results are unavailable right now.")),
                stats,
            )
        }
    };

    let mut body = recent;
    body.push_str(&stats_section(&stats));
    body.push_str(&key_players_section(&summary, roster));
    body
}

fn section(id: &str, heading: &str, inner: &str) -> String {
    format!(r#"<section id="{id}"><h2>{heading}</h2>{inner}</section>"#)
}

fn recent_section(club: &ClubInfo, recent: &[&Match]) -> String {
    let cards: String = recent.iter().map(|game| result_card(club, game)).collect();
    section("results", "Recent Results", &format!(r#"<div class="matches">{cards}</div>"#))
}

fn result_card(club: &ClubInfo, game: &Match) -> String {
    let (status_class, status_text) = card_status(game);
    format!(
        r#"<div class="card match-card"><div class="match-info"><div class="match-date">{date}</div><div class="match-teams"><div class="match-result">{result}</div><div>{opponent} vs {club}</div></div></div><div class="match-status {status_class}">{status_text}</div></div>"#,
        date = escape(&format_match_date(game)),
        result = escape(game.result().unwrap_or("")),
        opponent = escape(&game.opponent),
        club = escape(&club.name),
    )
}

/// Matches won, goals scored, clean sheets and (when known) league position.
pub fn stats_section(stats: &TeamStats) -> String {
    let mut cards = format!(
        r#"<div class="stat-card"><h3 id="matches-won">{}</h3><p>Matches Won</p></div><div class="stat-card"><h3 id="goals-scored">{}</h3><p>Goals Scored</p></div><div class="stat-card"><h3 id="clean-sheets">{}</h3><p>Clean Sheets</p></div>"#,
        stats.matches_won, stats.goals_scored, stats.clean_sheets
    );
    if let Some(position) = &stats.league_position {
        cards.push_str(&format!(
            r#"<div class="stat-card"><h3 id="league-position">{}</h3><p>League Position</p></div>"#,
            escape(position)
        ));
    }
    section("team-stats", "Team Statistics", &format!(r#"<div class="stats-grid">{cards}</div>"#))
}

fn key_players_section(summary: &SeasonSummary, roster: Option<&PlayerRoster>) -> String {
    let mut cards = president_card(summary, roster);
    if let Some(roster) = roster {
        if let Some((name, entry)) = roster.top_scorer() {
            cards.push_str(&player_card("top-scorer-card", "Top Scorer", name, entry));
        }
        if let Some((name, entry)) = roster.top_assister() {
            cards.push_str(&player_card("top-assister-card", "Top Assister", name, entry));
        }
    }
    section("key-players", "Key Players", &cards)
}

/// Club record card: matches from the roster's appearance high, wins and losses from the summary.
fn president_card(summary: &SeasonSummary, roster: Option<&PlayerRoster>) -> String {
    let matches = roster
        .map(|r| r.most_appearances().to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        r#"<div class="card player-card" id="president-card"><div class="player-info"><h3>President</h3><div class="player-stats"><div><span id="president-matches">{matches}</span> Matches</div><div><span id="president-wins">{}</span> Wins</div><div><span id="president-losses">{}</span> Losses</div></div></div></div>"#,
        summary.wins, summary.losses
    )
}

/// DiceBear avatar seeded by the player's name.
pub fn avatar_url(name: &str) -> String {
    format!("{AVATAR_BASE}{}", urlencoding::encode(name))
}

fn player_card(id: &str, role: &str, name: &str, entry: &RosterEntry) -> String {
    let avatar = escape(&avatar_url(name));
    let name = escape(name);
    format!(
        r#"<div class="card player-card" id="{id}"><img src="{avatar}" alt="{name}" class="player-img"><div class="player-info"><h3>{name}</h3><p class="player-role">{role}</p><div class="player-stats"><div><span>{apps}</span> Matches</div><div><span>{goals}</span> Goals</div><div><span>{assists}</span> Assists</div></div></div></div>"#,
        apps = entry.apps,
        goals = entry.goals,
        assists = entry.assists,
    )
}
