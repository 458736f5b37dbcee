//! Results page: one accordion per match with the lineup drawn on a pitch.

use crate::config::ClubInfo;
use crate::logic::{
    format_match_date, newest_first, place_match, score_line, DecoratedPlayer, PitchPlayer,
    PlacementResult,
};
use crate::models::{Location, Match};
use crate::render::{escape, notice};

pub const LOAD_ERROR: &str = "Error loading match data. Please try again later.";

/// All matches, newest first.
pub fn matches_section(club: &ClubInfo, matches: &[Match]) -> String {
    let accordions: String = newest_first(matches)
        .into_iter()
        .map(|game| match_accordion(club, game))
        .collect();
    format!(r#"<section id="matches"><h2>Results</h2><div id="matches-container">{accordions}</div></section>"#)
}

/// Results section when the match document could not be fetched.
pub fn load_error_section() -> String {
    format!(
        r#"<section id="matches"><h2>Results</h2><div id="matches-container">{}</div></section>"#,
        notice(LOAD_ERROR)
    )
}

fn match_accordion(club: &ClubInfo, game: &Match) -> String {
    let score = score_line(game);
    let ours = team_block(&club.logo, &club.name);
    let theirs = team_block(&club.placeholder_badge, &game.opponent);
    let (team_1, team_2) = match game.location {
        Location::Home => (ours, theirs),
        Location::Away => (theirs, ours),
    };
    let location = game.location.as_str();

    format!(
        r#"<div class="accordion">
    <div class="accordion-header">
        <div class="match-card">
            <div class="match-date">{date}<br><small class="match-location">{location}</small></div>
            {team_1}
            <div class="vs-container"><div class="match-status {status_class}">{score_text}</div></div>
            {team_2}
        </div>
        <i class="fas fa-chevron-right"></i>
    </div>
    <div class="accordion-content">
        <div class="match-info"><strong>Location:</strong> {location} match</div>
        {lineup}
    </div>
</div>
"#,
        date = escape(&format_match_date(game)),
        status_class = score.status_class,
        score_text = escape(&score.text),
        lineup = lineup(&place_match(game)),
    )
}

fn team_block(badge: &str, name: &str) -> String {
    let name = escape(name);
    format!(
        r#"<div class="team"><img src="{}" alt="{name}" class="team-badge"><div class="team-name">{name}</div></div>"#,
        escape(badge)
    )
}

/// Pitch, formation label and bench for one placement.
pub fn lineup(placement: &PlacementResult) -> String {
    let pitch: String = placement.pitch_players.iter().map(pitch_player).collect();
    let mut html = format!(
        r#"<div class="stats-header">Starting Lineup</div>
<div class="pitch-container"><div class="pitch-circle"></div><div class="pitch-line"></div>{pitch}</div>
<div class="formation-info"><strong>Formation: {}</strong></div>"#,
        escape(&placement.formation_label)
    );
    if !placement.bench_players.is_empty() {
        html.push_str(&bench(&placement.bench_players));
    }
    html
}

fn pitch_player(placed: &PitchPlayer) -> String {
    let player = &placed.player;
    let abbr = placed.slot.abbreviation;
    format!(
        r#"<div class="player-on-pitch" style="top: {top}%; left: {left}%;" title="{title}"><div class="player-number">{number}</div><div class="player-name">{name}</div><div class="player-position">{abbr}</div><div class="stats-symbols">{markers}</div></div>"#,
        top = placed.slot.top,
        left = placed.slot.left,
        title = escape(&player.tooltip(abbr)),
        number = escape(&player.number_label),
        name = escape(&player.display_name),
        markers = markers(player),
    )
}

fn bench(players: &[DecoratedPlayer]) -> String {
    let entries: String = players.iter().map(bench_player).collect();
    format!(
        r#"<div class="bench-container"><div class="bench-title">Bench ({})</div><div class="bench-players">{entries}</div></div>"#,
        players.len()
    )
}

fn bench_player(player: &DecoratedPlayer) -> String {
    let stats = if player.has_markers() {
        format!(r#"<div class="bench-stats-symbols">{}</div>"#, markers(player))
    } else {
        String::new()
    };
    format!(
        r#"<div class="bench-player" title="{title}"><div class="bench-player-number">#{number}</div><div class="bench-player-name">{name}</div>{stats}</div>"#,
        title = escape(&player.tooltip("Bench")),
        number = escape(&player.number_label),
        name = escape(&player.clean_name),
    )
}

/// Goal, assist and player-of-the-match glyphs.
fn markers(player: &DecoratedPlayer) -> String {
    let mut html = String::new();
    if player.goals() > 0 {
        html.push_str(&format!(
            r#"<div class="goal-markers" title="{}">{}</div>"#,
            plural(player.goals(), "goal"),
            player.goal_markers
        ));
    }
    if player.assists() > 0 {
        html.push_str(&format!(
            r#"<div class="assist-markers" title="{}">{}</div>"#,
            plural(player.assists(), "assist"),
            player.assist_markers
        ));
    }
    if player.is_player_of_match {
        html.push_str(r#"<div class="pom-marker" title="Player of the Match">⭐</div>"#);
    }
    html
}

fn plural(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
