//! Integration tests for page rendering.

use club_site_web::render::{self, home, results, table};
use club_site_web::{
    place_lineup, ClubInfo, LeagueStandings, Location, Match, MatchCollection, Outcome,
    Participant, PlayerRoster, TeamStanding,
};

fn club() -> ClubInfo {
    ClubInfo::default()
}

fn sample_match() -> Match {
    Match {
        date: "2025-03-16".to_string(),
        opponent: "Κέντρο <Σερίφου>".to_string(),
        location: Location::Away,
        result: Some("4-1".to_string()),
        outcome: Outcome::Win,
        player_of_match: Some("Αντώνης Βρεττός".to_string()),
        players: vec![
            Participant::at("Goalkeeper").named("Νίκος Κυπραίος"),
            Participant::at("Defender").named("Γιάννης Μαρκάκης"),
            Participant::at("Defender").named("Πέτρος Λιβαδίτης"),
            Participant::at("Defender").named("Στέλιος Ραφτόπουλος"),
            Participant::at("Defender").named("Extra Defender"),
            Participant {
                goals: 2,
                number: Some(9),
                ..Participant::at("Striker").named("Αντώνης Βρεττός")
            },
            Participant::at("Bench").named("Δημήτρης Σαρρής (C)"),
        ],
        ..Match::default()
    }
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        render::escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}

#[test]
fn results_section_renders_pitch_formation_and_bench() {
    let html = results::matches_section(&club(), &[sample_match()]);

    assert!(html.contains("March 16, 2025"));
    assert!(html.contains(r#"<div class="match-status status-won">4 - 1</div>"#));
    assert!(html.contains("Formation: 4-0-1"));
    assert_eq!(html.matches(r#"class="player-on-pitch""#).count(), 5);
    assert!(html.contains("top: 8%; left: 50%;"));
    assert!(html.contains("⚽⚽"));
    assert!(html.contains(r#"title="Player of the Match""#));
    assert!(html.contains("Bench (1)"));
    assert!(html.contains(r#"<div class="bench-player-name">Δημήτρης Σαρρής</div>"#));
    assert!(html.contains("Κέντρο &lt;Σερίφου&gt;"));
    assert!(!html.contains("Extra Defender"));
}

#[test]
fn away_matches_list_the_opponent_first() {
    let html = results::matches_section(&club(), &[sample_match()]);
    let opponent = html.find("Κέντρο &lt;Σερίφου&gt;").unwrap();
    let ours = html.find(r#"<div class="team-name">Μεγάλο Λειβάδι FC</div>"#).unwrap();
    assert!(opponent < ours);
}

#[test]
fn lineup_without_bench_has_no_bench_section() {
    let placement = place_lineup(&[Participant::at("Goalkeeper")], None);
    let html = results::lineup(&placement);
    assert!(html.contains("Formation: 0-0-0"));
    assert!(!html.contains("bench-container"));
}

#[test]
fn results_load_error_is_inline() {
    let html = results::load_error_section();
    assert!(html.contains(results::LOAD_ERROR));
    assert!(html.contains(r#"id="matches-container""#));
}

#[test]
fn home_body_shows_recent_results_stats_and_key_players() {
    let collection = MatchCollection {
        matches: vec![sample_match()],
        ..MatchCollection::default()
    };
    let roster: PlayerRoster = serde_json::from_str(
        r#"{ "players": { "Αντώνης Βρεττός": { "apps": 4, "goals": 5, "assists": 2 } } }"#,
    )
    .unwrap();
    let html = home::home_body(&club(), Some(&collection), Some(&roster));

    assert!(html.contains(r#"<div class="match-status status-won">Win</div>"#));
    assert!(html.contains(r#"<h3 id="matches-won">1</h3>"#));
    assert!(html.contains(r#"<h3 id="goals-scored">4</h3>"#));
    assert!(html.contains(r#"<span id="president-matches">4</span>"#));
    assert!(html.contains(r#"id="top-scorer-card""#));
    assert!(html.contains(&home::avatar_url("Αντώνης Βρεττός")));
}

#[test]
fn home_body_falls_back_when_documents_are_missing() {
    let html = home::home_body(&club(), None, None);

    assert!(html.contains(r#"<h3 id="matches-won">1</h3>"#));
    assert!(html.contains(r#"<h3 id="goals-scored">5</h3>"#));
    assert!(html.contains(r#"<span id="president-losses">2</span>"#));
    assert!(html.contains(r#"<span id="president-matches">-</span>"#));
    assert!(!html.contains("top-scorer-card"));
}

#[test]
fn avatar_seed_is_url_encoded() {
    assert_eq!(
        home::avatar_url("A B"),
        "https://api.dicebear.com/7.x/avataaars/svg?seed=A%20B"
    );
}

#[test]
fn table_highlights_our_team_and_shows_position() {
    let standings = LeagueStandings {
        teams: vec![
            TeamStanding {
                position: 1,
                team: "Αστέρας Σερίφου".to_string(),
                points: 10,
                ..TeamStanding::default()
            },
            TeamStanding {
                position: 2,
                team: "Μεγάλο Λειβάδι FC".to_string(),
                won: 2,
                goals_for: 10,
                goal_difference: -1,
                points: 7,
                ..TeamStanding::default()
            },
        ],
        last_updated: Some("20/03/2025".to_string()),
    };
    let html = table::table_body(&club(), Some(&standings), 3);

    assert_eq!(html.matches(r#"<tr class="our-team">"#).count(), 1);
    assert_eq!(html.matches(r#"<tr class="other-team">"#).count(), 1);
    assert!(html.contains(r#"<h3 id="league-position">2nd</h3>"#));
    assert!(html.contains(r#"<h3 id="clean-sheets">3</h3>"#));
    assert!(html.contains("<td>-1</td>"));
    assert!(html.contains(r#"<span id="last-updated">20/03/2025</span>"#));
}

#[test]
fn table_error_row_spans_every_column() {
    let html = table::table_body(&club(), None, 0);
    assert!(html.contains(r#"colspan="10""#));
    assert!(html.contains(table::LOAD_ERROR));
    assert_eq!(table::error_row().matches("<tr").count(), 1);
}

#[test]
fn page_wraps_body_with_styles_and_toggle_script() {
    let html = render::page("Results", &club(), "<p>body</p>");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Results | Μεγάλο Λειβάδι FC</title>"));
    assert!(html.contains(".pitch-container"));
    assert!(html.contains("classList.toggle('open')"));
    assert!(html.contains("<p>body</p>"));
}
