//! Integration tests for results: score parsing, ordering, summaries and document defaults.

use club_site_web::logic::{
    card_status, clean_sheets, effective_outcome, format_match_date, newest_first, parse_score,
    recent_results, score_line, season_summary, summarize,
};
use club_site_web::{Location, Match, MatchCollection, Outcome, SeasonSummary};

fn game(date: &str, result: Option<&str>, outcome: Outcome) -> Match {
    Match {
        date: date.to_string(),
        opponent: format!("Opponent {date}"),
        result: result.map(str::to_string),
        outcome,
        ..Match::default()
    }
}

#[test]
fn parse_score_accepts_dashes_spaces_and_unknown_tally() {
    assert_eq!(parse_score("3-2"), Some((3, Some(2))));
    assert_eq!(parse_score(" 0 – 5 "), Some((0, Some(5))));
    assert_eq!(parse_score("4-?"), Some((4, None)));
    assert_eq!(parse_score("W"), None);
    assert_eq!(parse_score("x-1"), None);
    assert_eq!(parse_score(""), None);
}

#[test]
fn outcome_is_derived_only_when_not_declared() {
    assert_eq!(effective_outcome(&game("2025-01-01", Some("1-3"), Outcome::Win)), Outcome::Win);
    assert_eq!(effective_outcome(&game("2025-01-01", Some("3-1"), Outcome::Unknown)), Outcome::Win);
    assert_eq!(effective_outcome(&game("2025-01-01", Some("2-2"), Outcome::Unknown)), Outcome::Draw);
    assert_eq!(effective_outcome(&game("2025-01-01", Some("0-1"), Outcome::Unknown)), Outcome::Loss);
    assert_eq!(effective_outcome(&game("2025-01-01", Some("2-?"), Outcome::Unknown)), Outcome::Unknown);
}

#[test]
fn newest_first_is_stable_and_puts_bad_dates_last() {
    let matches = vec![
        game("2025-01-12", None, Outcome::Win),
        game("not a date", None, Outcome::Win),
        game("2025-03-16", None, Outcome::Win),
        game("2025-01-12", None, Outcome::Loss),
        game("2024-12-08T00:00:00", None, Outcome::Draw),
    ];
    let sorted: Vec<_> = newest_first(&matches)
        .into_iter()
        .map(|m| (m.date.as_str(), m.outcome))
        .collect();
    assert_eq!(
        sorted,
        vec![
            ("2025-03-16", Outcome::Win),
            ("2025-01-12", Outcome::Win),
            ("2025-01-12", Outcome::Loss),
            ("2024-12-08T00:00:00", Outcome::Draw),
            ("not a date", Outcome::Win),
        ]
    );
}

#[test]
fn recent_results_takes_the_newest_three() {
    let matches: Vec<Match> = (1..=5)
        .map(|d| game(&format!("2025-02-0{d}"), Some("1-0"), Outcome::Win))
        .collect();
    let recent: Vec<_> = recent_results(&matches, 3).iter().map(|m| m.date.clone()).collect();
    assert_eq!(recent, vec!["2025-02-05", "2025-02-04", "2025-02-03"]);
}

#[test]
fn match_dates_render_long_form() {
    assert_eq!(format_match_date(&game("2025-01-05", None, Outcome::Win)), "January 5, 2025");
    assert_eq!(format_match_date(&game("soon", None, Outcome::Win)), "soon");
}

#[test]
fn score_line_uses_result_or_outcome_letter() {
    let won = score_line(&game("2025-01-05", Some("3-1"), Outcome::Win));
    assert_eq!(won.status_class, "status-won");
    assert_eq!(won.text, "3 - 1");

    let lost = score_line(&game("2025-01-05", None, Outcome::Loss));
    assert_eq!(lost.status_class, "status-lost");
    assert_eq!(lost.text, "L");

    let unknown = score_line(&game("2025-01-05", Some(""), Outcome::Unknown));
    assert_eq!(unknown.status_class, "status-draw");
    assert_eq!(unknown.text, "D");
}

#[test]
fn card_status_treats_anything_else_as_upcoming() {
    assert_eq!(card_status(&game("2025-01-05", None, Outcome::Win)), ("status-won", "Win"));
    assert_eq!(card_status(&game("2025-01-05", None, Outcome::Loss)), ("status-lost", "Lost"));
    assert_eq!(
        card_status(&game("2025-01-05", None, Outcome::Draw)),
        ("status-upcoming", "Upcoming")
    );
}

#[test]
fn summarize_counts_outcomes_points_and_goals() {
    let mut draw = game("2025-01-03", Some("2-2"), Outcome::Draw);
    draw.points = Some(1);
    let matches = vec![
        game("2025-01-01", Some("3-0"), Outcome::Win),
        game("2025-01-02", Some("1-4"), Outcome::Loss),
        draw,
        game("2025-01-04", Some("5-?"), Outcome::Unknown),
    ];
    let summary = summarize(&matches);

    assert_eq!(summary.played, 4);
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.draws, 1);
    assert_eq!(summary.losses, 1);
    assert_eq!(summary.points, 4);
    assert_eq!(summary.goals_for, 11);
    assert_eq!(summary.goals_against, 6);
    assert_eq!(summary.goal_difference, 5);
    assert_eq!(summary.win_percentage, 25.0);
}

#[test]
fn summarize_saturates_huge_tallies() {
    let matches = vec![
        game("2025-01-01", Some("4294967295-0"), Outcome::Win),
        game("2025-01-02", Some("1-0"), Outcome::Win),
    ];
    let summary = summarize(&matches);

    assert_eq!(summary.goals_for, u32::MAX);
    assert_eq!(summary.goals_against, 0);
    assert_eq!(summary.goal_difference, i32::MAX);
}

#[test]
fn summarize_rounds_win_percentage_to_one_decimal() {
    let matches = vec![
        game("2025-01-01", Some("1-0"), Outcome::Win),
        game("2025-01-02", Some("0-1"), Outcome::Loss),
        game("2025-01-03", Some("0-1"), Outcome::Loss),
    ];
    assert_eq!(summarize(&matches).win_percentage, 33.3);
    assert_eq!(summarize(&[]), SeasonSummary::default());
}

#[test]
fn season_summary_prefers_the_published_one() {
    let mut collection = MatchCollection {
        matches: vec![game("2025-01-01", Some("1-0"), Outcome::Win)],
        ..MatchCollection::default()
    };
    assert_eq!(season_summary(&collection).wins, 1);

    collection.summary = Some(SeasonSummary {
        wins: 7,
        ..SeasonSummary::default()
    });
    assert_eq!(season_summary(&collection).wins, 7);
}

#[test]
fn clean_sheets_need_a_known_zero() {
    let matches = vec![
        game("2025-01-01", Some("3-0"), Outcome::Win),
        game("2025-01-02", Some("0 – 0"), Outcome::Draw),
        game("2025-01-03", Some("2-?"), Outcome::Unknown),
        game("2025-01-04", None, Outcome::Win),
    ];
    assert_eq!(clean_sheets(&matches), 2);
}

#[test]
fn match_document_defaults_missing_and_null_fields() {
    let collection: MatchCollection = serde_json::from_str(
        r#"{
            "matches": [
                {
                    "date": "2025-01-05",
                    "opponent": "Πανσιφνιακός",
                    "location": "Neutral",
                    "result": "",
                    "outcome": "",
                    "player_of_match": "",
                    "players": [ { "position": "Bench", "goals": null } ]
                },
                { "date": "2025-01-12", "opponent": "Ένωση Κυκλάδων", "outcome": null, "players": null }
            ]
        }"#,
    )
    .unwrap();

    let first = &collection.matches[0];
    assert_eq!(first.location, Location::Away);
    assert_eq!(first.outcome, Outcome::Unknown);
    assert_eq!(first.result(), None);
    assert_eq!(first.player_of_match(), None);
    assert_eq!(first.players[0].goals, 0);
    assert_eq!(first.players[0].name(), None);

    let second = &collection.matches[1];
    assert_eq!(second.location, Location::Home);
    assert!(second.players.is_empty());
    assert!(collection.summary.is_none());
}
