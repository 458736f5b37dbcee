//! Match, Participant and the season summary carried in `matches.json`.

use crate::models::{lenient, lenient_i32, lenient_opt_u32, lenient_u32};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Home or away fixture. Anything other than `"Home"` renders as away.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Home,
    #[serde(other)]
    Away,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Home => "Home",
            Location::Away => "Away",
        }
    }
}

/// Declared result of a match from the club's point of view.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "D")]
    Draw,
    /// Missing, empty or unrecognised outcome.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Outcome {
    /// Points awarded for this outcome (3 / 1 / 0).
    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss | Outcome::Unknown => 0,
        }
    }
}

/// One player's record for a single match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// May carry suffix markers such as `" (C)"`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<u32>,
    /// Free-text label: "Goalkeeper", "Defender" (and misspellings), "Midfielder", "Striker", "Bench".
    #[serde(default, deserialize_with = "lenient")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub goals: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub assists: u32,
}

impl Participant {
    /// Participant with only a position set (everything else defaulted).
    pub fn at(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            ..Self::default()
        }
    }

    /// Builder-style name setter.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name, treating an empty string as absent.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// A single fixture as published in the match collection document.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// `YYYY-MM-DD` (a trailing time part is tolerated).
    #[serde(default, deserialize_with = "lenient")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub opponent: String,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Location,
    /// `"goalsFor-goalsAgainst"`, possibly `"3-?"` when the opponent's tally is unknown.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub outcome: Outcome,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub player_of_match: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub players: Vec<Participant>,
}

impl Match {
    /// Result string, treating an empty string as absent.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }

    /// Player of the match, treating an empty string as absent.
    pub fn player_of_match(&self) -> Option<&str> {
        self.player_of_match
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Parsed calendar date, `None` when the date string is not `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        let day = date.get(..10).unwrap_or(date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Season totals. Every field defaults to zero when absent or unusable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonSummary {
    #[serde(deserialize_with = "lenient_u32")]
    pub played: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub wins: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub draws: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub losses: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub points: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub goals_for: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub goals_against: u32,
    #[serde(deserialize_with = "lenient_i32")]
    pub goal_difference: i32,
    #[serde(deserialize_with = "lenient")]
    pub win_percentage: f64,
}

impl SeasonSummary {
    /// Static figures shown when the match document cannot be fetched.
    pub fn fallback() -> Self {
        Self {
            played: 3,
            wins: 1,
            losses: 2,
            goals_for: 5,
            ..Self::default()
        }
    }
}

/// Provenance block written alongside the published documents.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}

/// `matches.json`: every fixture plus an optional precomputed summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchCollection {
    #[serde(default, deserialize_with = "lenient")]
    pub matches: Vec<Match>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub summary: Option<SeasonSummary>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}
