//! Runtime settings from the environment.
//!
//! HOST, PORT, DATA_DIR, CLUB_NAME and CLUB_MATCH; anything unset or unparseable falls back
//! to its default.

use std::path::PathBuf;

/// How the club is named on the pages and recognised in the league table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClubInfo {
    /// Full display name, e.g. on match cards.
    pub name: String,
    /// Substring that identifies the club's row in the league table.
    pub match_fragment: String,
    pub logo: String,
    /// Badge used for every opponent.
    pub placeholder_badge: String,
}

impl Default for ClubInfo {
    fn default() -> Self {
        Self {
            name: default_club_name(),
            match_fragment: default_club_match(),
            logo: "/static/logo_mg-1.png".to_string(),
            placeholder_badge: "/static/club_placeholder.png".to_string(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub club: ClubInfo,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: default_data_dir(),
            club: ClubInfo::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ClubInfo::default();
        Self {
            host: lookup("HOST").unwrap_or_else(default_host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            club: ClubInfo {
                name: lookup("CLUB_NAME").unwrap_or(defaults.name),
                match_fragment: lookup("CLUB_MATCH").unwrap_or(defaults.match_fragment),
                ..defaults
            },
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_club_name() -> String {
    "Μεγάλο Λειβάδι FC".to_string()
}

fn default_club_match() -> String {
    "Μεγάλο Λειβάδι".to_string()
}
