//! League standings (`league_data.json`).

use crate::models::{lenient, lenient_i32, lenient_u32};
use serde::{Deserialize, Serialize};

/// One row of the league table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamStanding {
    #[serde(deserialize_with = "lenient_u32")]
    pub position: u32,
    #[serde(deserialize_with = "lenient")]
    pub team: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub played: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub won: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub drawn: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub lost: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub goals_for: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub goals_against: u32,
    #[serde(deserialize_with = "lenient_i32")]
    pub goal_difference: i32,
    #[serde(deserialize_with = "lenient_u32")]
    pub points: u32,
}

impl TeamStanding {
    /// True when the team name contains the club's name fragment.
    pub fn is_ours(&self, club_fragment: &str) -> bool {
        !club_fragment.is_empty() && self.team.contains(club_fragment)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeagueStandings {
    #[serde(default, deserialize_with = "lenient")]
    pub teams: Vec<TeamStanding>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl LeagueStandings {
    /// The club's own row, if it is in the table.
    pub fn our_team(&self, club_fragment: &str) -> Option<&TeamStanding> {
        self.teams.iter().find(|t| t.is_ours(club_fragment))
    }
}
