//! Club roster (`players.json`): season totals per player and the top performers.

use crate::models::fixture::DocumentMetadata;
use crate::models::{lenient, lenient_opt_u32, lenient_u32};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Season totals for one squad member.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterEntry {
    #[serde(deserialize_with = "lenient_u32")]
    pub apps: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub goals: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub assists: u32,
    /// Player-of-the-match awards.
    #[serde(deserialize_with = "lenient_u32")]
    pub pom: u32,
    #[serde(deserialize_with = "lenient_opt_u32", skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u32>,
    #[serde(deserialize_with = "lenient_opt_u32", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// A named highlight from the `top_performers` block.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub goals: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub assists: Option<u32>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopPerformers {
    #[serde(deserialize_with = "lenient")]
    pub top_scorer: Option<TopPerformer>,
    #[serde(deserialize_with = "lenient")]
    pub top_assister: Option<TopPerformer>,
}

/// `players.json`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRoster {
    #[serde(default, deserialize_with = "lenient")]
    pub players: BTreeMap<String, RosterEntry>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub top_performers: Option<TopPerformers>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl PlayerRoster {
    /// Top scorer: the published one if the document names it (and the name is on the
    /// roster), otherwise the player with the most goals.
    pub fn top_scorer(&self) -> Option<(&str, &RosterEntry)> {
        match self.top_performers.as_ref().and_then(|t| t.top_scorer.as_ref()) {
            Some(named) => self.entry(&named.name),
            None => self.leader_by(|e| e.goals),
        }
    }

    /// Top assister, resolved the same way as [`PlayerRoster::top_scorer`].
    pub fn top_assister(&self) -> Option<(&str, &RosterEntry)> {
        match self.top_performers.as_ref().and_then(|t| t.top_assister.as_ref()) {
            Some(named) => self.entry(&named.name),
            None => self.leader_by(|e| e.assists),
        }
    }

    /// Highest appearance count in the squad (the club's matches played so far).
    pub fn most_appearances(&self) -> u32 {
        self.players.values().map(|e| e.apps).max().unwrap_or(0)
    }

    fn entry(&self, name: &str) -> Option<(&str, &RosterEntry)> {
        self.players
            .get_key_value(name)
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// First player (in name order) with the highest `key`. Empty roster yields `None`.
    fn leader_by(&self, key: impl Fn(&RosterEntry) -> u32) -> Option<(&str, &RosterEntry)> {
        self.players
            .iter()
            .fold(None::<(&str, &RosterEntry)>, |best, (name, entry)| match best {
                Some((_, leader)) if key(leader) >= key(entry) => best,
                _ => Some((name.as_str(), entry)),
            })
    }
}
