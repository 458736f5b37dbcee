//! Lineup placement: starters onto fixed formation slots, substitutes onto the bench.
//!
//! Placement never fails. Unrecognised positions are dropped from both pitch and bench,
//! and a bucket with more players than slots keeps only the first ones on the pitch.
//! The overflow is not moved to the bench.

use crate::models::{Match, Participant};
use serde::Serialize;

/// Position label that marks a substitute (exact, case-sensitive).
pub const BENCH: &str = "Bench";

const GOAL_MARKER: &str = "⚽";
const ASSIST_MARKER: &str = "👟";
/// Most goal or assist markers drawn for one player; the tooltip still shows the full count.
pub const MARKER_LIMIT: u32 = 10;

/// Suffixes stripped from names before display and player-of-match matching.
const NAME_MARKERS: [&str; 3] = [" (C)", " (Τ)", " (Π)"];

/// Broad tactical group a starter is placed in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionBucket {
    Goalkeeper,
    Defender,
    Midfielder,
    Striker,
}

/// A fixed spot on the schematic pitch, in percent of the pitch height (`top`) and width (`left`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct FormationSlot {
    pub top: u8,
    pub left: u8,
    pub abbreviation: &'static str,
}

const fn slot(top: u8, left: u8, abbreviation: &'static str) -> FormationSlot {
    FormationSlot {
        top,
        left,
        abbreviation,
    }
}

const GOALKEEPER_SLOTS: [FormationSlot; 1] = [slot(90, 50, "GK")];
const DEFENDER_SLOTS: [FormationSlot; 3] = [slot(60, 25, "CB"), slot(70, 50, "CB"), slot(60, 75, "CB")];
const MIDFIELDER_SLOTS: [FormationSlot; 3] = [slot(30, 25, "LM"), slot(40, 50, "CM"), slot(30, 75, "RM")];
const STRIKER_SLOTS: [FormationSlot; 1] = [slot(8, 50, "ST")];

impl PositionBucket {
    /// Buckets in pitch placement order.
    pub const ALL: [PositionBucket; 4] = [
        PositionBucket::Goalkeeper,
        PositionBucket::Defender,
        PositionBucket::Midfielder,
        PositionBucket::Striker,
    ];

    /// Classify a starter's position label. Precedence: goalkeeper, defender family, midfielder, striker.
    pub fn classify(position: &str) -> Option<Self> {
        if position == "Goalkeeper" {
            Some(PositionBucket::Goalkeeper)
        } else if position.contains("Defender") || position == "Defernder" || position == "Defenedr" {
            Some(PositionBucket::Defender)
        } else if position == "Midfielder" {
            Some(PositionBucket::Midfielder)
        } else if position == "Striker" {
            Some(PositionBucket::Striker)
        } else {
            None
        }
    }

    /// Formation slots for this bucket, in assignment order.
    pub fn slots(self) -> &'static [FormationSlot] {
        match self {
            PositionBucket::Goalkeeper => &GOALKEEPER_SLOTS,
            PositionBucket::Defender => &DEFENDER_SLOTS,
            PositionBucket::Midfielder => &MIDFIELDER_SLOTS,
            PositionBucket::Striker => &STRIKER_SLOTS,
        }
    }

    fn index(self) -> usize {
        match self {
            PositionBucket::Goalkeeper => 0,
            PositionBucket::Defender => 1,
            PositionBucket::Midfielder => 2,
            PositionBucket::Striker => 3,
        }
    }
}

/// What a participant did in the match, as far as the lineup is concerned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Starter(PositionBucket),
    Bench,
}

impl Role {
    /// `None` for empty or unrecognised positions: such participants are not shown.
    pub fn of(participant: &Participant) -> Option<Self> {
        let position = participant.position.as_str();
        if position == BENCH {
            Some(Role::Bench)
        } else if position.is_empty() {
            None
        } else {
            PositionBucket::classify(position).map(Role::Starter)
        }
    }
}

/// A participant plus everything the render layer shows about them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DecoratedPlayer {
    pub participant: Participant,
    /// First word of the name, or `"Player"`.
    pub display_name: String,
    /// Name without captaincy markers, or `"Unknown"`.
    pub clean_name: String,
    /// Shirt number, or `"?"`.
    pub number_label: String,
    pub is_player_of_match: bool,
    pub goal_markers: String,
    pub assist_markers: String,
}

impl DecoratedPlayer {
    pub fn new(participant: &Participant, player_of_match: Option<&str>) -> Self {
        let clean_name = clean_name(participant);
        let is_player_of_match = player_of_match
            .filter(|pom| !pom.is_empty() && !clean_name.is_empty())
            .is_some_and(|pom| pom.contains(clean_name.as_str()) || clean_name.contains(pom));
        Self {
            participant: participant.clone(),
            display_name: display_name(participant),
            number_label: participant
                .number
                .map_or_else(|| "?".to_string(), |n| n.to_string()),
            is_player_of_match,
            goal_markers: markers(GOAL_MARKER, participant.goals),
            assist_markers: markers(ASSIST_MARKER, participant.assists),
            clean_name,
        }
    }

    pub fn goals(&self) -> u32 {
        self.participant.goals
    }

    pub fn assists(&self) -> u32 {
        self.participant.assists
    }

    /// True when any goal, assist or player-of-match marker is shown.
    pub fn has_markers(&self) -> bool {
        self.goals() > 0 || self.assists() > 0 || self.is_player_of_match
    }

    /// Hover text: `"Name (#7) - CB"` plus one line per goal/assist/award detail.
    pub fn tooltip(&self, role_label: &str) -> String {
        let mut text = format!("{} (#{}) - {}", self.clean_name, self.number_label, role_label);
        if self.goals() > 0 {
            text.push_str(&format!("\nGoals: {}", self.goals()));
        }
        if self.assists() > 0 {
            text.push_str(&format!("\nAssists: {}", self.assists()));
        }
        if self.is_player_of_match {
            text.push_str("\n⭐ Player of the Match");
        }
        text
    }
}

/// A starter with their pitch coordinates.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PitchPlayer {
    pub player: DecoratedPlayer,
    pub bucket: PositionBucket,
    pub slot: FormationSlot,
}

/// Placement of one match's participants.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PlacementResult {
    /// Ordered by bucket (GK, DEF, MID, ST), then by slot.
    pub pitch_players: Vec<PitchPlayer>,
    /// Input order.
    pub bench_players: Vec<DecoratedPlayer>,
    /// `"{defenders}-{midfielders}-{strikers}"`, counted before slot truncation.
    pub formation_label: String,
}

/// Place a match's participants. See [`place_lineup`].
pub fn place_match(game: &Match) -> PlacementResult {
    place_lineup(&game.players, game.player_of_match())
}

/// Partition participants into pitch slots and bench.
///
/// 1. `"Bench"` goes to the bench, in input order.
/// 2. Other non-empty positions are bucketed; unmatched ones are dropped.
/// 3. The i-th player of a bucket takes the bucket's i-th slot; players past the last slot are dropped.
pub fn place_lineup(participants: &[Participant], player_of_match: Option<&str>) -> PlacementResult {
    let mut buckets: [Vec<&Participant>; 4] = Default::default();
    let mut bench_players = Vec::new();

    for p in participants {
        match Role::of(p) {
            Some(Role::Starter(bucket)) => buckets[bucket.index()].push(p),
            Some(Role::Bench) => bench_players.push(DecoratedPlayer::new(p, player_of_match)),
            None => {}
        }
    }

    let formation_label = format!(
        "{}-{}-{}",
        buckets[PositionBucket::Defender.index()].len(),
        buckets[PositionBucket::Midfielder.index()].len(),
        buckets[PositionBucket::Striker.index()].len(),
    );

    let buckets = &buckets;
    let pitch_players = PositionBucket::ALL
        .iter()
        .flat_map(move |&bucket| {
            buckets[bucket.index()]
                .iter()
                .zip(bucket.slots())
                .map(move |(p, &slot)| PitchPlayer {
                    player: DecoratedPlayer::new(p, player_of_match),
                    bucket,
                    slot,
                })
        })
        .collect();

    PlacementResult {
        pitch_players,
        bench_players,
        formation_label,
    }
}

/// First whitespace-delimited token of the name, or `"Player"`.
fn display_name(participant: &Participant) -> String {
    participant
        .name()
        .and_then(|n| n.split_whitespace().next())
        .unwrap_or("Player")
        .to_string()
}

/// Name with the first occurrence of each marker removed, or `"Unknown"` when there is no name.
fn clean_name(participant: &Participant) -> String {
    match participant.name() {
        Some(name) => NAME_MARKERS
            .iter()
            .fold(name.to_string(), |acc, marker| acc.replacen(marker, "", 1)),
        None => "Unknown".to_string(),
    }
}

fn markers(marker: &str, count: u32) -> String {
    marker.repeat(count.min(MARKER_LIMIT) as usize)
}
