//! Football club website: library with the document models, lineup placement and page rendering.

pub mod config;
pub mod logic;
pub mod models;
pub mod render;
pub mod store;

pub use config::{ClubInfo, Settings};
pub use logic::{
    place_lineup, place_match, DecoratedPlayer, FormationSlot, PitchPlayer, PlacementResult,
    PositionBucket, Role,
};
pub use models::{
    LeagueStandings, Location, Match, MatchCollection, Outcome, Participant, PlayerRoster,
    RosterEntry, SeasonSummary, TeamStanding,
};
pub use store::{DataError, DataStore};
