//! Pure transforms from the published documents to what the pages show.

mod lineup;
mod results;
mod standings;

pub use lineup::{
    place_lineup, place_match, DecoratedPlayer, FormationSlot, PitchPlayer, PlacementResult,
    PositionBucket, Role, BENCH, MARKER_LIMIT,
};
pub use results::{
    card_status, clean_sheets, effective_outcome, format_match_date, newest_first, parse_score,
    recent_results, score_line, season_summary, summarize, ScoreLine,
};
pub use standings::{ordinal, TeamStats};
