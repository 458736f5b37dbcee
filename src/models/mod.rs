//! Data structures for the published documents: matches, roster, league standings.

mod fixture;
mod roster;
mod standings;

pub use fixture::{
    DocumentMetadata, Location, Match, MatchCollection, Outcome, Participant, SeasonSummary,
};
pub use roster::{PlayerRoster, RosterEntry, TopPerformer, TopPerformers};
pub use standings::{LeagueStandings, TeamStanding};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a field, falling back to the default when the value is `null` or has the wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// A count: integers, integral floats and numeric strings are accepted, anything else is 0.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_opt_u32(deserializer).map(Option::unwrap_or_default)
}

/// Like [`lenient_u32`], but an unusable value is `None` rather than 0.
pub(crate) fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(whole_number(&value).and_then(|n| u32::try_from(n).ok()))
}

/// A signed whole number such as a goal difference, 0 when unusable.
pub(crate) fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(whole_number(&value)
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or_default())
}

fn whole_number(value: &Value) -> Option<i64> {
    let float = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()?
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Some(i);
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    (float.is_finite() && float.fract() == 0.0 && float.abs() < 9.0e15).then_some(float as i64)
}
