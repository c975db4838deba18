use serde::{Serialize, Serializer};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Season numbers and episode numbers as they arrive from clients.
///
/// Signed so that negative input reaches range validation instead of failing
/// to deserialize.
pub type Number = i32;

/// A single episode. Identified by `(season, episode_number)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub season: Number,
    pub episode_number: Number,
    pub title: String,
    /// Original air date, ISO `YYYY-MM-DD`.
    pub released_date: String,
}

/// A season summary derived by grouping episodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// Serialized as a string on the wire, e.g. `"3"`.
    #[serde(serialize_with = "as_string")]
    pub season_number: Number,
    pub episode_count: usize,
}

fn as_string<S: Serializer>(value: &Number, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
