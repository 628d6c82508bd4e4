use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::rating_state::RatingState;

/// Input document for the processor: every competitor taking part in a
/// rating period and the matches they played.
///
/// A player mapped to `null` has not been rated yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingPeriod {
    pub players: IndexMap<String, Option<RatingState>>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>
}

/// A single head-to-head result. `score` is from `player`'s perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player: String,
    pub opponent: String,
    pub score: f64
}
