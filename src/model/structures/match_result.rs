use serde::{Deserialize, Serialize};

use super::{outcome::Outcome, rating_state::RatingState};

/// One match inside a rating period: the opponent as they stood at the start
/// of the period, and the score from the rated competitor's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub opponent: RatingState,
    pub score: f64
}

impl MatchResult {
    pub fn new(opponent: RatingState, outcome: Outcome) -> MatchResult {
        MatchResult {
            opponent,
            score: outcome.score()
        }
    }

    /// Builds a result against a possibly unrated opponent.
    pub fn against(opponent: Option<RatingState>, score: f64) -> MatchResult {
        MatchResult {
            opponent: RatingState::initialize(opponent),
            score
        }
    }
}
