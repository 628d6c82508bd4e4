use approx::abs_diff_eq;
use std::convert::TryFrom;
use strum_macros::{Display, EnumIter};

use crate::model::{constants::SCORE_TOLERANCE, error::RatingError};

/// The result of a match from the perspective of the competitor being rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Outcome {
    Loss,
    Draw,
    Win
}

impl Outcome {
    pub fn score(&self) -> f64 {
        match self {
            Outcome::Loss => 0.0,
            Outcome::Draw => 0.5,
            Outcome::Win => 1.0
        }
    }

    /// The same match seen from the opponent's side.
    pub fn inverted(&self) -> Outcome {
        match self {
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Loss
        }
    }
}

impl TryFrom<f64> for Outcome {
    type Error = RatingError;

    fn try_from(score: f64) -> Result<Self, Self::Error> {
        if abs_diff_eq!(score, 0.0, epsilon = SCORE_TOLERANCE) {
            Ok(Outcome::Loss)
        } else if abs_diff_eq!(score, 0.5, epsilon = SCORE_TOLERANCE) {
            Ok(Outcome::Draw)
        } else if abs_diff_eq!(score, 1.0, epsilon = SCORE_TOLERANCE) {
            Ok(Outcome::Win)
        } else {
            Err(RatingError::InvalidScore(score))
        }
    }
}
