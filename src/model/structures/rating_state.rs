use serde::{Deserialize, Serialize};

use crate::model::{
    constants::{DEFAULT_DEVIATION, DEFAULT_RATING, DEFAULT_VOLATILITY},
    error::RatingError
};

/// A competitor's rating on the public (Elo-like) scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingState {
    pub rating: f64,
    pub deviation: f64,
    pub volatility: f64
}

impl RatingState {
    pub fn new(rating: f64, deviation: f64, volatility: f64) -> RatingState {
        RatingState {
            rating,
            deviation,
            volatility
        }
    }

    /// Resolves a record that may not have been rated yet. Unrated records
    /// start from 1500 / 350 / 0.06.
    pub fn initialize(state: Option<RatingState>) -> RatingState {
        state.unwrap_or_default()
    }

    /// Checks the invariants every rated record must hold before it is used
    /// as the subject of an update.
    pub fn validate(&self) -> Result<(), RatingError> {
        if !self.rating.is_finite() {
            return Err(RatingError::InvalidRating(self.rating));
        }
        if !(self.deviation.is_finite() && self.deviation > 0.0) {
            return Err(RatingError::InvalidDeviation(self.deviation));
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(RatingError::InvalidVolatility(self.volatility));
        }

        Ok(())
    }
}

impl Default for RatingState {
    fn default() -> Self {
        RatingState {
            rating: DEFAULT_RATING,
            deviation: DEFAULT_DEVIATION,
            volatility: DEFAULT_VOLATILITY
        }
    }
}

/// The Glicko-2 view of a [`RatingState`]. Only lives for the duration of an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalScale {
    pub mu: f64,
    pub phi: f64,
    pub sigma: f64
}
