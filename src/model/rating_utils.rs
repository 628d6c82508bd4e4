use std::f64::consts::PI;

use crate::model::{
    constants::{DEFAULT_RATING, SCALE_FACTOR},
    error::RatingError,
    structures::rating_state::{InternalScale, RatingState}
};

/// Maps a public rating onto the internal Glicko-2 scale.
pub fn to_internal(state: &RatingState) -> InternalScale {
    InternalScale {
        mu: (state.rating - DEFAULT_RATING) / SCALE_FACTOR,
        phi: state.deviation / SCALE_FACTOR,
        sigma: state.volatility
    }
}

/// Inverse of [`to_internal`] for the rating and deviation. Returns `(rating, deviation)`.
pub fn to_public(mu: f64, phi: f64) -> (f64, f64) {
    (mu * SCALE_FACTOR + DEFAULT_RATING, phi * SCALE_FACTOR)
}

/// Internal scale of an opponent. An opponent without uncertainty would
/// collapse the variance estimate, so it is rejected rather than clamped.
pub fn opponent_scale(opponent: &RatingState) -> Result<InternalScale, RatingError> {
    if !opponent.rating.is_finite() {
        return Err(RatingError::InvalidRating(opponent.rating));
    }
    if !(opponent.deviation.is_finite() && opponent.deviation > 0.0) {
        return Err(RatingError::DegenerateOpponent(opponent.deviation));
    }

    Ok(to_internal(opponent))
}

/// Damping factor for an opponent's uncertainty, in (0, 1].
pub fn g(phi: f64) -> f64 {
    1.0 / (1.0 + 3.0 * phi.powi(2) / PI.powi(2)).sqrt()
}

/// Probability that a competitor at `mu` beats an opponent at `mu_j` with deviation `phi_j`.
pub fn expected_score(mu: f64, mu_j: f64, phi_j: f64) -> f64 {
    1.0 / (1.0 + (-g(phi_j) * (mu - mu_j)).exp())
}
