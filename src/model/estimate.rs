use crate::model::{
    error::RatingError,
    rating_utils::{expected_score, g},
    structures::rating_state::InternalScale
};

/// Quantities pooled over every opponent in a rating period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodEstimate {
    /// Estimated variance of the rating based on game outcomes (`v`).
    pub variance: f64,
    /// Estimated improvement in rating (`delta`).
    pub delta: f64,
    /// Σ g(phi_j) * (s_j - E_j), the score residual shared by `delta` and the new mean.
    pub residual: f64
}

/// Computes `v` and `delta` for a competitor at `mu` against `(opponent, score)` pairs.
///
/// A single match is simply the one-element case.
pub fn estimate<'a, I>(mu: f64, opponents: I) -> Result<PeriodEstimate, RatingError>
where
    I: IntoIterator<Item = (&'a InternalScale, f64)>
{
    let mut information = 0.0;
    let mut residual = 0.0;
    let mut count = 0usize;

    for (opponent, score) in opponents {
        let g_phi = g(opponent.phi);
        let e = expected_score(mu, opponent.mu, opponent.phi);

        information += g_phi.powi(2) * e * (1.0 - e);
        residual += g_phi * (score - e);
        count += 1;
    }

    if count == 0 {
        return Err(RatingError::EmptyRatingPeriod);
    }
    // E saturates to exactly 0 or 1 for absurd rating gaps, which leaves no information
    if !(information.is_finite() && information > 0.0) {
        return Err(RatingError::NonPositiveVariance(information));
    }

    let variance = 1.0 / information;

    Ok(PeriodEstimate {
        variance,
        delta: variance * residual,
        residual
    })
}
