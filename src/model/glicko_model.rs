use tracing::debug;

use crate::model::{
    config::RatingConfig,
    error::RatingError,
    estimate::estimate,
    rating_utils::{expected_score, opponent_scale, to_internal, to_public},
    structures::{
        match_result::MatchResult,
        outcome::Outcome,
        rating_state::{InternalScale, RatingState}
    },
    volatility::{solve_volatility, VolatilityProblem}
};

/// A Glicko-2 rating system instantiated with a [`RatingConfig`].
///
/// Every method is pure: it reads the states it is given and returns new
/// ones, so a failed update never leaves a half-written record behind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Glicko2Model {
    pub config: RatingConfig
}

impl Glicko2Model {
    pub fn new(config: RatingConfig) -> Result<Glicko2Model, RatingError> {
        config.validate()?;

        Ok(Glicko2Model { config })
    }

    pub fn with_tau(tau: f64) -> Result<Glicko2Model, RatingError> {
        Glicko2Model::new(RatingConfig::with_tau(tau))
    }

    /// # Glicko-2 rating period
    ///
    /// Rates `player` against every result in the period at once. Opponents
    /// are fixed references; only the returned state reflects the period.
    ///
    /// Steps:
    /// 1. Convert the player and each opponent to the internal scale.
    /// 2. Pool the estimated variance `v` and improvement `delta` over all opponents.
    /// 3. Solve for the new volatility.
    /// 4. Derive the new deviation and mean, then convert back to the public scale.
    pub fn rate(&self, player: RatingState, results: &[MatchResult]) -> Result<RatingState, RatingError> {
        self.config.validate()?;
        player.validate()?;
        if results.is_empty() {
            return Err(RatingError::EmptyRatingPeriod);
        }
        let outcomes = results
            .iter()
            .map(|r| Outcome::try_from(r.score))
            .collect::<Result<Vec<Outcome>, RatingError>>()?;

        let scale = to_internal(&player);
        let opponents = results
            .iter()
            .zip(&outcomes)
            .map(|(r, outcome)| opponent_scale(&r.opponent).map(|o| (o, outcome.score())))
            .collect::<Result<Vec<(InternalScale, f64)>, RatingError>>()?;

        let period = estimate(scale.mu, opponents.iter().map(|(o, s)| (o, *s)))?;
        let problem = VolatilityProblem {
            delta: period.delta,
            phi: scale.phi,
            variance: period.variance,
            sigma: scale.sigma,
            tau: self.config.tau
        };
        let sigma_prime = solve_volatility(&problem, &self.config)?;

        let phi_star = (scale.phi.powi(2) + sigma_prime.powi(2)).sqrt();
        let phi_prime = 1.0 / (1.0 / phi_star.powi(2) + 1.0 / period.variance).sqrt();
        let mu_prime = scale.mu + phi_prime.powi(2) * period.residual;

        let (rating, deviation) = to_public(mu_prime, phi_prime);
        let rated = RatingState {
            rating,
            deviation,
            volatility: sigma_prime
        };

        debug!(
            matches = results.len(),
            rating_before = player.rating,
            rating_after = rated.rating,
            deviation_after = rated.deviation,
            volatility_after = rated.volatility,
            "Rated period"
        );

        Ok(rated)
    }

    /// Rates a single match. Only `player` is updated.
    pub fn rate_match(&self, player: RatingState, opponent: RatingState, score: f64) -> Result<RatingState, RatingError> {
        self.rate(player, &[MatchResult { opponent, score }])
    }

    /// Rates both sides of one match. Each side is computed from the other's
    /// pre-match state, as if the match were the whole rating period for both.
    ///
    /// Returns `(player, opponent)`.
    pub fn rate_head_to_head(
        &self,
        player: RatingState,
        opponent: RatingState,
        score: f64
    ) -> Result<(RatingState, RatingState), RatingError> {
        let outcome = Outcome::try_from(score)?;
        player.validate()?;
        opponent.validate()?;

        let rated_player = self.rate_match(player, opponent, score)?;
        let rated_opponent = self.rate_match(opponent, player, outcome.inverted().score())?;

        Ok((rated_player, rated_opponent))
    }

    /// Applies a rating period in which the player did not compete. Only the
    /// deviation moves, growing by the player's volatility.
    pub fn rate_inactive(&self, player: RatingState) -> Result<RatingState, RatingError> {
        player.validate()?;

        let scale = to_internal(&player);
        let phi_star = (scale.phi.powi(2) + scale.sigma.powi(2)).sqrt();
        let (_, deviation) = to_public(scale.mu, phi_star);

        Ok(RatingState { deviation, ..player })
    }

    /// Probability that `player` beats `opponent`, accounting for the
    /// opponent's uncertainty.
    pub fn expected_score(&self, player: RatingState, opponent: RatingState) -> Result<f64, RatingError> {
        player.validate()?;
        let scale = to_internal(&player);
        let opponent = opponent_scale(&opponent)?;

        Ok(expected_score(scale.mu, opponent.mu, opponent.phi))
    }
}
