use crate::model::{
    error::RatingError,
    glicko_model::Glicko2Model,
    structures::{match_result::MatchResult, rating_state::RatingState}
};

pub mod config;
pub mod constants;
pub mod error;
pub mod estimate;
pub mod glicko_model;
pub mod period_processor;
pub mod rating_utils;
pub mod structures;
pub mod volatility;

/// Updates `player` in place from a single match, and, when `reciprocal` is
/// set, `opponent` as well with the score inverted.
///
/// Unrated records (`None`) are rated from the defaults. Both sides are
/// computed from their pre-match states and nothing is written unless every
/// update succeeds.
pub fn update_single_match(
    player: &mut Option<RatingState>,
    score: f64,
    opponent: &mut Option<RatingState>,
    tau: f64,
    reciprocal: bool
) -> Result<(), RatingError> {
    let model = Glicko2Model::with_tau(tau)?;
    let current_player = RatingState::initialize(*player);
    let current_opponent = RatingState::initialize(*opponent);

    if reciprocal {
        let (rated_player, rated_opponent) = model.rate_head_to_head(current_player, current_opponent, score)?;

        *player = Some(rated_player);
        *opponent = Some(rated_opponent);
    } else {
        *player = Some(model.rate_match(current_player, current_opponent, score)?);
    }

    Ok(())
}

/// Updates `player` in place from every result of a rating period. The
/// opponents are not modified.
pub fn update_batch(player: &mut Option<RatingState>, results: &[MatchResult], tau: f64) -> Result<(), RatingError> {
    let model = Glicko2Model::with_tau(tau)?;
    let rated = model.rate(RatingState::initialize(*player), results)?;

    *player = Some(rated);

    Ok(())
}
