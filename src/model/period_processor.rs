use std::{fs, path::Path};

use indexmap::IndexMap;
use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    model::{
        config::RatingConfig,
        error::RatingError,
        glicko_model::Glicko2Model,
        structures::{
            match_result::MatchResult,
            outcome::Outcome,
            processing_mode::ProcessingMode,
            rating_period::{MatchRecord, RatingPeriod},
            rating_state::RatingState
        }
    },
    utils::progress_utils::{hidden_progress_bar, progress_bar}
};

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Failed to read rating period: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse rating period: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read rating config: {0}")]
    ConfigIo(#[source] std::io::Error),

    #[error("Failed to parse rating config: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("Match {index} references unknown player '{player}'")]
    UnknownPlayer { index: usize, player: String },

    #[error("Match {index} pairs '{player}' against themselves")]
    SelfMatch { index: usize, player: String },

    #[error("Failed to rate '{player}': {source}")]
    Rating {
        player: String,
        #[source]
        source: RatingError
    }
}

pub fn load_period(path: &Path) -> Result<RatingPeriod, ProcessorError> {
    let contents = fs::read_to_string(path)?;
    let period = serde_json::from_str(&contents)?;

    Ok(period)
}

/// Reads a [`RatingConfig`] from JSON. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<RatingConfig, ProcessorError> {
    let contents = fs::read_to_string(path).map_err(ProcessorError::ConfigIo)?;
    let config = serde_json::from_str(&contents).map_err(ProcessorError::ConfigParse)?;

    Ok(config)
}

/// Turns a [`RatingPeriod`] document into updated ratings for every player in it.
pub struct PeriodProcessor {
    pub model: Glicko2Model,
    pub mode: ProcessingMode,
    pub show_progress: bool
}

impl PeriodProcessor {
    pub fn new(model: Glicko2Model, mode: ProcessingMode) -> PeriodProcessor {
        PeriodProcessor {
            model,
            mode,
            show_progress: false
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> PeriodProcessor {
        self.show_progress = show_progress;
        self
    }

    /// Rates the period. The returned map keeps the player order of the input.
    pub fn process(&self, period: &RatingPeriod) -> Result<IndexMap<String, RatingState>, ProcessorError> {
        validate_matches(period)?;

        info!(
            players = period.players.len(),
            matches = period.matches.len(),
            mode = %self.mode,
            "Processing rating period"
        );

        let initial: IndexMap<String, RatingState> = period
            .players
            .iter()
            .map(|(id, state)| (id.clone(), RatingState::initialize(*state)))
            .collect();

        let ratings = match self.mode {
            ProcessingMode::Period => self.process_period(&initial, &period.matches)?,
            ProcessingMode::Sequential => self.process_sequential(initial, &period.matches)?
        };

        info!("Rating period complete");
        Ok(ratings)
    }

    /// # Pooled rating period
    ///
    /// Every match contributes a result to both of its players. Opponents are
    /// always seen at their pre-period ratings, and each player is rated once
    /// against everything they played. Players with no matches have their
    /// deviation inflated instead.
    fn process_period(
        &self,
        initial: &IndexMap<String, RatingState>,
        matches: &[MatchRecord]
    ) -> Result<IndexMap<String, RatingState>, ProcessorError> {
        let mut results: Vec<(&str, MatchResult)> = Vec::with_capacity(matches.len() * 2);
        for record in matches {
            let outcome = Outcome::try_from(record.score).map_err(|source| ProcessorError::Rating {
                player: record.player.clone(),
                source
            })?;

            results.push((
                record.player.as_str(),
                MatchResult::new(initial[&record.opponent], outcome)
            ));
            results.push((
                record.opponent.as_str(),
                MatchResult::new(initial[&record.player], outcome.inverted())
            ));
        }
        let results_by_player = results.into_iter().into_group_map();

        let bar = self.bar(initial.len() as u64, "Rating players");
        let mut ratings = IndexMap::with_capacity(initial.len());
        for (id, state) in initial {
            let rated = match results_by_player.get(id.as_str()) {
                Some(player_results) => self.model.rate(*state, player_results),
                None => {
                    debug!(player = %id, "No matches this period");
                    self.model.rate_inactive(*state)
                }
            }
            .map_err(|source| ProcessorError::Rating {
                player: id.clone(),
                source
            })?;

            ratings.insert(id.clone(), rated);
            bar.inc(1);
        }
        bar.finish();

        Ok(ratings)
    }

    /// Applies each match in order, updating both players from their current ratings.
    fn process_sequential(
        &self,
        mut ratings: IndexMap<String, RatingState>,
        matches: &[MatchRecord]
    ) -> Result<IndexMap<String, RatingState>, ProcessorError> {
        let bar = self.bar(matches.len() as u64, "Rating matches");
        for record in matches {
            let player = ratings[&record.player];
            let opponent = ratings[&record.opponent];
            for (id, state) in [(&record.player, &player), (&record.opponent, &opponent)] {
                state.validate().map_err(|source| ProcessorError::Rating {
                    player: id.clone(),
                    source
                })?;
            }

            let (rated_player, rated_opponent) = self
                .model
                .rate_head_to_head(player, opponent, record.score)
                .map_err(|source| ProcessorError::Rating {
                    player: record.player.clone(),
                    source
                })?;

            ratings.insert(record.player.clone(), rated_player);
            ratings.insert(record.opponent.clone(), rated_opponent);
            bar.inc(1);
        }
        bar.finish();

        Ok(ratings)
    }

    fn bar(&self, len: u64, msg: &str) -> indicatif::ProgressBar {
        if self.show_progress {
            progress_bar(len, msg.to_string())
        } else {
            hidden_progress_bar(len)
        }
    }
}

fn validate_matches(period: &RatingPeriod) -> Result<(), ProcessorError> {
    for (index, record) in period.matches.iter().enumerate() {
        for id in [&record.player, &record.opponent] {
            if !period.players.contains_key(id) {
                return Err(ProcessorError::UnknownPlayer {
                    index,
                    player: id.clone()
                });
            }
        }
        if record.player == record.opponent {
            return Err(ProcessorError::SelfMatch {
                index,
                player: record.player.clone()
            });
        }
    }

    Ok(())
}
