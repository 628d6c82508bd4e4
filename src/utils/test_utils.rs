use crate::model::structures::{
    match_result::MatchResult,
    rating_period::{MatchRecord, RatingPeriod},
    rating_state::RatingState
};
use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The player from Glickman's Glicko-2 example.
pub fn glickman_player() -> RatingState {
    RatingState::new(1500.0, 200.0, 0.06)
}

/// The three results from Glickman's Glicko-2 example: a win and two losses.
pub fn glickman_opponents() -> Vec<MatchResult> {
    vec![
        MatchResult {
            opponent: RatingState::new(1400.0, 30.0, 0.06),
            score: 1.0
        },
        MatchResult {
            opponent: RatingState::new(1550.0, 100.0, 0.06),
            score: 0.0
        },
        MatchResult {
            opponent: RatingState::new(1700.0, 300.0, 0.06),
            score: 0.0
        }
    ]
}

/// Glickman's example as a processor document. The opponents are `a`, `b` and `c`.
pub fn glickman_period() -> RatingPeriod {
    let mut players = IndexMap::new();
    players.insert("player".to_string(), Some(glickman_player()));

    let mut matches = Vec::new();
    for (id, result) in ["a", "b", "c"].iter().zip(glickman_opponents()) {
        players.insert(id.to_string(), Some(result.opponent));
        matches.push(MatchRecord {
            player: "player".to_string(),
            opponent: id.to_string(),
            score: result.score
        });
    }

    RatingPeriod { players, matches }
}

/// Generates `n` reproducible match results against opponents spread
/// around `center`.
pub fn generate_match_results(n: usize, center: f64, seed: u64) -> Vec<MatchResult> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            let opponent = RatingState::new(
                center + rng.random_range(-400.0..=400.0),
                rng.random_range(30.0..=350.0),
                rng.random_range(0.04..=0.08)
            );
            let score = match rng.random_range(0..3) {
                0 => 0.0,
                1 => 0.5,
                _ => 1.0
            };

            MatchResult { opponent, score }
        })
        .collect()
}
