use thiserror::Error;

/// Broad classification of a [`RatingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied something the algorithm refuses to rate.
    InvalidInput,
    /// Opponent data that would make the variance estimate meaningless.
    NumericDomain,
    /// The volatility solve did not finish within its ceilings.
    Convergence
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    #[error("A rating period needs at least one match result")]
    EmptyRatingPeriod,

    #[error("Score must be 0, 0.5 or 1, got {0}")]
    InvalidScore(f64),

    #[error("Tau must be positive and finite, got {0}")]
    InvalidTau(f64),

    #[error("Rating deviation must be positive and finite, got {0}")]
    InvalidDeviation(f64),

    #[error("Volatility must be positive and finite, got {0}")]
    InvalidVolatility(f64),

    #[error("Rating must be finite, got {0}")]
    InvalidRating(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Opponent deviation must be positive and finite, got {0}")]
    DegenerateOpponent(f64),

    #[error("Estimated variance is not positive ({0})")]
    NonPositiveVariance(f64),

    #[error("No volatility bracket found after {expansions} expansions")]
    BracketNotFound { expansions: usize },

    #[error("Volatility solve did not converge within {iterations} iterations")]
    NotConverged { iterations: usize }
}

impl RatingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RatingError::EmptyRatingPeriod
            | RatingError::InvalidScore(_)
            | RatingError::InvalidTau(_)
            | RatingError::InvalidDeviation(_)
            | RatingError::InvalidVolatility(_)
            | RatingError::InvalidRating(_)
            | RatingError::InvalidConfig(_) => ErrorKind::InvalidInput,
            RatingError::DegenerateOpponent(_) | RatingError::NonPositiveVariance(_) => ErrorKind::NumericDomain,
            RatingError::BracketNotFound { .. } | RatingError::NotConverged { .. } => ErrorKind::Convergence
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_invalid_input() {
        assert_eq!(RatingError::EmptyRatingPeriod.kind(), ErrorKind::InvalidInput);
        assert_eq!(RatingError::InvalidTau(0.0).kind(), ErrorKind::InvalidInput);
        assert_eq!(RatingError::InvalidDeviation(-1.0).kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_kind_numeric_domain() {
        assert_eq!(RatingError::DegenerateOpponent(0.0).kind(), ErrorKind::NumericDomain);
        assert_eq!(RatingError::NonPositiveVariance(0.0).kind(), ErrorKind::NumericDomain);
    }

    #[test]
    fn test_kind_convergence() {
        assert_eq!(RatingError::NotConverged { iterations: 3 }.kind(), ErrorKind::Convergence);
        assert_eq!(
            RatingError::BracketNotFound { expansions: 100 }.kind(),
            ErrorKind::Convergence
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RatingError::InvalidScore(0.7).to_string(),
            "Score must be 0, 0.5 or 1, got 0.7"
        );
    }
}
