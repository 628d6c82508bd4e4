use serde::{Deserialize, Serialize};

use crate::model::{
    constants::{CONVERGENCE_TOLERANCE, DEFAULT_TAU, MAX_BRACKET_EXPANSIONS, MAX_ITERATIONS},
    error::RatingError
};

/// Tunables of the rating system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Constrains the change in volatility over time. Reasonable values lie
    /// between 0.3 and 1.2; smaller values keep ratings more conservative.
    pub tau: f64,
    /// Width of the volatility bracket at which the solve stops.
    pub convergence_tolerance: f64,
    /// Ceiling on Illinois iterations before the solve fails.
    pub max_iterations: usize,
    /// Ceiling on `a - k * tau` steps when the lower bracket has to be searched for.
    pub max_bracket_expansions: usize
}

impl RatingConfig {
    pub fn with_tau(tau: f64) -> RatingConfig {
        RatingConfig {
            tau,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), RatingError> {
        if !(self.tau.is_finite() && self.tau > 0.0) {
            return Err(RatingError::InvalidTau(self.tau));
        }
        if !(self.convergence_tolerance.is_finite() && self.convergence_tolerance > 0.0) {
            return Err(RatingError::InvalidConfig(format!(
                "convergence tolerance must be positive, got {}",
                self.convergence_tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(RatingError::InvalidConfig("max_iterations must be at least 1".to_string()));
        }
        if self.max_bracket_expansions == 0 {
            return Err(RatingError::InvalidConfig(
                "max_bracket_expansions must be at least 1".to_string()
            ));
        }

        Ok(())
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        RatingConfig {
            tau: DEFAULT_TAU,
            convergence_tolerance: CONVERGENCE_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            max_bracket_expansions: MAX_BRACKET_EXPANSIONS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RatingConfig::default();

        assert_eq!(config.tau, 0.2);
        assert_eq!(config.convergence_tolerance, 1e-6);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.max_bracket_expansions, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_tau() {
        let config = RatingConfig::with_tau(0.5);

        assert_eq!(config.tau, 0.5);
        assert_eq!(config.max_iterations, MAX_ITERATIONS);
    }

    #[test]
    fn test_validate_tau() {
        assert_eq!(RatingConfig::with_tau(0.0).validate(), Err(RatingError::InvalidTau(0.0)));
        assert_eq!(RatingConfig::with_tau(-0.5).validate(), Err(RatingError::InvalidTau(-0.5)));
        assert!(RatingConfig::with_tau(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_ceilings() {
        let config = RatingConfig {
            max_iterations: 0,
            ..Default::default()
        };

        assert!(matches!(config.validate(), Err(RatingError::InvalidConfig(_))));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RatingConfig = serde_json::from_str(r#"{ "tau": 0.5 }"#).unwrap();

        assert_eq!(config, RatingConfig::with_tau(0.5));
    }
}
