// Model constants
pub const DEFAULT_RATING: f64 = 1500.0;
pub const DEFAULT_DEVIATION: f64 = 350.0;
pub const DEFAULT_VOLATILITY: f64 = 0.06;
pub const DEFAULT_TAU: f64 = 0.2;

/// 400 / ln(10), the factor between the public scale and the internal Glicko-2 scale.
pub const SCALE_FACTOR: f64 = 173.7178;

// Volatility solve
pub const CONVERGENCE_TOLERANCE: f64 = 0.000_001;
pub const MAX_ITERATIONS: usize = 1000;
pub const MAX_BRACKET_EXPANSIONS: usize = 100;

/// Scores are compared against 0, 0.5 and 1 with this tolerance.
pub const SCORE_TOLERANCE: f64 = 1e-9;
