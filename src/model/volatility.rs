use tracing::{debug, trace, warn};

use crate::model::{config::RatingConfig, error::RatingError};

/// Everything the new-volatility equation depends on, on the internal scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityProblem {
    pub delta: f64,
    pub phi: f64,
    pub variance: f64,
    pub sigma: f64,
    pub tau: f64
}

impl VolatilityProblem {
    /// `ln(sigma²)`, the point the solve starts from.
    pub fn a(&self) -> f64 {
        self.sigma.powi(2).ln()
    }

    /// The function whose root is `ln(sigma'²)`.
    pub fn f(&self, x: f64) -> f64 {
        let ex = x.exp();
        let phi_sq = self.phi.powi(2);
        let top = ex * (self.delta.powi(2) - phi_sq - self.variance - ex);
        let bottom = 2.0 * (phi_sq + self.variance + ex).powi(2);

        top / bottom - (x - self.a()) / self.tau.powi(2)
    }

    /// Initial `[A, B]` enclosing the root.
    ///
    /// When `delta² <= phi² + v` there is no closed form for `B`, so it is
    /// found by stepping down from `a` in multiples of `tau` until `f(B)` is
    /// no longer negative.
    pub fn bracket(&self, max_expansions: usize) -> Result<(f64, f64), RatingError> {
        let a = self.a();
        let gap = self.delta.powi(2) - self.phi.powi(2) - self.variance;

        if gap > 0.0 {
            debug!(a, b = gap.ln(), "Volatility bracket from delta");
            return Ok((a, gap.ln()));
        }

        for k in 1..=max_expansions {
            let b = a - k as f64 * self.tau;
            if self.f(b) >= 0.0 {
                debug!(a, b, k, "Volatility bracket found by expansion");
                return Ok((a, b));
            }
        }

        warn!(expansions = max_expansions, "No volatility bracket found");
        Err(RatingError::BracketNotFound {
            expansions: max_expansions
        })
    }
}

/// Solves for the new volatility with the Illinois variant of regula falsi.
///
/// Each step takes the secant point `C` of `(A, f(A))` and `(B, f(B))`. If
/// `f(C)` and `f(B)` straddle the root, `A` moves to the old `B`; otherwise
/// `f(A)` is halved so the retained endpoint cannot stall. `B` always moves to `C`.
pub fn solve_volatility(problem: &VolatilityProblem, config: &RatingConfig) -> Result<f64, RatingError> {
    let (mut a, mut b) = problem.bracket(config.max_bracket_expansions)?;
    let mut fa = problem.f(a);
    let mut fb = problem.f(b);
    let mut iterations = 0;

    while (b - a).abs() > config.convergence_tolerance {
        if iterations >= config.max_iterations {
            warn!(iterations, width = (b - a).abs(), "Volatility solve did not converge");
            return Err(RatingError::NotConverged { iterations });
        }

        let c = a + (a - b) * fa / (fb - fa);
        let fc = problem.f(c);
        if !(c.is_finite() && fc.is_finite()) {
            warn!(iterations, c, fc, "Volatility solve left the real line");
            return Err(RatingError::NotConverged { iterations });
        }

        if fc * fb <= 0.0 {
            a = b;
            fa = fb;
        } else {
            fa /= 2.0;
        }

        b = c;
        fb = fc;
        iterations += 1;
        trace!(iterations, a, b, fa, fb, "Illinois step");
    }

    if !a.is_finite() {
        return Err(RatingError::NotConverged { iterations });
    }

    debug!(iterations, "Volatility solve converged");
    Ok((a / 2.0).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn glickman_problem() -> VolatilityProblem {
        VolatilityProblem {
            delta: -0.4834,
            phi: 1.1513,
            variance: 1.7785,
            sigma: 0.06,
            tau: 0.5
        }
    }

    #[test]
    fn test_f_at_a_has_no_drift_term() {
        let problem = glickman_problem();
        let a = problem.a();
        let ex = a.exp();
        let phi_sq = problem.phi.powi(2);
        let expected =
            ex * (problem.delta.powi(2) - phi_sq - problem.variance - ex) / (2.0 * (phi_sq + problem.variance + ex).powi(2));

        assert_abs_diff_eq!(problem.f(a), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_bracket_by_expansion() {
        let problem = glickman_problem();
        let (a, b) = problem.bracket(100).unwrap();

        assert_abs_diff_eq!(a, 0.06f64.powi(2).ln());
        assert!(b < a);
        assert!(problem.f(b) >= 0.0);
    }

    #[test]
    fn test_bracket_from_delta() {
        let problem = VolatilityProblem {
            delta: 3.0,
            phi: 0.5,
            variance: 1.0,
            sigma: 0.06,
            tau: 0.5
        };
        let (_, b) = problem.bracket(100).unwrap();

        assert_abs_diff_eq!(b, (9.0f64 - 0.25 - 1.0).ln());
    }

    #[test]
    fn test_bracket_gives_up() {
        // f is NaN everywhere, so no step can ever satisfy f(B) >= 0
        let problem = VolatilityProblem {
            variance: f64::NAN,
            ..glickman_problem()
        };

        assert_eq!(
            problem.bracket(3),
            Err(RatingError::BracketNotFound { expansions: 3 })
        );
    }

    #[test]
    fn test_solve_reference_value() {
        let sigma = solve_volatility(&glickman_problem(), &RatingConfig::with_tau(0.5)).unwrap();

        assert_abs_diff_eq!(sigma, 0.05999, epsilon = 1e-4);
    }

    #[test]
    fn test_solve_root() {
        let problem = glickman_problem();
        let config = RatingConfig::with_tau(0.5);
        let sigma = solve_volatility(&problem, &config).unwrap();

        assert_abs_diff_eq!(problem.f(sigma.powi(2).ln()), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_solve_large_surprise_raises_volatility() {
        let problem = VolatilityProblem {
            delta: 4.0,
            phi: 0.3,
            variance: 0.5,
            sigma: 0.06,
            tau: 1.0
        };
        let sigma = solve_volatility(&problem, &RatingConfig::with_tau(1.0)).unwrap();

        assert!(sigma > 0.06);
        assert_abs_diff_eq!(problem.f(sigma.powi(2).ln()), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_solve_iteration_ceiling() {
        let config = RatingConfig {
            max_iterations: 1,
            convergence_tolerance: 1e-15,
            ..RatingConfig::with_tau(0.5)
        };

        assert_eq!(
            solve_volatility(&glickman_problem(), &config),
            Err(RatingError::NotConverged { iterations: 1 })
        );
    }
}
