//! Repeated practical evaluation.

use crate::circuit::CircuitSide;

use super::circuit_solver::CircuitSolver;
use super::tolerance::ToleranceSource;

/// Summary of the practical resistance over many draws, in kΩ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    pub trials: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Largest relative deviation from the theoretical resistance
    pub max_deviation: f64,
}

/// Evaluate `trials` practical readings and summarize their resistance.
///
/// Returns `None` for zero trials or when the resistance is undefined (0 V).
pub fn practical_spread<T>(
    solver: &CircuitSolver,
    volts: f64,
    side: CircuitSide,
    trials: usize,
    source: &mut T,
) -> Option<Spread>
where
    T: ToleranceSource + ?Sized,
{
    let nominal = solver.theoretical(volts, side).resistance_kohm?;
    if trials == 0 {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for _ in 0..trials {
        let r = solver.practical(volts, side, source).resistance_kohm?;
        min = min.min(r);
        max = max.max(r);
        sum += r;
    }

    let max_deviation = ((max - nominal).abs()).max((min - nominal).abs()) / nominal;
    Some(Spread {
        trials,
        min,
        max,
        mean: sum / trials as f64,
        max_deviation,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuit::NetworkConfig;
    use crate::solver::{FixedTolerance, UniformTolerance};

    #[test]
    fn test_spread_within_tolerance() {
        let solver = CircuitSolver::new(NetworkConfig::ladder());
        let mut source = UniformTolerance::seeded(17);
        let spread = practical_spread(&solver, 6.0, CircuitSide::First, 1000, &mut source).unwrap();
        assert_eq!(spread.trials, 1000);
        assert!(spread.min <= spread.mean && spread.mean <= spread.max);
        assert!(spread.max_deviation <= 0.01 + 1e-12);
        assert!(spread.max - spread.min > 0.0);
    }

    #[test]
    fn test_spread_fixed() {
        let solver = CircuitSolver::new(NetworkConfig::ladder());
        let mut source = FixedTolerance::new(vec![1.01, 1.01, 1.01, 1.01, 1.01, 0.99, 0.99, 0.99, 0.99, 0.99]);
        let spread = practical_spread(&solver, 6.0, CircuitSide::First, 2, &mut source).unwrap();
        assert_relative_eq!(spread.max, 2.02, max_relative = 1e-12);
        assert_relative_eq!(spread.min, 1.98, max_relative = 1e-12);
        assert_relative_eq!(spread.mean, 2.0, max_relative = 1e-12);
        assert_relative_eq!(spread.max_deviation, 0.01, max_relative = 1e-9);
    }

    #[test]
    fn test_spread_edge_cases() {
        let solver = CircuitSolver::new(NetworkConfig::bridge());
        let mut source = UniformTolerance::seeded(1);
        assert!(practical_spread(&solver, 6.0, CircuitSide::First, 0, &mut source).is_none());
        assert!(practical_spread(&solver, 0.0, CircuitSide::First, 10, &mut source).is_none());
    }
}
