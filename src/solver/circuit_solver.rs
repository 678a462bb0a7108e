//! Theoretical and practical evaluation of a circuit.

use tracing::{debug, trace};

use crate::circuit::{CircuitSide, NetworkConfig};
use crate::components::{resistors, Resistor};

use super::reduction::reduce;
use super::tolerance::ToleranceSource;

/// Ammeter reading and derived resistance for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementResult {
    /// Ammeter current in milliamps
    pub current_ma: f64,
    /// Source voltage over ammeter current, in kilo-ohms.
    ///
    /// `None` when the current is zero (V = 0), where V / I is 0/0.
    pub resistance_kohm: Option<f64>,
}

impl MeasurementResult {
    /// Derive the reading for a driving voltage and a transfer resistance.
    ///
    /// The resistance is the transfer resistance itself, which equals V / I
    /// for every V != 0 even where the current rounds or underflows.
    pub fn from_transfer(volts: f64, transfer_ohms: f64) -> Self {
        // Scale R first so V * 1000 cannot overflow; 6 V over 2 kΩ is still 3.0 mA
        let transfer_kohm = transfer_ohms / 1000.0;
        let current_ma = volts / transfer_kohm;
        let defined = volts != 0.0 && current_ma.is_finite() && transfer_kohm.is_finite();
        Self {
            current_ma,
            resistance_kohm: defined.then_some(transfer_kohm),
        }
    }
}

/// Evaluates one of the fixed networks.
///
/// The solver holds only immutable configuration, so both circuits can be
/// evaluated from different threads without synchronization. Randomness is
/// supplied per call through a [`ToleranceSource`].
#[derive(Debug, Clone)]
pub struct CircuitSolver {
    config: NetworkConfig,
    resistors: Vec<Resistor>,
}

impl CircuitSolver {
    /// Create a solver for a validated configuration.
    pub fn new(config: NetworkConfig) -> Self {
        let resistors = resistors(&config);
        Self { config, resistors }
    }

    /// The configuration this solver evaluates.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Source voltage over ammeter current for the given resistor values (ohms).
    pub fn transfer_resistance(&self, side: CircuitSide, resistances: &[f64]) -> f64 {
        reduce(self.config.topology(), side, resistances).transfer_ohms()
    }

    /// Closed-form reading with every resistor at its nominal value.
    ///
    /// Deterministic: the same voltage and side always give the same result.
    pub fn theoretical(&self, volts: f64, side: CircuitSide) -> MeasurementResult {
        let nominal: Vec<f64> = self.resistors.iter().map(|r| r.resistance).collect();
        let result = MeasurementResult::from_transfer(volts, self.transfer_resistance(side, &nominal));
        debug!(
            topology = %self.config.topology(),
            %side,
            volts,
            current_ma = result.current_ma,
            "theoretical reading"
        );
        result
    }

    /// Reading with each resistor independently perturbed within the tolerance.
    ///
    /// Draws one fresh factor per resistor per call, so repeated calls differ.
    pub fn practical<T>(&self, volts: f64, side: CircuitSide, source: &mut T) -> MeasurementResult
    where
        T: ToleranceSource + ?Sized,
    {
        let tolerance = self.config.tolerance();
        let perturbed: Vec<f64> = self
            .resistors
            .iter()
            .map(|r| {
                let value = r.perturbed(source.factor(tolerance));
                trace!(resistor = %r.name(), ohms = value, "perturbed");
                value
            })
            .collect();

        let result =
            MeasurementResult::from_transfer(volts, self.transfer_resistance(side, &perturbed));
        debug!(
            topology = %self.config.topology(),
            %side,
            volts,
            current_ma = result.current_ma,
            "practical reading"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::solver::{FixedTolerance, UniformTolerance};

    fn bridge() -> CircuitSolver {
        CircuitSolver::new(NetworkConfig::bridge())
    }

    fn ladder() -> CircuitSolver {
        CircuitSolver::new(NetworkConfig::ladder())
    }

    #[test]
    fn test_theoretical_is_deterministic() {
        for solver in [bridge(), ladder()] {
            for side in CircuitSide::ALL {
                let mut v = 0.0;
                while v <= 12.0 {
                    let a = solver.theoretical(v, side);
                    let b = solver.theoretical(v, side);
                    assert_eq!(a.current_ma.to_bits(), b.current_ma.to_bits());
                    assert_eq!(
                        a.resistance_kohm.map(f64::to_bits),
                        b.resistance_kohm.map(f64::to_bits)
                    );
                    v += 0.1;
                }
            }
        }
    }

    #[test]
    fn test_ladder_six_volts_exact() {
        let result = ladder().theoretical(6.0, CircuitSide::First);
        assert_eq!(result.current_ma, 3.0);
        assert_eq!(result.resistance_kohm, Some(2.0));
        assert_eq!(ladder().theoretical(6.0, CircuitSide::Second), result);
    }

    #[test]
    fn test_bridge_theoretical() {
        let solver = bridge();
        for side in CircuitSide::ALL {
            // I = V / 3000 A
            let result = solver.theoretical(6.0, side);
            assert_eq!(result.current_ma, 2.0);
            assert_eq!(result.resistance_kohm, Some(3.0));

            for v in [0.5, 1.0, 3.3, 7.25, 12.0] {
                let result = solver.theoretical(v, side);
                assert_relative_eq!(result.current_ma, v / 3.0, max_relative = 1e-12);
                assert_relative_eq!(result.resistance_kohm.unwrap(), 3.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_ohms_law_closure() {
        let solver = ladder();
        for v in [0.1, 2.0, 5.5, 12.0] {
            let result = solver.theoretical(v, CircuitSide::First);
            assert_relative_eq!(
                result.resistance_kohm.unwrap() * result.current_ma,
                v,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_out_of_range_voltages_are_computed() {
        let solver = ladder();
        let negative = solver.theoretical(-4.0, CircuitSide::First);
        assert_eq!(negative.current_ma, -2.0);
        assert_eq!(negative.resistance_kohm, Some(2.0));

        let high = solver.theoretical(100.0, CircuitSide::Second);
        assert_eq!(high.current_ma, 50.0);
    }

    #[test]
    fn test_extreme_voltages_keep_transfer_resistance() {
        let solver = bridge();

        // V * 1000 would overflow here
        let huge = solver.theoretical(1e306, CircuitSide::First);
        assert!(huge.current_ma.is_finite());
        assert_relative_eq!(huge.current_ma, 1e306 / 3.0, max_relative = 1e-12);
        assert_eq!(huge.resistance_kohm, Some(3.0));

        // Subnormal current; V / I would no longer round back to 3
        let tiny = solver.theoretical(1e-322, CircuitSide::First);
        assert!(tiny.current_ma > 0.0);
        assert_eq!(tiny.resistance_kohm, Some(3.0));

        let ladder = ladder().theoretical(-1e306, CircuitSide::Second);
        assert_eq!(ladder.resistance_kohm, Some(2.0));
    }

    #[test]
    fn test_non_finite_voltage_is_undefined() {
        let result = ladder().theoretical(f64::INFINITY, CircuitSide::First);
        assert_eq!(result.resistance_kohm, None);
    }

    #[test]
    fn test_zero_volts_is_undefined() {
        let mut source = UniformTolerance::seeded(5);
        for solver in [bridge(), ladder()] {
            let theo = solver.theoretical(0.0, CircuitSide::First);
            assert_eq!(theo.current_ma, 0.0);
            assert_eq!(theo.resistance_kohm, None);

            let prac = solver.practical(0.0, CircuitSide::Second, &mut source);
            assert_eq!(prac.current_ma, 0.0);
            assert_eq!(prac.resistance_kohm, None);
        }
    }

    #[test]
    fn test_practical_bounded() {
        let solver = ladder();
        let mut source = UniformTolerance::seeded(2024);
        let theo = solver.theoretical(9.0, CircuitSide::First).resistance_kohm.unwrap();
        for _ in 0..1000 {
            let r = solver
                .practical(9.0, CircuitSide::First, &mut source)
                .resistance_kohm
                .unwrap();
            let deviation = (r - theo).abs() / theo;
            assert!(deviation <= 0.03, "deviation {} exceeds 3x tolerance", deviation);
            assert!(deviation <= 0.10);
        }
    }

    #[test]
    fn test_practical_bridge_bounded() {
        let solver = bridge();
        let mut source = UniformTolerance::seeded(99);
        for side in CircuitSide::ALL {
            for _ in 0..1000 {
                let r = solver.practical(5.0, side, &mut source).resistance_kohm.unwrap();
                assert!((r - 3.0).abs() / 3.0 <= 0.10, "resistance {} out of bounds", r);
            }
        }
    }

    #[test]
    fn test_practical_varies() {
        let solver = ladder();
        let mut source = UniformTolerance::seeded(11);
        let a = solver.practical(6.0, CircuitSide::First, &mut source);
        let b = solver.practical(6.0, CircuitSide::First, &mut source);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_tolerance_matches_theoretical() {
        let config = NetworkConfig::ladder().with_tolerance(0.0).unwrap();
        let solver = CircuitSolver::new(config);
        let mut source = UniformTolerance::seeded(8);
        assert_eq!(
            solver.practical(6.0, CircuitSide::First, &mut source),
            solver.theoretical(6.0, CircuitSide::First)
        );
    }

    #[test]
    fn test_practical_with_fixed_factors() {
        let solver = ladder();
        // R1..R4 at +1%, R5 at -1%: (2020 || 2020) + 990 = 2000 ohms
        let mut source = FixedTolerance::new(vec![1.01, 1.01, 1.01, 1.01, 0.99]);
        let result = solver.practical(6.0, CircuitSide::First, &mut source);
        assert_relative_eq!(result.current_ma, 3.0, max_relative = 1e-12);
        assert_relative_eq!(result.resistance_kohm.unwrap(), 2.0, max_relative = 1e-12);

        // All at +1%: 2020 ohms
        let mut source = FixedTolerance::new(vec![1.01]);
        let result = solver.practical(6.0, CircuitSide::First, &mut source);
        assert_relative_eq!(result.resistance_kohm.unwrap(), 2.02, max_relative = 1e-12);
        assert_relative_eq!(result.current_ma, 6.0 / 2.02, max_relative = 1e-12);
    }

    #[test]
    fn test_practical_bridge_with_fixed_factors() {
        let solver = bridge();
        // R1 = 1010, R2 = 990, R3 = 1000
        let mut source = FixedTolerance::new(vec![1.01, 0.99, 1.0]);
        let result = solver.practical(3.0, CircuitSide::First, &mut source);
        // (R1 R2 + R1 R3 + R2 R3) / R3 = (999900 + 1010000 + 990000) / 1000
        let transfer = 2999.9;
        assert_relative_eq!(result.resistance_kohm.unwrap(), transfer / 1000.0, max_relative = 1e-12);
        assert_relative_eq!(result.current_ma, 3000.0 / transfer, max_relative = 1e-12);
    }

    #[test]
    fn test_identical_perturbation_is_reciprocal() {
        let solver = bridge();
        let values = [1008.0, 993.0, 1001.0];
        assert_relative_eq!(
            solver.transfer_resistance(CircuitSide::First, &values),
            solver.transfer_resistance(CircuitSide::Second, &values),
            max_relative = 1e-12
        );
    }
}
