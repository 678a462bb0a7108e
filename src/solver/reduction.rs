//! Series/parallel reduction of the fixed networks.
//!
//! Both topologies reduce in closed form, so no matrix is assembled: the
//! source sees a single equivalent resistance and the ammeter branch carries
//! a fixed fraction of the source current given by the current divider rule.

use crate::circuit::{CircuitSide, NetworkTopology};

/// Equivalent resistance of two resistors in series.
pub fn series(a: f64, b: f64) -> f64 {
    a + b
}

/// Equivalent resistance of two resistors in parallel.
pub fn parallel(a: f64, b: f64) -> f64 {
    a * b / (a + b)
}

/// Result of reducing a network as seen from its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    /// Equivalent resistance seen by the source (ohms)
    pub total_ohms: f64,
    /// Fraction of the source current flowing through the ammeter
    pub ammeter_fraction: f64,
}

impl Reduction {
    /// Source voltage divided by ammeter current (ohms).
    pub fn transfer_ohms(&self) -> f64 {
        self.total_ohms / self.ammeter_fraction
    }
}

/// Reduce a network with the given resistor values (R1 first).
///
/// `r` must hold exactly `topology.resistor_count()` values; the solver
/// guarantees this through its validated configuration.
pub fn reduce(topology: NetworkTopology, side: CircuitSide, r: &[f64]) -> Reduction {
    match (topology, side) {
        // R1 in series with R2 || R3; ammeter in R2
        (NetworkTopology::Bridge, CircuitSide::First) => Reduction {
            total_ohms: series(r[0], parallel(r[1], r[2])),
            ammeter_fraction: r[2] / (r[1] + r[2]),
        },
        // Source and ammeter legs swapped: R2 in series with R1 || R3; ammeter in R1.
        // Reusing R3 as the series leg instead would not be reciprocal to circuit 1.
        (NetworkTopology::Bridge, CircuitSide::Second) => Reduction {
            total_ohms: series(r[1], parallel(r[0], r[2])),
            ammeter_fraction: r[2] / (r[0] + r[2]),
        },
        // (R1 + R2) || (R3 + R4), then R5; ammeter in the source branch
        (NetworkTopology::Ladder, _) => Reduction {
            total_ohms: series(
                parallel(series(r[0], r[1]), series(r[2], r[3])),
                r[4],
            ),
            ammeter_fraction: 1.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_combination_rules() {
        assert_eq!(series(1000.0, 1000.0), 2000.0);
        assert_eq!(parallel(1000.0, 1000.0), 500.0);
        assert_relative_eq!(parallel(1000.0, 2000.0), 2000.0 / 3.0);
    }

    #[test]
    fn test_bridge_nominal() {
        let r = [1000.0; 3];
        for side in CircuitSide::ALL {
            let red = reduce(NetworkTopology::Bridge, side, &r);
            assert_eq!(red.total_ohms, 1500.0);
            assert_eq!(red.ammeter_fraction, 0.5);
            assert_eq!(red.transfer_ohms(), 3000.0);
        }
    }

    #[test]
    fn test_ladder_nominal() {
        let red = reduce(NetworkTopology::Ladder, CircuitSide::First, &[1000.0; 5]);
        assert_eq!(red.total_ohms, 2000.0);
        assert_eq!(red.transfer_ohms(), 2000.0);
        assert_eq!(red.ammeter_fraction, 1.0);
    }

    #[test]
    fn test_bridge_mirror_swaps_legs() {
        let r = [1000.0, 2000.0, 3000.0];
        let first = reduce(NetworkTopology::Bridge, CircuitSide::First, &r);
        let second = reduce(NetworkTopology::Bridge, CircuitSide::Second, &r);

        // 1000 + (2000 || 3000) = 2200
        assert_relative_eq!(first.total_ohms, 2200.0);
        assert_relative_eq!(first.ammeter_fraction, 0.6);
        // 2000 + (1000 || 3000) = 2750
        assert_relative_eq!(second.total_ohms, 2750.0);
        assert_relative_eq!(second.ammeter_fraction, 0.75);
    }

    #[test]
    fn test_bridge_transfer_is_reciprocal() {
        // The transfer resistance of a linear network is the same in both
        // directions, whatever the individual values.
        let r = [1013.0, 987.0, 1004.0];
        let first = reduce(NetworkTopology::Bridge, CircuitSide::First, &r);
        let second = reduce(NetworkTopology::Bridge, CircuitSide::Second, &r);
        assert_relative_eq!(first.transfer_ohms(), second.transfer_ohms(), max_relative = 1e-12);
    }
}
