//! Network configuration validation.

use crate::error::{ReciprocityError, Result};

use super::NetworkConfig;

/// Validate a network configuration.
///
/// Checks:
/// - The number of nominal resistances matches the topology
/// - Every resistance is finite and strictly positive
/// - The tolerance is finite and in [0, 1), so perturbed values stay positive
pub fn validate_config(config: &NetworkConfig) -> Result<()> {
    let topology = config.topology();
    let expected = topology.resistor_count();
    let actual = config.nominal_ohms().len();
    if actual != expected {
        return Err(ReciprocityError::resistor_count(topology.as_str(), expected, actual));
    }

    for (i, &value) in config.nominal_ohms().iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(ReciprocityError::InvalidResistance { index: i + 1, value });
        }
    }

    let tolerance = config.tolerance();
    if !tolerance.is_finite() || !(0.0..1.0).contains(&tolerance) {
        return Err(ReciprocityError::InvalidTolerance { value: tolerance });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::circuit::NetworkTopology;

    use super::*;

    #[test]
    fn test_rejects_non_positive_resistance() {
        let err = NetworkConfig::new(NetworkTopology::Bridge, vec![1000.0, 0.0, 1000.0], 0.01)
            .unwrap_err();
        assert!(matches!(err, ReciprocityError::InvalidResistance { index: 2, .. }));

        let err = NetworkConfig::new(NetworkTopology::Bridge, vec![f64::NAN, 1.0, 1.0], 0.01)
            .unwrap_err();
        assert!(matches!(err, ReciprocityError::InvalidResistance { index: 1, .. }));
    }

    #[test]
    fn test_rejects_wrong_count() {
        let err = NetworkConfig::new(NetworkTopology::Ladder, vec![1000.0; 3], 0.01).unwrap_err();
        assert!(matches!(
            err,
            ReciprocityError::ResistorCount { expected: 5, actual: 3, .. }
        ));
    }

    #[test]
    fn test_zero_tolerance_is_valid() {
        assert!(NetworkConfig::new(NetworkTopology::Ladder, vec![1000.0; 5], 0.0).is_ok());
        assert!(NetworkConfig::new(NetworkTopology::Ladder, vec![1000.0; 5], f64::INFINITY).is_err());
    }
}
