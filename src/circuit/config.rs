//! Network configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::NetworkTopology;
use super::validate::validate_config;
use crate::error::{ReciprocityError, Result};

/// Nominal value of every resistor in both topologies (1 kΩ).
pub const NOMINAL_RESISTANCE: f64 = 1000.0;

/// Default component tolerance (±1%).
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Immutable description of the network a solver evaluates.
///
/// Holds the topology, the nominal value of every resistor (R1 first) and
/// the relative tolerance applied when simulating practical readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNetworkConfig")]
pub struct NetworkConfig {
    topology: NetworkTopology,
    nominal_ohms: Vec<f64>,
    tolerance: f64,
}

/// Unvalidated on-disk form; missing fields fall back to the presets.
#[derive(Debug, Deserialize)]
struct RawNetworkConfig {
    topology: NetworkTopology,
    #[serde(default)]
    nominal_ohms: Option<Vec<f64>>,
    #[serde(default)]
    tolerance: Option<f64>,
}

impl TryFrom<RawNetworkConfig> for NetworkConfig {
    type Error = ReciprocityError;

    fn try_from(raw: RawNetworkConfig) -> Result<Self> {
        let nominal_ohms = raw
            .nominal_ohms
            .unwrap_or_else(|| vec![NOMINAL_RESISTANCE; raw.topology.resistor_count()]);
        Self::new(
            raw.topology,
            nominal_ohms,
            raw.tolerance.unwrap_or(DEFAULT_TOLERANCE),
        )
    }
}

impl NetworkConfig {
    /// Create a validated configuration.
    pub fn new(topology: NetworkTopology, nominal_ohms: Vec<f64>, tolerance: f64) -> Result<Self> {
        let config = Self {
            topology,
            nominal_ohms,
            tolerance,
        };
        validate_config(&config)?;
        Ok(config)
    }

    /// Default configuration for a topology: all resistors 1 kΩ, ±1%.
    pub fn for_topology(topology: NetworkTopology) -> Self {
        Self {
            topology,
            nominal_ohms: vec![NOMINAL_RESISTANCE; topology.resistor_count()],
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Three-resistor bridge preset.
    pub fn bridge() -> Self {
        Self::for_topology(NetworkTopology::Bridge)
    }

    /// Five-resistor ladder preset.
    pub fn ladder() -> Self {
        Self::for_topology(NetworkTopology::Ladder)
    }

    /// Replace the tolerance, validating the new value.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        self.tolerance = tolerance;
        validate_config(&self)?;
        Ok(self)
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// ```json
    /// { "topology": "ladder", "nominal_ohms": [1000, 1000, 1000, 1000, 1000], "tolerance": 0.01 }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ReciprocityError::ConfigParseError { source })
    }

    /// Read and validate a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| {
            ReciprocityError::ConfigReadError {
                path: path.display().to_string(),
                source,
            }
        })?;
        Self::from_json(&json)
    }

    /// The network topology.
    pub fn topology(&self) -> NetworkTopology {
        self.topology
    }

    /// Nominal resistances in ohms, R1 first.
    pub fn nominal_ohms(&self) -> &[f64] {
        &self.nominal_ohms
    }

    /// Relative component tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
