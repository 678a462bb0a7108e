//! Error types for the reciprocity demonstrator.
//!
//! This module provides a unified error type [`ReciprocityError`] that covers
//! configuration validation and the I/O performed by the front-ends.
//! Circuit evaluation itself never fails: an indeterminate resistance is
//! reported as a value, not as an error.

use thiserror::Error;

/// Result type alias using [`ReciprocityError`].
pub type Result<T> = std::result::Result<T, ReciprocityError>;

/// Unified error type for all reciprocity operations.
#[derive(Error, Debug)]
pub enum ReciprocityError {
    // ============ Configuration Errors ============
    /// Wrong number of nominal resistances for the topology
    #[error("Topology '{topology}' needs {expected} resistors, got {actual}")]
    ResistorCount {
        topology: String,
        expected: usize,
        actual: usize,
    },

    /// Nominal resistance that is zero, negative or not finite
    #[error("Invalid resistance for R{index}: {value} ohms (must be finite and positive)")]
    InvalidResistance { index: usize, value: f64 },

    /// Tolerance outside [0, 1)
    #[error("Invalid tolerance {value}: must be finite and in [0, 1)")]
    InvalidTolerance { value: f64 },

    /// Invalid reciprocity threshold
    #[error("Invalid threshold '{name}': {value} (must be finite and positive)")]
    InvalidThreshold { name: String, value: f64 },

    /// Unrecognized program variant name
    #[error("Unknown variant '{name}' (expected 'bridge' or 'ladder')")]
    UnknownVariant { name: String },

    /// Unrecognized message style name
    #[error("Unknown message style '{name}' (expected 'plain' or 'emphasized')")]
    UnknownStyle { name: String },

    /// Unrecognized circuit selector
    #[error("Unknown circuit {index} (expected 1 or 2)")]
    UnknownCircuit { index: u8 },

    // ============ I/O Errors ============
    /// Error reading a configuration file
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration document
    #[error("Failed to parse network config: {source}")]
    ConfigParseError {
        #[source]
        source: serde_json::Error,
    },

    /// Error writing a rendered schematic
    #[error("Failed to write schematic '{path}': {source}")]
    SchematicWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReciprocityError {
    /// Create a resistor count error
    pub fn resistor_count(topology: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ResistorCount {
            topology: topology.into(),
            expected,
            actual,
        }
    }

    /// Create an invalid threshold error
    pub fn invalid_threshold(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidThreshold {
            name: name.into(),
            value,
        }
    }

    /// Create an unknown variant error
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant { name: name.into() }
    }
}
