//! Fixed circuit topologies and their configuration.
//!
//! This module provides the description of the two resistor networks used by
//! the demonstration. The [`NetworkConfig`] struct holds the topology, the
//! nominal resistor values and the component tolerance in a form that can be
//! handed to the solver.

mod config;
mod types;
mod validate;

pub use config::{NetworkConfig, DEFAULT_TOLERANCE, NOMINAL_RESISTANCE};
pub use types::*;
pub use validate::validate_config;
