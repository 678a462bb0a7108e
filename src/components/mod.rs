//! Component models for the demonstration networks.
//!
//! Only linear resistors appear in the fixed topologies. Each resistor keeps
//! its nominal value; practical readings work on perturbed copies drawn per
//! evaluation, so the models themselves are never mutated.

mod linear;

pub use linear::{format_ohms, Resistor};

use crate::circuit::NetworkConfig;

/// Build the resistor list for a configuration, R1 first.
pub fn resistors(config: &NetworkConfig) -> Vec<Resistor> {
    config
        .nominal_ohms()
        .iter()
        .enumerate()
        .map(|(i, &ohms)| Resistor::new(i + 1, ohms))
        .collect()
}
