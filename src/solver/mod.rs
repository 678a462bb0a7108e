//! Circuit evaluation.
//!
//! This module provides the numerical engine of the demonstration.
//!
//! ## Closed-form reduction
//!
//! Both networks are series/parallel combinations, so the reading follows
//! directly from two quantities:
//!
//! ```text
//! R_total   = equivalent resistance seen by the source
//! k         = fraction of the source current through the ammeter
//! I_ammeter = V / R_total * k
//! R_transfer = V / I_ammeter = R_total / k
//! ```
//!
//! The theoretical reading uses nominal resistor values. The practical
//! reading redoes the same reduction with every resistor scaled by a factor
//! drawn from a [`ToleranceSource`].

mod circuit_solver;
mod reduction;
mod spread;
mod tolerance;

pub use circuit_solver::{CircuitSolver, MeasurementResult};
pub use reduction::{parallel, reduce, series, Reduction};
pub use spread::{practical_spread, Spread};
pub use tolerance::{FixedTolerance, ToleranceSource, UniformTolerance};
