//! # Reciprocity Core
//!
//! An interactive demonstration of the electrical reciprocity theorem.
//!
//! This library provides:
//! - Two fixed resistor networks (a three-resistor bridge and a five-resistor ladder)
//! - Closed-form theoretical readings and tolerance-perturbed "practical" readings
//! - A reciprocity check comparing the two mirrored circuits
//! - Schematic layout as a list of drawing primitives, with an SVG renderer
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Topologies and network configuration
//! - [`components`] - Resistor model
//! - [`solver`] - Series/parallel reduction and tolerance sources
//! - [`reciprocity`] - Verdict between the two circuits
//! - [`display`] - Formatting of readings
//! - [`schematic`] - Drawing primitives and renderers
//! - [`session`] - One evaluation cycle per input change
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! reciprocity --variant ladder --va 6 --vb 6 --svg-dir out/
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmReciprocityDemo } from 'reciprocity_core';
//!
//! const demo = new WasmReciprocityDemo('bridge');
//! demo.set_voltage(1, slider.valueAsNumber);
//! status.textContent = demo.verdict_message();
//! ```
//!
//! ## Readings
//!
//! For a source voltage V the ammeter current is `V / R_transfer`, where the
//! transfer resistance is 3 kΩ for the bridge and 2 kΩ for the ladder. The
//! practical reading redraws every resistor within ±1% of its nominal value
//! on each evaluation. At V = 0 the derived resistance is 0/0 and reported as
//! undefined.

pub mod circuit;
pub mod components;
pub mod display;
pub mod error;
pub mod reciprocity;
pub mod schematic;
pub mod session;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{CircuitSide, NetworkConfig, NetworkTopology};
pub use error::{ReciprocityError, Result};
pub use reciprocity::{check_reciprocity, ReciprocityPolicy, ReciprocityVerdict};
pub use session::{Demonstration, ProgramVariant};
pub use solver::{CircuitSolver, MeasurementResult};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmReciprocityDemo;
