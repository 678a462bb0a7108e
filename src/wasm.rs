//! WASM bindings for Reciprocity Core.
//!
//! This module provides JavaScript-friendly bindings for the browser page:
//! the sliders call [`WasmReciprocityDemo::set_voltage`], and the page reads
//! the display fields, the schematic SVG and the verdict message back.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmReciprocityDemo } from 'reciprocity_core';
//!
//! await init();
//!
//! const demo = new WasmReciprocityDemo('ladder');
//! vaSlider.addEventListener('input', () => {
//!   demo.set_voltage(1, vaSlider.valueAsNumber);
//!   document.getElementById('ia-prac').textContent = demo.practical_current(1);
//!   document.getElementById('canvas1').innerHTML = demo.schematic_svg(1);
//!   document.getElementById('recip-check').innerHTML = demo.verdict_message();
//! });
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::CircuitSide;
use crate::display::DisplayFields;
use crate::error::ReciprocityError;
use crate::schematic::{render, DrawPrimitive, SvgRenderer};
use crate::session::{Demonstration, ProgramVariant};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: ReciprocityError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible two-circuit reciprocity demonstration.
#[wasm_bindgen]
pub struct WasmReciprocityDemo {
    demo: Demonstration,
    schematics: [Vec<DrawPrimitive>; 2],
}

#[wasm_bindgen]
impl WasmReciprocityDemo {
    /// Create a demonstration for a variant name ("bridge" or "ladder").
    ///
    /// Both circuits are evaluated once at their default voltage.
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str) -> Result<WasmReciprocityDemo, JsValue> {
        let variant: ProgramVariant = variant.parse().map_err(to_js)?;
        let mut demo = Demonstration::for_variant(variant);
        let mut schematics = [Vec::new(), Vec::new()];
        for report in demo.initialize() {
            schematics[usize::from(report.side.number() - 1)] = report.schematic;
        }
        Ok(WasmReciprocityDemo { demo, schematics })
    }

    /// Handle a slider change for circuit 1 or 2.
    #[wasm_bindgen]
    pub fn set_voltage(&mut self, circuit: u8, volts: f64) -> Result<(), JsValue> {
        let side = CircuitSide::from_number(circuit).map_err(to_js)?;
        let report = self.demo.on_voltage_input(side, volts);
        self.schematics[usize::from(circuit - 1)] = report.schematic;
        Ok(())
    }

    /// Displayed source voltage.
    #[wasm_bindgen]
    pub fn voltage(&self, circuit: u8) -> Result<String, JsValue> {
        self.field(circuit, |f| &f.voltage)
    }

    /// Displayed theoretical current (mA).
    #[wasm_bindgen]
    pub fn theoretical_current(&self, circuit: u8) -> Result<String, JsValue> {
        self.field(circuit, |f| &f.theoretical_current)
    }

    /// Displayed practical current (mA).
    #[wasm_bindgen]
    pub fn practical_current(&self, circuit: u8) -> Result<String, JsValue> {
        self.field(circuit, |f| &f.practical_current)
    }

    /// Displayed theoretical resistance (kΩ).
    #[wasm_bindgen]
    pub fn theoretical_resistance(&self, circuit: u8) -> Result<String, JsValue> {
        self.field(circuit, |f| &f.theoretical_resistance)
    }

    /// Displayed practical resistance (kΩ).
    #[wasm_bindgen]
    pub fn practical_resistance(&self, circuit: u8) -> Result<String, JsValue> {
        self.field(circuit, |f| &f.practical_resistance)
    }

    /// The latest schematic of a circuit as an SVG document.
    #[wasm_bindgen]
    pub fn schematic_svg(&self, circuit: u8) -> Result<String, JsValue> {
        CircuitSide::from_number(circuit).map_err(to_js)?;
        let mut svg = SvgRenderer::default();
        render(&mut svg, &self.schematics[usize::from(circuit - 1)]);
        Ok(svg.finish())
    }

    /// The reciprocity message for the current state.
    #[wasm_bindgen]
    pub fn verdict_message(&self) -> String {
        self.demo.message()
    }
}

impl WasmReciprocityDemo {
    fn field(
        &self,
        circuit: u8,
        pick: impl Fn(&DisplayFields) -> &String,
    ) -> Result<String, JsValue> {
        let side = CircuitSide::from_number(circuit).map_err(to_js)?;
        Ok(self.demo.display(side).map(|f| pick(f).clone()).unwrap_or_default())
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
