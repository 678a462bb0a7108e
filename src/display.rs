//! Display formatting of readings.
//!
//! Readings are shown as fixed-precision text. Currents always use one
//! fractional digit; resistances use the precision of the program variant.
//! The undefined resistance at 0 V is shown as [`UNDEFINED`].

use crate::solver::MeasurementResult;

/// Text shown for an indeterminate resistance.
pub const UNDEFINED: &str = "undefined";

/// Format a current in milliamps with one fractional digit.
pub fn format_current(current_ma: f64) -> String {
    format!("{:.1}", current_ma)
}

/// Format a source voltage with one fractional digit.
pub fn format_voltage(volts: f64) -> String {
    format!("{:.1}", volts)
}

/// Format a resistance in kΩ, or [`UNDEFINED`] for the 0/0 case.
pub fn format_resistance(resistance_kohm: Option<f64>, decimals: usize) -> String {
    match resistance_kohm {
        Some(r) => format!("{:.*}", decimals, r),
        None => UNDEFINED.to_string(),
    }
}

/// Parse a previously displayed numeric value.
///
/// Missing or non-numeric text (including [`UNDEFINED`]) reads as 0.0.
pub fn parse_displayed(text: Option<&str>) -> f64 {
    text.and_then(|t| t.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// The text fields shown for one circuit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayFields {
    pub voltage: String,
    pub theoretical_current: String,
    pub practical_current: String,
    pub theoretical_resistance: String,
    pub practical_resistance: String,
}

impl DisplayFields {
    /// Format a pair of readings taken at `volts`.
    pub fn new(
        volts: f64,
        theoretical: &MeasurementResult,
        practical: &MeasurementResult,
        resistance_decimals: usize,
    ) -> Self {
        Self {
            voltage: format_voltage(volts),
            theoretical_current: format_current(theoretical.current_ma),
            practical_current: format_current(practical.current_ma),
            theoretical_resistance: format_resistance(theoretical.resistance_kohm, resistance_decimals),
            practical_resistance: format_resistance(practical.resistance_kohm, resistance_decimals),
        }
    }

    /// Rows of (label, value) for tabular output.
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Source voltage (V)", self.voltage.as_str()),
            ("Theoretical current (mA)", self.theoretical_current.as_str()),
            ("Practical current (mA)", self.practical_current.as_str()),
            ("Theoretical resistance (kΩ)", self.theoretical_resistance.as_str()),
            ("Practical resistance (kΩ)", self.practical_resistance.as_str()),
        ]
    }
}
