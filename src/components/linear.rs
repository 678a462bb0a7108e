//! Linear passive components: Resistor.

/// A resistor with a nominal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    /// One-based position in the network (R1, R2, ...)
    pub index: usize,
    /// Nominal resistance in ohms
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(index: usize, resistance: f64) -> Self {
        Self { index, resistance }
    }

    /// Component designator, e.g. "R2".
    pub fn name(&self) -> String {
        format!("R{}", self.index)
    }

    /// Resistance after scaling by a tolerance factor.
    ///
    /// A factor of 1.0 returns the nominal value unchanged.
    pub fn perturbed(&self, factor: f64) -> f64 {
        self.resistance * factor
    }

    /// Schematic label for the nominal value, e.g. "1kΩ".
    pub fn label(&self) -> String {
        format_ohms(self.resistance)
    }
}

/// Format a resistance with an engineering prefix: 470Ω, 1kΩ, 2.2kΩ, 1MΩ.
pub fn format_ohms(ohms: f64) -> String {
    let (value, prefix) = if ohms >= 1e6 {
        (ohms / 1e6, "M")
    } else if ohms >= 1e3 {
        (ohms / 1e3, "k")
    } else {
        (ohms, "")
    };
    // Trim "1.0" to "1" but keep "2.2"
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}{}Ω", rounded, prefix)
}
