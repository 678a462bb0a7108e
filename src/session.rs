//! The interactive demonstration.
//!
//! A [`Demonstration`] owns the state shown on screen: the source voltage and
//! the displayed fields of each circuit. Every input change runs one complete
//! cycle synchronously: evaluate, format, lay out the schematic, re-check
//! reciprocity. Nothing but the displayed values survives a cycle.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::circuit::{CircuitSide, NetworkConfig, NetworkTopology};
use crate::display::{parse_displayed, DisplayFields};
use crate::error::{ReciprocityError, Result};
use crate::reciprocity::{check_reciprocity, ReciprocityPolicy, ReciprocityVerdict};
use crate::schematic::{schematic, DrawPrimitive};
use crate::solver::{CircuitSolver, MeasurementResult, ToleranceSource, UniformTolerance};

/// Source voltage both circuits start at, in volts.
pub const DEFAULT_VOLTAGE: f64 = 6.0;

/// The two published versions of the demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramVariant {
    /// Three-resistor bridge, 0.05 kΩ verification, one-decimal resistances.
    Bridge,
    /// Five-resistor ladder, 0.1 kΩ verification, two-decimal resistances.
    Ladder,
}

impl ProgramVariant {
    /// Network preset of this variant.
    pub fn network(&self) -> NetworkConfig {
        NetworkConfig::for_topology(self.topology())
    }

    /// Topology of this variant.
    pub fn topology(&self) -> NetworkTopology {
        match self {
            ProgramVariant::Bridge => NetworkTopology::Bridge,
            ProgramVariant::Ladder => NetworkTopology::Ladder,
        }
    }

    /// Reciprocity thresholds and message style of this variant.
    pub fn policy(&self) -> ReciprocityPolicy {
        match self {
            ProgramVariant::Bridge => ReciprocityPolicy::bridge(),
            ProgramVariant::Ladder => ReciprocityPolicy::ladder(),
        }
    }

    /// Fractional digits shown for resistances.
    pub fn resistance_decimals(&self) -> usize {
        match self {
            ProgramVariant::Bridge => 1,
            ProgramVariant::Ladder => 2,
        }
    }
}

impl From<NetworkTopology> for ProgramVariant {
    fn from(topology: NetworkTopology) -> Self {
        match topology {
            NetworkTopology::Bridge => ProgramVariant::Bridge,
            NetworkTopology::Ladder => ProgramVariant::Ladder,
        }
    }
}

impl FromStr for ProgramVariant {
    type Err = ReciprocityError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<NetworkTopology>().map(ProgramVariant::from)
    }
}

impl fmt::Display for ProgramVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.topology(), f)
    }
}

/// Everything produced by one evaluation cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// The circuit whose input changed
    pub side: CircuitSide,
    pub theoretical: MeasurementResult,
    pub practical: MeasurementResult,
    /// Formatted fields for the changed circuit
    pub display: DisplayFields,
    /// Schematic of the changed circuit
    pub schematic: Vec<DrawPrimitive>,
    /// Verdict over both circuits after the change
    pub verdict: ReciprocityVerdict,
    /// Formatted verdict
    pub message: String,
}

/// State of the two-circuit demonstration.
pub struct Demonstration<T: ToleranceSource = UniformTolerance> {
    solver: CircuitSolver,
    policy: ReciprocityPolicy,
    resistance_decimals: usize,
    source: T,
    voltages: [f64; 2],
    displays: [Option<DisplayFields>; 2],
}

impl Demonstration<UniformTolerance> {
    /// Demonstration of a variant with tolerance drawn from system entropy.
    pub fn for_variant(variant: ProgramVariant) -> Self {
        Self::new(variant, UniformTolerance::from_entropy())
    }
}

impl<T: ToleranceSource> Demonstration<T> {
    /// Demonstration of a variant with an explicit tolerance source.
    pub fn new(variant: ProgramVariant, source: T) -> Self {
        Self::with_parts(
            variant.network(),
            variant.policy(),
            variant.resistance_decimals(),
            source,
        )
    }

    /// Demonstration with custom network, policy and precision.
    pub fn with_parts(
        config: NetworkConfig,
        policy: ReciprocityPolicy,
        resistance_decimals: usize,
        source: T,
    ) -> Self {
        Self {
            solver: CircuitSolver::new(config),
            policy,
            resistance_decimals,
            source,
            voltages: [DEFAULT_VOLTAGE; 2],
            displays: [None, None],
        }
    }

    /// Run the initial cycle for both circuits at their current voltages.
    pub fn initialize(&mut self) -> Vec<CycleReport> {
        CircuitSide::ALL
            .iter()
            .map(|&side| self.on_voltage_input(side, self.voltage(side)))
            .collect()
    }

    /// Handle a new source voltage for one circuit.
    pub fn on_voltage_input(&mut self, side: CircuitSide, volts: f64) -> CycleReport {
        let theoretical = self.solver.theoretical(volts, side);
        let practical = self.solver.practical(volts, side, &mut self.source);
        let display = DisplayFields::new(volts, &theoretical, &practical, self.resistance_decimals);
        let primitives = schematic(self.solver.config(), side, volts, practical.current_ma);

        self.voltages[slot(side)] = volts;
        self.displays[slot(side)] = Some(display.clone());

        let verdict = self.verdict();
        debug!(%side, volts, ?verdict, "cycle complete");
        CycleReport {
            side,
            theoretical,
            practical,
            display,
            schematic: primitives,
            verdict,
            message: verdict.message(self.policy.style),
        }
    }

    /// Compare the practical resistances as currently displayed.
    ///
    /// A circuit that has not been evaluated yet reads as 0 kΩ.
    pub fn verdict(&self) -> ReciprocityVerdict {
        let r_aa = parse_displayed(self.displayed_resistance(CircuitSide::First));
        let r_bb = parse_displayed(self.displayed_resistance(CircuitSide::Second));
        check_reciprocity(
            self.voltage(CircuitSide::First),
            self.voltage(CircuitSide::Second),
            r_aa,
            r_bb,
            &self.policy,
        )
    }

    /// The current verdict, formatted.
    pub fn message(&self) -> String {
        self.verdict().message(self.policy.style)
    }

    /// Current source voltage of a circuit.
    pub fn voltage(&self, side: CircuitSide) -> f64 {
        self.voltages[slot(side)]
    }

    /// Last displayed fields of a circuit.
    pub fn display(&self, side: CircuitSide) -> Option<&DisplayFields> {
        self.displays[slot(side)].as_ref()
    }

    /// The solver in use.
    pub fn solver(&self) -> &CircuitSolver {
        &self.solver
    }

    /// The reciprocity policy in use.
    pub fn policy(&self) -> &ReciprocityPolicy {
        &self.policy
    }

    fn displayed_resistance(&self, side: CircuitSide) -> Option<&str> {
        self.display(side).map(|d| d.practical_resistance.as_str())
    }
}

fn slot(side: CircuitSide) -> usize {
    match side {
        CircuitSide::First => 0,
        CircuitSide::Second => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FixedTolerance;

    fn nominal(variant: ProgramVariant) -> Demonstration<FixedTolerance> {
        Demonstration::new(variant, FixedTolerance::nominal())
    }

    #[test]
    fn test_variant_presets() {
        assert_eq!(ProgramVariant::Bridge.resistance_decimals(), 1);
        assert_eq!(ProgramVariant::Ladder.policy().verification_threshold_kohm, 0.1);
        assert_eq!("ladder".parse::<ProgramVariant>().unwrap(), ProgramVariant::Ladder);
        assert!("mesh".parse::<ProgramVariant>().is_err());
        assert_eq!(ProgramVariant::Bridge.to_string(), "bridge");
    }

    #[test]
    fn test_initialize_runs_both_circuits() {
        let mut demo = nominal(ProgramVariant::Ladder);
        let reports = demo.initialize();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].side, CircuitSide::First);
        assert_eq!(reports[1].side, CircuitSide::Second);
        assert_eq!(reports[1].display.theoretical_current, "3.0");
        assert_eq!(reports[1].display.practical_resistance, "2.00");
        assert!(reports[1].verdict.is_verified());
    }

    #[test]
    fn test_first_cycle_compares_against_missing_display() {
        let mut demo = nominal(ProgramVariant::Bridge);
        let report = demo.on_voltage_input(CircuitSide::First, 6.0);
        // Circuit 2 has not been displayed yet and reads as 0 kΩ
        assert_eq!(
            report.verdict,
            ReciprocityVerdict::Mismatched { r_aa: 3.0, r_bb: 0.0, diff: 3.0 }
        );
    }

    #[test]
    fn test_not_applicable_until_voltages_match() {
        let mut demo = nominal(ProgramVariant::Bridge);
        demo.initialize();
        let report = demo.on_voltage_input(CircuitSide::Second, 9.0);
        assert_eq!(report.verdict, ReciprocityVerdict::NotApplicable);
        assert_eq!(report.message, "Set Va = Vb to verify reciprocity.");

        let report = demo.on_voltage_input(CircuitSide::First, 9.0);
        assert!(report.verdict.is_verified());
        assert!(report.message.starts_with("✅ Reciprocity verified!"));
    }

    #[test]
    fn test_cycle_updates_state() {
        let mut demo = nominal(ProgramVariant::Ladder);
        let report = demo.on_voltage_input(CircuitSide::Second, 4.0);
        assert_eq!(demo.voltage(CircuitSide::Second), 4.0);
        assert_eq!(demo.voltage(CircuitSide::First), DEFAULT_VOLTAGE);
        assert_eq!(demo.display(CircuitSide::Second), Some(&report.display));
        assert!(demo.display(CircuitSide::First).is_none());
        assert!(report
            .schematic
            .iter()
            .any(|p| p.as_text() == Some("2.0mA")));
    }

    #[test]
    fn test_compares_displayed_values() {
        // Ladder shows two decimals: 2.02 vs 2.00 differs by 0.02 < 0.1
        let mut demo = Demonstration::new(
            ProgramVariant::Ladder,
            FixedTolerance::new(vec![1.01, 1.01, 1.01, 1.01, 1.01, 1.0, 1.0, 1.0, 1.0, 1.0]),
        );
        let reports = demo.initialize();
        assert_eq!(reports[0].display.practical_resistance, "2.02");
        assert_eq!(reports[1].display.practical_resistance, "2.00");
        match reports[1].verdict {
            ReciprocityVerdict::Verified { r_aa, r_bb, .. } => {
                assert_eq!(r_aa, 2.02);
                assert_eq!(r_bb, 2.0);
            }
            other => panic!("expected verified, got {:?}", other),
        }
        assert!(reports[1].message.contains("<b>Reciprocity verified!</b>"));
    }

    #[test]
    fn test_mismatch_with_tight_policy() {
        let policy = ReciprocityPolicy::bridge()
            .with_verification_threshold(0.01)
            .unwrap();
        let mut demo = Demonstration::with_parts(
            NetworkConfig::ladder(),
            policy,
            2,
            FixedTolerance::new(vec![1.01, 1.01, 1.01, 1.01, 1.01, 1.0, 1.0, 1.0, 1.0, 1.0]),
        );
        let reports = demo.initialize();
        assert!(matches!(reports[1].verdict, ReciprocityVerdict::Mismatched { .. }));
        assert!(demo.message().starts_with("❌ Slight mismatch:"));
    }

    #[test]
    fn test_zero_volts_cycle() {
        let mut demo = nominal(ProgramVariant::Bridge);
        demo.initialize();
        demo.on_voltage_input(CircuitSide::First, 0.0);
        let report = demo.on_voltage_input(CircuitSide::Second, 0.0);
        assert_eq!(report.display.practical_resistance, "undefined");
        // Both undefined readings fall back to 0 kΩ and therefore agree
        assert_eq!(
            report.verdict,
            ReciprocityVerdict::Verified { r_aa: 0.0, r_bb: 0.0, diff: 0.0 }
        );
    }

    #[test]
    fn test_entropy_backed_demo() {
        let mut demo = Demonstration::for_variant(ProgramVariant::Ladder);
        let reports = demo.initialize();
        // ±1% on 2 kΩ never exceeds the 0.1 kΩ verification threshold
        assert!(reports[1].verdict.is_verified());
    }
}
