//! Reciprocity check between the two circuits.
//!
//! For a linear resistive network, driving port A and measuring at port B
//! gives the same transfer resistance as driving B and measuring at A. With
//! both circuits at the same source voltage, any difference between their
//! practical resistances comes from the simulated component tolerance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ReciprocityError, Result};

/// Voltages closer than this (volts) count as matched excitation.
pub const MATCHED_VOLTAGE_THRESHOLD: f64 = 0.1;

/// How the verdict message is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    /// Plain text with a status symbol.
    #[default]
    Plain,
    /// Headline wrapped in `<b>` tags for rich-text displays.
    Emphasized,
}

impl FromStr for MessageStyle {
    type Err = ReciprocityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(MessageStyle::Plain),
            "emphasized" => Ok(MessageStyle::Emphasized),
            _ => Err(ReciprocityError::UnknownStyle { name: s.to_string() }),
        }
    }
}

/// Thresholds for deciding a reciprocity verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReciprocityPolicy {
    /// Maximum |Va - Vb| (exclusive) for the check to apply, in volts.
    pub matched_voltage_threshold: f64,
    /// Maximum |R_aa - R_bb| (exclusive) still counted as verified, in kΩ.
    pub verification_threshold_kohm: f64,
    /// Message decoration.
    pub style: MessageStyle,
}

impl Default for ReciprocityPolicy {
    fn default() -> Self {
        Self::bridge()
    }
}

impl ReciprocityPolicy {
    /// Policy of the bridge program: 0.05 kΩ, plain messages.
    pub fn bridge() -> Self {
        Self {
            matched_voltage_threshold: MATCHED_VOLTAGE_THRESHOLD,
            verification_threshold_kohm: 0.05,
            style: MessageStyle::Plain,
        }
    }

    /// Policy of the ladder program: 0.1 kΩ, emphasized messages.
    pub fn ladder() -> Self {
        Self {
            matched_voltage_threshold: MATCHED_VOLTAGE_THRESHOLD,
            verification_threshold_kohm: 0.1,
            style: MessageStyle::Emphasized,
        }
    }

    /// Set the verification threshold (kΩ).
    pub fn with_verification_threshold(mut self, threshold_kohm: f64) -> Result<Self> {
        if !threshold_kohm.is_finite() || threshold_kohm <= 0.0 {
            return Err(ReciprocityError::invalid_threshold(
                "verification_threshold_kohm",
                threshold_kohm,
            ));
        }
        self.verification_threshold_kohm = threshold_kohm;
        Ok(self)
    }

    /// Set the matched-voltage threshold (volts).
    pub fn with_matched_voltage_threshold(mut self, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ReciprocityError::invalid_threshold(
                "matched_voltage_threshold",
                threshold,
            ));
        }
        self.matched_voltage_threshold = threshold;
        Ok(self)
    }

    /// Set the message style.
    pub fn with_style(mut self, style: MessageStyle) -> Self {
        self.style = style;
        self
    }
}

/// Outcome of comparing the two circuits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReciprocityVerdict {
    /// The source voltages differ; the comparison is meaningless.
    NotApplicable,
    /// The resistances agree within the verification threshold.
    Verified { r_aa: f64, r_bb: f64, diff: f64 },
    /// The resistances differ by at least the verification threshold.
    Mismatched { r_aa: f64, r_bb: f64, diff: f64 },
}

impl ReciprocityVerdict {
    /// True for [`ReciprocityVerdict::Verified`].
    pub fn is_verified(&self) -> bool {
        matches!(self, ReciprocityVerdict::Verified { .. })
    }

    /// Absolute resistance difference, when the check applied.
    pub fn diff(&self) -> Option<f64> {
        match *self {
            ReciprocityVerdict::NotApplicable => None,
            ReciprocityVerdict::Verified { diff, .. } | ReciprocityVerdict::Mismatched { diff, .. } => {
                Some(diff)
            }
        }
    }

    /// Human-readable summary. Resistances use two decimals, the diff three.
    pub fn message(&self, style: MessageStyle) -> String {
        let headline = |text: &str| match style {
            MessageStyle::Plain => text.to_string(),
            MessageStyle::Emphasized => format!("<b>{}</b>", text),
        };
        match *self {
            ReciprocityVerdict::NotApplicable => "Set Va = Vb to verify reciprocity.".to_string(),
            ReciprocityVerdict::Verified { r_aa, r_bb, diff } => format!(
                "✅ {} R_aa ({:.2}) ≈ R_bb ({:.2}) kΩ (diff: {:.3}).",
                headline("Reciprocity verified!"),
                r_aa,
                r_bb,
                diff
            ),
            ReciprocityVerdict::Mismatched { r_aa, r_bb, diff } => format!(
                "❌ {} R_aa ({:.2}) vs R_bb ({:.2}) kΩ (diff: {:.3}). Try exact match.",
                headline("Slight mismatch:"),
                r_aa,
                r_bb,
                diff
            ),
        }
    }
}

impl fmt::Display for ReciprocityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(MessageStyle::Plain))
    }
}

/// Compare the practical resistances of the two circuits.
///
/// Applies only when `|va - vb|` is below the policy's matched-voltage
/// threshold. Verified when `|r_aa - r_bb|` is strictly below the
/// verification threshold.
pub fn check_reciprocity(
    va: f64,
    vb: f64,
    r_aa: f64,
    r_bb: f64,
    policy: &ReciprocityPolicy,
) -> ReciprocityVerdict {
    if (va - vb).abs() >= policy.matched_voltage_threshold {
        return ReciprocityVerdict::NotApplicable;
    }

    let diff = (r_aa - r_bb).abs();
    let verdict = if diff < policy.verification_threshold_kohm {
        ReciprocityVerdict::Verified { r_aa, r_bb, diff }
    } else {
        ReciprocityVerdict::Mismatched { r_aa, r_bb, diff }
    };
    info!(va, vb, r_aa, r_bb, diff, verified = verdict.is_verified(), "reciprocity check");
    verdict
}
