//! Core types for circuit representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReciprocityError, Result};

/// The fixed resistor network a program variant is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkTopology {
    /// Series resistor feeding two parallel branches. Circuit 1 drives the
    /// R1 leg and measures R2; circuit 2 swaps the source and ammeter legs.
    ///
    /// ```text
    ///   Circuit 1:  V --R1--+--R2(A)--+     Circuit 2:  V --R2--+--R1(A)--+
    ///                       +--R3-----+                         +--R3-----+
    /// ```
    Bridge,
    /// Two series pairs in parallel followed by a fifth series resistor;
    /// the ammeter reads the total source current.
    ///
    /// ```text
    ///   V --(A)--R5--+--R1--R2--+
    ///                +--R3--R4--+
    /// ```
    Ladder,
}

impl NetworkTopology {
    /// Number of resistors in the network.
    pub fn resistor_count(&self) -> usize {
        match self {
            NetworkTopology::Bridge => 3,
            NetworkTopology::Ladder => 5,
        }
    }

    /// Lowercase identifier used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkTopology::Bridge => "bridge",
            NetworkTopology::Ladder => "ladder",
        }
    }
}

impl fmt::Display for NetworkTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkTopology {
    type Err = ReciprocityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bridge" => Ok(NetworkTopology::Bridge),
            "ladder" => Ok(NetworkTopology::Ladder),
            _ => Err(ReciprocityError::unknown_variant(s)),
        }
    }
}

/// Which of the two mirrored circuits is being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CircuitSide {
    /// Circuit 1, driven by Va; its ammeter reads Ia.
    First,
    /// Circuit 2, driven by Vb; its ammeter reads Ib.
    Second,
}

impl CircuitSide {
    /// Both sides, in display order.
    pub const ALL: [CircuitSide; 2] = [CircuitSide::First, CircuitSide::Second];

    /// One-based circuit number.
    pub fn number(&self) -> u8 {
        match self {
            CircuitSide::First => 1,
            CircuitSide::Second => 2,
        }
    }

    /// Look up a side by its one-based circuit number.
    pub fn from_number(index: u8) -> Result<Self> {
        match index {
            1 => Ok(CircuitSide::First),
            2 => Ok(CircuitSide::Second),
            _ => Err(ReciprocityError::UnknownCircuit { index }),
        }
    }

    /// Letter used for the source and ammeter labels ("a" or "b").
    pub fn letter(&self) -> char {
        match self {
            CircuitSide::First => 'a',
            CircuitSide::Second => 'b',
        }
    }
}

impl fmt::Display for CircuitSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circuit {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_parsing() {
        assert_eq!("bridge".parse::<NetworkTopology>().unwrap(), NetworkTopology::Bridge);
        assert_eq!(" Ladder ".parse::<NetworkTopology>().unwrap(), NetworkTopology::Ladder);
        assert!("delta".parse::<NetworkTopology>().is_err());
        assert!("a".parse::<NetworkTopology>().is_err());
    }

    #[test]
    fn test_side_numbers() {
        assert_eq!(CircuitSide::from_number(1).unwrap(), CircuitSide::First);
        assert_eq!(CircuitSide::from_number(2).unwrap(), CircuitSide::Second);
        assert!(CircuitSide::from_number(3).is_err());
        assert_eq!(CircuitSide::Second.letter(), 'b');
        assert_eq!(CircuitSide::First.to_string(), "Circuit 1");
    }
}
