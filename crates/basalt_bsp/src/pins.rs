//! Pin groups: single-ended, inverted, and differential package pins.
//!
//! Pin specifications are whitespace-separated package-pin identifiers,
//! matching how board tables are written (`"B24 A25 B22 A22"`). A pin may
//! also be connector-relative, using the `"<name>_<index>:<label>"` form
//! (e.g. `"J_2:40"`), in which case the build framework resolves it through
//! the connector table of the board.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signal direction of a pin group, as seen from the FPGA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Driven by the outside world into the FPGA.
    Input,
    /// Driven by the FPGA.
    Output,
    /// Bidirectional (tristate-capable).
    Bidir,
}

impl Direction {
    /// Returns the short direction token used in board tables and config
    /// files: `"i"`, `"o"`, or `"io"`.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Input => "i",
            Self::Output => "o",
            Self::Bidir => "io",
        }
    }
}

/// Error type for parsing direction tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid direction '{}' (expected 'i', 'o', or 'io')",
            self.input
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "in" | "input" => Ok(Self::Input),
            "o" | "out" | "output" => Ok(Self::Output),
            "io" | "inout" | "bidir" => Ok(Self::Bidir),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

/// A group of package pins carrying one logical signal (or bus).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinGroup {
    /// Single-ended pins. `active_low` marks inverted pins (the signal is
    /// asserted when the pin is driven low).
    Single {
        /// Package-pin identifiers, one per bit, LSB first.
        pins: Vec<String>,
        /// Signal direction.
        dir: Direction,
        /// Whether the pins are active-low.
        active_low: bool,
    },
    /// Differential pin pairs. `p` and `n` have equal length.
    Diff {
        /// Positive-leg package pins, one per bit.
        p: Vec<String>,
        /// Negative-leg package pins, one per bit.
        n: Vec<String>,
        /// Signal direction.
        dir: Direction,
    },
}

impl PinGroup {
    /// Returns the number of bits in this group.
    pub fn width(&self) -> usize {
        match self {
            Self::Single { pins, .. } => pins.len(),
            Self::Diff { p, .. } => p.len(),
        }
    }

    /// Returns the signal direction of this group.
    pub fn dir(&self) -> Direction {
        match self {
            Self::Single { dir, .. } => *dir,
            Self::Diff { dir, .. } => *dir,
        }
    }

    /// Returns the package pins of this group in declaration order.
    ///
    /// For differential groups this is the positive legs.
    pub fn pin_names(&self) -> Vec<&str> {
        match self {
            Self::Single { pins, .. } => pins.iter().map(String::as_str).collect(),
            Self::Diff { p, .. } => p.iter().map(String::as_str).collect(),
        }
    }
}

/// Splits a whitespace-separated pin specification into pin identifiers.
fn split_spec(spec: &str) -> Vec<String> {
    spec.split_whitespace().map(str::to_string).collect()
}

/// Creates an active-high single-ended pin group from a whitespace-separated
/// pin specification.
pub fn pins(spec: &str, dir: Direction) -> PinGroup {
    PinGroup::Single {
        pins: split_spec(spec),
        dir,
        active_low: false,
    }
}

/// Creates an active-low single-ended pin group (`PinsN` in the original
/// table vocabulary).
pub fn pins_n(spec: &str, dir: Direction) -> PinGroup {
    PinGroup::Single {
        pins: split_spec(spec),
        dir,
        active_low: true,
    }
}

/// Creates a differential pin group from positive- and negative-leg
/// specifications.
///
/// # Panics
///
/// Panics if the two specifications differ in pin count. Board tables are
/// authored code; a mismatched pair is a bug in the table, not a runtime
/// condition.
pub fn diff_pairs(p_spec: &str, n_spec: &str, dir: Direction) -> PinGroup {
    let p = split_spec(p_spec);
    let n = split_spec(n_spec);
    assert_eq!(
        p.len(),
        n.len(),
        "differential pair legs differ in width: {} vs {}",
        p.len(),
        n.len()
    );
    PinGroup::Diff { p, n, dir }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_whitespace() {
        let g = pins("B24 A25  B22\tA22", Direction::Bidir);
        assert_eq!(g.width(), 4);
        assert_eq!(g.pin_names(), vec!["B24", "A25", "B22", "A22"]);
    }

    #[test]
    fn single_pin() {
        let g = pins("F22", Direction::Input);
        assert_eq!(g.width(), 1);
        assert_eq!(g.dir(), Direction::Input);
        match g {
            PinGroup::Single { active_low, .. } => assert!(!active_low),
            _ => panic!("expected Single"),
        }
    }

    #[test]
    fn pins_n_is_active_low() {
        let g = pins_n("AF9", Direction::Input);
        match g {
            PinGroup::Single { active_low, .. } => assert!(active_low),
            _ => panic!("expected Single"),
        }
    }

    #[test]
    fn diff_pairs_width() {
        let g = diff_pairs("U22 A1", "U23 A2", Direction::Input);
        assert_eq!(g.width(), 2);
        assert_eq!(g.pin_names(), vec!["U22", "A1"]);
    }

    #[test]
    #[should_panic(expected = "differential pair legs differ in width")]
    fn diff_pairs_mismatch_panics() {
        diff_pairs("U22 A1", "U23", Direction::Input);
    }

    #[test]
    fn connector_relative_pins_pass_through() {
        let g = pins("J_2:40 J_2:39", Direction::Output);
        assert_eq!(g.pin_names(), vec!["J_2:40", "J_2:39"]);
    }

    #[test]
    fn direction_tokens() {
        assert_eq!(Direction::Input.as_token(), "i");
        assert_eq!(Direction::Output.as_token(), "o");
        assert_eq!(Direction::Bidir.as_token(), "io");
    }

    #[test]
    fn direction_from_str() {
        assert_eq!("i".parse::<Direction>().unwrap(), Direction::Input);
        assert_eq!("O".parse::<Direction>().unwrap(), Direction::Output);
        assert_eq!("io".parse::<Direction>().unwrap(), Direction::Bidir);
        assert_eq!("inout".parse::<Direction>().unwrap(), Direction::Bidir);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_parse_error_display() {
        let err = "x".parse::<Direction>().unwrap_err();
        assert_eq!(
            format!("{err}"),
            "invalid direction 'x' (expected 'i', 'o', or 'io')"
        );
    }

    #[test]
    fn pin_group_serde_roundtrip() {
        let g = diff_pairs("AA5", "AB5", Direction::Output);
        let json = serde_json::to_string(&g).unwrap();
        let restored: PinGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(g, restored);
    }
}
