//! Clock frequency annotations for resources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A clock frequency stored in integer Hertz.
///
/// Board tables annotate clock-bearing resources with their nominal
/// frequency (`Frequency::mhz(50)` for a 50 MHz oscillator). Displays
/// using the most readable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Frequency(u64);

impl Frequency {
    /// Creates a frequency from a value in Hertz.
    pub fn hz(hz: u64) -> Self {
        Self(hz)
    }

    /// Creates a frequency from a value in megahertz.
    pub fn mhz(mhz: u64) -> Self {
        Self(mhz * 1_000_000)
    }

    /// Returns the frequency in Hertz.
    pub fn as_hz(self) -> u64 {
        self.0
    }

    /// Returns the frequency in megahertz.
    pub fn as_mhz(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hz = self.0;
        if hz >= 1_000_000 && hz % 1_000_000 == 0 {
            write!(f, "{} MHz", hz / 1_000_000)
        } else if hz >= 1_000 && hz % 1_000 == 0 {
            write!(f, "{} kHz", hz / 1_000)
        } else {
            write!(f, "{hz} Hz")
        }
    }
}
