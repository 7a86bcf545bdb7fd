//! Variant selection: which optional resource/connector groups a board
//! definition includes.

use crate::error::BoardError;
use crate::lattice::colorlight::SodimmModule;
use crate::options::Toolchain;
use basalt_bsp::Resource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The resolved build variant of a board.
///
/// At most one of the optional modes is active; the raw boolean flags a
/// caller supplies are checked by [`VariantRequest::resolve`] before a
/// variant exists at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardVariant {
    /// The plain board with its base resource and connector tables.
    #[default]
    Standalone,
    /// The daughterboard is attached; its tables are spliced in and the
    /// board's own user-IO entries step aside.
    Daughterboard,
    /// Connector bring-up test: user LEDs are remapped onto the expansion
    /// connectors' pins.
    ConnectorTest,
}

impl BoardVariant {
    /// Returns the variant's lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standalone => "standalone",
            Self::Daughterboard => "daughterboard",
            Self::ConnectorTest => "test",
        }
    }
}

impl fmt::Display for BoardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The raw variant flags as they arrive from a CLI or configuration file,
/// before mutual exclusion has been checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantRequest {
    /// Splice in the daughterboard's resource and connector tables.
    pub daughterboard: bool,
    /// Remap user LEDs onto the expansion connectors for bring-up testing.
    pub test: bool,
}

impl VariantRequest {
    /// Resolves the flags into a [`BoardVariant`].
    ///
    /// Returns [`BoardError::IncompatibleVariants`] when both modes are
    /// requested; the two rewire the same connector pins and cannot
    /// coexist.
    pub fn resolve(&self) -> Result<BoardVariant, BoardError> {
        match (self.daughterboard, self.test) {
            (true, true) => Err(BoardError::IncompatibleVariants),
            (true, false) => Ok(BoardVariant::Daughterboard),
            (false, true) => Ok(BoardVariant::ConnectorTest),
            (false, false) => Ok(BoardVariant::Standalone),
        }
    }
}

/// The IO-bank voltage selected by the board's jumper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IoVoltage {
    /// 2.5 V banks.
    V2_5,
    /// 3.3 V banks (the jumper's factory setting).
    #[default]
    V3_3,
}

impl IoVoltage {
    /// Returns the single-ended LVCMOS IO standard for this bank voltage.
    pub fn lvcmos(&self) -> &'static str {
        match self {
            Self::V2_5 => "LVCMOS25",
            Self::V3_3 => "LVCMOS33",
        }
    }
}

impl fmt::Display for IoVoltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2_5 => f.write_str("2.5V"),
            Self::V3_3 => f.write_str("3.3V"),
        }
    }
}

impl FromStr for IoVoltage {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "2.5V" => Ok(Self::V2_5),
            "3.3V" => Ok(Self::V3_3),
            _ => Err(BoardError::UnsupportedVoltage(s.to_string())),
        }
    }
}

/// Everything the outside world can ask of the board registry.
///
/// Fields a board does not consume are ignored (a voltage setting on a
/// board without a jumper); variants a board cannot build are rejected
/// with [`BoardError::UnsupportedVariant`].
#[derive(Debug, Clone, Default)]
pub struct BoardRequest {
    /// Raw daughterboard/test flags.
    pub variant: VariantRequest,
    /// SODIMM module selection for the Colorlight adapter.
    pub module: Option<SodimmModule>,
    /// IO-voltage jumper setting for boards that have one.
    pub io_voltage: Option<IoVoltage>,
    /// Vendor toolchain override.
    pub toolchain: Option<Toolchain>,
    /// Caller-supplied resources appended after variant assembly.
    pub extra_resources: Vec<Resource>,
}

/// Appends caller-supplied resources to an assembled table.
///
/// Collisions on `(kind, index)` with an existing entry are rejected with
/// [`BoardError::ExtraResourceCollision`]; extras never override assembled
/// resources. Appended in caller order.
pub fn append_extra_resources(
    resources: &mut Vec<Resource>,
    extra: Vec<Resource>,
) -> Result<(), BoardError> {
    let existing: BTreeSet<(String, u32)> = resources
        .iter()
        .map(|r| (r.kind.clone(), r.index))
        .collect();
    for r in &extra {
        if existing.contains(&(r.kind.clone(), r.index)) {
            return Err(BoardError::ExtraResourceCollision {
                kind: r.kind.clone(),
                index: r.index,
            });
        }
    }
    resources.extend(extra);
    Ok(())
}
