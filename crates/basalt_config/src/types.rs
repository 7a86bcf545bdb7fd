//! Project-file types deserialized from `basalt.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `basalt.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Board selection and variant flags.
    pub board: BoardSection,
    /// Caller-supplied resources appended to the board's tables.
    #[serde(default)]
    pub resources: Vec<ExtraResourceConfig>,
    /// Flashing settings.
    #[serde(default)]
    pub flash: FlashSection,
}

/// Board selection: which board, which variant.
#[derive(Debug, Deserialize)]
pub struct BoardSection {
    /// The board's registry name (e.g. "colorlight_qmtech").
    pub name: String,
    /// SODIMM module selection for boards with a module socket.
    #[serde(default)]
    pub module: Option<String>,
    /// Splice in the daughterboard's tables.
    #[serde(default)]
    pub daughterboard: bool,
    /// Remap user LEDs onto the expansion connectors for bring-up testing.
    #[serde(default)]
    pub test: bool,
    /// IO-voltage jumper setting (e.g. "3.3V") for boards with a jumper.
    #[serde(default)]
    pub io_voltage: Option<String>,
    /// Vendor toolchain override (e.g. "vivado").
    #[serde(default)]
    pub toolchain: Option<String>,
}

/// One caller-supplied extra resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraResourceConfig {
    /// The resource kind (e.g. "debug").
    pub kind: String,
    /// The resource index.
    pub index: u32,
    /// Whitespace-separated package pins or connector-relative pins.
    pub pins: String,
    /// Direction token: "i", "o", or "io" (default "io").
    #[serde(default)]
    pub dir: Option<String>,
    /// Whether the pins are active-low.
    #[serde(default)]
    pub invert: bool,
    /// IO standard attached to the pins.
    #[serde(default)]
    pub io_standard: Option<String>,
}

/// Flashing settings.
#[derive(Debug, Default, Deserialize)]
pub struct FlashSection {
    /// Path of the bitstream the build framework produced.
    #[serde(default)]
    pub bitstream: Option<String>,
}
